use thiserror::Error;

/// Result alias used by the schedule core and its collaborators.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Failures that can surface while answering a schedule request.
///
/// Codec, matcher and renderer are total over well-typed input; these errors
/// only come from untrusted button data or from the storage collaborator.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// Button data that does not decode into a known token.
    #[error("Malformed token: {0}")]
    MalformedToken(String),

    /// A week offset that lands outside the representable calendar.
    #[error("Week offset {0} is out of range")]
    OffsetOutOfRange(i32),

    /// The referenced group no longer exists.
    #[error("Group not found: {0}")]
    GroupNotFound(String),

    /// Free-text search produced no candidates.
    #[error("No group matches '{0}'")]
    NoMatch(String),

    /// The storage collaborator failed.
    #[error("Lookup failed: {0}")]
    LookupFailure(String),
}

impl From<sqlx::Error> for ScheduleError {
    fn from(err: sqlx::Error) -> Self {
        ScheduleError::LookupFailure(err.to_string())
    }
}
