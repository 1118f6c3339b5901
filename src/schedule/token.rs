//! Compact button payloads for week navigation and group confirmation.
//!
//! Telegram echoes callback data back verbatim and limits it to 64 bytes, so
//! every piece of request state travels inside a short positional token:
//!
//! - `nav_prev:<target>:<origin>`, `nav_curr:<target>:<origin>`,
//!   `nav_next:<target>:<origin>`
//! - `grp_yes:<group_id>`, `grp_no:<group_id>`

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ScheduleError};

/// Upper bound on callback data accepted by Telegram.
pub const MAX_TOKEN_LEN: usize = 64;

const TAG_PREVIOUS: &str = "nav_prev";
const TAG_CURRENT: &str = "nav_curr";
const TAG_NEXT: &str = "nav_next";
const TAG_CONFIRM: &str = "grp_yes";
const TAG_CANCEL: &str = "grp_no";

/// Direction of a week navigation button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavAction {
    /// One week back from the shown week.
    Previous,
    /// Jump to the current calendar week.
    Current,
    /// One week forward from the shown week.
    Next,
}

impl NavAction {
    fn tag(self) -> &'static str {
        match self {
            NavAction::Previous => TAG_PREVIOUS,
            NavAction::Current => TAG_CURRENT,
            NavAction::Next => TAG_NEXT,
        }
    }

    /// Offset this button leads to when pressed on week `origin`.
    pub fn target_from(self, origin: i32) -> i32 {
        match self {
            NavAction::Previous => origin.saturating_sub(1),
            NavAction::Current => 0,
            NavAction::Next => origin.saturating_add(1),
        }
    }
}

/// One decoded button intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationToken {
    /// Show the week at `target`; `origin` is the week the button was shown on.
    Navigate {
        /// Which button produced the token.
        action: NavAction,
        /// Week offset to display next.
        target: i32,
        /// Week offset the button was rendered on.
        origin: i32,
    },
    /// The user accepted the suggested group.
    Confirm {
        /// Identifier of the suggested group.
        group_id: i64,
    },
    /// The user rejected the suggested group.
    Cancel {
        /// Identifier of the suggested group.
        group_id: i64,
    },
}

impl NavigationToken {
    /// Builds the navigation token for `action` pressed on week `origin`.
    pub fn navigate(action: NavAction, origin: i32) -> Self {
        NavigationToken::Navigate {
            action,
            target: action.target_from(origin),
            origin,
        }
    }

    /// Serializes the token into button callback data.
    pub fn encode(&self) -> String {
        let encoded = match self {
            NavigationToken::Navigate { action, target, origin } => {
                format!("{}:{}:{}", action.tag(), target, origin)
            }
            NavigationToken::Confirm { group_id } => format!("{TAG_CONFIRM}:{group_id}"),
            NavigationToken::Cancel { group_id } => format!("{TAG_CANCEL}:{group_id}"),
        };
        debug_assert!(encoded.len() <= MAX_TOKEN_LEN);
        encoded
    }

    /// Parses callback data produced by [`NavigationToken::encode`].
    pub fn decode(data: &str) -> Result<Self> {
        if data.len() > MAX_TOKEN_LEN {
            return Err(ScheduleError::MalformedToken(format!(
                "token is {} bytes long",
                data.len()
            )));
        }

        let parts: Vec<&str> = data.split(':').collect();
        match parts.as_slice() {
            [tag, target, origin] => {
                let action = match *tag {
                    TAG_PREVIOUS => NavAction::Previous,
                    TAG_CURRENT => NavAction::Current,
                    TAG_NEXT => NavAction::Next,
                    _ => return Err(malformed(data)),
                };
                Ok(NavigationToken::Navigate {
                    action,
                    target: parse_field(target, data)?,
                    origin: parse_field(origin, data)?,
                })
            }
            [TAG_CONFIRM, group_id] => Ok(NavigationToken::Confirm {
                group_id: parse_field(group_id, data)?,
            }),
            [TAG_CANCEL, group_id] => Ok(NavigationToken::Cancel {
                group_id: parse_field(group_id, data)?,
            }),
            _ => Err(malformed(data)),
        }
    }
}

impl fmt::Display for NavigationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for NavigationToken {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self> {
        NavigationToken::decode(s)
    }
}

fn parse_field<T: FromStr>(field: &str, data: &str) -> Result<T> {
    field.parse().map_err(|_| malformed(data))
}

fn malformed(data: &str) -> ScheduleError {
    ScheduleError::MalformedToken(data.to_string())
}
