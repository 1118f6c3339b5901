//! Schedule core: button tokens, week arithmetic, group search, rendering
//! and the controller tying them to a storage backend.

pub mod controller;
pub mod locale;
pub mod matcher;
pub mod render;
pub mod token;
pub mod week;

pub use controller::{ConfirmationPrompt, ConversationState, NavigationController, Reply};
pub use locale::ScheduleLocale;
pub use matcher::{GroupMatcher, MatchCandidate, MatchKind};
pub use render::{RenderedSchedule, ScheduleRenderer};
pub use token::{NavAction, NavigationToken};
pub use week::WeekWindow;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime, Weekday};
use serde::Serialize;

use crate::error::Result;

/// One lesson of a group's week, as read from storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LessonRecord {
    /// Subject title.
    pub subject_name: String,
    /// Full name of the teacher.
    pub teacher_name: String,
    /// Lesson start.
    pub start_time: NaiveDateTime,
    /// Lesson end.
    pub end_time: NaiveDateTime,
    /// Room or department, if known.
    pub location: Option<String>,
    /// Day the lesson falls on.
    pub day_of_week: Weekday,
}

/// A registered group as offered to the matcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSummary {
    /// Storage identifier.
    pub id: i64,
    /// Display name, e.g. `М8О-207БВ-24`.
    pub name: String,
    /// Faculty the group belongs to.
    pub faculty: String,
}

/// Read-only storage the controller pulls schedules from.
#[async_trait]
pub trait ScheduleSource: Send + Sync {
    /// Lessons of `group_id` in the week starting on `week_start`, ordered by
    /// day and start time. An unknown week yields an empty list.
    async fn lookup_lessons(&self, group_id: i64, week_start: NaiveDate) -> Result<Vec<LessonRecord>>;

    /// All groups, in a stable order.
    async fn list_groups(&self) -> Result<Vec<GroupSummary>>;

    /// Name of `group_id`, or [`crate::error::ScheduleError::GroupNotFound`].
    async fn resolve_group_name(&self, group_id: i64) -> Result<String>;

    /// Group registered under exactly `name`.
    async fn find_group_by_name(&self, name: &str) -> Result<Option<GroupSummary>>;
}

/// Maps a 0-based day index (Monday = 0) to a weekday.
pub fn weekday_from_index(index: i64) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Mon),
        1 => Some(Weekday::Tue),
        2 => Some(Weekday::Wed),
        3 => Some(Weekday::Thu),
        4 => Some(Weekday::Fri),
        5 => Some(Weekday::Sat),
        6 => Some(Weekday::Sun),
        _ => None,
    }
}
