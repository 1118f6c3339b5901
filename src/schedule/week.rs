use chrono::{Datelike, Duration, Local, NaiveDate};

use crate::error::{Result, ScheduleError};

/// Largest week distance accepted, roughly 96 000 years either way. Keeps
/// `Duration` arithmetic well inside chrono's bounds, which panic on overflow.
pub const MAX_WEEK_OFFSET: u32 = 5_000_000;

/// Calendar week addressed relative to the week containing "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    /// Monday of the addressed week.
    pub week_start: NaiveDate,
    /// Whole weeks between the addressed week and the current one.
    pub offset: i32,
}

impl WeekWindow {
    /// Resolves `offset` against the week containing `today`.
    pub fn from_today(today: NaiveDate, offset: i32) -> Result<Self> {
        if offset.unsigned_abs() > MAX_WEEK_OFFSET {
            return Err(ScheduleError::OffsetOutOfRange(offset));
        }

        let current_monday = monday_of(today);
        let week_start = current_monday
            .checked_add_signed(Duration::weeks(i64::from(offset)))
            .ok_or(ScheduleError::OffsetOutOfRange(offset))?;

        Ok(Self { week_start, offset })
    }

    /// Resolves `offset` against the host's local calendar.
    pub fn current(offset: i32) -> Result<Self> {
        Self::from_today(Local::now().date_naive(), offset)
    }

    /// Date of the `index`-th day of the week, Monday being 0.
    pub fn day(&self, index: u32) -> NaiveDate {
        self.week_start + Duration::days(i64::from(index))
    }
}

/// Monday of the week `date` falls in.
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}
