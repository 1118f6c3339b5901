use std::str::FromStr;

use anyhow::anyhow;

use crate::error::ScheduleError;

/// Every user-visible string the schedule core produces.
///
/// Rendering code never hard-codes text; swapping the locale swaps the
/// whole vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleLocale {
    /// Two-letter day abbreviations, Monday first.
    pub day_names: [&'static str; 7],
    /// Separator between the day abbreviation and its date.
    pub day_date_separator: &'static str,
    /// Shown instead of lessons on an empty day.
    pub day_off: &'static str,
    /// Marker printed between the lesson time and its location.
    pub lesson_marker: &'static str,
    /// Location shown when a lesson has none.
    pub missing_location: &'static str,
    /// Reply to `/start`.
    pub start_prompt: &'static str,
    /// Question preceding the suggested group name.
    pub confirm_question: &'static str,
    /// Label in front of the suggested group's faculty.
    pub faculty_label: &'static str,
    /// Caption of the accept button.
    pub confirm_button: &'static str,
    /// Caption of the reject button.
    pub cancel_button: &'static str,
    /// Reply when the free-text search found nothing.
    pub no_match: &'static str,
    /// Alert when a confirmed or browsed group no longer exists.
    pub group_not_found: &'static str,
    /// Alert for unreadable button data.
    pub malformed_request: &'static str,
    /// Reply when storage is unavailable.
    pub transient_failure: &'static str,
}

impl ScheduleLocale {
    /// Russian vocabulary used by default.
    pub fn russian() -> Self {
        Self {
            day_names: ["пн", "вт", "ср", "чт", "пт", "сб", "вс"],
            day_date_separator: " ~ ",
            day_off: "Выходной",
            lesson_marker: "ПЗ",
            missing_location: "--каф.",
            start_prompt: "Введите название вашей группы, чтобы получить расписание.",
            confirm_question: "Может быть",
            faculty_label: "Факультет",
            confirm_button: "Да",
            cancel_button: "Нет",
            no_match: "Группа не найдена. Пожалуйста, проверьте название и попробуйте снова.",
            group_not_found: "Группа не найдена",
            malformed_request: "Не удалось обработать запрос. Попробуйте ещё раз.",
            transient_failure: "Ошибка при получении расписания. Пожалуйста, попробуйте позже.",
        }
    }

    /// English vocabulary.
    pub fn english() -> Self {
        Self {
            day_names: ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"],
            day_date_separator: " ~ ",
            day_off: "Day off",
            lesson_marker: "PR",
            missing_location: "--dept.",
            start_prompt: "Enter your group name to get the schedule.",
            confirm_question: "Did you mean",
            faculty_label: "Faculty",
            confirm_button: "Yes",
            cancel_button: "No",
            no_match: "Group not found. Please check the name and try again.",
            group_not_found: "Group not found",
            malformed_request: "Could not process the request. Please try again.",
            transient_failure: "Failed to fetch the schedule. Please try again later.",
        }
    }

    /// User-facing text for a failed request.
    pub fn error_text(&self, err: &ScheduleError) -> &'static str {
        match err {
            ScheduleError::MalformedToken(_) | ScheduleError::OffsetOutOfRange(_) => {
                self.malformed_request
            }
            ScheduleError::GroupNotFound(_) => self.group_not_found,
            ScheduleError::NoMatch(_) => self.no_match,
            ScheduleError::LookupFailure(_) => self.transient_failure,
        }
    }
}

impl Default for ScheduleLocale {
    fn default() -> Self {
        Self::russian()
    }
}

impl FromStr for ScheduleLocale {
    type Err = anyhow::Error;

    fn from_str(code: &str) -> anyhow::Result<Self> {
        match code.trim().to_lowercase().as_str() {
            "ru" => Ok(Self::russian()),
            "en" => Ok(Self::english()),
            other => Err(anyhow!("Unknown locale '{other}'")),
        }
    }
}
