use std::collections::HashMap;

use serde::Serialize;

use super::locale::ScheduleLocale;
use super::token::{NavAction, NavigationToken};
use super::week::WeekWindow;
use super::LessonRecord;
use crate::utils::markup::{blockquote, bold, escape_html};

/// A formatted week together with the buttons that page away from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedSchedule {
    /// Telegram HTML message body.
    pub markup_text: String,
    /// Previous, current and next week tokens, in button order.
    #[serde(skip)]
    pub attached_tokens: Vec<NavigationToken>,
}

/// Turns a week of lessons into the message users see.
///
/// Layout: one quoted block with the group name, then one quoted block per
/// weekday. Narrow clients render a blank line between blocks when more than
/// one newline separates them and merge blocks when none does, so blocks are
/// joined by exactly one `\n`.
#[derive(Debug, Clone, Default)]
pub struct ScheduleRenderer {
    locale: ScheduleLocale,
}

impl ScheduleRenderer {
    /// Creates a renderer speaking `locale`.
    pub fn new(locale: ScheduleLocale) -> Self {
        Self { locale }
    }

    /// Vocabulary the renderer was built with.
    pub fn locale(&self) -> &ScheduleLocale {
        &self.locale
    }

    /// Renders `lessons` for `week`. Lessons within a day keep their input order.
    pub fn render(&self, lessons: &[LessonRecord], week: &WeekWindow, group_name: &str) -> RenderedSchedule {
        let mut lessons_by_day: HashMap<u32, Vec<&LessonRecord>> = HashMap::new();
        for lesson in lessons {
            lessons_by_day
                .entry(lesson.day_of_week.num_days_from_monday())
                .or_default()
                .push(lesson);
        }

        let mut blocks = Vec::with_capacity(8);
        blocks.push(blockquote(&escape_html(group_name)));
        for day_index in 0..7u32 {
            let day_lessons = lessons_by_day.get(&day_index).map(Vec::as_slice).unwrap_or_default();
            blocks.push(self.render_day(week, day_index, day_lessons));
        }

        RenderedSchedule {
            markup_text: blocks.join("\n"),
            attached_tokens: navigation_tokens(week.offset),
        }
    }

    fn render_day(&self, week: &WeekWindow, day_index: u32, lessons: &[&LessonRecord]) -> String {
        let header = format!(
            "{}{}{}",
            self.locale.day_names[day_index as usize],
            self.locale.day_date_separator,
            week.day(day_index).format("%d.%m")
        );

        let mut lines = vec![bold(&header)];
        if lessons.is_empty() {
            lines.push(self.locale.day_off.to_string());
        }
        for lesson in lessons {
            let location = lesson.location.as_deref().unwrap_or(self.locale.missing_location);
            lines.push(escape_html(&lesson.subject_name));
            lines.push(format!(
                "{}-{}  {}  {}",
                lesson.start_time.format("%H:%M"),
                lesson.end_time.format("%H:%M"),
                self.locale.lesson_marker,
                escape_html(location)
            ));
        }

        blockquote(&lines.join("\n"))
    }
}

/// Previous, current and next week tokens for a message showing week `offset`.
pub fn navigation_tokens(offset: i32) -> Vec<NavigationToken> {
    [NavAction::Previous, NavAction::Current, NavAction::Next]
        .into_iter()
        .map(|action| NavigationToken::navigate(action, offset))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Weekday};

    fn week() -> WeekWindow {
        WeekWindow::from_today(NaiveDate::from_ymd_opt(2026, 10, 21).unwrap(), 0).unwrap()
    }

    fn lesson(day: Weekday, subject: &str, start: (u32, u32), end: (u32, u32)) -> LessonRecord {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        LessonRecord {
            subject_name: subject.to_string(),
            teacher_name: "Иванов Иван Иванович".to_string(),
            start_time: date.and_hms_opt(start.0, start.1, 0).unwrap(),
            end_time: date.and_hms_opt(end.0, end.1, 0).unwrap(),
            location: None,
            day_of_week: day,
        }
    }

    #[test]
    fn test_day_block_layout() {
        let renderer = ScheduleRenderer::default();
        let lessons = vec![lesson(Weekday::Mon, "Физическая культура", (9, 0), (10, 30))];
        let rendered = renderer.render(&lessons, &week(), "М8О-207БВ-24");

        assert!(rendered.markup_text.starts_with(
            "<blockquote>М8О-207БВ-24</blockquote>\n\
             <blockquote><b>пн ~ 19.10</b>\nФизическая культура\n09:00-10:30  ПЗ  --каф.</blockquote>\n\
             <blockquote><b>вт ~ 20.10</b>\nВыходной</blockquote>"
        ));
        assert!(rendered.markup_text.ends_with("<blockquote><b>вс ~ 25.10</b>\nВыходной</blockquote>"));
    }

    #[test]
    fn test_source_order_within_day_is_kept() {
        let renderer = ScheduleRenderer::default();
        let lessons = vec![
            lesson(Weekday::Tue, "Иностранный язык", (12, 0), (13, 30)),
            lesson(Weekday::Tue, "Математический анализ", (9, 0), (10, 30)),
        ];
        let text = renderer.render(&lessons, &week(), "G").markup_text;

        let first = text.find("Иностранный язык").unwrap();
        let second = text.find("Математический анализ").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_user_text_is_escaped() {
        let renderer = ScheduleRenderer::default();
        let mut record = lesson(Weekday::Wed, "R&D <intro>", (9, 0), (10, 0));
        record.location = Some("Lab <1>".to_string());
        let text = renderer.render(&[record], &week(), "<G>").markup_text;

        assert!(text.contains("&lt;G&gt;"));
        assert!(text.contains("R&amp;D &lt;intro&gt;"));
        assert!(text.contains("Lab &lt;1&gt;"));
    }

    #[test]
    fn test_navigation_tokens_follow_offset() {
        let tokens = navigation_tokens(-4);
        assert_eq!(
            tokens.iter().map(NavigationToken::encode).collect::<Vec<_>>(),
            vec!["nav_prev:-5:-4", "nav_curr:0:-4", "nav_next:-3:-4"]
        );
    }
}
