use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::schedule::{weekday_from_index, LessonRecord};

/// A group's timetable for one week.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct WeekSchedule {
    pub id: i64,
    pub group_id: i64,
    pub week_start: NaiveDate,
}

impl WeekSchedule {
    pub async fn find(
        pool: &sqlx::SqlitePool,
        group_id: i64,
        week_start: NaiveDate,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, WeekSchedule>(
            "SELECT id, group_id, week_start FROM schedules WHERE group_id = ? AND week_start = ?"
        )
        .bind(group_id)
        .bind(week_start)
        .fetch_optional(pool)
        .await
    }

    pub async fn find_or_create(
        pool: &sqlx::SqlitePool,
        group_id: i64,
        week_start: NaiveDate,
    ) -> Result<Self, sqlx::Error> {
        if let Some(schedule) = Self::find(pool, group_id, week_start).await? {
            return Ok(schedule);
        }

        let id = sqlx::query("INSERT INTO schedules (group_id, week_start) VALUES (?, ?)")
            .bind(group_id)
            .bind(week_start)
            .execute(pool)
            .await?
            .last_insert_rowid();

        Ok(WeekSchedule { id, group_id, week_start })
    }
}

/// Fields of a lesson to insert.
#[derive(Debug, Clone)]
pub struct NewLesson {
    pub schedule_id: i64,
    pub subject_id: i64,
    pub teacher_id: i64,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub location: Option<String>,
    /// 0 = Monday, 6 = Sunday.
    pub day_of_week: i64,
}

#[derive(Debug, Clone, FromRow)]
struct LessonRow {
    subject_name: String,
    teacher_name: String,
    start_time: NaiveDateTime,
    end_time: NaiveDateTime,
    location: Option<String>,
    day_of_week: i64,
}

pub struct Lesson;

impl Lesson {
    pub async fn create(pool: &sqlx::SqlitePool, lesson: &NewLesson) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO lessons (schedule_id, subject_id, teacher_id, start_time, end_time, location, day_of_week)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#
        )
        .bind(lesson.schedule_id)
        .bind(lesson.subject_id)
        .bind(lesson.teacher_id)
        .bind(lesson.start_time)
        .bind(lesson.end_time)
        .bind(lesson.location.as_deref())
        .bind(lesson.day_of_week)
        .execute(pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Removes every lesson of one week schedule, returning how many went.
    pub async fn delete_for_schedule(pool: &sqlx::SqlitePool, schedule_id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM lessons WHERE schedule_id = ?")
            .bind(schedule_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Lessons of a group's week ordered by day, then start time.
    pub async fn find_for_week(
        pool: &sqlx::SqlitePool,
        group_id: i64,
        week_start: NaiveDate,
    ) -> Result<Vec<LessonRecord>, sqlx::Error> {
        let rows = sqlx::query_as::<_, LessonRow>(
            r#"
            SELECT s.name AS subject_name, t.name AS teacher_name,
                   l.start_time, l.end_time, l.location, l.day_of_week
            FROM lessons l
            JOIN subjects s ON l.subject_id = s.id
            JOIN teachers t ON l.teacher_id = t.id
            JOIN schedules sch ON l.schedule_id = sch.id
            WHERE sch.group_id = ? AND sch.week_start = ?
            ORDER BY l.day_of_week, l.start_time
            "#
        )
        .bind(group_id)
        .bind(week_start)
        .fetch_all(pool)
        .await?;

        let mut lessons = Vec::with_capacity(rows.len());
        for row in rows {
            let Some(day_of_week) = weekday_from_index(row.day_of_week) else {
                tracing::warn!(
                    "Skipping lesson '{}' with invalid day_of_week {}",
                    row.subject_name, row.day_of_week
                );
                continue;
            };
            lessons.push(LessonRecord {
                subject_name: row.subject_name,
                teacher_name: row.teacher_name,
                start_time: row.start_time,
                end_time: row.end_time,
                location: row.location,
                day_of_week,
            });
        }

        Ok(lessons)
    }
}
