use chrono::{Duration, NaiveDate};
use sqlx::SqlitePool;
use tracing::info;

use crate::database::models::{Group, Lesson, NewLesson, Subject, Teacher, WeekSchedule};

/// Name of the demo group inserted by [`seed_demo_week`].
pub const DEMO_GROUP: &str = "М8О-207БВ-24";

const DEMO_FACULTY: &str = "Computer Science";

const SUBJECTS: [(&str, &str); 5] = [
    ("Физическая культура", "PE101"),
    ("Математический анализ", "MA101"),
    ("Иностранный язык", "FL101"),
    ("Общая физика", "GP101"),
    ("Программирование", "PR101"),
];

const TEACHERS: [(&str, &str); 5] = [
    ("Иванов Иван Иванович", "Physical Education"),
    ("Петров Петр Петрович", "Mathematics"),
    ("Сидоров Сидор Сидорович", "Foreign Languages"),
    ("Кузнецов Алексей Владимирович", "Physics"),
    ("Смирнов Владимир Владимирович", "Programming"),
];

/// (subject/teacher index, day, start, end, location)
const LESSONS: [(usize, i64, (u32, u32), (u32, u32), &str); 5] = [
    (0, 0, (9, 0), (10, 30), "--каф. 919"),
    (1, 1, (10, 45), (12, 15), "ГУК В-221"),
    (2, 1, (13, 0), (14, 30), "3-403"),
    (3, 2, (13, 0), (14, 30), "ГУК Б-638"),
    (4, 3, (9, 0), (10, 30), "ГУК В-221"),
];

/// What [`seed_demo_week`] inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedSummary {
    pub group_id: i64,
    pub schedule_id: i64,
    pub lessons: usize,
}

/// Inserts the demo group with one week of lessons starting at `week_start`.
///
/// The group, subjects and teachers are reused when they already exist. Any
/// lessons already stored for that week are replaced, so seeding is repeatable.
pub async fn seed_demo_week(pool: &SqlitePool, week_start: NaiveDate) -> Result<SeedSummary, sqlx::Error> {
    let group = Group::get_or_create(pool, DEMO_GROUP, DEMO_FACULTY).await?;

    let mut subject_ids = Vec::with_capacity(SUBJECTS.len());
    for (name, code) in SUBJECTS {
        subject_ids.push(Subject::get_or_create(pool, name, code).await?.id);
    }

    let mut teacher_ids = Vec::with_capacity(TEACHERS.len());
    for (name, department) in TEACHERS {
        teacher_ids.push(Teacher::get_or_create(pool, name, Some(department)).await?.id);
    }

    let schedule = WeekSchedule::find_or_create(pool, group.id, week_start).await?;
    let replaced = Lesson::delete_for_schedule(pool, schedule.id).await?;
    if replaced > 0 {
        info!("Replacing {} existing lessons of schedule {}", replaced, schedule.id);
    }

    for (index, day, start, end, location) in LESSONS {
        let date = week_start + Duration::days(day);
        let (Some(start_time), Some(end_time)) = (
            date.and_hms_opt(start.0, start.1, 0),
            date.and_hms_opt(end.0, end.1, 0),
        ) else {
            continue;
        };

        Lesson::create(pool, &NewLesson {
            schedule_id: schedule.id,
            subject_id: subject_ids[index],
            teacher_id: teacher_ids[index],
            start_time,
            end_time,
            location: Some(location.to_string()),
            day_of_week: day,
        })
        .await?;
    }

    info!("Seeded {} lessons for {} in week {}", LESSONS.len(), DEMO_GROUP, week_start);

    Ok(SeedSummary {
        group_id: group.id,
        schedule_id: schedule.id,
        lessons: LESSONS.len(),
    })
}
