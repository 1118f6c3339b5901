use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Subject {
    pub id: i64,
    pub name: String,
    pub code: Option<String>,
}

impl Subject {
    /// Subjects are deduplicated by `code`; an existing row wins over `name`.
    pub async fn get_or_create(
        pool: &sqlx::SqlitePool,
        name: &str,
        code: &str,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query("INSERT OR IGNORE INTO subjects (name, code) VALUES (?, ?)")
            .bind(name)
            .bind(code)
            .execute(pool)
            .await?;

        sqlx::query_as::<_, Subject>("SELECT id, name, code FROM subjects WHERE code = ?")
            .bind(code)
            .fetch_one(pool)
            .await
    }
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Teacher {
    pub id: i64,
    pub name: String,
    pub department: Option<String>,
}

impl Teacher {
    pub async fn create(
        pool: &sqlx::SqlitePool,
        name: &str,
        department: Option<&str>,
    ) -> Result<Self, sqlx::Error> {
        let id = sqlx::query("INSERT INTO teachers (name, department) VALUES (?, ?)")
            .bind(name)
            .bind(department)
            .execute(pool)
            .await?
            .last_insert_rowid();

        Ok(Teacher {
            id,
            name: name.to_string(),
            department: department.map(str::to_string),
        })
    }

    pub async fn find_by_name(pool: &sqlx::SqlitePool, name: &str) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Teacher>("SELECT id, name, department FROM teachers WHERE name = ? ORDER BY id LIMIT 1")
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Teachers are matched by full name; the stored department is kept.
    pub async fn get_or_create(
        pool: &sqlx::SqlitePool,
        name: &str,
        department: Option<&str>,
    ) -> Result<Self, sqlx::Error> {
        match Self::find_by_name(pool, name).await? {
            Some(teacher) => Ok(teacher),
            None => Self::create(pool, name, department).await,
        }
    }
}
