use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::schedule::GroupSummary;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Group {
    pub id: i64,
    pub name: String,
    pub faculty: String,
}

impl Group {
    pub async fn create(
        pool: &sqlx::SqlitePool,
        name: &str,
        faculty: &str,
    ) -> Result<Self, sqlx::Error> {
        let id = sqlx::query("INSERT INTO groups (name, faculty) VALUES (?, ?)")
            .bind(name)
            .bind(faculty)
            .execute(pool)
            .await?
            .last_insert_rowid();

        Self::find_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    pub async fn find_by_id(
        pool: &sqlx::SqlitePool,
        id: i64,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Group>("SELECT id, name, faculty FROM groups WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_name(
        pool: &sqlx::SqlitePool,
        name: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Group>("SELECT id, name, faculty FROM groups WHERE name = ?")
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// All groups in insertion order, which is the order search results keep.
    pub async fn list_all(pool: &sqlx::SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Group>("SELECT id, name, faculty FROM groups ORDER BY id")
            .fetch_all(pool)
            .await
    }

    pub async fn get_or_create(
        pool: &sqlx::SqlitePool,
        name: &str,
        faculty: &str,
    ) -> Result<Self, sqlx::Error> {
        match Self::find_by_name(pool, name).await? {
            Some(group) => Ok(group),
            None => Self::create(pool, name, faculty).await,
        }
    }

    pub async fn count(pool: &sqlx::SqlitePool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM groups")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}

impl From<Group> for GroupSummary {
    fn from(group: Group) -> Self {
        GroupSummary {
            id: group.id,
            name: group.name,
            faculty: group.faculty,
        }
    }
}
