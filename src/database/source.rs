use async_trait::async_trait;
use chrono::NaiveDate;

use crate::database::connection::DatabaseManager;
use crate::database::models::{Group, Lesson};
use crate::error::{Result, ScheduleError};
use crate::schedule::{GroupSummary, LessonRecord, ScheduleSource};
use crate::utils::logging::log_lookup_error;

#[async_trait]
impl ScheduleSource for DatabaseManager {
    async fn lookup_lessons(&self, group_id: i64, week_start: NaiveDate) -> Result<Vec<LessonRecord>> {
        Lesson::find_for_week(&self.pool, group_id, week_start)
            .await
            .map_err(|e| lookup_failed("lookup_lessons", e))
    }

    async fn list_groups(&self) -> Result<Vec<GroupSummary>> {
        let groups = Group::list_all(&self.pool)
            .await
            .map_err(|e| lookup_failed("list_groups", e))?;
        Ok(groups.into_iter().map(GroupSummary::from).collect())
    }

    async fn resolve_group_name(&self, group_id: i64) -> Result<String> {
        Group::find_by_id(&self.pool, group_id)
            .await
            .map_err(|e| lookup_failed("resolve_group_name", e))?
            .map(|group| group.name)
            .ok_or_else(|| ScheduleError::GroupNotFound(group_id.to_string()))
    }

    async fn find_group_by_name(&self, name: &str) -> Result<Option<GroupSummary>> {
        let group = Group::find_by_name(&self.pool, name)
            .await
            .map_err(|e| lookup_failed("find_group_by_name", e))?;
        Ok(group.map(GroupSummary::from))
    }
}

fn lookup_failed(operation: &str, err: sqlx::Error) -> ScheduleError {
    log_lookup_error(operation, &err.to_string());
    ScheduleError::from(err)
}
