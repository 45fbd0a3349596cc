//! Schedule queries.

use super::Database;
use crate::error::AppError;
use crate::models::{Schedule, ScheduleWithAuthor};
use chrono::{DateTime, Utc};

const AUTHOR_SELECT: &str =
    "SELECT s.id, s.organization_id, s.user_id, u.username, s.title, s.description, \
            s.start_time, s.end_time \
     FROM schedules s JOIN users u ON u.id = s.user_id";

impl Database {
    pub async fn create_schedule(
        &self,
        organization_id: i64,
        user_id: i64,
        title: &str,
        description: Option<&str>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Result<ScheduleWithAuthor, AppError> {
        let result = sqlx::query(
            "INSERT INTO schedules (organization_id, user_id, title, description, start_time, end_time) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(organization_id)
        .bind(user_id)
        .bind(title)
        .bind(description)
        .bind(start_time)
        .bind(end_time)
        .execute(self.pool())
        .await?;

        let id = result.last_insert_id() as i64;
        self.get_schedule(organization_id, id)
            .await?
            .ok_or_else(|| AppError::Database("Inserted schedule not found".to_string()))
    }

    /// Page of schedules, latest start first. Returns (items, total).
    pub async fn page_schedules(
        &self,
        organization_id: i64,
        limit: u32,
        offset: u64,
    ) -> Result<(Vec<ScheduleWithAuthor>, i64), AppError> {
        let sql = format!(
            "{} WHERE s.organization_id = ? ORDER BY s.start_time DESC LIMIT ? OFFSET ?",
            AUTHOR_SELECT
        );
        let items = sqlx::query_as::<_, ScheduleWithAuthor>(&sql)
            .bind(organization_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(self.pool())
            .await?;

        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM schedules WHERE organization_id = ?",
        )
        .bind(organization_id)
        .fetch_one(self.pool())
        .await?;

        Ok((items, total))
    }

    pub async fn get_schedule(
        &self,
        organization_id: i64,
        id: i64,
    ) -> Result<Option<ScheduleWithAuthor>, AppError> {
        let sql = format!("{} WHERE s.id = ? AND s.organization_id = ?", AUTHOR_SELECT);
        let schedule = sqlx::query_as::<_, ScheduleWithAuthor>(&sql)
            .bind(id)
            .bind(organization_id)
            .fetch_optional(self.pool())
            .await?;
        Ok(schedule)
    }

    pub async fn update_schedule(&self, schedule: &Schedule) -> Result<(), AppError> {
        sqlx::query(
            "UPDATE schedules SET title = ?, description = ?, start_time = ?, end_time = ? \
             WHERE id = ?",
        )
        .bind(&schedule.title)
        .bind(&schedule.description)
        .bind(schedule.start_time)
        .bind(schedule.end_time)
        .bind(schedule.id)
        .execute(self.pool())
        .await?;
        Ok(())
    }

    pub async fn delete_schedule(&self, organization_id: i64, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM schedules WHERE id = ? AND organization_id = ?")
            .bind(id)
            .bind(organization_id)
            .execute(self.pool())
            .await?;
        Ok(())
    }
}
