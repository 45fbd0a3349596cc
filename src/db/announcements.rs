//! Announcement queries.

use super::Database;
use crate::error::AppError;
use crate::models::Announcement;

impl Database {
    pub async fn create_announcement(
        &self,
        organization_id: i64,
        user_id: i64,
        title: &str,
        description: Option<&str>,
    ) -> Result<Announcement, AppError> {
        let result = sqlx::query(
            "INSERT INTO announcements (organization_id, user_id, title, description) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(organization_id)
        .bind(user_id)
        .bind(title)
        .bind(description)
        .execute(self.pool())
        .await?;

        let id = result.last_insert_id() as i64;
        self.get_announcement(organization_id, id)
            .await?
            .ok_or_else(|| AppError::Database("Inserted announcement not found".to_string()))
    }

    /// Page of announcements, newest first. Returns (items, total).
    pub async fn page_announcements(
        &self,
        organization_id: i64,
        limit: u32,
        offset: u64,
    ) -> Result<(Vec<Announcement>, i64), AppError> {
        let items = sqlx::query_as::<_, Announcement>(
            "SELECT * FROM announcements WHERE organization_id = ? \
             ORDER BY created_at DESC LIMIT ? OFFSET ?",
        )
        .bind(organization_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool())
        .await?;

        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM announcements WHERE organization_id = ?",
        )
        .bind(organization_id)
        .fetch_one(self.pool())
        .await?;

        Ok((items, total))
    }

    /// Page of starred announcements only.
    pub async fn page_starred_announcements(
        &self,
        organization_id: i64,
        limit: u32,
        offset: u64,
    ) -> Result<(Vec<Announcement>, i64), AppError> {
        let items = sqlx::query_as::<_, Announcement>(
            "SELECT * FROM announcements WHERE organization_id = ? AND star = TRUE \
             ORDER BY created_at DESC LIMIT ? OFFSET ?",
        )
        .bind(organization_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool())
        .await?;

        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM announcements WHERE organization_id = ? AND star = TRUE",
        )
        .bind(organization_id)
        .fetch_one(self.pool())
        .await?;

        Ok((items, total))
    }

    /// Page of announcements whose title contains `keyword`.
    pub async fn search_announcements(
        &self,
        organization_id: i64,
        keyword: &str,
        limit: u32,
        offset: u64,
    ) -> Result<(Vec<Announcement>, i64), AppError> {
        let pattern = format!("%{}%", keyword);

        let items = sqlx::query_as::<_, Announcement>(
            "SELECT * FROM announcements WHERE organization_id = ? AND title LIKE ? \
             ORDER BY created_at DESC LIMIT ? OFFSET ?",
        )
        .bind(organization_id)
        .bind(&pattern)
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool())
        .await?;

        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM announcements WHERE organization_id = ? AND title LIKE ?",
        )
        .bind(organization_id)
        .bind(&pattern)
        .fetch_one(self.pool())
        .await?;

        Ok((items, total))
    }

    pub async fn get_announcement(
        &self,
        organization_id: i64,
        id: i64,
    ) -> Result<Option<Announcement>, AppError> {
        let announcement = sqlx::query_as::<_, Announcement>(
            "SELECT * FROM announcements WHERE id = ? AND organization_id = ?",
        )
        .bind(id)
        .bind(organization_id)
        .fetch_optional(self.pool())
        .await?;
        Ok(announcement)
    }

    pub async fn update_announcement(&self, announcement: &Announcement) -> Result<(), AppError> {
        sqlx::query(
            "UPDATE announcements SET title = ?, description = ?, star = ? WHERE id = ?",
        )
        .bind(&announcement.title)
        .bind(&announcement.description)
        .bind(announcement.star)
        .bind(announcement.id)
        .execute(self.pool())
        .await?;
        Ok(())
    }

    pub async fn delete_announcement(
        &self,
        organization_id: i64,
        id: i64,
    ) -> Result<(), AppError> {
        sqlx::query("DELETE FROM announcements WHERE id = ? AND organization_id = ?")
            .bind(id)
            .bind(organization_id)
            .execute(self.pool())
            .await?;
        Ok(())
    }
}
