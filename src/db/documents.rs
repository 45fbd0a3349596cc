//! Document queries.

use super::Database;
use crate::error::AppError;
use crate::models::document::DocumentDetail;
use crate::models::Document;

const DETAIL_SELECT: &str =
    "SELECT d.id, d.organization_id, d.user_id, u.username, o.name AS organization_name, \
            d.title, d.description, d.name, d.type, d.size, d.created_at, d.updated_at \
     FROM documents d \
     JOIN users u ON u.id = d.user_id \
     JOIN organizations o ON o.id = d.organization_id";

impl Database {
    #[allow(clippy::too_many_arguments)]
    pub async fn create_document(
        &self,
        organization_id: i64,
        user_id: i64,
        title: &str,
        description: Option<&str>,
        name: &str,
        file_type: &str,
        size: i32,
    ) -> Result<DocumentDetail, AppError> {
        let result = sqlx::query(
            "INSERT INTO documents (organization_id, user_id, title, description, name, type, size) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(organization_id)
        .bind(user_id)
        .bind(title)
        .bind(description)
        .bind(name)
        .bind(file_type)
        .bind(size)
        .execute(self.pool())
        .await?;

        let id = result.last_insert_id() as i64;
        self.get_document_detail(organization_id, id)
            .await?
            .ok_or_else(|| AppError::Database("Inserted document not found".to_string()))
    }

    pub async fn get_document(
        &self,
        organization_id: i64,
        id: i64,
    ) -> Result<Option<Document>, AppError> {
        let document = sqlx::query_as::<_, Document>(
            "SELECT * FROM documents WHERE id = ? AND organization_id = ?",
        )
        .bind(id)
        .bind(organization_id)
        .fetch_optional(self.pool())
        .await?;
        Ok(document)
    }

    pub async fn get_document_detail(
        &self,
        organization_id: i64,
        id: i64,
    ) -> Result<Option<DocumentDetail>, AppError> {
        let sql = format!("{} WHERE d.id = ? AND d.organization_id = ?", DETAIL_SELECT);
        let document = sqlx::query_as::<_, DocumentDetail>(&sql)
            .bind(id)
            .bind(organization_id)
            .fetch_optional(self.pool())
            .await?;
        Ok(document)
    }

    /// Page of document details, newest first. Returns (items, total).
    pub async fn page_documents(
        &self,
        organization_id: i64,
        limit: u32,
        offset: u64,
    ) -> Result<(Vec<DocumentDetail>, i64), AppError> {
        let sql = format!(
            "{} WHERE d.organization_id = ? ORDER BY d.created_at DESC LIMIT ? OFFSET ?",
            DETAIL_SELECT
        );
        let items = sqlx::query_as::<_, DocumentDetail>(&sql)
            .bind(organization_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(self.pool())
            .await?;

        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM documents WHERE organization_id = ?",
        )
        .bind(organization_id)
        .fetch_one(self.pool())
        .await?;

        Ok((items, total))
    }

    pub async fn update_document(&self, document: &Document) -> Result<(), AppError> {
        sqlx::query(
            "UPDATE documents SET title = ?, description = ?, name = ?, type = ?, size = ? \
             WHERE id = ?",
        )
        .bind(&document.title)
        .bind(&document.description)
        .bind(&document.name)
        .bind(&document.r#type)
        .bind(document.size)
        .bind(document.id)
        .execute(self.pool())
        .await?;
        Ok(())
    }

    pub async fn delete_document(&self, organization_id: i64, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM documents WHERE id = ? AND organization_id = ?")
            .bind(id)
            .bind(organization_id)
            .execute(self.pool())
            .await?;
        Ok(())
    }
}
