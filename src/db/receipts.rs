//! Receipt queries.

use super::Database;
use crate::error::AppError;
use crate::models::receipt::ReceiptDetail;
use crate::models::Receipt;
use chrono::NaiveDate;

impl Database {
    #[allow(clippy::too_many_arguments)]
    pub async fn create_receipt(
        &self,
        organization_id: i64,
        user_id: i64,
        receipt_type: &str,
        amount: i32,
        category: &str,
        description: Option<&str>,
        date: NaiveDate,
        image: Option<&str>,
    ) -> Result<i64, AppError> {
        let result = sqlx::query(
            "INSERT INTO receipts (organization_id, user_id, type, amount, category, description, date, image) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(organization_id)
        .bind(user_id)
        .bind(receipt_type)
        .bind(amount)
        .bind(category)
        .bind(description)
        .bind(date)
        .bind(image)
        .execute(self.pool())
        .await?;

        Ok(result.last_insert_id() as i64)
    }

    /// Page of receipts, most recent date first. Returns (items, total).
    pub async fn page_receipts(
        &self,
        organization_id: i64,
        limit: u32,
        offset: u64,
    ) -> Result<(Vec<Receipt>, i64), AppError> {
        let items = sqlx::query_as::<_, Receipt>(
            "SELECT * FROM receipts WHERE organization_id = ? \
             ORDER BY date DESC, id DESC LIMIT ? OFFSET ?",
        )
        .bind(organization_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool())
        .await?;

        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM receipts WHERE organization_id = ?",
        )
        .bind(organization_id)
        .fetch_one(self.pool())
        .await?;

        Ok((items, total))
    }

    /// Fetch by id alone; callers check the organization themselves so a
    /// mismatch can be hidden as 404.
    pub async fn get_receipt_detail(&self, id: i64) -> Result<Option<ReceiptDetail>, AppError> {
        let receipt = sqlx::query_as::<_, ReceiptDetail>(
            "SELECT r.id, r.organization_id, r.user_id, u.username, r.type, r.amount, \
                    r.category, r.description, r.date, r.image \
             FROM receipts r JOIN users u ON u.id = r.user_id \
             WHERE r.id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?;
        Ok(receipt)
    }

    pub async fn update_receipt(&self, receipt: &Receipt) -> Result<(), AppError> {
        sqlx::query(
            "UPDATE receipts SET type = ?, amount = ?, category = ?, description = ?, \
             date = ?, image = ? WHERE id = ?",
        )
        .bind(&receipt.r#type)
        .bind(receipt.amount)
        .bind(&receipt.category)
        .bind(&receipt.description)
        .bind(receipt.date)
        .bind(&receipt.image)
        .bind(receipt.id)
        .execute(self.pool())
        .await?;
        Ok(())
    }

    pub async fn delete_receipt(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM receipts WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;
        Ok(())
    }
}
