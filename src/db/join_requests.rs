//! Join request queries.

use super::Database;
use crate::error::AppError;
use crate::models::join_request::JoinRequestWithUser;
use crate::models::JoinRequestStatus;

impl Database {
    pub async fn create_join_request(
        &self,
        organization_id: i64,
        user_id: i64,
        message: Option<&str>,
    ) -> Result<JoinRequestWithUser, AppError> {
        let result = sqlx::query(
            "INSERT INTO join_requests (organization_id, user_id, status, message) \
             VALUES (?, ?, 'PENDING', ?)",
        )
        .bind(organization_id)
        .bind(user_id)
        .bind(message)
        .execute(self.pool())
        .await?;

        let id = result.last_insert_id() as i64;
        self.get_join_request(organization_id, id)
            .await?
            .ok_or_else(|| AppError::Database("Inserted join request not found".to_string()))
    }

    pub async fn list_join_requests(
        &self,
        organization_id: i64,
    ) -> Result<Vec<JoinRequestWithUser>, AppError> {
        let requests = sqlx::query_as::<_, JoinRequestWithUser>(
            "SELECT r.id, r.organization_id, r.user_id, u.username, r.status, r.message, \
                    r.decision_reason, r.created_at, r.decided_at \
             FROM join_requests r JOIN users u ON u.id = r.user_id \
             WHERE r.organization_id = ? \
             ORDER BY r.created_at DESC",
        )
        .bind(organization_id)
        .fetch_all(self.pool())
        .await?;
        Ok(requests)
    }

    pub async fn get_join_request(
        &self,
        organization_id: i64,
        request_id: i64,
    ) -> Result<Option<JoinRequestWithUser>, AppError> {
        let request = sqlx::query_as::<_, JoinRequestWithUser>(
            "SELECT r.id, r.organization_id, r.user_id, u.username, r.status, r.message, \
                    r.decision_reason, r.created_at, r.decided_at \
             FROM join_requests r JOIN users u ON u.id = r.user_id \
             WHERE r.id = ? AND r.organization_id = ?",
        )
        .bind(request_id)
        .bind(organization_id)
        .fetch_optional(self.pool())
        .await?;
        Ok(request)
    }

    pub async fn has_pending_request(
        &self,
        organization_id: i64,
        user_id: i64,
    ) -> Result<bool, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM join_requests \
             WHERE organization_id = ? AND user_id = ? AND status = 'PENDING'",
        )
        .bind(organization_id)
        .bind(user_id)
        .fetch_one(self.pool())
        .await?;
        Ok(count > 0)
    }

    /// Record the owner's decision on a pending request.
    pub async fn decide_join_request(
        &self,
        request_id: i64,
        status: JoinRequestStatus,
        reason: Option<&str>,
    ) -> Result<(), AppError> {
        sqlx::query(
            "UPDATE join_requests SET status = ?, decision_reason = ?, decided_at = NOW() \
             WHERE id = ?",
        )
        .bind(status)
        .bind(reason)
        .bind(request_id)
        .execute(self.pool())
        .await?;
        Ok(())
    }
}
