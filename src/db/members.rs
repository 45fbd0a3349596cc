//! Membership queries.

use super::Database;
use crate::error::AppError;
use crate::models::{Member, MemberWithUser};

impl Database {
    /// Members of an organization, optionally filtered by role
    /// (case-insensitive).
    pub async fn list_members(
        &self,
        organization_id: i64,
        role: Option<&str>,
    ) -> Result<Vec<MemberWithUser>, AppError> {
        let members = match role {
            Some(role) => {
                sqlx::query_as::<_, MemberWithUser>(
                    "SELECT m.user_id, u.username, u.email, m.role, m.joined_at \
                     FROM members m JOIN users u ON u.id = m.user_id \
                     WHERE m.organization_id = ? AND LOWER(m.role) = LOWER(?) \
                     ORDER BY m.joined_at",
                )
                .bind(organization_id)
                .bind(role)
                .fetch_all(self.pool())
                .await?
            }
            None => {
                sqlx::query_as::<_, MemberWithUser>(
                    "SELECT m.user_id, u.username, u.email, m.role, m.joined_at \
                     FROM members m JOIN users u ON u.id = m.user_id \
                     WHERE m.organization_id = ? \
                     ORDER BY m.joined_at",
                )
                .bind(organization_id)
                .fetch_all(self.pool())
                .await?
            }
        };
        Ok(members)
    }

    pub async fn get_member(
        &self,
        organization_id: i64,
        user_id: i64,
    ) -> Result<Option<Member>, AppError> {
        let member = sqlx::query_as::<_, Member>(
            "SELECT * FROM members WHERE organization_id = ? AND user_id = ?",
        )
        .bind(organization_id)
        .bind(user_id)
        .fetch_optional(self.pool())
        .await?;
        Ok(member)
    }

    pub async fn insert_member(
        &self,
        organization_id: i64,
        user_id: i64,
        role: &str,
    ) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO members (user_id, organization_id, role) VALUES (?, ?, ?)",
        )
        .bind(user_id)
        .bind(organization_id)
        .bind(role)
        .execute(self.pool())
        .await?;
        Ok(())
    }

    pub async fn delete_member(
        &self,
        organization_id: i64,
        user_id: i64,
    ) -> Result<(), AppError> {
        sqlx::query("DELETE FROM members WHERE organization_id = ? AND user_id = ?")
            .bind(organization_id)
            .bind(user_id)
            .execute(self.pool())
            .await?;
        Ok(())
    }

    pub async fn is_member(&self, organization_id: i64, user_id: i64) -> Result<bool, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM members WHERE organization_id = ? AND user_id = ?",
        )
        .bind(organization_id)
        .bind(user_id)
        .fetch_one(self.pool())
        .await?;
        Ok(count > 0)
    }

    pub async fn is_owner(&self, organization_id: i64, user_id: i64) -> Result<bool, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM organizations WHERE id = ? AND owner_id = ?",
        )
        .bind(organization_id)
        .bind(user_id)
        .fetch_one(self.pool())
        .await?;
        Ok(count > 0)
    }
}
