//! User queries.

use super::Database;
use crate::error::AppError;
use crate::models::{Organization, User};

impl Database {
    /// Insert a new user and return the stored row.
    pub async fn create_user(
        &self,
        username: &str,
        password_hash: &str,
        email: &str,
        phone: &str,
        image: Option<&str>,
    ) -> Result<User, AppError> {
        let result = sqlx::query(
            "INSERT INTO users (username, password_hash, email, phone, image) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(username)
        .bind(password_hash)
        .bind(email)
        .bind(phone)
        .bind(image)
        .execute(self.pool())
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db) = &e {
                if db.is_unique_violation() {
                    return AppError::Conflict("Username is already taken".to_string());
                }
            }
            AppError::from(e)
        })?;

        let id = result.last_insert_id() as i64;
        self.get_user(id)
            .await?
            .ok_or_else(|| AppError::Database("Inserted user not found".to_string()))
    }

    pub async fn get_user(&self, id: i64) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;
        Ok(user)
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(self.pool())
            .await?;
        Ok(user)
    }

    pub async fn username_exists(&self, username: &str) -> Result<bool, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_one(self.pool())
        .await?;
        Ok(count > 0)
    }

    /// True when another user (not `user_id`) already holds `username`.
    pub async fn username_taken_by_other(
        &self,
        username: &str,
        user_id: i64,
    ) -> Result<bool, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM users WHERE username = ? AND id <> ?",
        )
        .bind(username)
        .bind(user_id)
        .fetch_one(self.pool())
        .await?;
        Ok(count > 0)
    }

    /// Write back mutable profile fields.
    pub async fn update_user(&self, user: &User) -> Result<(), AppError> {
        sqlx::query(
            "UPDATE users SET username = ?, password_hash = ?, email = ?, phone = ?, image = ? \
             WHERE id = ?",
        )
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(&user.email)
        .bind(&user.phone)
        .bind(&user.image)
        .bind(user.id)
        .execute(self.pool())
        .await?;
        Ok(())
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;
        Ok(())
    }

    /// Organizations the user owns or belongs to.
    pub async fn list_user_organizations(
        &self,
        user_id: i64,
    ) -> Result<Vec<Organization>, AppError> {
        let orgs = sqlx::query_as::<_, Organization>(
            "SELECT DISTINCT o.* FROM organizations o \
             LEFT JOIN members m ON m.organization_id = o.id AND m.user_id = ? \
             WHERE o.owner_id = ? OR m.user_id IS NOT NULL \
             ORDER BY o.created_at DESC",
        )
        .bind(user_id)
        .bind(user_id)
        .fetch_all(self.pool())
        .await?;
        Ok(orgs)
    }
}
