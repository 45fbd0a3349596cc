//! Organization queries.

use super::Database;
use crate::error::AppError;
use crate::models::Organization;

// Invite codes are random; retry a few times if we hit the unique constraint.
const CODE_INSERT_ATTEMPTS: u32 = 3;

impl Database {
    /// Insert a new organization with a generated invite code.
    pub async fn create_organization(
        &self,
        owner_id: i64,
        name: &str,
        description: &str,
        category: &str,
        image: &str,
    ) -> Result<Organization, AppError> {
        for attempt in 1..=CODE_INSERT_ATTEMPTS {
            let code = Organization::generate_code();
            let result = sqlx::query(
                "INSERT INTO organizations (name, description, category, image, code, owner_id) \
                 VALUES (?, ?, ?, ?, ?, ?)",
            )
            .bind(name)
            .bind(description)
            .bind(category)
            .bind(image)
            .bind(&code)
            .bind(owner_id)
            .execute(self.pool())
            .await;

            match result {
                Ok(done) => {
                    let id = done.last_insert_id() as i64;
                    return self.get_organization(id).await?.ok_or_else(|| {
                        AppError::Database("Inserted organization not found".to_string())
                    });
                }
                Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                    tracing::warn!(attempt, "Invite code collision, retrying");
                    continue;
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(AppError::Database(
            "Could not generate a unique invite code".to_string(),
        ))
    }

    pub async fn list_organizations(&self) -> Result<Vec<Organization>, AppError> {
        let orgs = sqlx::query_as::<_, Organization>(
            "SELECT * FROM organizations ORDER BY created_at DESC",
        )
        .fetch_all(self.pool())
        .await?;
        Ok(orgs)
    }

    pub async fn get_organization(&self, id: i64) -> Result<Option<Organization>, AppError> {
        let org = sqlx::query_as::<_, Organization>("SELECT * FROM organizations WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;
        Ok(org)
    }

    pub async fn get_organization_by_code(
        &self,
        code: &str,
    ) -> Result<Option<Organization>, AppError> {
        let org = sqlx::query_as::<_, Organization>("SELECT * FROM organizations WHERE code = ?")
            .bind(code)
            .fetch_optional(self.pool())
            .await?;
        Ok(org)
    }

    /// Write back mutable organization fields.
    pub async fn update_organization(&self, org: &Organization) -> Result<(), AppError> {
        sqlx::query(
            "UPDATE organizations SET name = ?, description = ?, category = ?, image = ? \
             WHERE id = ?",
        )
        .bind(&org.name)
        .bind(&org.description)
        .bind(&org.category)
        .bind(&org.image)
        .bind(org.id)
        .execute(self.pool())
        .await?;
        Ok(())
    }

    pub async fn delete_organization(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM organizations WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;
        Ok(())
    }
}
