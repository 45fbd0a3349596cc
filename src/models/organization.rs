//! Organization model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An organization owned by a user.
///
/// `code` is the six-character invite code members use to request to join.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Organization {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub category: String,
    /// Organization image URL
    pub image: String,
    /// Unique invite code (6 uppercase characters)
    pub code: String,
    pub owner_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Organization {
    /// Generate a fresh invite code. Uniqueness is enforced by the
    /// database constraint; callers retry on collision.
    pub fn generate_code() -> String {
        uuid::Uuid::new_v4()
            .simple()
            .to_string()
            .chars()
            .take(6)
            .collect::<String>()
            .to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_code_shape() {
        let code = Organization::generate_code();
        assert_eq!(code.len(), 6);
        assert!(code.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_generate_code_varies() {
        let a = Organization::generate_code();
        let b = Organization::generate_code();
        // Collisions are possible but vanishingly unlikely for one pair.
        assert_ne!(a, b);
    }
}
