//! Organization membership models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default role assigned when a join request is approved.
pub const DEFAULT_MEMBER_ROLE: &str = "MEMBER";

/// Membership row, keyed by (user_id, organization_id).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Member {
    pub user_id: i64,
    pub organization_id: i64,
    pub role: String,
    pub joined_at: DateTime<Utc>,
}

/// Membership joined with the user's profile, for member listings.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct MemberWithUser {
    pub user_id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
    pub joined_at: DateTime<Utc>,
}
