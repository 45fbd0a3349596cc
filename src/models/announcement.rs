//! Announcement model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An announcement posted within an organization.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Announcement {
    pub id: i64,
    pub organization_id: i64,
    /// Author user id
    pub user_id: i64,
    pub title: String,
    pub description: Option<String>,
    /// Pinned/important flag
    pub star: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
