//! Schedule (organization calendar entry) model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A calendar entry belonging to an organization.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Schedule {
    pub id: i64,
    pub organization_id: i64,
    /// Author user id
    pub user_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// Schedule joined with the author's username, for API responses.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ScheduleWithAuthor {
    pub id: i64,
    pub organization_id: i64,
    pub user_id: i64,
    pub username: String,
    pub title: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}
