//! Shared document metadata model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata for a file shared within an organization.
/// The file body itself lives in external storage; only `name`,
/// `type` and `size` are tracked here.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Document {
    pub id: i64,
    pub organization_id: i64,
    /// Author user id
    pub user_id: i64,
    pub title: String,
    pub description: Option<String>,
    /// Stored file name
    pub name: String,
    /// File type (extension or MIME)
    pub r#type: String,
    /// File size in bytes
    pub size: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Document joined with author and organization names, for detail views.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct DocumentDetail {
    pub id: i64,
    pub organization_id: i64,
    pub user_id: i64,
    pub username: String,
    pub organization_name: String,
    pub title: String,
    pub description: Option<String>,
    pub name: String,
    pub r#type: String,
    pub size: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
