//! Join request model and status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lifecycle state of a join request.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(rename_all = "UPPERCASE")]
pub enum JoinRequestStatus {
    Pending,
    Approved,
    Rejected,
}

/// Join request joined with the requesting user's name; every read path
/// wants the username, so there is no bare row variant.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct JoinRequestWithUser {
    pub id: i64,
    pub organization_id: i64,
    pub user_id: i64,
    pub username: String,
    pub status: JoinRequestStatus,
    pub message: Option<String>,
    pub decision_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub decided_at: Option<DateTime<Utc>>,
}
