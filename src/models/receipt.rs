//! Receipt (group ledger entry) model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single ledger entry recorded against an organization.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Receipt {
    pub id: i64,
    pub organization_id: i64,
    /// Recorder user id
    pub user_id: i64,
    /// Payment type, e.g. "card" or "cash"
    pub r#type: String,
    pub amount: i32,
    pub category: String,
    pub description: Option<String>,
    /// Transaction date
    pub date: NaiveDate,
    /// Receipt image URL
    pub image: Option<String>,
}

/// Receipt joined with the recorder's username, for detail views.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ReceiptDetail {
    pub id: i64,
    pub organization_id: i64,
    pub user_id: i64,
    pub username: String,
    pub r#type: String,
    pub amount: i32,
    pub category: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub image: Option<String>,
}
