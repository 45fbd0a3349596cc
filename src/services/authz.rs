// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Authorization checks for organization-scoped resources.

use crate::db::Database;
use crate::error::{AppError, Result};
use crate::models::Organization;

/// Load an organization or fail with 404.
pub async fn require_organization(db: &Database, org_id: i64) -> Result<Organization> {
    db.get_organization(org_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Organization {} not found", org_id)))
}

/// Load an organization and check that `user_id` owns it.
pub async fn require_owner(db: &Database, org_id: i64, user_id: i64) -> Result<Organization> {
    let org = require_organization(db, org_id).await?;
    if org.owner_id != user_id {
        return Err(AppError::Forbidden(
            "Only the organization owner may do this".to_string(),
        ));
    }
    Ok(org)
}

/// Check that `user_id` is a member of the organization.
pub async fn require_member(db: &Database, org_id: i64, user_id: i64) -> Result<()> {
    if db.is_member(org_id, user_id).await? {
        return Ok(());
    }
    Err(AppError::Forbidden(
        "Not a member of this organization".to_string(),
    ))
}

/// Check that `user_id` is a member or the owner of the organization.
pub async fn require_member_or_owner(db: &Database, org_id: i64, user_id: i64) -> Result<()> {
    if db.is_member(org_id, user_id).await? || db.is_owner(org_id, user_id).await? {
        return Ok(());
    }
    Err(AppError::Forbidden(
        "Not a member of this organization".to_string(),
    ))
}

/// Documents may be modified by the organization owner or the author.
pub async fn can_modify_document(
    db: &Database,
    org_id: i64,
    user_id: i64,
    author_id: i64,
) -> Result<bool> {
    if user_id == author_id {
        return Ok(true);
    }
    db.is_owner(org_id, user_id).await
}
