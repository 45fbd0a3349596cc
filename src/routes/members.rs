// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Organization member routes.

use axum::{
    extract::{Path, Query, State},
    routing::{delete, get},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

use crate::api::ApiResponse;
use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::MemberWithUser;
use crate::services::authz;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/organizations/{org_id}/members", get(list_members))
        .route(
            "/organizations/{org_id}/members/{member_id}",
            delete(delete_member),
        )
}

#[derive(Deserialize, IntoParams)]
pub struct MembersQuery {
    /// Filter by role, case-insensitive
    pub role: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct MemberInfo {
    pub member_id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
    pub joined_at: DateTime<Utc>,
}

impl From<MemberWithUser> for MemberInfo {
    fn from(m: MemberWithUser) -> Self {
        Self {
            member_id: m.user_id,
            username: m.username,
            email: m.email,
            role: m.role,
            joined_at: m.joined_at,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct MemberListResponse {
    pub organization_id: i64,
    pub members: Vec<MemberInfo>,
}

/// List members of an organization, optionally filtered by role.
#[utoipa::path(
    get,
    path = "/organizations/{org_id}/members",
    params(
        ("org_id" = i64, Path, description = "Organization id"),
        MembersQuery
    ),
    responses(
        (status = 200, description = "Member list", body = MemberListResponse),
        (status = 404, description = "Unknown organization")
    ),
    tag = "04. Organization Members",
    security(("bearer" = []))
)]
pub async fn list_members(
    State(state): State<Arc<AppState>>,
    Path(org_id): Path<i64>,
    Query(query): Query<MembersQuery>,
) -> Result<Json<ApiResponse<MemberListResponse>>> {
    authz::require_organization(&state.db, org_id).await?;

    let members = state
        .db
        .list_members(org_id, query.role.as_deref())
        .await?;

    Ok(Json(ApiResponse::success(MemberListResponse {
        organization_id: org_id,
        members: members.into_iter().map(MemberInfo::from).collect(),
    })))
}

#[derive(Deserialize, ToSchema, Default)]
pub struct MemberDeleteRequest {
    pub reason: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct MemberDeleteResponse {
    pub organization_id: i64,
    pub member_id: i64,
    pub reason: Option<String>,
    pub deleted_at: DateTime<Utc>,
}

/// Remove a member. Allowed for the member themself or the org owner.
#[utoipa::path(
    delete,
    path = "/organizations/{org_id}/members/{member_id}",
    params(
        ("org_id" = i64, Path, description = "Organization id"),
        ("member_id" = i64, Path, description = "User id of the member")
    ),
    request_body = MemberDeleteRequest,
    responses(
        (status = 200, description = "Member removed", body = MemberDeleteResponse),
        (status = 403, description = "Not allowed to remove this member"),
        (status = 404, description = "Unknown member")
    ),
    tag = "04. Organization Members",
    security(("bearer" = []))
)]
pub async fn delete_member(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path((org_id, member_id)): Path<(i64, i64)>,
    request: Option<Json<MemberDeleteRequest>>,
) -> Result<Json<ApiResponse<MemberDeleteResponse>>> {
    let member = state
        .db
        .get_member(org_id, member_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Member not found".to_string()))?;

    let is_self = member.user_id == user.id;
    let is_owner = state.db.is_owner(org_id, user.id).await?;
    if !is_self && !is_owner {
        return Err(AppError::Forbidden(
            "Not allowed to remove this member".to_string(),
        ));
    }

    state.db.delete_member(org_id, member_id).await?;

    let reason = request.and_then(|Json(r)| r.reason);

    tracing::info!(
        org_id,
        member_id,
        actor_id = user.id,
        "Member removed from organization"
    );

    Ok(Json(ApiResponse::success(MemberDeleteResponse {
        organization_id: org_id,
        member_id,
        reason,
        deleted_at: Utc::now(),
    })))
}
