// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Join request routes: applying to an organization and deciding requests.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

use crate::api::ApiResponse;
use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::join_request::JoinRequestWithUser;
use crate::models::member::DEFAULT_MEMBER_ROLE;
use crate::models::JoinRequestStatus;
use crate::services::authz;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/join-requests", post(create_by_code))
        .route(
            "/organizations/{org_id}/join-requests",
            get(list_requests).post(create_by_org),
        )
        .route(
            "/organizations/{org_id}/join-requests/{req_id}",
            get(get_request),
        )
        .route(
            "/organizations/{org_id}/join-requests/{req_id}/approve",
            post(approve_request),
        )
        .route(
            "/organizations/{org_id}/join-requests/{req_id}/reject",
            post(reject_request),
        )
}

#[derive(Deserialize, ToSchema, Default)]
pub struct JoinRequestCreateRequest {
    pub message: Option<String>,
}

#[derive(Deserialize, IntoParams)]
pub struct JoinByCodeQuery {
    /// Organization invite code
    pub org_code: String,
}

#[derive(Serialize, ToSchema)]
pub struct JoinRequestResponse {
    pub id: i64,
    pub organization_id: i64,
    pub user_id: i64,
    pub username: String,
    pub status: JoinRequestStatus,
    pub message: Option<String>,
    pub decision_reason: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub decided_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl From<JoinRequestWithUser> for JoinRequestResponse {
    fn from(r: JoinRequestWithUser) -> Self {
        Self {
            id: r.id,
            organization_id: r.organization_id,
            user_id: r.user_id,
            username: r.username,
            status: r.status,
            message: r.message,
            decision_reason: r.decision_reason,
            created_at: r.created_at,
            decided_at: r.decided_at,
        }
    }
}

/// Apply to join an organization by invite code.
#[utoipa::path(
    post,
    path = "/join-requests",
    params(JoinByCodeQuery),
    request_body = JoinRequestCreateRequest,
    responses(
        (status = 201, description = "Join request created", body = JoinRequestResponse),
        (status = 404, description = "Unknown invite code"),
        (status = 409, description = "Already a member or request pending")
    ),
    tag = "05. Join Requests",
    security(("bearer" = []))
)]
pub async fn create_by_code(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<JoinByCodeQuery>,
    request: Option<Json<JoinRequestCreateRequest>>,
) -> Result<(StatusCode, Json<ApiResponse<JoinRequestResponse>>)> {
    let code = query.org_code.trim();
    if code.is_empty() {
        return Err(AppError::BadRequest(
            "Organization code must not be empty".to_string(),
        ));
    }

    let org = state
        .db
        .get_organization_by_code(code)
        .await?
        .ok_or_else(|| AppError::NotFound("Organization not found".to_string()))?;

    let message = request.and_then(|Json(r)| r.message);
    let created = create_request(&state, org.id, user.id, message.as_deref()).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(created.into())),
    ))
}

/// Apply to join an organization by id.
#[utoipa::path(
    post,
    path = "/organizations/{org_id}/join-requests",
    params(("org_id" = i64, Path, description = "Organization id")),
    request_body = JoinRequestCreateRequest,
    responses(
        (status = 201, description = "Join request created", body = JoinRequestResponse),
        (status = 404, description = "Unknown organization"),
        (status = 409, description = "Already a member or request pending")
    ),
    tag = "05. Join Requests",
    security(("bearer" = []))
)]
pub async fn create_by_org(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(org_id): Path<i64>,
    request: Option<Json<JoinRequestCreateRequest>>,
) -> Result<(StatusCode, Json<ApiResponse<JoinRequestResponse>>)> {
    let org = authz::require_organization(&state.db, org_id).await?;

    let message = request.and_then(|Json(r)| r.message);
    let created = create_request(&state, org.id, user.id, message.as_deref()).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(created.into())),
    ))
}

/// Shared creation path: the caller must not already be a member and must
/// not have another request still pending.
async fn create_request(
    state: &AppState,
    org_id: i64,
    user_id: i64,
    message: Option<&str>,
) -> Result<JoinRequestWithUser> {
    if state.db.is_member(org_id, user_id).await? {
        return Err(AppError::Conflict(
            "Already a member of this organization".to_string(),
        ));
    }
    if state.db.has_pending_request(org_id, user_id).await? {
        return Err(AppError::Conflict(
            "A pending join request already exists".to_string(),
        ));
    }

    let created = state.db.create_join_request(org_id, user_id, message).await?;

    tracing::info!(org_id, user_id, request_id = created.id, "Join request created");

    Ok(created)
}

#[derive(Serialize, ToSchema)]
pub struct JoinRequestListResponse {
    pub organization_id: i64,
    pub requests: Vec<JoinRequestResponse>,
}

/// List join requests for an organization (owner only).
#[utoipa::path(
    get,
    path = "/organizations/{org_id}/join-requests",
    params(("org_id" = i64, Path, description = "Organization id")),
    responses(
        (status = 200, description = "Join request list", body = JoinRequestListResponse),
        (status = 403, description = "Caller is not the owner"),
        (status = 404, description = "Unknown organization")
    ),
    tag = "05. Join Requests",
    security(("bearer" = []))
)]
pub async fn list_requests(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(org_id): Path<i64>,
) -> Result<Json<ApiResponse<JoinRequestListResponse>>> {
    let org = authz::require_owner(&state.db, org_id, user.id).await?;

    let requests = state.db.list_join_requests(org.id).await?;

    Ok(Json(ApiResponse::success(JoinRequestListResponse {
        organization_id: org.id,
        requests: requests.into_iter().map(JoinRequestResponse::from).collect(),
    })))
}

/// Get one join request (owner only).
#[utoipa::path(
    get,
    path = "/organizations/{org_id}/join-requests/{req_id}",
    params(
        ("org_id" = i64, Path, description = "Organization id"),
        ("req_id" = i64, Path, description = "Join request id")
    ),
    responses(
        (status = 200, description = "Join request", body = JoinRequestResponse),
        (status = 403, description = "Caller is not the owner"),
        (status = 404, description = "Unknown request")
    ),
    tag = "05. Join Requests",
    security(("bearer" = []))
)]
pub async fn get_request(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path((org_id, req_id)): Path<(i64, i64)>,
) -> Result<Json<ApiResponse<JoinRequestResponse>>> {
    authz::require_owner(&state.db, org_id, user.id).await?;

    let request = load_request(&state, org_id, req_id).await?;
    Ok(Json(ApiResponse::success(request.into())))
}

#[derive(Deserialize, ToSchema, Default)]
pub struct JoinRequestDecisionRequest {
    pub reason: Option<String>,
}

/// Approve a pending join request (owner only); the requester becomes a member.
#[utoipa::path(
    post,
    path = "/organizations/{org_id}/join-requests/{req_id}/approve",
    params(
        ("org_id" = i64, Path, description = "Organization id"),
        ("req_id" = i64, Path, description = "Join request id")
    ),
    request_body = JoinRequestDecisionRequest,
    responses(
        (status = 200, description = "Request approved", body = JoinRequestResponse),
        (status = 403, description = "Caller is not the owner"),
        (status = 404, description = "Unknown request"),
        (status = 409, description = "Request already decided")
    ),
    tag = "05. Join Requests",
    security(("bearer" = []))
)]
pub async fn approve_request(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path((org_id, req_id)): Path<(i64, i64)>,
    request: Option<Json<JoinRequestDecisionRequest>>,
) -> Result<Json<ApiResponse<JoinRequestResponse>>> {
    authz::require_owner(&state.db, org_id, user.id).await?;

    let pending = load_pending_request(&state, org_id, req_id).await?;
    let reason = request.and_then(|Json(r)| r.reason);

    state
        .db
        .decide_join_request(pending.id, JoinRequestStatus::Approved, reason.as_deref())
        .await?;

    // Idempotent: the requester may already be a member via another path.
    if state.db.get_member(org_id, pending.user_id).await?.is_none() {
        state
            .db
            .insert_member(org_id, pending.user_id, DEFAULT_MEMBER_ROLE)
            .await?;
    }

    tracing::info!(org_id, request_id = req_id, "Join request approved");

    let updated = load_request(&state, org_id, req_id).await?;
    Ok(Json(ApiResponse::success(updated.into())))
}

/// Reject a pending join request (owner only).
#[utoipa::path(
    post,
    path = "/organizations/{org_id}/join-requests/{req_id}/reject",
    params(
        ("org_id" = i64, Path, description = "Organization id"),
        ("req_id" = i64, Path, description = "Join request id")
    ),
    request_body = JoinRequestDecisionRequest,
    responses(
        (status = 200, description = "Request rejected", body = JoinRequestResponse),
        (status = 403, description = "Caller is not the owner"),
        (status = 404, description = "Unknown request"),
        (status = 409, description = "Request already decided")
    ),
    tag = "05. Join Requests",
    security(("bearer" = []))
)]
pub async fn reject_request(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path((org_id, req_id)): Path<(i64, i64)>,
    request: Option<Json<JoinRequestDecisionRequest>>,
) -> Result<Json<ApiResponse<JoinRequestResponse>>> {
    authz::require_owner(&state.db, org_id, user.id).await?;

    let pending = load_pending_request(&state, org_id, req_id).await?;
    let reason = request.and_then(|Json(r)| r.reason);

    state
        .db
        .decide_join_request(pending.id, JoinRequestStatus::Rejected, reason.as_deref())
        .await?;

    tracing::info!(org_id, request_id = req_id, "Join request rejected");

    let updated = load_request(&state, org_id, req_id).await?;
    Ok(Json(ApiResponse::success(updated.into())))
}

async fn load_request(
    state: &AppState,
    org_id: i64,
    req_id: i64,
) -> Result<JoinRequestWithUser> {
    state
        .db
        .get_join_request(org_id, req_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Join request not found".to_string()))
}

async fn load_pending_request(
    state: &AppState,
    org_id: i64,
    req_id: i64,
) -> Result<JoinRequestWithUser> {
    let request = load_request(state, org_id, req_id).await?;
    if request.status != JoinRequestStatus::Pending {
        return Err(AppError::Conflict("Request already decided".to_string()));
    }
    Ok(request)
}
