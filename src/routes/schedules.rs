// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Organization schedule routes.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::{ApiResponse, PageQuery, PageResponse};
use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{Schedule, ScheduleWithAuthor};
use crate::services::authz;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/organizations/{org_id}/schedules",
            get(list_schedules).post(create_schedule),
        )
        .route(
            "/organizations/{org_id}/schedules/{schedule_id}",
            get(get_schedule).patch(modify_schedule).delete(delete_schedule),
        )
}

#[derive(Serialize, ToSchema)]
pub struct ScheduleAuthor {
    pub id: i64,
    pub username: String,
}

#[derive(Serialize, ToSchema)]
pub struct ScheduleResponse {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub author: ScheduleAuthor,
}

impl From<ScheduleWithAuthor> for ScheduleResponse {
    fn from(s: ScheduleWithAuthor) -> Self {
        Self {
            id: s.id,
            title: s.title,
            description: s.description,
            start_time: s.start_time,
            end_time: s.end_time,
            author: ScheduleAuthor {
                id: s.user_id,
                username: s.username,
            },
        }
    }
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct ScheduleCreateRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// Create a schedule entry. The end time must be after the start time.
#[utoipa::path(
    post,
    path = "/organizations/{org_id}/schedules",
    params(("org_id" = i64, Path, description = "Organization id")),
    request_body = ScheduleCreateRequest,
    responses(
        (status = 201, description = "Schedule created", body = ScheduleResponse),
        (status = 400, description = "end_time must be after start_time"),
        (status = 404, description = "Unknown organization")
    ),
    tag = "09. Schedules",
    security(("bearer" = []))
)]
pub async fn create_schedule(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(org_id): Path<i64>,
    Json(request): Json<ScheduleCreateRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ScheduleResponse>>)> {
    request
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    validate_times(request.start_time, request.end_time)?;

    authz::require_organization(&state.db, org_id).await?;

    let schedule = state
        .db
        .create_schedule(
            org_id,
            user.id,
            &request.title,
            request.description.as_deref(),
            request.start_time,
            request.end_time,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(schedule.into())),
    ))
}

/// Paged schedules, latest start first.
#[utoipa::path(
    get,
    path = "/organizations/{org_id}/schedules",
    params(("org_id" = i64, Path, description = "Organization id"), PageQuery),
    responses(
        (status = 200, description = "Schedule page", body = PageResponse<ScheduleResponse>)
    ),
    tag = "09. Schedules",
    security(("bearer" = []))
)]
pub async fn list_schedules(
    State(state): State<Arc<AppState>>,
    Path(org_id): Path<i64>,
    Query(page): Query<PageQuery>,
) -> Result<Json<ApiResponse<PageResponse<ScheduleResponse>>>> {
    let (items, total) = state
        .db
        .page_schedules(org_id, page.limit(), page.offset())
        .await?;

    Ok(Json(ApiResponse::success(PageResponse::new(
        items.into_iter().map(ScheduleResponse::from).collect(),
        page.page,
        page.limit(),
        total,
    ))))
}

/// Get one schedule entry.
#[utoipa::path(
    get,
    path = "/organizations/{org_id}/schedules/{schedule_id}",
    params(
        ("org_id" = i64, Path, description = "Organization id"),
        ("schedule_id" = i64, Path, description = "Schedule id")
    ),
    responses(
        (status = 200, description = "Schedule", body = ScheduleResponse),
        (status = 404, description = "Unknown schedule")
    ),
    tag = "09. Schedules",
    security(("bearer" = []))
)]
pub async fn get_schedule(
    State(state): State<Arc<AppState>>,
    Path((org_id, schedule_id)): Path<(i64, i64)>,
) -> Result<Json<ApiResponse<ScheduleResponse>>> {
    let schedule = load_schedule(&state, org_id, schedule_id).await?;
    Ok(Json(ApiResponse::success(schedule.into())))
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct ScheduleModifyRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// Replace a schedule entry's fields.
#[utoipa::path(
    patch,
    path = "/organizations/{org_id}/schedules/{schedule_id}",
    params(
        ("org_id" = i64, Path, description = "Organization id"),
        ("schedule_id" = i64, Path, description = "Schedule id")
    ),
    request_body = ScheduleModifyRequest,
    responses(
        (status = 200, description = "Updated schedule", body = ScheduleResponse),
        (status = 400, description = "end_time must be after start_time"),
        (status = 404, description = "Unknown schedule")
    ),
    tag = "09. Schedules",
    security(("bearer" = []))
)]
pub async fn modify_schedule(
    State(state): State<Arc<AppState>>,
    Path((org_id, schedule_id)): Path<(i64, i64)>,
    Json(request): Json<ScheduleModifyRequest>,
) -> Result<Json<ApiResponse<ScheduleResponse>>> {
    request
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    validate_times(request.start_time, request.end_time)?;

    let existing = load_schedule(&state, org_id, schedule_id).await?;

    let updated = Schedule {
        id: existing.id,
        organization_id: existing.organization_id,
        user_id: existing.user_id,
        title: request.title,
        description: request.description,
        start_time: request.start_time,
        end_time: request.end_time,
    };
    state.db.update_schedule(&updated).await?;

    let schedule = load_schedule(&state, org_id, schedule_id).await?;
    Ok(Json(ApiResponse::success(schedule.into())))
}

/// Delete a schedule entry.
#[utoipa::path(
    delete,
    path = "/organizations/{org_id}/schedules/{schedule_id}",
    params(
        ("org_id" = i64, Path, description = "Organization id"),
        ("schedule_id" = i64, Path, description = "Schedule id")
    ),
    responses(
        (status = 204, description = "Schedule deleted"),
        (status = 404, description = "Unknown schedule")
    ),
    tag = "09. Schedules",
    security(("bearer" = []))
)]
pub async fn delete_schedule(
    State(state): State<Arc<AppState>>,
    Path((org_id, schedule_id)): Path<(i64, i64)>,
) -> Result<StatusCode> {
    load_schedule(&state, org_id, schedule_id).await?;
    state.db.delete_schedule(org_id, schedule_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn validate_times(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<()> {
    if end <= start {
        return Err(AppError::BadRequest(
            "end_time must be after start_time".to_string(),
        ));
    }
    Ok(())
}

async fn load_schedule(
    state: &AppState,
    org_id: i64,
    schedule_id: i64,
) -> Result<ScheduleWithAuthor> {
    state
        .db
        .get_schedule(org_id, schedule_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Schedule {} not found", schedule_id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_times_rejects_backwards_range() {
        let start = Utc::now();
        let end = start - chrono::Duration::hours(1);
        assert!(validate_times(start, end).is_err());
    }

    #[test]
    fn test_validate_times_rejects_zero_length() {
        let start = Utc::now();
        assert!(validate_times(start, start).is_err());
    }

    #[test]
    fn test_validate_times_accepts_forward_range() {
        let start = Utc::now();
        let end = start + chrono::Duration::hours(2);
        assert!(validate_times(start, end).is_ok());
    }
}
