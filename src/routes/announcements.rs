// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Organization announcement routes.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, patch},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::api::{ApiResponse, PageQuery, PageResponse};
use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::Announcement;
use crate::services::authz;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/organizations/{org_id}/announcements",
            get(list_announcements).post(create_announcement),
        )
        .route(
            "/organizations/{org_id}/announcements/starred",
            get(list_starred),
        )
        .route(
            "/organizations/{org_id}/announcements/search",
            get(search_announcements),
        )
        .route(
            "/organizations/{org_id}/announcements/{announcement_id}",
            get(get_announcement)
                .patch(update_announcement)
                .delete(delete_announcement),
        )
        .route(
            "/organizations/{org_id}/announcements/{announcement_id}/star",
            patch(toggle_star),
        )
}

#[derive(Serialize, ToSchema)]
pub struct AnnouncementResponse {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub star: bool,
    pub user_id: i64,
    pub organization_id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Announcement> for AnnouncementResponse {
    fn from(a: Announcement) -> Self {
        Self {
            id: a.id,
            title: a.title,
            description: a.description,
            star: a.star,
            user_id: a.user_id,
            organization_id: a.organization_id,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}

fn to_page(
    items: Vec<Announcement>,
    total: i64,
    page: &PageQuery,
) -> PageResponse<AnnouncementResponse> {
    PageResponse::new(
        items.into_iter().map(AnnouncementResponse::from).collect(),
        page.page,
        page.limit(),
        total,
    )
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct AnnouncementCreateRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub description: Option<String>,
}

/// Post a new announcement.
#[utoipa::path(
    post,
    path = "/organizations/{org_id}/announcements",
    params(("org_id" = i64, Path, description = "Organization id")),
    request_body = AnnouncementCreateRequest,
    responses(
        (status = 201, description = "Announcement created", body = AnnouncementResponse),
        (status = 404, description = "Unknown organization")
    ),
    tag = "06. Announcements",
    security(("bearer" = []))
)]
pub async fn create_announcement(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(org_id): Path<i64>,
    Json(request): Json<AnnouncementCreateRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AnnouncementResponse>>)> {
    request
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    authz::require_organization(&state.db, org_id).await?;

    let announcement = state
        .db
        .create_announcement(org_id, user.id, &request.title, request.description.as_deref())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(announcement.into())),
    ))
}

/// Paged announcements, newest first.
#[utoipa::path(
    get,
    path = "/organizations/{org_id}/announcements",
    params(("org_id" = i64, Path, description = "Organization id"), PageQuery),
    responses(
        (status = 200, description = "Announcement page", body = PageResponse<AnnouncementResponse>)
    ),
    tag = "06. Announcements",
    security(("bearer" = []))
)]
pub async fn list_announcements(
    State(state): State<Arc<AppState>>,
    Path(org_id): Path<i64>,
    Query(page): Query<PageQuery>,
) -> Result<Json<ApiResponse<PageResponse<AnnouncementResponse>>>> {
    let (items, total) = state
        .db
        .page_announcements(org_id, page.limit(), page.offset())
        .await?;
    Ok(Json(ApiResponse::success(to_page(items, total, &page))))
}

/// Paged starred announcements.
#[utoipa::path(
    get,
    path = "/organizations/{org_id}/announcements/starred",
    params(("org_id" = i64, Path, description = "Organization id"), PageQuery),
    responses(
        (status = 200, description = "Starred announcement page", body = PageResponse<AnnouncementResponse>)
    ),
    tag = "06. Announcements",
    security(("bearer" = []))
)]
pub async fn list_starred(
    State(state): State<Arc<AppState>>,
    Path(org_id): Path<i64>,
    Query(page): Query<PageQuery>,
) -> Result<Json<ApiResponse<PageResponse<AnnouncementResponse>>>> {
    let (items, total) = state
        .db
        .page_starred_announcements(org_id, page.limit(), page.offset())
        .await?;
    Ok(Json(ApiResponse::success(to_page(items, total, &page))))
}

#[derive(Deserialize, IntoParams)]
pub struct SearchQuery {
    pub keyword: String,
    #[serde(default)]
    pub page: u32,
    #[serde(default = "default_search_size")]
    pub size: u32,
}

fn default_search_size() -> u32 {
    10
}

/// Search announcements by title substring.
#[utoipa::path(
    get,
    path = "/organizations/{org_id}/announcements/search",
    params(("org_id" = i64, Path, description = "Organization id"), SearchQuery),
    responses(
        (status = 200, description = "Matching announcements", body = PageResponse<AnnouncementResponse>)
    ),
    tag = "06. Announcements",
    security(("bearer" = []))
)]
pub async fn search_announcements(
    State(state): State<Arc<AppState>>,
    Path(org_id): Path<i64>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ApiResponse<PageResponse<AnnouncementResponse>>>> {
    let page = PageQuery {
        page: query.page,
        size: query.size,
    };
    let (items, total) = state
        .db
        .search_announcements(org_id, &query.keyword, page.limit(), page.offset())
        .await?;
    Ok(Json(ApiResponse::success(to_page(items, total, &page))))
}

/// Get one announcement.
#[utoipa::path(
    get,
    path = "/organizations/{org_id}/announcements/{announcement_id}",
    params(
        ("org_id" = i64, Path, description = "Organization id"),
        ("announcement_id" = i64, Path, description = "Announcement id")
    ),
    responses(
        (status = 200, description = "Announcement", body = AnnouncementResponse),
        (status = 404, description = "Unknown announcement")
    ),
    tag = "06. Announcements",
    security(("bearer" = []))
)]
pub async fn get_announcement(
    State(state): State<Arc<AppState>>,
    Path((org_id, announcement_id)): Path<(i64, i64)>,
) -> Result<Json<ApiResponse<AnnouncementResponse>>> {
    let announcement = load_announcement(&state, org_id, announcement_id).await?;
    Ok(Json(ApiResponse::success(announcement.into())))
}

#[derive(Deserialize, ToSchema)]
pub struct AnnouncementUpdateRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Update title/description of an announcement.
#[utoipa::path(
    patch,
    path = "/organizations/{org_id}/announcements/{announcement_id}",
    params(
        ("org_id" = i64, Path, description = "Organization id"),
        ("announcement_id" = i64, Path, description = "Announcement id")
    ),
    request_body = AnnouncementUpdateRequest,
    responses(
        (status = 200, description = "Updated announcement", body = AnnouncementResponse),
        (status = 404, description = "Unknown announcement")
    ),
    tag = "06. Announcements",
    security(("bearer" = []))
)]
pub async fn update_announcement(
    State(state): State<Arc<AppState>>,
    Path((org_id, announcement_id)): Path<(i64, i64)>,
    Json(request): Json<AnnouncementUpdateRequest>,
) -> Result<Json<ApiResponse<AnnouncementResponse>>> {
    let mut announcement = load_announcement(&state, org_id, announcement_id).await?;

    if let Some(title) = request.title {
        announcement.title = title;
    }
    if let Some(description) = request.description {
        announcement.description = Some(description);
    }

    state.db.update_announcement(&announcement).await?;

    let announcement = load_announcement(&state, org_id, announcement_id).await?;
    Ok(Json(ApiResponse::success(announcement.into())))
}

/// Toggle the star (pinned) flag of an announcement.
#[utoipa::path(
    patch,
    path = "/organizations/{org_id}/announcements/{announcement_id}/star",
    params(
        ("org_id" = i64, Path, description = "Organization id"),
        ("announcement_id" = i64, Path, description = "Announcement id")
    ),
    responses(
        (status = 200, description = "Updated announcement", body = AnnouncementResponse),
        (status = 404, description = "Unknown announcement")
    ),
    tag = "06. Announcements",
    security(("bearer" = []))
)]
pub async fn toggle_star(
    State(state): State<Arc<AppState>>,
    Path((org_id, announcement_id)): Path<(i64, i64)>,
) -> Result<Json<ApiResponse<AnnouncementResponse>>> {
    let mut announcement = load_announcement(&state, org_id, announcement_id).await?;
    announcement.star = !announcement.star;

    state.db.update_announcement(&announcement).await?;

    let announcement = load_announcement(&state, org_id, announcement_id).await?;
    Ok(Json(ApiResponse::success(announcement.into())))
}

/// Delete an announcement.
#[utoipa::path(
    delete,
    path = "/organizations/{org_id}/announcements/{announcement_id}",
    params(
        ("org_id" = i64, Path, description = "Organization id"),
        ("announcement_id" = i64, Path, description = "Announcement id")
    ),
    responses(
        (status = 204, description = "Announcement deleted"),
        (status = 404, description = "Unknown announcement")
    ),
    tag = "06. Announcements",
    security(("bearer" = []))
)]
pub async fn delete_announcement(
    State(state): State<Arc<AppState>>,
    Path((org_id, announcement_id)): Path<(i64, i64)>,
) -> Result<StatusCode> {
    load_announcement(&state, org_id, announcement_id).await?;
    state.db.delete_announcement(org_id, announcement_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn load_announcement(
    state: &AppState,
    org_id: i64,
    announcement_id: i64,
) -> Result<Announcement> {
    state
        .db
        .get_announcement(org_id, announcement_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("Announcement {} not found", announcement_id))
        })
}
