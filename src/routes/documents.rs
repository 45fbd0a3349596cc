// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Organization document routes.
//!
//! Reads require membership; updates and deletes additionally require the
//! caller to be the organization owner or the document's author.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::{ApiResponse, PageQuery, PageResponse};
use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::document::DocumentDetail;
use crate::services::authz;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/organizations/{org_id}/docs",
            get(list_documents).post(create_document),
        )
        .route(
            "/organizations/{org_id}/docs/{doc_id}",
            get(get_document).put(update_document).delete(delete_document),
        )
}

#[derive(Serialize, ToSchema)]
pub struct DocumentResponse {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub file_type: String,
    pub size: i32,
    pub author: String,
    pub organization_id: i64,
    pub organization_name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<DocumentDetail> for DocumentResponse {
    fn from(d: DocumentDetail) -> Self {
        Self {
            id: d.id,
            title: d.title,
            description: d.description,
            name: d.name,
            file_type: d.r#type,
            size: d.size,
            author: d.username,
            organization_id: d.organization_id,
            organization_name: d.organization_name,
            created_at: d.created_at,
            updated_at: d.updated_at,
        }
    }
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct DocumentCreateRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub description: Option<String>,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "type must not be empty"))]
    pub file_type: String,
    #[validate(range(min = 0, message = "size must not be negative"))]
    pub size: i32,
}

/// Register a document's metadata (members only).
#[utoipa::path(
    post,
    path = "/organizations/{org_id}/docs",
    params(("org_id" = i64, Path, description = "Organization id")),
    request_body = DocumentCreateRequest,
    responses(
        (status = 201, description = "Document created", body = DocumentResponse),
        (status = 403, description = "Not a member of this organization"),
        (status = 404, description = "Unknown organization")
    ),
    tag = "07. Documents",
    security(("bearer" = []))
)]
pub async fn create_document(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(org_id): Path<i64>,
    Json(request): Json<DocumentCreateRequest>,
) -> Result<(StatusCode, Json<ApiResponse<DocumentResponse>>)> {
    request
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    authz::require_organization(&state.db, org_id).await?;
    authz::require_member_or_owner(&state.db, org_id, user.id).await?;

    let document = state
        .db
        .create_document(
            org_id,
            user.id,
            &request.title,
            request.description.as_deref(),
            &request.name,
            &request.file_type,
            request.size,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(document.into())),
    ))
}

/// Paged document list (members only).
#[utoipa::path(
    get,
    path = "/organizations/{org_id}/docs",
    params(("org_id" = i64, Path, description = "Organization id"), PageQuery),
    responses(
        (status = 200, description = "Document page", body = PageResponse<DocumentResponse>),
        (status = 403, description = "Not a member of this organization")
    ),
    tag = "07. Documents",
    security(("bearer" = []))
)]
pub async fn list_documents(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(org_id): Path<i64>,
    Query(page): Query<PageQuery>,
) -> Result<Json<ApiResponse<PageResponse<DocumentResponse>>>> {
    authz::require_member_or_owner(&state.db, org_id, user.id).await?;

    let (items, total) = state
        .db
        .page_documents(org_id, page.limit(), page.offset())
        .await?;

    Ok(Json(ApiResponse::success(PageResponse::new(
        items.into_iter().map(DocumentResponse::from).collect(),
        page.page,
        page.limit(),
        total,
    ))))
}

/// Get one document (members only).
#[utoipa::path(
    get,
    path = "/organizations/{org_id}/docs/{doc_id}",
    params(
        ("org_id" = i64, Path, description = "Organization id"),
        ("doc_id" = i64, Path, description = "Document id")
    ),
    responses(
        (status = 200, description = "Document detail", body = DocumentResponse),
        (status = 403, description = "Not a member of this organization"),
        (status = 404, description = "Unknown document")
    ),
    tag = "07. Documents",
    security(("bearer" = []))
)]
pub async fn get_document(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path((org_id, doc_id)): Path<(i64, i64)>,
) -> Result<Json<ApiResponse<DocumentResponse>>> {
    authz::require_member_or_owner(&state.db, org_id, user.id).await?;

    let document = load_document(&state, org_id, doc_id).await?;
    Ok(Json(ApiResponse::success(document.into())))
}

#[derive(Deserialize, ToSchema)]
pub struct DocumentUpdateRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub file_type: Option<String>,
    pub size: Option<i32>,
}

/// Update a document (owner or author only).
#[utoipa::path(
    put,
    path = "/organizations/{org_id}/docs/{doc_id}",
    params(
        ("org_id" = i64, Path, description = "Organization id"),
        ("doc_id" = i64, Path, description = "Document id")
    ),
    request_body = DocumentUpdateRequest,
    responses(
        (status = 200, description = "Updated document", body = DocumentResponse),
        (status = 403, description = "Not allowed to modify this document"),
        (status = 404, description = "Unknown document")
    ),
    tag = "07. Documents",
    security(("bearer" = []))
)]
pub async fn update_document(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path((org_id, doc_id)): Path<(i64, i64)>,
    Json(request): Json<DocumentUpdateRequest>,
) -> Result<Json<ApiResponse<DocumentResponse>>> {
    authz::require_member_or_owner(&state.db, org_id, user.id).await?;

    let mut document = state
        .db
        .get_document(org_id, doc_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Document {} not found", doc_id)))?;

    if !authz::can_modify_document(&state.db, org_id, user.id, document.user_id).await? {
        return Err(AppError::Forbidden(
            "Only the owner or the author may modify this document".to_string(),
        ));
    }

    if let Some(title) = request.title {
        document.title = title;
    }
    if let Some(description) = request.description {
        document.description = Some(description);
    }
    if let Some(name) = request.name {
        document.name = name;
    }
    if let Some(file_type) = request.file_type {
        document.r#type = file_type;
    }
    if let Some(size) = request.size {
        document.size = size;
    }

    state.db.update_document(&document).await?;

    let document = load_document(&state, org_id, doc_id).await?;
    Ok(Json(ApiResponse::success(document.into())))
}

/// Delete a document (owner or author only).
#[utoipa::path(
    delete,
    path = "/organizations/{org_id}/docs/{doc_id}",
    params(
        ("org_id" = i64, Path, description = "Organization id"),
        ("doc_id" = i64, Path, description = "Document id")
    ),
    responses(
        (status = 204, description = "Document deleted"),
        (status = 403, description = "Not allowed to modify this document"),
        (status = 404, description = "Unknown document")
    ),
    tag = "07. Documents",
    security(("bearer" = []))
)]
pub async fn delete_document(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path((org_id, doc_id)): Path<(i64, i64)>,
) -> Result<StatusCode> {
    authz::require_member_or_owner(&state.db, org_id, user.id).await?;

    let document = state
        .db
        .get_document(org_id, doc_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Document {} not found", doc_id)))?;

    if !authz::can_modify_document(&state.db, org_id, user.id, document.user_id).await? {
        return Err(AppError::Forbidden(
            "Only the owner or the author may modify this document".to_string(),
        ));
    }

    state.db.delete_document(org_id, doc_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn load_document(state: &AppState, org_id: i64, doc_id: i64) -> Result<DocumentDetail> {
    state
        .db
        .get_document_detail(org_id, doc_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Document {} not found", doc_id)))
}
