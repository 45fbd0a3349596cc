// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Organization CRUD routes.

use axum::{
    extract::{Path, State},
    routing::get,
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::ApiResponse;
use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::Organization;
use crate::services::authz;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/organizations", get(list_organizations).post(create_organization))
        .route(
            "/organizations/{org_id}",
            get(get_organization)
                .put(update_organization)
                .delete(delete_organization),
        )
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct OrgCreateRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct OrgCreateResponse {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub owner_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Create an organization; the caller becomes its owner.
#[utoipa::path(
    post,
    path = "/organizations",
    request_body = OrgCreateRequest,
    responses(
        (status = 200, description = "Organization created", body = OrgCreateResponse),
        (status = 400, description = "Invalid input")
    ),
    tag = "03. Organizations",
    security(("bearer" = []))
)]
pub async fn create_organization(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<OrgCreateRequest>,
) -> Result<Json<ApiResponse<OrgCreateResponse>>> {
    request
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let org = state
        .db
        .create_organization(
            user.id,
            &request.name,
            request.description.as_deref().unwrap_or(""),
            request.category.as_deref().unwrap_or(""),
            request.image_url.as_deref().unwrap_or(""),
        )
        .await?;

    tracing::info!(org_id = org.id, owner_id = user.id, "Organization created");

    Ok(Json(ApiResponse::success(OrgCreateResponse {
        id: org.id,
        name: org.name,
        code: org.code,
        owner_id: org.owner_id,
        created_at: org.created_at,
    })))
}

#[derive(Serialize, ToSchema)]
pub struct OrgResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub category: String,
    pub image_url: String,
    pub code: String,
    pub owner_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Organization> for OrgResponse {
    fn from(org: Organization) -> Self {
        Self {
            id: org.id,
            name: org.name,
            description: org.description,
            category: org.category,
            image_url: org.image,
            code: org.code,
            owner_id: org.owner_id,
            created_at: org.created_at,
            updated_at: org.updated_at,
        }
    }
}

/// List all organizations.
#[utoipa::path(
    get,
    path = "/organizations",
    responses(
        (status = 200, description = "Organization list", body = [OrgResponse])
    ),
    tag = "03. Organizations",
    security(("bearer" = []))
)]
pub async fn list_organizations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<OrgResponse>>>> {
    let orgs = state.db.list_organizations().await?;
    let orgs = orgs.into_iter().map(OrgResponse::from).collect();
    Ok(Json(ApiResponse::success(orgs)))
}

/// Get one organization by id.
#[utoipa::path(
    get,
    path = "/organizations/{org_id}",
    params(("org_id" = i64, Path, description = "Organization id")),
    responses(
        (status = 200, description = "Organization detail", body = OrgResponse),
        (status = 404, description = "Unknown organization")
    ),
    tag = "03. Organizations",
    security(("bearer" = []))
)]
pub async fn get_organization(
    State(state): State<Arc<AppState>>,
    Path(org_id): Path<i64>,
) -> Result<Json<ApiResponse<OrgResponse>>> {
    let org = authz::require_organization(&state.db, org_id).await?;
    Ok(Json(ApiResponse::success(org.into())))
}

#[derive(Deserialize, ToSchema)]
pub struct OrgUpdateRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
}

/// Update an organization; only the owner may do this.
#[utoipa::path(
    put,
    path = "/organizations/{org_id}",
    params(("org_id" = i64, Path, description = "Organization id")),
    request_body = OrgUpdateRequest,
    responses(
        (status = 200, description = "Updated organization", body = OrgResponse),
        (status = 403, description = "Caller is not the owner"),
        (status = 404, description = "Unknown organization")
    ),
    tag = "03. Organizations",
    security(("bearer" = []))
)]
pub async fn update_organization(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(org_id): Path<i64>,
    Json(request): Json<OrgUpdateRequest>,
) -> Result<Json<ApiResponse<OrgResponse>>> {
    let mut org = authz::require_owner(&state.db, org_id, user.id).await?;

    if let Some(name) = request.name {
        org.name = name;
    }
    if let Some(description) = request.description {
        org.description = description;
    }
    if let Some(category) = request.category {
        org.category = category;
    }
    if let Some(image_url) = request.image_url {
        org.image = image_url;
    }

    state.db.update_organization(&org).await?;

    let org = authz::require_organization(&state.db, org_id).await?;
    Ok(Json(ApiResponse::success(org.into())))
}

#[derive(Serialize, ToSchema)]
pub struct OrgDeleteResponse {
    pub id: i64,
    pub code: String,
    pub deleted_at: DateTime<Utc>,
}

/// Delete an organization; only the owner may do this.
#[utoipa::path(
    delete,
    path = "/organizations/{org_id}",
    params(("org_id" = i64, Path, description = "Organization id")),
    responses(
        (status = 200, description = "Deleted organization", body = OrgDeleteResponse),
        (status = 403, description = "Caller is not the owner"),
        (status = 404, description = "Unknown organization")
    ),
    tag = "03. Organizations",
    security(("bearer" = []))
)]
pub async fn delete_organization(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(org_id): Path<i64>,
) -> Result<Json<ApiResponse<OrgDeleteResponse>>> {
    let org = authz::require_owner(&state.db, org_id, user.id).await?;

    state.db.delete_organization(org.id).await?;

    tracing::info!(org_id = org.id, owner_id = user.id, "Organization deleted");

    Ok(Json(ApiResponse::success(OrgDeleteResponse {
        id: org.id,
        code: org.code,
        deleted_at: Utc::now(),
    })))
}
