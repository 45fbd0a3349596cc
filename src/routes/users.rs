// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Routes for the authenticated user's own account.

use axum::{
    extract::State,
    routing::get,
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::ApiResponse;
use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{Organization, User};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users/me", get(get_me).put(update_me).delete(delete_me))
        .route("/users/me/organizations", get(my_organizations))
}

#[derive(Serialize, ToSchema)]
pub struct UserInfoResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub image: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<User> for UserInfoResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            phone: user.phone,
            image: user.image,
            created_at: user.created_at,
        }
    }
}

/// Get the authenticated user's profile.
#[utoipa::path(
    get,
    path = "/users/me",
    responses(
        (status = 200, description = "Current user", body = UserInfoResponse),
        (status = 401, description = "Not authenticated")
    ),
    tag = "02. Users",
    security(("bearer" = []))
)]
pub async fn get_me(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<ApiResponse<UserInfoResponse>>> {
    let profile = load_user(&state, user.id).await?;
    Ok(Json(ApiResponse::success(profile.into())))
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct UserModifyRequest {
    #[validate(length(min = 1, message = "username must not be empty"))]
    pub username: Option<String>,
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub image: Option<String>,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct UserModifyResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub image: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Update profile fields; only the fields present in the body change.
#[utoipa::path(
    put,
    path = "/users/me",
    request_body = UserModifyRequest,
    responses(
        (status = 200, description = "Profile updated", body = UserModifyResponse),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Username already taken")
    ),
    tag = "02. Users",
    security(("bearer" = []))
)]
pub async fn update_me(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<UserModifyRequest>,
) -> Result<Json<ApiResponse<UserModifyResponse>>> {
    request
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let mut profile = load_user(&state, user.id).await?;

    if let Some(username) = request.username {
        if state.db.username_taken_by_other(&username, user.id).await? {
            return Err(AppError::Conflict("Username is already taken".to_string()));
        }
        profile.username = username;
    }
    if let Some(email) = request.email {
        profile.email = email;
    }
    if let Some(phone) = request.phone {
        profile.phone = phone;
    }
    if let Some(image) = request.image {
        profile.image = Some(image);
    }
    if let Some(password) = request.password {
        profile.password_hash = state.auth_service.hash_password(&password)?;
    }

    state.db.update_user(&profile).await?;

    // Re-read so updated_at reflects the write.
    let profile = load_user(&state, user.id).await?;

    Ok(Json(ApiResponse::success(UserModifyResponse {
        id: profile.id,
        username: profile.username,
        email: profile.email,
        phone: profile.phone,
        image: profile.image,
        created_at: profile.created_at,
        updated_at: profile.updated_at,
    })))
}

#[derive(Deserialize, ToSchema)]
pub struct UserDeleteRequest {
    pub password: String,
}

/// Delete the authenticated user's account after re-checking the password.
#[utoipa::path(
    delete,
    path = "/users/me",
    request_body = UserDeleteRequest,
    responses(
        (status = 200, description = "Account deleted"),
        (status = 401, description = "Wrong password")
    ),
    tag = "02. Users",
    security(("bearer" = []))
)]
pub async fn delete_me(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<UserDeleteRequest>,
) -> Result<Json<ApiResponse<()>>> {
    let profile = load_user(&state, user.id).await?;

    if !state
        .auth_service
        .verify_password(&request.password, &profile.password_hash)?
    {
        return Err(AppError::Unauthorized("Wrong password".to_string()));
    }

    tracing::info!(user_id = user.id, "User-initiated account deletion");

    state.db.delete_user(user.id).await?;

    Ok(Json(ApiResponse::message("Account deleted successfully")))
}

#[derive(Serialize, ToSchema)]
pub struct UserOrgResponse {
    pub id: i64,
    pub name: String,
    pub image_url: String,
    pub description: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Organization> for UserOrgResponse {
    fn from(org: Organization) -> Self {
        Self {
            id: org.id,
            name: org.name,
            image_url: org.image,
            description: org.description,
            created_at: org.created_at,
        }
    }
}

/// Organizations the authenticated user owns or belongs to.
#[utoipa::path(
    get,
    path = "/users/me/organizations",
    responses(
        (status = 200, description = "Organization list", body = [UserOrgResponse]),
        (status = 401, description = "Not authenticated")
    ),
    tag = "02. Users",
    security(("bearer" = []))
)]
pub async fn my_organizations(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<ApiResponse<Vec<UserOrgResponse>>>> {
    let orgs = state.db.list_user_organizations(user.id).await?;
    let orgs = orgs.into_iter().map(UserOrgResponse::from).collect();
    Ok(Json(ApiResponse::success(orgs)))
}

async fn load_user(state: &AppState, user_id: i64) -> Result<User> {
    state
        .db
        .get_user(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))
}
