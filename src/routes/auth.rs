// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Authentication routes: registration, login, token refresh.

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::api::ApiResponse;
use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::User;
use crate::routes::users::UserInfoResponse;
use crate::services::TokenPair;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/check-id", get(check_id))
        .route("/auth/login", post(login))
        .route("/auth/refresh", post(refresh))
}

/// Routes that need an authenticated principal; mounted behind the JWT
/// middleware in routes/mod.rs.
pub fn protected_routes() -> Router<Arc<AppState>> {
    Router::new().route("/auth/me", get(me))
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "username must not be empty"))]
    pub username: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, message = "phone must not be empty"))]
    pub phone: String,
    pub image: Option<String>,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
    pub password_confirm: String,
}

#[derive(Serialize, ToSchema)]
pub struct RegisterResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub image: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<User> for RegisterResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            phone: user.phone,
            image: user.image,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Register a new user account.
#[utoipa::path(
    post,
    path = "/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Account created", body = RegisterResponse),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Username already taken")
    ),
    tag = "01. Auth"
)]
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<RegisterResponse>>> {
    request
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    if request.password != request.password_confirm {
        return Err(AppError::BadRequest(
            "Password confirmation does not match".to_string(),
        ));
    }

    let user = state
        .auth_service
        .register(
            &request.username,
            &request.email,
            &request.phone,
            request.image.as_deref(),
            &request.password,
        )
        .await?;

    Ok(Json(ApiResponse::success(user.into())))
}

#[derive(Deserialize, IntoParams)]
pub struct CheckIdQuery {
    pub username: String,
}

/// Check whether a username is still available.
#[utoipa::path(
    get,
    path = "/auth/check-id",
    params(CheckIdQuery),
    responses(
        (status = 200, description = "Username is available"),
        (status = 409, description = "Username already taken")
    ),
    tag = "01. Auth"
)]
pub async fn check_id(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CheckIdQuery>,
) -> Result<Json<ApiResponse<()>>> {
    if state.db.username_exists(&query.username).await? {
        return Err(AppError::Conflict("Username is already taken".to_string()));
    }

    Ok(Json(ApiResponse::message(format!(
        "Username {} is available",
        query.username
    ))))
}

#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Log in with username and password, receiving a token pair.
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated", body = TokenPair),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "01. Auth"
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<ApiResponse<TokenPair>>> {
    let tokens = state
        .auth_service
        .login(&request.username, &request.password)
        .await?;

    Ok(Json(ApiResponse::success(tokens)))
}

#[derive(Deserialize, ToSchema)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Exchange a refresh token for a new token pair.
#[utoipa::path(
    post,
    path = "/auth/refresh",
    request_body = RefreshTokenRequest,
    responses(
        (status = 200, description = "New token pair", body = TokenPair),
        (status = 401, description = "Invalid or expired refresh token")
    ),
    tag = "01. Auth"
)]
pub async fn refresh(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RefreshTokenRequest>,
) -> Result<Json<ApiResponse<TokenPair>>> {
    let tokens = state.auth_service.refresh(&request.refresh_token).await?;
    Ok(Json(ApiResponse::success(tokens)))
}

/// Profile of the authenticated user.
#[utoipa::path(
    get,
    path = "/auth/me",
    responses(
        (status = 200, description = "Current user", body = UserInfoResponse),
        (status = 401, description = "Not authenticated")
    ),
    tag = "01. Auth",
    security(("bearer" = []))
)]
pub async fn me(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<ApiResponse<UserInfoResponse>>> {
    let profile = state
        .db
        .get_user(user.id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user.id)))?;

    Ok(Json(ApiResponse::success(profile.into())))
}
