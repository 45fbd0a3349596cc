// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Organization receipt (group ledger) routes.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::{ApiResponse, PageQuery, PageResponse};
use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::receipt::ReceiptDetail;
use crate::models::Receipt;
use crate::services::authz;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/organizations/{org_id}/receipts",
            get(list_receipts).post(create_receipt),
        )
        .route(
            "/organizations/{org_id}/receipts/{receipt_id}",
            get(get_receipt).put(update_receipt).delete(delete_receipt),
        )
}

#[derive(Serialize, ToSchema)]
pub struct ReceiptSummaryResponse {
    pub id: i64,
    #[serde(rename = "type")]
    pub receipt_type: String,
    pub amount: i32,
    pub category: String,
    pub date: NaiveDate,
    pub image: Option<String>,
}

impl From<Receipt> for ReceiptSummaryResponse {
    fn from(r: Receipt) -> Self {
        Self {
            id: r.id,
            receipt_type: r.r#type,
            amount: r.amount,
            category: r.category,
            date: r.date,
            image: r.image,
        }
    }
}

/// Paged receipt summaries.
#[utoipa::path(
    get,
    path = "/organizations/{org_id}/receipts",
    params(("org_id" = i64, Path, description = "Organization id"), PageQuery),
    responses(
        (status = 200, description = "Receipt page", body = PageResponse<ReceiptSummaryResponse>)
    ),
    tag = "08. Receipts",
    security(("bearer" = []))
)]
pub async fn list_receipts(
    State(state): State<Arc<AppState>>,
    Path(org_id): Path<i64>,
    Query(page): Query<PageQuery>,
) -> Result<Json<ApiResponse<PageResponse<ReceiptSummaryResponse>>>> {
    let (items, total) = state
        .db
        .page_receipts(org_id, page.limit(), page.offset())
        .await?;

    Ok(Json(ApiResponse::success(PageResponse::new(
        items.into_iter().map(ReceiptSummaryResponse::from).collect(),
        page.page,
        page.limit(),
        total,
    ))))
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct ReceiptCreateRequest {
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 10, message = "type must be 1-10 characters"))]
    pub receipt_type: String,
    pub amount: i32,
    #[validate(length(min = 1, message = "category must not be empty"))]
    pub category: String,
    pub date: NaiveDate,
    pub image: Option<String>,
    pub description: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct ReceiptMutationResponse {
    pub id: i64,
    pub message: String,
}

/// Record a new ledger entry.
#[utoipa::path(
    post,
    path = "/organizations/{org_id}/receipts",
    params(("org_id" = i64, Path, description = "Organization id")),
    request_body = ReceiptCreateRequest,
    responses(
        (status = 201, description = "Receipt created", body = ReceiptMutationResponse),
        (status = 404, description = "Unknown organization")
    ),
    tag = "08. Receipts",
    security(("bearer" = []))
)]
pub async fn create_receipt(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(org_id): Path<i64>,
    Json(request): Json<ReceiptCreateRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ReceiptMutationResponse>>)> {
    request
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    authz::require_organization(&state.db, org_id).await?;

    let id = state
        .db
        .create_receipt(
            org_id,
            user.id,
            &request.receipt_type,
            request.amount,
            &request.category,
            request.description.as_deref(),
            request.date,
            request.image.as_deref(),
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(ReceiptMutationResponse {
            id,
            message: "Receipt created successfully".to_string(),
        })),
    ))
}

#[derive(Serialize, ToSchema)]
pub struct ReceiptDetailResponse {
    pub id: i64,
    #[serde(rename = "type")]
    pub receipt_type: String,
    pub amount: i32,
    pub category: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub image: Option<String>,
    pub recorded_by_user_id: i64,
    pub recorded_by_username: String,
}

impl From<ReceiptDetail> for ReceiptDetailResponse {
    fn from(r: ReceiptDetail) -> Self {
        Self {
            id: r.id,
            receipt_type: r.r#type,
            amount: r.amount,
            category: r.category,
            description: r.description,
            date: r.date,
            image: r.image,
            recorded_by_user_id: r.user_id,
            recorded_by_username: r.username,
        }
    }
}

/// Get one ledger entry (members and the owner only).
#[utoipa::path(
    get,
    path = "/organizations/{org_id}/receipts/{receipt_id}",
    params(
        ("org_id" = i64, Path, description = "Organization id"),
        ("receipt_id" = i64, Path, description = "Receipt id")
    ),
    responses(
        (status = 200, description = "Receipt detail", body = ReceiptDetailResponse),
        (status = 403, description = "Not a member of this organization"),
        (status = 404, description = "Unknown receipt")
    ),
    tag = "08. Receipts",
    security(("bearer" = []))
)]
pub async fn get_receipt(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path((org_id, receipt_id)): Path<(i64, i64)>,
) -> Result<Json<ApiResponse<ReceiptDetailResponse>>> {
    let receipt = load_org_receipt(&state, org_id, receipt_id).await?;

    authz::require_member_or_owner(&state.db, org_id, user.id).await?;

    Ok(Json(ApiResponse::success(receipt.into())))
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct ReceiptUpdateRequest {
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 10, message = "type must be 1-10 characters"))]
    pub receipt_type: String,
    pub amount: i32,
    #[validate(length(min = 1, message = "category must not be empty"))]
    pub category: String,
    pub date: NaiveDate,
    pub image: Option<String>,
    pub description: Option<String>,
}

/// Update a ledger entry; only the user who recorded it may change it.
#[utoipa::path(
    put,
    path = "/organizations/{org_id}/receipts/{receipt_id}",
    params(
        ("org_id" = i64, Path, description = "Organization id"),
        ("receipt_id" = i64, Path, description = "Receipt id")
    ),
    request_body = ReceiptUpdateRequest,
    responses(
        (status = 200, description = "Receipt updated", body = ReceiptMutationResponse),
        (status = 403, description = "Not the recorder of this receipt"),
        (status = 404, description = "Unknown receipt")
    ),
    tag = "08. Receipts",
    security(("bearer" = []))
)]
pub async fn update_receipt(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path((org_id, receipt_id)): Path<(i64, i64)>,
    Json(request): Json<ReceiptUpdateRequest>,
) -> Result<Json<ApiResponse<ReceiptMutationResponse>>> {
    request
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let existing = load_org_receipt(&state, org_id, receipt_id).await?;

    authz::require_member_or_owner(&state.db, org_id, user.id).await?;

    if existing.user_id != user.id {
        return Err(AppError::Forbidden(
            "Only the recorder may modify this receipt".to_string(),
        ));
    }

    let updated = Receipt {
        id: existing.id,
        organization_id: existing.organization_id,
        user_id: existing.user_id,
        r#type: request.receipt_type,
        amount: request.amount,
        category: request.category,
        description: request.description,
        date: request.date,
        image: request.image,
    };
    state.db.update_receipt(&updated).await?;

    Ok(Json(ApiResponse::success(ReceiptMutationResponse {
        id: receipt_id,
        message: "Receipt updated successfully".to_string(),
    })))
}

/// Delete a ledger entry; only the user who recorded it may delete it.
#[utoipa::path(
    delete,
    path = "/organizations/{org_id}/receipts/{receipt_id}",
    params(
        ("org_id" = i64, Path, description = "Organization id"),
        ("receipt_id" = i64, Path, description = "Receipt id")
    ),
    responses(
        (status = 204, description = "Receipt deleted"),
        (status = 403, description = "Not the recorder of this receipt"),
        (status = 404, description = "Unknown receipt")
    ),
    tag = "08. Receipts",
    security(("bearer" = []))
)]
pub async fn delete_receipt(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path((org_id, receipt_id)): Path<(i64, i64)>,
) -> Result<StatusCode> {
    let existing = load_org_receipt(&state, org_id, receipt_id).await?;

    authz::require_member_or_owner(&state.db, org_id, user.id).await?;

    if existing.user_id != user.id {
        return Err(AppError::Forbidden(
            "Only the recorder may modify this receipt".to_string(),
        ));
    }

    state.db.delete_receipt(receipt_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Fetch a receipt and hide organization mismatches as 404.
async fn load_org_receipt(
    state: &AppState,
    org_id: i64,
    receipt_id: i64,
) -> Result<ReceiptDetail> {
    let receipt = state
        .db
        .get_receipt_detail(receipt_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Receipt {} not found", receipt_id)))?;

    if receipt.organization_id != org_id {
        return Err(AppError::NotFound(format!(
            "Receipt {} not found",
            receipt_id
        )));
    }

    Ok(receipt)
}
