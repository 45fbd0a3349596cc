// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Uniform API response envelope and pagination types.

use serde::Serialize;
use utoipa::ToSchema;

/// Success envelope wrapping every 2xx payload:
/// `{"status":"success","data":...}` or `{"status":"success","message":"..."}`.
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: "success",
            message: None,
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Success with a human-readable message and no data payload.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: "success",
            message: Some(message.into()),
            data: None,
        }
    }
}

/// Page of results with the usual bookkeeping fields.
#[derive(Serialize, ToSchema)]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_elements: i64,
    pub total_pages: u32,
}

impl<T> PageResponse<T> {
    pub fn new(items: Vec<T>, page: u32, size: u32, total_elements: i64) -> Self {
        let total_pages = if size == 0 {
            0
        } else {
            ((total_elements as u64).div_ceil(size as u64)) as u32
        };
        Self {
            items,
            page,
            size,
            total_elements,
            total_pages,
        }
    }
}

/// Common `?page=&size=` query parameters (zero-indexed page).
#[derive(serde::Deserialize, utoipa::IntoParams)]
pub struct PageQuery {
    #[serde(default)]
    pub page: u32,
    #[serde(default = "default_size")]
    pub size: u32,
}

fn default_size() -> u32 {
    10
}

const MAX_PAGE_SIZE: u32 = 100;

impl PageQuery {
    /// Page size clamped to a sane upper bound.
    pub fn limit(&self) -> u32 {
        self.size.clamp(1, MAX_PAGE_SIZE)
    }

    /// Row offset for the current page, saturating on overflow.
    pub fn offset(&self) -> u64 {
        (self.page as u64).saturating_mul(self.limit() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_response_total_pages() {
        let page = PageResponse::new(vec![1, 2, 3], 0, 10, 23);
        assert_eq!(page.total_pages, 3);

        let page = PageResponse::new(Vec::<i32>::new(), 0, 10, 0);
        assert_eq!(page.total_pages, 0);

        let page = PageResponse::new(vec![1], 0, 10, 10);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_page_query_clamps_size() {
        let q = PageQuery { page: 0, size: 5000 };
        assert_eq!(q.limit(), 100);

        let q = PageQuery { page: 0, size: 0 };
        assert_eq!(q.limit(), 1);
    }

    #[test]
    fn test_page_query_offset() {
        let q = PageQuery { page: 3, size: 10 };
        assert_eq!(q.offset(), 30);
    }
}
