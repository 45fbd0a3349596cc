// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! OpenAPI document assembly.
//!
//! The generated document is served at `/v3/api-docs/openapi.json` with the
//! interactive UI at `/swagger-ui` (see routes/mod.rs).

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::PageResponse;
use crate::routes::announcements::AnnouncementResponse;
use crate::routes::documents::DocumentResponse;
use crate::routes::receipts::ReceiptSummaryResponse;
use crate::routes::schedules::ScheduleResponse;

#[derive(OpenApi)]
#[openapi(
    info(title = "Grouple API", version = "1.0"),
    paths(
        crate::routes::auth::register,
        crate::routes::auth::check_id,
        crate::routes::auth::login,
        crate::routes::auth::refresh,
        crate::routes::auth::me,
        crate::routes::users::get_me,
        crate::routes::users::update_me,
        crate::routes::users::delete_me,
        crate::routes::users::my_organizations,
        crate::routes::organizations::create_organization,
        crate::routes::organizations::list_organizations,
        crate::routes::organizations::get_organization,
        crate::routes::organizations::update_organization,
        crate::routes::organizations::delete_organization,
        crate::routes::members::list_members,
        crate::routes::members::delete_member,
        crate::routes::join_requests::create_by_code,
        crate::routes::join_requests::create_by_org,
        crate::routes::join_requests::list_requests,
        crate::routes::join_requests::get_request,
        crate::routes::join_requests::approve_request,
        crate::routes::join_requests::reject_request,
        crate::routes::announcements::create_announcement,
        crate::routes::announcements::list_announcements,
        crate::routes::announcements::list_starred,
        crate::routes::announcements::search_announcements,
        crate::routes::announcements::get_announcement,
        crate::routes::announcements::update_announcement,
        crate::routes::announcements::toggle_star,
        crate::routes::announcements::delete_announcement,
        crate::routes::documents::create_document,
        crate::routes::documents::list_documents,
        crate::routes::documents::get_document,
        crate::routes::documents::update_document,
        crate::routes::documents::delete_document,
        crate::routes::receipts::list_receipts,
        crate::routes::receipts::create_receipt,
        crate::routes::receipts::get_receipt,
        crate::routes::receipts::update_receipt,
        crate::routes::receipts::delete_receipt,
        crate::routes::schedules::create_schedule,
        crate::routes::schedules::list_schedules,
        crate::routes::schedules::get_schedule,
        crate::routes::schedules::modify_schedule,
        crate::routes::schedules::delete_schedule,
    ),
    components(schemas(
        PageResponse<AnnouncementResponse>,
        PageResponse<DocumentResponse>,
        PageResponse<ReceiptSummaryResponse>,
        PageResponse<ScheduleResponse>,
    )),
    tags(
        (name = "01. Auth", description = "Registration, login and token refresh"),
        (name = "02. Users", description = "The authenticated user's account"),
        (name = "03. Organizations", description = "Organization management"),
        (name = "04. Organization Members", description = "Membership administration"),
        (name = "05. Join Requests", description = "Applying to and joining organizations"),
        (name = "06. Announcements", description = "Organization announcements"),
        (name = "07. Documents", description = "Shared document metadata"),
        (name = "08. Receipts", description = "Group ledger"),
        (name = "09. Schedules", description = "Organization calendar")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Registers the `bearer` JWT security scheme referenced by the paths.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_document_builds() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/auth/login"));
        assert!(doc
            .paths
            .paths
            .contains_key("/organizations/{org_id}/schedules/{schedule_id}"));
    }

    #[test]
    fn test_security_scheme_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components present");
        assert!(components.security_schemes.contains_key("bearer"));
    }
}
