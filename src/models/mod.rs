// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod announcement;
pub mod document;
pub mod join_request;
pub mod member;
pub mod organization;
pub mod receipt;
pub mod schedule;
pub mod user;

pub use announcement::Announcement;
pub use document::Document;
pub use join_request::{JoinRequestStatus, JoinRequestWithUser};
pub use member::{Member, MemberWithUser};
pub use organization::Organization;
pub use receipt::Receipt;
pub use schedule::{Schedule, ScheduleWithAuthor};
pub use user::User;
