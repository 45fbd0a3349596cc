// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Grouple: group management backend
//!
//! This crate provides the backend API for managing users, organizations,
//! memberships, and per-organization announcements, documents, receipts
//! and schedules.

pub mod api;
pub mod config;
pub mod db;
pub mod docs;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use db::Database;
use services::AuthService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: Database,
    pub auth_service: AuthService,
}
