// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use grouple_backend::config::Config;
use grouple_backend::db::Database;
use grouple_backend::routes::create_router;
use grouple_backend::services::AuthService;
use grouple_backend::AppState;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::Serialize;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Create a test app backed by a lazy (unconnected) MySQL pool.
///
/// Routing, extraction, validation and auth all work; handlers that
/// actually reach the database fail with a 500.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let db = Database::connect_lazy(&config.database_url).expect("lazy pool");
    let auth_service = AuthService::new(db.clone(), config.jwt_signing_key.clone());

    let state = Arc::new(AppState {
        config,
        db,
        auth_service,
    });

    (create_router(state.clone()), state)
}

/// Create a test JWT token.
#[allow(dead_code)]
pub fn create_test_jwt(user_id: i64, username: &str, signing_key: &[u8]) -> String {
    create_test_jwt_with_ttl(user_id, username, signing_key, 86400)
}

/// Create a test JWT with an explicit TTL; negative values produce an
/// already-expired token.
#[allow(dead_code)]
pub fn create_test_jwt_with_ttl(
    user_id: i64,
    username: &str,
    signing_key: &[u8],
    ttl_secs: i64,
) -> String {
    #[derive(Serialize)]
    struct Claims {
        sub: String,
        id: i64,
        exp: usize,
        iat: usize,
    }

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64;

    let claims = Claims {
        sub: username.to_string(),
        id: user_id,
        iat: now as usize,
        exp: (now + ttl_secs).max(0) as usize,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(signing_key),
    )
    .unwrap()
}
