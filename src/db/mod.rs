//! Database layer (MySQL via sqlx).

mod announcements;
mod documents;
mod join_requests;
mod members;
mod organizations;
mod receipts;
mod schedules;
mod users;

use crate::error::AppError;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

/// MySQL database client with typed operations per entity.
#[derive(Clone)]
pub struct Database {
    pool: MySqlPool,
}

impl Database {
    /// Connect to MySQL and verify the connection.
    pub async fn connect(database_url: &str) -> Result<Self, AppError> {
        let pool = MySqlPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to MySQL: {}", e)))?;

        tracing::info!("Connected to MySQL");

        Ok(Self { pool })
    }

    /// Create a pool without establishing a connection.
    ///
    /// Used by tests that exercise routing and auth without a database;
    /// queries against it fail with a database error.
    pub fn connect_lazy(database_url: &str) -> Result<Self, AppError> {
        let pool = MySqlPool::connect_lazy(database_url)
            .map_err(|e| AppError::Database(format!("Invalid database URL: {}", e)))?;
        Ok(Self { pool })
    }

    /// Apply embedded migrations.
    pub async fn migrate(&self) -> Result<(), AppError> {
        sqlx::migrate!()
            .run(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Migration failed: {}", e)))?;
        Ok(())
    }

    pub(crate) fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}
