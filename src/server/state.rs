//! Application state shared across all request handlers.
//!
//! Initialized once during startup and cloned for each request through Axum's state
//! extraction. Only present when the database is enabled.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Application state containing shared resources.
///
/// `DatabaseConnection` is a pool handle and the secret is reference-counted, so clones
/// are cheap.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for the document store.
    pub db: DatabaseConnection,

    /// Secret used to validate HS256 bearer tokens.
    pub jwt_secret: Arc<str>,
}

impl AppState {
    /// Creates the application state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `jwt_secret` - Secret used to validate bearer tokens
    ///
    /// # Returns
    /// - `AppState` - Initialized application state
    pub fn new(db: DatabaseConnection, jwt_secret: &str) -> Self {
        Self {
            db,
            jwt_secret: Arc::from(jwt_secret),
        }
    }
}
