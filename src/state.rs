//! Shared application state for all routes.

use crate::config::DatabaseBackend;
use sqlx::AnyPool;

#[derive(Clone)]
pub struct AppState {
    /// Connections are checked out per query and returned on every exit path.
    pub pool: AnyPool,
    pub backend: DatabaseBackend,
}

impl AppState {
    pub fn new(pool: AnyPool, backend: DatabaseBackend) -> Self {
        AppState { pool, backend }
    }
}
