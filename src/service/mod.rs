//! Data access per entity. Every call runs as its own statement against the pool.

mod characters;
mod favorites;
mod planets;
mod ships;
mod users;

pub use characters::CharacterService;
pub use favorites::{FavoriteKind, FavoriteService};
pub use planets::PlanetService;
pub use ships::ShipService;
pub use users::UserService;

use crate::error::AppError;
use sqlx::AnyPool;

/// True when `sql` (a `SELECT 1 ... WHERE key = $1`) yields a row for `key`.
async fn key_exists(pool: &AnyPool, sql: &str, key: &str) -> Result<bool, AppError> {
    tracing::debug!(sql = %sql, key = %key, "exists");
    let row = sqlx::query(sql).bind(key).fetch_optional(pool).await?;
    Ok(row.is_some())
}
