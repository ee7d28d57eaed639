//! Star registry: REST backend for users, planets, characters, ships and user favorites.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{DatabaseBackend, Settings};
pub use error::{AppError, ConfigError};
pub use model::{Character, Favorites, NewUser, Planet, Ship, User};
pub use response::MsgBody;
pub use routes::{app, app_service, ROUTES};
pub use state::AppState;
pub use store::{bootstrap, connect, ensure_database_exists, ensure_tables};
