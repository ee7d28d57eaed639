//! Typed errors and HTTP mapping. Every error renders as `{"msg": "..."}`.

use crate::response::MsgBody;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {var}: '{value}'")]
    Invalid { var: &'static str, value: String },
    #[error("unsupported database url '{0}' (expected postgres://, postgresql:// or sqlite:)")]
    UnsupportedDatabase(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Referenced entity absent.
    #[error("{0}")]
    NotFound(String),
    /// Duplicate create, duplicate favorite or missing favorite.
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    BadRequest(String),
    /// Generic application error carrying its own status.
    #[error("{msg}")]
    Status { status: StatusCode, msg: String },
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl AppError {
    pub fn status(status: StatusCode, msg: impl Into<String>) -> Self {
        AppError::Status {
            status,
            msg: msg.into(),
        }
    }

    /// Status code and client-facing message for this error.
    fn parts(&self) -> (StatusCode, String) {
        match self {
            AppError::Config(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error de configuración".to_string(),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Conflict(msg) | AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            AppError::Status { status, msg } => (*status, msg.clone()),
            AppError::Db(e) => match e {
                sqlx::Error::Database(db) if db.is_unique_violation() => {
                    (StatusCode::BAD_REQUEST, "El registro ya existe".to_string())
                }
                sqlx::Error::Database(db) if db.is_foreign_key_violation() => (
                    StatusCode::BAD_REQUEST,
                    "Referencia a un registro inexistente".to_string(),
                ),
                sqlx::Error::RowNotFound => {
                    (StatusCode::NOT_FOUND, "Registro no encontrado".to_string())
                }
                _ => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error interno del servidor".to_string(),
                ),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, msg) = self.parts();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else if matches!(self, AppError::Db(_)) {
            tracing::warn!(error = %self, "store constraint rejected request");
        }
        (status, Json(MsgBody { msg })).into_response()
    }
}
