//! User handlers: `/users`, `/users/favorites/:email`, `/create_user`.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::model::NewUser;
use crate::response::{many, msg_created, one};
use crate::service::{FavoriteService, UserService};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;

/// GET /users
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = UserService::list(&state.pool).await?;
    Ok(many(rows))
}

/// GET /users/favorites/:email
pub async fn get_user_favorites(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !UserService::exists(&state.pool, &email).await? {
        return Err(AppError::NotFound("Usuario no encontrado".into()));
    }
    let favorites = FavoriteService::for_user(&state.pool, &email).await?;
    Ok(one(favorites))
}

/// POST /create_user
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<NewUser>,
) -> Result<impl IntoResponse, AppError> {
    if UserService::exists(&state.pool, &body.email).await? {
        return Err(AppError::Conflict("Usuario ya existe".into()));
    }
    UserService::create(&state.pool, &body).await?;
    tracing::info!(email = %body.email, "user created");
    Ok(msg_created("Usuario creado exitosamente"))
}
