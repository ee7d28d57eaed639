//! Favorite add/remove handlers for planets and characters.
//! Both kinds share one flow: user and target must exist, then the link must be absent (add)
//! or present (remove).

use crate::error::AppError;
use crate::response::msg_ok;
use crate::service::{FavoriteKind, FavoriteService, UserService};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;

async fn ensure_both_exist(
    state: &AppState,
    kind: FavoriteKind,
    name: &str,
    email: &str,
) -> Result<(), AppError> {
    let user_exists = UserService::exists(&state.pool, email).await?;
    let target_exists = FavoriteService::target_exists(&state.pool, kind, name).await?;
    if !user_exists || !target_exists {
        return Err(AppError::NotFound(format!("Usuario o {} no encontrado", kind.label())));
    }
    Ok(())
}

async fn add_favorite(state: &AppState, kind: FavoriteKind, name: &str, email: &str) -> Result<String, AppError> {
    ensure_both_exist(state, kind, name, email).await?;
    if FavoriteService::contains(&state.pool, kind, email, name).await? {
        return Err(AppError::Conflict(format!("{} ya está en favoritos", kind.label())));
    }
    FavoriteService::add(&state.pool, kind, email, name).await?;
    tracing::info!(kind = ?kind, name = %name, email = %email, "favorite added");
    Ok(format!("{} añadido a favoritos", kind.label()))
}

async fn remove_favorite(state: &AppState, kind: FavoriteKind, name: &str, email: &str) -> Result<String, AppError> {
    ensure_both_exist(state, kind, name, email).await?;
    let missing = || AppError::Conflict(format!("{} no está en favoritos", kind.label()));
    if !FavoriteService::contains(&state.pool, kind, email, name).await? {
        return Err(missing());
    }
    // A concurrent remove may win between the check and the delete.
    if FavoriteService::remove(&state.pool, kind, email, name).await? == 0 {
        return Err(missing());
    }
    tracing::info!(kind = ?kind, name = %name, email = %email, "favorite removed");
    Ok(format!("{} eliminado de favoritos", kind.label()))
}

/// POST /favorite/planet/:planet_name/:email
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    Path((planet_name, email)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let msg = add_favorite(&state, FavoriteKind::Planet, &planet_name, &email).await?;
    Ok(msg_ok(msg))
}

/// POST /favorite/people/:character_name/:email
pub async fn add_favorite_character(
    State(state): State<AppState>,
    Path((character_name, email)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let msg = add_favorite(&state, FavoriteKind::Character, &character_name, &email).await?;
    Ok(msg_ok(msg))
}

/// DELETE /favorite/planet/:planet_name/:email
pub async fn remove_favorite_planet(
    State(state): State<AppState>,
    Path((planet_name, email)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let msg = remove_favorite(&state, FavoriteKind::Planet, &planet_name, &email).await?;
    Ok(msg_ok(msg))
}

/// DELETE /favorite/people/:character_name/:email
pub async fn remove_favorite_character(
    State(state): State<AppState>,
    Path((character_name, email)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let msg = remove_favorite(&state, FavoriteKind::Character, &character_name, &email).await?;
    Ok(msg_ok(msg))
}
