//! Character handlers: `/people`, `/people/:name`, `/create_personaje`.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::model::Character;
use crate::response::{many, msg_created, one};
use crate::service::{CharacterService, PlanetService};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;

/// GET /people
pub async fn list_characters(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = CharacterService::list(&state.pool).await?;
    Ok(many(rows))
}

/// GET /people/:name
pub async fn get_character(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let character = CharacterService::find(&state.pool, &name)
        .await?
        .ok_or_else(|| AppError::NotFound("Personaje no encontrado".into()))?;
    Ok(one(character))
}

/// POST /create_personaje — the owning planet must already exist.
pub async fn create_character(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<Character>,
) -> Result<impl IntoResponse, AppError> {
    if CharacterService::exists(&state.pool, &body.name).await? {
        return Err(AppError::Conflict("Personaje ya existe".into()));
    }
    if !PlanetService::exists(&state.pool, &body.planet_name).await? {
        return Err(AppError::BadRequest("El planeta no existe".into()));
    }
    CharacterService::create(&state.pool, &body).await?;
    tracing::info!(character = %body.name, planet = %body.planet_name, "character created");
    Ok(msg_created("Personaje creado exitosamente"))
}
