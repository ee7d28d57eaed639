//! Planet handlers: `/planets`, `/planets/:name`, `/create_planet`.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::model::Planet;
use crate::response::{many, msg_created, one};
use crate::service::PlanetService;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;

/// GET /planets
pub async fn list_planets(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = PlanetService::list(&state.pool).await?;
    Ok(many(rows))
}

/// GET /planets/:name
pub async fn get_planet(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let planet = PlanetService::find(&state.pool, &name)
        .await?
        .ok_or_else(|| AppError::NotFound("Planeta no encontrado".into()))?;
    Ok(one(planet))
}

/// POST /create_planet
pub async fn create_planet(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<Planet>,
) -> Result<impl IntoResponse, AppError> {
    if PlanetService::exists(&state.pool, &body.name).await? {
        return Err(AppError::Conflict("Planeta ya existe".into()));
    }
    PlanetService::create(&state.pool, &body).await?;
    tracing::info!(planet = %body.name, "planet created");
    Ok(msg_created("Planeta creado exitosamente"))
}
