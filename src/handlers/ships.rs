//! Ship handlers: `/ships`, `/ships/:name`, `/create_ship`.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::model::Ship;
use crate::response::{many, msg_created, one};
use crate::service::{CharacterService, ShipService};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;

pub async fn list_ships(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = ShipService::list(&state.pool).await?;
    Ok(many(rows))
}

pub async fn get_ship(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let ship = ShipService::find(&state.pool, &name)
        .await?
        .ok_or_else(|| AppError::NotFound("Nave no encontrada".into()))?;
    Ok(one(ship))
}

/// POST /create_ship — the captain must already exist.
pub async fn create_ship(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<Ship>,
) -> Result<impl IntoResponse, AppError> {
    if ShipService::exists(&state.pool, &body.name).await? {
        return Err(AppError::Conflict("Nave ya existe".into()));
    }
    if !CharacterService::exists(&state.pool, &body.captain).await? {
        return Err(AppError::BadRequest("El capitán no existe".into()));
    }
    ShipService::create(&state.pool, &body).await?;
    tracing::info!(ship = %body.name, captain = %body.captain, "ship created");
    Ok(msg_created("Nave creada exitosamente"))
}
