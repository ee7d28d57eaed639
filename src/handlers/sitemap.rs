//! Root discovery endpoint and the unknown-route fallback.

use crate::response::MsgBody;
use crate::routes::{RouteInfo, ROUTES};
use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct Sitemap {
    pub routes: &'static [RouteInfo],
}

/// GET / — every registered route with its method.
pub async fn sitemap() -> Json<Sitemap> {
    Json(Sitemap { routes: ROUTES })
}

pub async fn route_not_found() -> (StatusCode, Json<MsgBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(MsgBody {
            msg: "Ruta no encontrada".into(),
        }),
    )
}
