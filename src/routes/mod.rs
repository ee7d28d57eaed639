//! Router assembly. [`ROUTES`] backs the sitemap and must list every route registered here.

mod common;
mod entity;

pub use common::common_routes;
pub use entity::entity_routes;

use crate::handlers::{route_not_found, sitemap};
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, routing::get, Router};
use serde::Serialize;
use tower::{Layer, ServiceBuilder};
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    normalize_path::{NormalizePath, NormalizePathLayer},
    trace::TraceLayer,
};

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct RouteInfo {
    pub method: &'static str,
    pub path: &'static str,
}

const fn route(method: &'static str, path: &'static str) -> RouteInfo {
    RouteInfo { method, path }
}

pub const ROUTES: &[RouteInfo] = &[
    route("GET", "/"),
    route("GET", "/health"),
    route("GET", "/ready"),
    route("GET", "/version"),
    route("GET", "/people"),
    route("GET", "/people/:name"),
    route("GET", "/planets"),
    route("GET", "/planets/:name"),
    route("GET", "/ships"),
    route("GET", "/ships/:name"),
    route("GET", "/users"),
    route("GET", "/users/favorites/:email"),
    route("POST", "/favorite/planet/:planet_name/:email"),
    route("DELETE", "/favorite/planet/:planet_name/:email"),
    route("POST", "/favorite/people/:character_name/:email"),
    route("DELETE", "/favorite/people/:character_name/:email"),
    route("POST", "/create_user"),
    route("POST", "/create_planet"),
    route("POST", "/create_personaje"),
    route("POST", "/create_ship"),
];

/// Full router with middleware (tracing, permissive CORS, body limit) and the JSON 404 fallback.
pub fn app(state: AppState, body_limit_bytes: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Cors needs a `Default` response body, so the body limit sits outside it.
    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(body_limit_bytes))
        .layer(cors);

    Router::new()
        .route("/", get(sitemap))
        .merge(common_routes(state.clone()))
        .merge(entity_routes(state))
        .fallback(route_not_found)
        .layer(DefaultBodyLimit::disable())
        .layer(middleware)
}

/// [`app`] wrapped so `/planets/` and `/planets` resolve to the same route.
pub fn app_service(state: AppState, body_limit_bytes: usize) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(app(state, body_limit_bytes))
}
