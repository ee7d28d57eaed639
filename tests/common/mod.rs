#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use sqlx::AnyPool;
use star_registry::{app_service, connect, ensure_tables, AppState, DatabaseBackend};
use tower::ServiceExt;
use tower_http::normalize_path::NormalizePath;

pub struct TestApp {
    pub app: NormalizePath<Router>,
    pub pool: AnyPool,
}

/// In-memory SQLite; one connection so every query sees the same database.
pub async fn test_app() -> TestApp {
    let pool = connect("sqlite::memory:", 1).await.unwrap();
    ensure_tables(&pool).await.unwrap();
    let app = app_service(AppState::new(pool.clone(), DatabaseBackend::Sqlite), 1024 * 1024);
    TestApp { app, pool }
}

impl TestApp {
    pub async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request("GET", uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request("POST", uri, Some(body)).await
    }

    pub async fn post_empty(&self, uri: &str) -> (StatusCode, Value) {
        self.request("POST", uri, None).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request("DELETE", uri, None).await
    }

    pub async fn create_user(&self, email: &str) -> (StatusCode, Value) {
        self.post(
            "/create_user",
            json!({
                "email": email,
                "password": "secreto",
                "fecha_suscripcion": "2024-05-04",
                "nombre": "Leia",
                "apellido": "Organa"
            }),
        )
        .await
    }

    pub async fn create_planet(&self, name: &str) -> (StatusCode, Value) {
        self.post(
            "/create_planet",
            json!({
                "nombre": name,
                "galaxia": "Outer Rim",
                "numero_planetas": 3,
                "habitable": true
            }),
        )
        .await
    }

    pub async fn create_character(&self, name: &str, planet: &str) -> (StatusCode, Value) {
        self.post(
            "/create_personaje",
            json!({ "nombre": name, "edad": 19, "planeta_nombre": planet }),
        )
        .await
    }
}

pub fn msg(value: &Value) -> &str {
    value["msg"].as_str().unwrap_or_default()
}
