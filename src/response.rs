//! Response envelope helpers. Mutations answer with a `{"msg": ...}` body.

use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MsgBody {
    pub msg: String,
}

pub fn msg_ok(msg: impl Into<String>) -> (StatusCode, Json<MsgBody>) {
    (StatusCode::OK, Json(MsgBody { msg: msg.into() }))
}

pub fn msg_created(msg: impl Into<String>) -> (StatusCode, Json<MsgBody>) {
    (StatusCode::CREATED, Json(MsgBody { msg: msg.into() }))
}

pub fn many<T: Serialize>(data: Vec<T>) -> (StatusCode, Json<Vec<T>>) {
    (StatusCode::OK, Json(data))
}

pub fn one<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}
