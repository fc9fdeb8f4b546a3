use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::model::api::ApiResponse;

/// Writes an envelope as a JSON response with the given status code.
pub fn respond<T: Serialize>(status: StatusCode, body: ApiResponse<T>) -> Response {
    (status, Json(body)).into_response()
}

/// 200 OK with a `success` envelope around `data`.
pub fn ok<T: Serialize>(data: T) -> Response {
    respond(StatusCode::OK, ApiResponse::success(data))
}

/// 201 Created with a `success` envelope around `data`.
pub fn created<T: Serialize>(data: T) -> Response {
    respond(StatusCode::CREATED, ApiResponse::success(data))
}

/// 200 OK with a `success` envelope carrying only a message.
pub fn done(message: impl Into<String>) -> Response {
    respond(StatusCode::OK, ApiResponse::done(message))
}
