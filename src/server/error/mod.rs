//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into enveloped HTTP responses. The `AppError` enum serves as the
//! top-level error type that wraps domain-specific errors and implements `IntoResponse`
//! so every handler, extractor rejection and fallback answers with the same JSON shape.

pub mod config;
pub mod internal;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::time::Duration;
use thiserror::Error;

use crate::{
    model::api::ApiResponse,
    server::{
        error::{config::ConfigError, internal::InternalError},
        util::respond::respond,
    },
};

/// Message returned to clients for every server-side failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Client errors carry a message meant for the
/// caller; every other variant is logged server-side and answered with a generic message.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Covers connection failures and constraint violations alike. Results in
    /// 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// A database call did not finish within the configured deadline.
    #[error("Database call exceeded deadline of {0:?}")]
    Timeout(Duration),

    /// Internal conversion failure indicating inconsistent stored data or a bug.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    ///
    /// # Fields
    /// - Message describing what was invalid about the request
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    ///
    /// # Fields
    /// - Detailed error message for server-side logging
    #[error("{0}")]
    InternalError(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Converts application errors into enveloped HTTP responses.
///
/// # Returns
/// - 400 Bad Request with a `fail` envelope - For `BadRequest`
/// - 404 Not Found with a `fail` envelope - For `NotFound`
/// - 500 Internal Server Error with an `error` envelope - For all other variants
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => {
                tracing::debug!("Not found: {}", msg);
                respond(StatusCode::NOT_FOUND, ApiResponse::<()>::fail(msg))
            }
            Self::BadRequest(msg) => {
                tracing::debug!("Bad request: {}", msg);
                respond(StatusCode::BAD_REQUEST, ApiResponse::<()>::fail(msg))
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                respond(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::<()>::error(INTERNAL_ERROR_MESSAGE),
                )
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client so driver errors, table names and column names never reach the caller.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        respond(
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiResponse::<()>::error(INTERNAL_ERROR_MESSAGE),
        )
    }
}
