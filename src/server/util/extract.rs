//! Extractors that reject malformed requests with the standard envelope.
//!
//! Axum's own `Json`, `Path` and `Query` rejections answer with plain text. These wrappers
//! route the rejection through `AppError` so clients always receive a `fail` envelope.

use axum::extract::{FromRequest, FromRequestParts};

use crate::server::error::AppError;

/// JSON body extractor answering malformed bodies with 400 `fail`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Path parameter extractor answering bad parameters with 400 `fail`.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

/// Query string extractor answering bad parameters with 400 `fail`.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);
