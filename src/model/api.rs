use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outcome carried by every response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    /// Request handled, `data` holds the payload if there is one.
    Success,
    /// Client-side problem (4xx), `message` explains it.
    Fail,
    /// Server-side problem (5xx), `message` is generic.
    Error,
}

/// Uniform JSON envelope wrapping every response body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub status: ResponseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: None,
            data: Some(data),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Fail,
            message: Some(message.into()),
            data: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: Some(message.into()),
            data: None,
        }
    }
}

impl ApiResponse<()> {
    /// Success envelope without a payload, used by deletes.
    pub fn done(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: Some(message.into()),
            data: None,
        }
    }
}

/// Envelope without a payload, for API documentation.
///
/// Describes `fail` and `error` responses as well as deletes answering `success`
/// with only a message.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub status: ResponseStatus,
    pub message: String,
}
