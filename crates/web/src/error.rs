use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::fmt;
use storage::error::StorageError;
use utoipa::ToSchema;

/// JSON body of every non-2xx response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    /// Store failure; `message` is the client-facing summary for the endpoint.
    Storage {
        message: &'static str,
        source: StorageError,
    },
    BadRequest(String),
    NotFound(String),
}

impl WebError {
    pub fn storage(message: &'static str) -> impl FnOnce(StorageError) -> Self {
        move |source| Self::Storage { message, source }
    }
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage { message, source } => write!(f, "{}: {}", message, source),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status_code, body) = match self {
            Self::Storage { message, source } => {
                tracing::error!("{}: {:?}", message, source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        message: message.to_string(),
                        error: Some(source.to_string()),
                    },
                )
            }
            Self::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    message,
                    error: None,
                },
            ),
            Self::NotFound(message) => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    message,
                    error: None,
                },
            ),
        };

        (status_code, Json(body)).into_response()
    }
}

pub type WebResult<T> = Result<T, WebError>;
