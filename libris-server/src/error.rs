//! API error responses

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use libris_core::{ErrorClass, LibrisError};
use serde::Serialize;

/// Error body returned by every failing endpoint
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Errors a handler can return
#[derive(Debug)]
pub enum ApiError {
    /// Failure reported by the catalog or the lookup client
    Core(LibrisError),

    /// No book with this ISBN in the local catalog
    BookNotFound(String),

    /// Request was well-formed JSON but unusable
    InvalidRequest(String),

    /// Request body could not be extracted; keeps the extractor's status
    BadBody(JsonRejection),
}

impl From<LibrisError> for ApiError {
    fn from(e: LibrisError) -> Self {
        ApiError::Core(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadBody(rejection)
    }
}

fn rejection_kind(rejection: &JsonRejection) -> &'static str {
    match rejection {
        JsonRejection::JsonDataError(_) => "invalid_request",
        JsonRejection::JsonSyntaxError(_) => "invalid_json",
        JsonRejection::MissingJsonContentType(_) => "unsupported_media_type",
        _ => "invalid_body",
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Core(e) => match e.class() {
                ErrorClass::Input => StatusCode::BAD_REQUEST,
                ErrorClass::Dependency => StatusCode::SERVICE_UNAVAILABLE,
                ErrorClass::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::BookNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::BadBody(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (error, message) = match self {
            ApiError::Core(e) => (e.kind().to_string(), e.to_string()),
            ApiError::BookNotFound(isbn) => (
                "not_found".to_string(),
                format!("Book with ISBN {} not found", isbn),
            ),
            ApiError::InvalidRequest(message) => ("invalid_request".to_string(), message),
            ApiError::BadBody(rejection) => {
                (rejection_kind(&rejection).to_string(), rejection.body_text())
            }
        };

        if status.is_server_error() {
            tracing::error!("{}: {}", error, message);
        }

        (status, Json(ErrorResponse { error, message })).into_response()
    }
}
