use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::response::{ApiResponse, HttpMessage};

/// API error type with HTTP status code, envelope message and error text
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: HttpMessage,
    pub error: String,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, message: HttpMessage, error: impl Into<String>) -> Self {
        Self {
            status,
            message,
            error: error.into(),
        }
    }

    /// Creates a 400 Bad Request error
    pub fn bad_request(message: HttpMessage, error: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message, error)
    }

    /// Creates a 404 Not Found error
    pub fn not_found(message: HttpMessage, error: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message, error)
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error(message: HttpMessage, error: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message, error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!(
            status = self.status.as_u16(),
            title = %self.message.title,
            error = %self.error,
            "Request failed"
        );

        let body = ApiResponse::<()> {
            message: self.message,
            data: None,
            error: Some(self.error),
            pagination: None,
        };

        (self.status, body).into_response()
    }
}
