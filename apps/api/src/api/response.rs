use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::employee::Pagination;

/// Title and human readable body carried by every response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HttpMessage {
    pub title: String,
    pub body: String,
}

impl HttpMessage {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Uniform JSON envelope returned by every endpoint
///
/// Absent optional fields are left out of the serialized body.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub message: HttpMessage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

impl<T> ApiResponse<T> {
    pub fn new(message: HttpMessage) -> Self {
        Self {
            message,
            data: None,
            error: None,
            pagination: None,
        }
    }

    pub fn with_data(mut self, data: T) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Fixed wording for one endpoint: its title plus success and failure bodies
#[derive(Debug, Clone, Copy)]
pub struct Operation {
    pub title: &'static str,
    pub success: &'static str,
    pub failure: &'static str,
}

impl Operation {
    /// Envelope for a successful call
    pub fn succeeded<T>(&self) -> ApiResponse<T> {
        ApiResponse::new(HttpMessage::new(self.title, self.success))
    }

    /// Message for a failed call
    pub fn failed(&self) -> HttpMessage {
        HttpMessage::new(self.title, self.failure)
    }
}
