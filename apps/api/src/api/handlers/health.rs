use crate::api::response::{ApiResponse, HttpMessage};

/// Greeting that confirms the server is up
///
/// GET /
pub async fn hello() -> ApiResponse<()> {
    ApiResponse::new(HttpMessage::new("Hello", "Welcome to employee service"))
}
