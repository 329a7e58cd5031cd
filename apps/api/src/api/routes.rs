use axum::{
    http::Method,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{employees, health};
use crate::api::state::AppState;

/// Builds the service router with CORS and request tracing
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::PATCH])
        .allow_headers(Any);

    Router::new()
        .route("/", get(health::hello))
        .route(
            "/employee",
            post(employees::create_employee)
                .get(employees::get_employees)
                .patch(employees::update_employee),
        )
        .route(
            "/employee/:id",
            get(employees::get_employee).delete(employees::delete_employee),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
