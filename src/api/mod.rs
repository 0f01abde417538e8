//! API routes for staff-api

pub mod employees;
pub mod health;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router
///
/// Explicit route table, one entry per verb/path pair. The health probes sit
/// a segment deeper than `/users/{id}`, so they never parse as an employee id.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/users/", get(employees::list).post(employees::create))
        .route(
            "/users/{id}",
            get(employees::get_by_id)
                .put(employees::update)
                .delete(employees::delete),
        )
        .route("/users/health/ready", get(health::readiness))
        .route("/users/health/live", get(health::liveness))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
