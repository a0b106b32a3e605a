//! Router builder for the dashboard API

use super::handlers::{
    dashboard_summary, health_check, list_orders, not_found, order_statuses, AppState,
};
use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the API router:
/// - GET /orders - Paginated, filterable order list
/// - GET /orders/statuses - Valid status values
/// - GET /dashboard - Overview page summary
/// - GET /health, /healthz - Health checks
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/orders", get(list_orders))
        .route("/orders/statuses", get(order_statuses))
        .route("/dashboard", get(dashboard_summary))
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
