//! Request handlers for the dashboard API

use crate::core::error::ErrorResponse;
use crate::core::order::OrderStatus;
use crate::core::query::{OrdersPage, RawOrdersQuery};
use crate::dashboard::DashboardSummary;
use crate::orders::OrderStore;
use axum::extract::{OriginalUri, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};
use std::sync::Arc;

/// Shared state for all routes.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<OrderStore>,
}

/// GET /orders — the order list query endpoint.
///
/// Raw parameters go straight into the normalizer; malformed values are
/// defaulted, never rejected.
pub async fn list_orders(
    State(state): State<AppState>,
    Query(raw): Query<RawOrdersQuery>,
) -> Json<OrdersPage> {
    Json(state.store.query(&raw))
}

/// GET /orders/statuses — the fixed status vocabulary for filter UIs.
pub async fn order_statuses(State(state): State<AppState>) -> Json<Vec<OrderStatus>> {
    Json(state.store.statuses().to_vec())
}

/// GET /dashboard — the overview page summary.
pub async fn dashboard_summary() -> Json<DashboardSummary> {
    Json(DashboardSummary::sample())
}

/// Health check endpoint handler
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Fallback for unknown routes.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::not_found(uri.path())),
    )
}
