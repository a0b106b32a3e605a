//! # Opsboard
//!
//! Backend for a client-rendered admin dashboard: a deterministic
//! synthetic order dataset behind a filterable, sortable, paginated query
//! engine, plus the fixed numbers behind the overview page.
//!
//! ## Features
//!
//! - **Deterministic dataset**: 137 orders from a seeded LCG stream,
//!   generated once per process and memoized
//! - **Defensive normalization**: every raw query parameter degrades to a
//!   safe default; the pipeline has no error path
//! - **Stable querying**: exact status filter, case-insensitive
//!   multi-field search, stable sort, page-clamping pagination
//! - **Thin HTTP layer**: an axum router that only extracts, calls the
//!   engine and encodes JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use opsboard::prelude::*;
//!
//! let store = OrderStore::new();
//!
//! let result = store.query(&RawOrdersQuery {
//!     q: Some("cm9801".to_string()),
//!     ..RawOrdersQuery::default()
//! });
//!
//! assert_eq!(result.total, 1);
//! assert_eq!(result.items[0].id, "#CM9801");
//! ```

pub mod config;
pub mod core;
pub mod dashboard;
pub mod orders;
pub mod server;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Types ===
    pub use crate::core::{
        order::{Order, OrderStatus, SortDir, SortKey, StatusFilter},
        query::{OrdersPage, OrdersQuery, RawOrdersQuery},
    };

    // === Dataset & Engine ===
    pub use crate::orders::{generate_orders, OrderStore};

    // === Dashboard ===
    pub use crate::dashboard::DashboardSummary;

    // === Config ===
    pub use crate::config::ServerConfig;

    // === Server ===
    pub use crate::server::{build_router, serve, AppState};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
}
