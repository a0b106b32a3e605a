//! HTTP exposure: a thin axum layer over the query engine
//!
//! The server owns no logic of its own; handlers extract raw parameters,
//! call the store and encode the envelope. The "never fails" contract of
//! the pipeline carries through: every query request returns 200 with a
//! well-formed body.

pub mod handlers;
pub mod router;

pub use handlers::AppState;
pub use router::build_router;

use crate::config::ServerConfig;
use crate::orders::OrderStore;
use anyhow::Result;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Bind and serve the dashboard API with the given configuration.
pub async fn serve(config: ServerConfig) -> Result<()> {
    let store = Arc::new(OrderStore::with_options(
        config.dataset.count,
        config.dataset.recompute_date_labels,
    ));
    let app = build_router(AppState { store });

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
