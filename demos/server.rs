//! Runnable demo: serve the dashboard API on localhost
//!
//! ```sh
//! cargo run --example server
//! # optionally: OPSBOARD_CONFIG=opsboard.yaml cargo run --example server
//! curl 'http://127.0.0.1:3000/orders?status=Pending&sort=user&dir=asc&page=2'
//! ```

use opsboard::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::var("OPSBOARD_CONFIG") {
        Ok(path) => ServerConfig::from_yaml_file(&path)?,
        Err(_) => ServerConfig::default(),
    };

    serve(config).await
}
