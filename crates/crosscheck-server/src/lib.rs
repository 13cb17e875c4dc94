//! HTTP boundary for the discrepancy engine.

mod error;
mod routes;

pub use error::ApiError;
pub use routes::router;

use crosscheck_config::ServerConfig;
use crosscheck_core::Engine;
use log::info;
use std::sync::Arc;

/// Bind and serve the route table until the process is stopped.
pub async fn serve(config: &ServerConfig, engine: Arc<Engine>) -> std::io::Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening (addr={})", addr);
    axum::serve(listener, router(engine)).await
}
