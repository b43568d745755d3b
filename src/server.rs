//! HTTP server initialization and runtime setup.

use crate::config::Config;
use crate::domain::EventSink;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

/// Runs the HTTP server with the given configuration.
///
/// Builds the shared state around `sink`, binds the listener, announces the
/// port on stdout and through the sink, then serves until Ctrl-C.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config, sink: Arc<dyn EventSink>) -> Result<()> {
    let state = AppState::new(
        sink.clone(),
        config.number_parsing,
        config.service_name.as_str(),
    );

    let app = NormalizePathLayer::trim_trailing_slash().layer(app_router(state));

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    let port = listener.local_addr()?.port();

    println!("Calculator microservice running at http://localhost:{port}");
    sink.info(&format!("Server started on port {port}"));

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal(sink.clone()))
        .await?;

    sink.info("Server stopped");

    Ok(())
}

async fn shutdown_signal(sink: Arc<dyn EventSink>) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        sink.error(&format!("Failed to listen for shutdown signal: {e}"));
        std::future::pending::<()>().await;
    }
    sink.info("Shutdown signal received");
}
