//! HTTP surface: routing, middleware stack, and the serve loop.

use std::any::Any;
use std::future::Future;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::{info, Level};

use crate::config::ServerConfig;
use crate::error::AnalyzeError;

pub mod handlers;

/// Hard ceiling on an uploaded attachment's payload, in bytes.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Transport allowance on top of [`MAX_UPLOAD_BYTES`] for multipart framing
/// and headers. A payload slightly over the ceiling still reaches the size
/// gate and gets the JSON rejection; only bodies beyond ceiling plus
/// allowance are refused at the transport layer.
pub const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

/// Assemble the application router with its middleware stack.
pub fn build_router(config: Arc<ServerConfig>) -> Router {
    let state = AppState { config };

    Router::new()
        .route(
            "/api/analyze",
            post(handlers::analyze)
                .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + MULTIPART_OVERHEAD)),
        )
        .route("/api/ping", get(handlers::ping))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

/// Bind and serve until `shutdown` resolves.
pub async fn serve(
    config: ServerConfig,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    let bind_addr = config.bind_addr();
    let router = build_router(Arc::new(config));

    let listener = TcpListener::bind(&bind_addr).await?;
    info!("DetectFake listening on http://{bind_addr}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}

/// Convert a handler panic into the analysis failure response.
///
/// Routed through [`AnalyzeError`] so the wire body stays identical to
/// every other internal failure.
fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = err.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "opaque panic payload".to_string()
    };

    AnalyzeError::Internal(anyhow::anyhow!("handler panicked: {detail}")).into_response()
}
