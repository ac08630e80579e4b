//! HTTP collector mode: builds a mapping from documents posted over HTTP

use axum::{
    extract::State,
    http::{Method, StatusCode},
    routing::{any, get},
    Router,
};
use bytes::Bytes;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::signal::unix::{signal, SignalKind};
use tower_http::trace::TraceLayer;

use crate::collector::SchemaCollector;
use crate::error::{Error, ErrorTally, Result};
use crate::mapping::MappingRenderer;
use crate::output::write_json;
use crate::schema::walk_document;
use crate::types::JsonObject;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to listen on
    pub port: u16,

    /// Output file for the final mapping (stdout when absent)
    pub output: Option<PathBuf>,
}

/// App state shared across handlers
pub struct AppState {
    /// Aggregate schema built from every accepted document
    pub collector: SchemaCollector,

    /// Process-wide error accumulator
    pub tally: ErrorTally,
}

impl AppState {
    /// Create collector state around an existing tally handle
    #[must_use]
    pub fn new(tally: ErrorTally) -> Self {
        Self {
            collector: SchemaCollector::new(),
            tally,
        }
    }
}

/// Build the collector router
///
/// `/post` is registered for every method so that non-POST requests are
/// rejected (and counted) by the handler instead of the framework.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/post", any(ingest))
        .route("/ping", get(ping))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the collector server
///
/// Runs until SIGINT or SIGTERM, then renders the aggregate schema and
/// writes the mapping document exactly once.
pub async fn serve(config: ServerConfig, tally: ErrorTally) -> Result<()> {
    let state = Arc::new(AppState::new(tally));
    let router = app(state.clone());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::server(format!("Failed to bind to port {}: {e}", config.port)))?;
    tracing::info!("Collecting documents on http://{}", addr);

    let mut interrupt = signal(SignalKind::interrupt())
        .map_err(|e| Error::server(format!("Failed to install SIGINT handler: {e}")))?;
    let mut terminate = signal(SignalKind::terminate())
        .map_err(|e| Error::server(format!("Failed to install SIGTERM handler: {e}")))?;
    let shutdown = async move {
        tokio::select! {
            _ = interrupt.recv() => tracing::info!("Received SIGINT, shutting down"),
            _ = terminate.recv() => tracing::info!("Received SIGTERM, shutting down"),
        }
    };

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| Error::server(format!("Server error: {e}")))?;

    flush(&state, config.output.as_deref())
}

/// Render the aggregate schema and write the final mapping document
pub fn flush(state: &AppState, output: Option<&Path>) -> Result<()> {
    let stats = state.collector.stats();
    tracing::info!(
        "Collected {} fields: {} documents accepted, {} rejected, {} observations in {} batches",
        state.collector.field_count(),
        stats.success_count,
        stats.failure_count,
        stats.total_observations,
        stats.total_batches
    );

    let tree = state.collector.materialize();
    let document = MappingRenderer::new().render(&tree, &state.tally);
    write_json(output, &document)
}

/// Ingest one JSON document into the aggregate schema
async fn ingest(State(state): State<Arc<AppState>>, method: Method, body: Bytes) -> StatusCode {
    if method != Method::POST || body.is_empty() {
        state.collector.record_failure();
        state.tally.record();
        return StatusCode::BAD_REQUEST;
    }

    let document: JsonObject = match serde_json::from_slice(&body) {
        Ok(document) => document,
        Err(e) => {
            tracing::debug!("Rejecting unparseable document: {}", e);
            state.collector.record_failure();
            state.tally.record();
            return StatusCode::CONFLICT;
        }
    };

    state.collector.add(walk_document("", &document));
    state.collector.record_success();
    StatusCode::OK
}

/// Liveness probe
async fn ping() -> &'static str {
    "OK"
}
