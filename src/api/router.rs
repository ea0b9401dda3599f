//! Route table and middleware stack.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use super::handlers::{checksum_text, form_page, issue_tokens, welcome, AppState};
use crate::config::ServerConfig;

/// Build the service router from the given config.
///
/// # Example
///
/// ```rust,ignore
/// use tokensum::{create_router, ServerConfig};
///
/// let config = ServerConfig::from_env();
/// let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
/// axum::serve(listener, create_router(&config)).await?;
/// ```
pub fn create_router(config: &ServerConfig) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/checksum", post(checksum_text))
        .route("/tokens", post(issue_tokens))
        .route("/form", get(form_page))
        .with_state(AppState::new(&config.participant))
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
