//! Tokensum - checksum and pseudorandom token HTTP service.
//!
//! The crate is split into small building blocks:
//!
//! - **checksum**: MD5 hex digest of a string (always available)
//! - **tokens**: pseudorandom hex tokens (always available)
//! - **config**: Configuration from environment variables
//! - **api**: axum router exposing `/`, `/checksum`, `/tokens` and `/form`
//! - **bootstrap**: Tracing initialization utilities
//!
//! # Features
//!
//! - `config` - Configuration utilities (enabled by default)
//! - `bootstrap` - Tracing setup (enabled by default)
//! - `server` - HTTP routes and handlers (enabled by default)
//! - `full` - All features
//!
//! # Example
//!
//! ```rust,ignore
//! use tokensum::{create_router, init_tracing, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env();
//!     init_tracing("tokensum=info", config.log_format);
//!
//!     let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
//!     axum::serve(listener, create_router(&config)).await?;
//!     Ok(())
//! }
//! ```

pub mod checksum;
pub mod tokens;

#[cfg(feature = "config")]
pub mod config;

#[cfg(feature = "server")]
pub mod api;

#[cfg(feature = "bootstrap")]
pub mod bootstrap;

/// Human-readable service name.
pub const SERVICE_NAME: &str = "Tokensum";

/// Crate version, reported at startup.
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

// Re-exports for convenience
pub use checksum::checksum;
pub use tokens::{generate_token, generate_tokens};

#[cfg(feature = "config")]
pub use config::{LogFormat, ServerConfig};

#[cfg(feature = "server")]
pub use api::{create_router, ApiError, AppState};

#[cfg(feature = "bootstrap")]
pub use bootstrap::init_tracing;
