//! Tracing initialization utilities.

use crate::config::LogFormat;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing with the given default filter and output format.
///
/// The filter can be overridden by the `RUST_LOG` environment variable.
/// Both formats write to stderr.
///
/// # Example
///
/// ```rust,no_run
/// use tokensum::{init_tracing, LogFormat};
///
/// init_tracing("tokensum=debug,tower_http=info,info", LogFormat::Pretty);
/// ```
///
/// # Filter Syntax
///
/// The filter follows the `tracing_subscriber::EnvFilter` syntax:
/// - `info` - Enable info level for all targets
/// - `tokensum=debug,info` - Debug for this crate, info for everything else
/// - `tower_http=debug` - Per-request spans from the HTTP trace layer
pub fn init_tracing(default_filter: &str, format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Pretty => registry
            .with(fmt::layer().with_writer(std::io::stderr).compact())
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().with_writer(std::io::stderr).json())
            .init(),
    }
}
