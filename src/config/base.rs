//! Server configuration.

use std::time::Duration;

/// Output format for log lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines on stderr
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Some(Self::Pretty),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Configuration for the HTTP service.
///
/// Reads from environment variables with sensible defaults:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | `HOST` | `127.0.0.1` | Server bind address |
/// | `PORT` | `8000` | Server port |
/// | `PARTICIPANT_NAME` | `friend` | Name shown in the welcome message and form |
/// | `REQUEST_TIMEOUT_SECS` | `30` | Per-request timeout |
/// | `LOG_FORMAT` | `pretty` | `pretty` or `json` |
///
/// # Example
///
/// ```rust
/// use tokensum::ServerConfig;
///
/// let config = ServerConfig::from_env();
/// println!("listening on {}", config.socket_addr());
/// ```
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Server bind address (default: 127.0.0.1)
    pub host: String,
    /// Server port (default: 8000)
    pub port: u16,
    /// Participant greeted by `/` and `/form` (default: friend)
    pub participant: String,
    /// Per-request timeout (default: 30s)
    pub request_timeout: Duration,
    /// Log output format (default: pretty)
    pub log_format: LogFormat,
}

impl ServerConfig {
    pub const DEFAULT_HOST: &'static str = "127.0.0.1";
    pub const DEFAULT_PORT: u16 = 8000;
    pub const DEFAULT_PARTICIPANT: &'static str = "friend";
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Create a new config from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| Self::DEFAULT_HOST.to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(Self::DEFAULT_PORT),
            participant: std::env::var("PARTICIPANT_NAME")
                .ok()
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| Self::DEFAULT_PARTICIPANT.to_string()),
            request_timeout: std::env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .unwrap_or(Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS)),
            log_format: std::env::var("LOG_FORMAT")
                .ok()
                .and_then(|f| LogFormat::parse(&f))
                .unwrap_or_default(),
        }
    }

    /// Get the socket address for binding.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: Self::DEFAULT_HOST.to_string(),
            port: Self::DEFAULT_PORT,
            participant: Self::DEFAULT_PARTICIPANT.to_string(),
            request_timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
            log_format: LogFormat::default(),
        }
    }
}
