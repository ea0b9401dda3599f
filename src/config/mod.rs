//! Configuration management with environment variable support.

mod base;

pub use base::{LogFormat, ServerConfig};
