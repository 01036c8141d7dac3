//! Failures while loading or resolving PayFlow configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source failed to parse or a value had the wrong type.
    #[error("failed to load PayFlow configuration: {0}")]
    Figment(#[from] figment::Error),

    /// `server.host` must be a literal IP address to bind.
    #[error("server.host '{host}' is not an IP address")]
    InvalidHost { host: String },

    /// A request timeout of zero would fail every call.
    #[error("'{field}' must be at least 1 second")]
    ZeroTimeout { field: &'static str },
}
