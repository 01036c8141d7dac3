//! HTTP server configuration.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default listen port.
const fn default_port() -> u16 {
    5051
}

fn default_environment() -> String {
    String::from("development")
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("dist")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Listen address. Empty means "pick by environment": `0.0.0.0` in
    /// production, `127.0.0.1` otherwise.
    #[serde(default)]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Deployment environment (`NODE_ENV`), e.g. `production`.
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Built single-page app to serve when the directory exists.
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: default_port(),
            environment: default_environment(),
            static_dir: default_static_dir(),
        }
    }
}

impl ServerConfig {
    #[must_use]
    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }

    /// The host to bind, after applying the environment default.
    #[must_use]
    pub fn bind_host(&self) -> &str {
        if !self.host.is_empty() {
            &self.host
        } else if self.is_production() {
            "0.0.0.0"
        } else {
            "127.0.0.1"
        }
    }

    /// Resolve the listen socket address.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHost`] if the host is not an IP address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let host = self.bind_host();
        let ip: IpAddr = host.parse().map_err(|_| ConfigError::InvalidHost {
            host: host.to_string(),
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
