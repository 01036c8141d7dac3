//! # pf-config
//!
//! Layered configuration loading for PayFlow using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PAYFLOW_*` prefix, `__` as separator)
//! 2. Legacy environment variables (`PORT`, `HOST`, `NODE_ENV`, `API_KEY`,
//!    `GEMINI_MODEL`, `VITE_API_BASE`, `VITE_UMBRELLA_ID`)
//! 3. Project-level `payflow.toml`
//! 4. User-level `~/.config/payflow/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `PAYFLOW_SERVER__PORT` -> `server.port`, `PAYFLOW_AI__API_KEY`
//! -> `ai.api_key`, etc. The `__` (double underscore) separates nested
//! config sections.
//!
//! # Usage
//!
//! ```no_run
//! use pf_config::PayflowConfig;
//!
//! let config = PayflowConfig::load_with_dotenv().expect("config");
//!
//! if config.ai.is_configured() {
//!     println!("model: {}", config.ai.model);
//! }
//! ```

mod ai;
mod error;
mod gateway;
mod ledger;
mod server;

pub use ai::AiConfig;
pub use error::ConfigError;
pub use gateway::GatewayConfig;
pub use ledger::LedgerConfig;
pub use server::ServerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Unprefixed variable names the dashboard deployment already uses, and the
/// config key each one feeds.
pub const LEGACY_ENV: &[(&str, &str)] = &[
    ("PORT", "server.port"),
    ("HOST", "server.host"),
    ("NODE_ENV", "server.environment"),
    ("API_KEY", "ai.api_key"),
    ("GEMINI_MODEL", "ai.model"),
    ("VITE_API_BASE", "gateway.api_base"),
    ("VITE_UMBRELLA_ID", "gateway.umbrella_id"),
];

/// Project-local config file name.
pub const LOCAL_CONFIG_FILE: &str = "payflow.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PayflowConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub ai: AiConfig,
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub ledger: LedgerConfig,
}

impl PayflowConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source fails to parse or a value
    /// has the wrong type, and [`ConfigError::ZeroTimeout`] if a request
    /// timeout is zero.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that parse but cannot work at runtime.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroTimeout`] for a zero `ai.timeout_secs` or
    /// `gateway.timeout_secs`.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.ai.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout {
                field: "ai.timeout_secs",
            });
        }
        if self.gateway.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout {
                field: "gateway.timeout_secs",
            });
        }
        Ok(())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests and binaries can layer extra providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Legacy unprefixed variables
        figment = figment.merge(Self::legacy_env());

        // Layer 4: Prefixed environment variables (highest priority)
        figment.merge(Env::prefixed("PAYFLOW_").split("__"))
    }

    /// Env provider reading only the [`LEGACY_ENV`] names.
    fn legacy_env() -> Env {
        Env::raw().filter_map(|key| {
            LEGACY_ENV
                .iter()
                .find(|(name, _)| key.as_str().eq_ignore_ascii_case(name))
                .map(|(_, path)| (*path).into())
        })
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("payflow").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) looking for a `.env`
    /// file, then falls back to the current directory. Silently does nothing
    /// if no `.env` is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = PayflowConfig::default();
        assert!(!config.ai.is_configured());
        assert_eq!(config.server.port, 5051);
        assert_eq!(config.gateway.umbrella_id, "GLB-HQ");
        assert!(config.ledger.seed);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut config = PayflowConfig::default();
        assert!(config.validate().is_ok());
        config.gateway.timeout_secs = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroTimeout {
                field: "gateway.timeout_secs"
            })
        ));
    }

    #[test]
    fn legacy_names_map_to_known_sections() {
        for (_, path) in LEGACY_ENV {
            let section = path.split('.').next().unwrap();
            assert!(
                ["server", "ai", "gateway"].contains(&section),
                "unexpected section for {path}"
            );
        }
    }
}
