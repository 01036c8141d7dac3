//! Client-side Insight Gateway configuration.

use serde::{Deserialize, Serialize};

fn default_api_base() -> String {
    String::from("http://127.0.0.1:5051/api")
}

fn default_umbrella_id() -> String {
    String::from("GLB-HQ")
}

/// Default retry count. Three attempts in total.
const fn default_max_retries() -> u32 {
    2
}

const fn default_base_delay_ms() -> u64 {
    1000
}

const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GatewayConfig {
    /// Root of the PayFlow API (`VITE_API_BASE`).
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Tenant sent as `x-umbrella-id` (`VITE_UMBRELLA_ID`).
    #[serde(default = "default_umbrella_id")]
    pub umbrella_id: String,

    /// Retries after the first attempt.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Backoff unit; retry `k` waits `k * base_delay_ms`.
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            umbrella_id: default_umbrella_id(),
            max_retries: default_max_retries(),
            base_delay_ms: default_base_delay_ms(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GatewayConfig {
    /// `api_base` without a trailing slash, ready for path joining.
    #[must_use]
    pub fn api_root(&self) -> &str {
        self.api_base.trim_end_matches('/')
    }
}
