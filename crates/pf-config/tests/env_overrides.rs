//! Environment precedence tests.
//!
//! Uses figment::Jail for sandboxed env var manipulation.

use figment::Jail;
use pf_config::{ConfigError, PayflowConfig};

#[test]
fn legacy_variables_fill_config_values() {
    Jail::expect_with(|jail| {
        jail.set_env("HOST", "");
        jail.set_env("PORT", "8080");
        jail.set_env("NODE_ENV", "production");
        jail.set_env("API_KEY", "ai-key-from-legacy");
        jail.set_env("GEMINI_MODEL", "gemini-2.5-pro");
        jail.set_env("VITE_UMBRELLA_ID", "EU-OPS");

        let config = PayflowConfig::load().expect("config loads");
        assert_eq!(config.server.port, 8080);
        assert!(config.server.is_production());
        assert_eq!(config.server.bind_host(), "0.0.0.0");
        assert_eq!(config.ai.api_key, "ai-key-from-legacy");
        assert_eq!(config.ai.model, "gemini-2.5-pro");
        assert_eq!(config.gateway.umbrella_id, "EU-OPS");
        Ok(())
    });
}

#[test]
fn prefixed_variables_beat_legacy_variables() {
    Jail::expect_with(|jail| {
        jail.set_env("PORT", "8080");
        jail.set_env("PAYFLOW_SERVER__PORT", "9090");
        jail.set_env("API_KEY", "legacy");
        jail.set_env("PAYFLOW_AI__API_KEY", "prefixed");

        let config = PayflowConfig::load().expect("config loads");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.ai.api_key, "prefixed");
        Ok(())
    });
}

#[test]
fn unrelated_variables_are_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("SERVER", "nope");
        jail.set_env("MODEL", "nope");

        let config = PayflowConfig::load().expect("config loads");
        assert_eq!(config.ai.model, "gemini-2.5-flash");
        Ok(())
    });
}

#[test]
fn gateway_retry_policy_from_env() {
    Jail::expect_with(|jail| {
        jail.set_env("PAYFLOW_GATEWAY__MAX_RETRIES", "5");
        jail.set_env("PAYFLOW_GATEWAY__BASE_DELAY_MS", "250");

        let config = PayflowConfig::load().expect("config loads");
        assert_eq!(config.gateway.max_retries, 5);
        assert_eq!(config.gateway.base_delay_ms, 250);
        Ok(())
    });
}

#[test]
fn zero_ai_timeout_fails_to_load() {
    Jail::expect_with(|jail| {
        jail.set_env("PAYFLOW_AI__TIMEOUT_SECS", "0");

        let err = PayflowConfig::load().expect_err("zero timeout must not load");
        assert!(matches!(
            err,
            ConfigError::ZeroTimeout {
                field: "ai.timeout_secs"
            }
        ));
        Ok(())
    });
}
