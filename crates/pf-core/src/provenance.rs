//! Provenance wrapper for AI-derived values.
//!
//! Serialized as `{ "kind": "live" | "fallback", "value": ... }` so the
//! dashboard can show a degraded-mode banner instead of presenting fallback
//! numbers as real.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An insight value tagged with where it came from.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Insight<T> {
    /// Parsed from a live model answer.
    Live(T),
    /// The shape's hard-coded default; the model was unavailable or its
    /// answer did not parse.
    Fallback(T),
}

impl<T> Insight<T> {
    #[must_use]
    pub const fn is_live(&self) -> bool {
        matches!(self, Self::Live(_))
    }

    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }

    #[must_use]
    pub const fn value(&self) -> &T {
        match self {
            Self::Live(v) | Self::Fallback(v) => v,
        }
    }

    #[must_use]
    pub fn into_value(self) -> T {
        match self {
            Self::Live(v) | Self::Fallback(v) => v,
        }
    }

    /// Transform the value, keeping its provenance.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Insight<U> {
        match self {
            Self::Live(v) => Insight::Live(f(v)),
            Self::Fallback(v) => Insight::Fallback(f(v)),
        }
    }

    #[must_use]
    pub const fn provenance(&self) -> &'static str {
        match self {
            Self::Live(_) => "live",
            Self::Fallback(_) => "fallback",
        }
    }
}
