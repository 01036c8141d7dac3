//! Mock ledger configuration.

use serde::{Deserialize, Serialize};

const fn default_seed() -> bool {
    true
}

const fn default_max_tenants() -> usize {
    1024
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LedgerConfig {
    /// Whether each tenant's ledger starts from the demo seed snapshot.
    /// Off gives every tenant empty collections.
    #[serde(default = "default_seed")]
    pub seed: bool,

    /// Live tenant ledgers kept in memory; the oldest is dropped past this.
    #[serde(default = "default_max_tenants")]
    pub max_tenants: usize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            max_tenants: default_max_tenants(),
        }
    }
}
