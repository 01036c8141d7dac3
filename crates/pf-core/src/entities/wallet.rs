use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Record;
use crate::enums::EntityType;
use crate::ids::PREFIX_WALLET;

/// A treasury wallet or operating account balance.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub id: String,
    pub label: String,
    pub currency: String,
    pub balance: f64,
    /// Settlement network, e.g. `"SWIFT"` or `"SEPA"`.
    pub network: String,
}

impl Record for Wallet {
    const ENTITY: EntityType = EntityType::Wallet;
    const PREFIX: &'static str = PREFIX_WALLET;

    fn id(&self) -> &str {
        &self.id
    }
}
