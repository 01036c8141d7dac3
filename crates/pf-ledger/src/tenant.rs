//! One umbrella's slice of the ledger.

use pf_core::entities::{
    Approval, Collection, Employee, Partnership, Region, Transaction, Wallet, WebhookEvent,
};

use crate::table::Table;

/// Every collection belonging to a single umbrella id.
#[derive(Debug, Clone, Default)]
pub struct TenantLedger {
    pub regions: Table<Region>,
    pub approvals: Table<Approval>,
    pub transactions: Table<Transaction>,
    pub webhooks: Table<WebhookEvent>,
    pub employees: Table<Employee>,
    pub wallets: Table<Wallet>,
    pub collections: Table<Collection>,
    pub partnerships: Table<Partnership>,
}

impl TenantLedger {
    /// A tenant with no records at all.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// A tenant holding a fresh copy of the seed snapshot.
    #[must_use]
    pub fn seeded() -> Self {
        crate::seed::snapshot()
    }
}
