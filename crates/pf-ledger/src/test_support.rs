//! Shared test utilities for pf-ledger unit tests.

#[cfg(test)]
pub(crate) mod helpers {
    use chrono::Utc;
    use pf_core::entities::{NewApproval, NewRegion, Transaction};
    use pf_core::enums::{ApprovalType, TransactionStatus};

    use crate::LedgerStore;

    /// Umbrella id used by single-tenant tests.
    pub const TENANT: &str = "GLB-HQ";

    /// Store whose tenants start empty.
    pub fn test_store() -> LedgerStore {
        LedgerStore::empty()
    }

    /// Store whose tenants start from the seed snapshot.
    pub fn seeded_store() -> LedgerStore {
        LedgerStore::seeded()
    }

    pub fn new_region(code: &str) -> NewRegion {
        NewRegion {
            name: format!("Region {code}"),
            code: code.into(),
            currency: "BRL".into(),
            rails: vec!["PIX".into()],
            liquidity: 100_000.0,
            status: None,
        }
    }

    pub fn new_approval(kind: ApprovalType) -> NewApproval {
        NewApproval {
            kind,
            requester: "A".into(),
            details: "d".into(),
        }
    }

    pub fn transaction(id: &str) -> Transaction {
        Transaction {
            id: id.into(),
            reference: "INV-9000".into(),
            amount: 1_250.0,
            currency: "USD".into(),
            counterparty: "Acme".into(),
            corridor: None,
            status: TransactionStatus::Pending,
            timestamp: Utc::now(),
        }
    }
}
