//! # pf-ledger
//!
//! In-memory mock ledger behind the PayFlow REST API.
//!
//! The store is partitioned by umbrella id (the `x-umbrella-id` header). Each
//! tenant gets its own [`TenantLedger`], created lazily on first access from
//! the seed snapshot (or empty when seeding is disabled). Tenants never see
//! each other's writes.
//!
//! All tenants sit behind one `tokio::sync::RwLock`. Every repository method
//! takes the lock exactly once, so each operation is atomic with respect to
//! every other.
//!
//! The header is caller-controlled, so the number of live tenants is capped
//! ([`DEFAULT_MAX_TENANTS`] unless configured). Materializing one past the
//! cap evicts the oldest tenant; its next request starts over from the seed.

pub mod error;
pub mod repos;
pub mod seed;
pub mod table;
pub mod tenant;

#[cfg(test)]
mod test_support;

use std::collections::{HashMap, VecDeque};

use tokio::sync::RwLock;

pub use error::LedgerError;
pub use repos::trade::TradeExecution;
pub use tenant::TenantLedger;

/// Live tenants kept before the oldest is evicted.
pub const DEFAULT_MAX_TENANTS: usize = 1024;

/// Tenant ledgers plus their materialization order, oldest first.
#[derive(Debug, Default)]
struct Tenants {
    ledgers: HashMap<String, TenantLedger>,
    order: VecDeque<String>,
}

/// Tenant-partitioned, process-local ledger.
#[derive(Debug)]
pub struct LedgerStore {
    tenants: RwLock<Tenants>,
    seed: bool,
    max_tenants: usize,
}

impl Default for LedgerStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl LedgerStore {
    /// Create a store. With `seed` set, new tenants start from the seed
    /// snapshot; otherwise they start empty.
    #[must_use]
    pub fn new(seed: bool) -> Self {
        Self {
            tenants: RwLock::new(Tenants::default()),
            seed,
            max_tenants: DEFAULT_MAX_TENANTS,
        }
    }

    /// Cap the number of live tenants. Zero is treated as one.
    #[must_use]
    pub fn with_max_tenants(mut self, max_tenants: usize) -> Self {
        self.max_tenants = max_tenants.max(1);
        self
    }

    #[must_use]
    pub fn seeded() -> Self {
        Self::new(true)
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::new(false)
    }

    /// Whether new tenants start from the seed snapshot.
    #[must_use]
    pub const fn seeds_tenants(&self) -> bool {
        self.seed
    }

    #[must_use]
    pub const fn max_tenants(&self) -> usize {
        self.max_tenants
    }

    /// Number of live tenants.
    pub async fn tenant_count(&self) -> usize {
        self.tenants.read().await.ledgers.len()
    }

    /// Whether `umbrella` currently has a ledger.
    pub async fn has_tenant(&self, umbrella: &str) -> bool {
        self.tenants.read().await.ledgers.contains_key(umbrella)
    }

    /// The tenant's ledger, materializing it (and evicting the oldest tenant
    /// when at the cap) on first touch.
    fn materialize<'a>(&self, tenants: &'a mut Tenants, umbrella: &str) -> &'a mut TenantLedger {
        let Tenants { ledgers, order } = tenants;
        if !ledgers.contains_key(umbrella) {
            while ledgers.len() >= self.max_tenants {
                let Some(oldest) = order.pop_front() else {
                    break;
                };
                ledgers.remove(&oldest);
                tracing::warn!(evicted = %oldest, max = self.max_tenants, "tenant cap reached, evicting oldest ledger");
            }
        }
        ledgers.entry(umbrella.to_string()).or_insert_with(|| {
            tracing::info!(umbrella, seeded = self.seed, "materializing tenant ledger");
            order.push_back(umbrella.to_string());
            if self.seed {
                TenantLedger::seeded()
            } else {
                TenantLedger::empty()
            }
        })
    }

    /// Run a read-only closure against a tenant's ledger.
    ///
    /// Takes the read lock when the tenant already exists; a first touch
    /// upgrades to the write lock to materialize it.
    pub(crate) async fn with_tenant<R>(
        &self,
        umbrella: &str,
        f: impl FnOnce(&TenantLedger) -> R,
    ) -> R {
        {
            let tenants = self.tenants.read().await;
            if let Some(ledger) = tenants.ledgers.get(umbrella) {
                return f(ledger);
            }
        }
        let mut tenants = self.tenants.write().await;
        f(&*self.materialize(&mut tenants, umbrella))
    }

    /// Run a mutating closure against a tenant's ledger under the write lock.
    pub(crate) async fn with_tenant_mut<R>(
        &self,
        umbrella: &str,
        f: impl FnOnce(&mut TenantLedger) -> R,
    ) -> R {
        let mut tenants = self.tenants.write().await;
        f(self.materialize(&mut tenants, umbrella))
    }
}
