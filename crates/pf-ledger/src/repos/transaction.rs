//! Transaction repository: list and upsert.

use pf_core::entities::Transaction;

use crate::LedgerStore;
use crate::error::LedgerError;

impl LedgerStore {
    pub async fn list_transactions(&self, umbrella: &str) -> Vec<Transaction> {
        self.with_tenant(umbrella, |t| t.transactions.to_vec()).await
    }

    /// Replace the transaction with the same id, or insert it at the front.
    /// Returns `true` when the transaction was new.
    pub async fn upsert_transaction(
        &self,
        umbrella: &str,
        transaction: Transaction,
    ) -> Result<bool, LedgerError> {
        transaction.validate()?;
        let id = transaction.id.clone();
        let inserted = self
            .with_tenant_mut(umbrella, |t| t.transactions.upsert(transaction))
            .await;
        tracing::info!(umbrella, %id, inserted, "transaction upserted");
        Ok(inserted)
    }
}
