//! Read-only collections: webhook log, employees, wallets.

use pf_core::entities::{Employee, Wallet, WebhookEvent};

use crate::LedgerStore;

impl LedgerStore {
    /// Webhook delivery log, newest first.
    pub async fn list_webhooks(&self, umbrella: &str) -> Vec<WebhookEvent> {
        self.with_tenant(umbrella, |t| t.webhooks.to_vec()).await
    }

    pub async fn list_employees(&self, umbrella: &str) -> Vec<Employee> {
        self.with_tenant(umbrella, |t| t.employees.to_vec()).await
    }

    pub async fn list_wallets(&self, umbrella: &str) -> Vec<Wallet> {
        self.with_tenant(umbrella, |t| t.wallets.to_vec()).await
    }
}
