//! Strategic partnership repository.

use chrono::Utc;

use pf_core::entities::{NewPartnership, Partnership};

use crate::LedgerStore;
use crate::error::LedgerError;

impl LedgerStore {
    pub async fn list_partnerships(&self, umbrella: &str) -> Vec<Partnership> {
        self.with_tenant(umbrella, |t| t.partnerships.to_vec()).await
    }

    /// Bind a new partnership and append it.
    pub async fn bind_partnership(
        &self,
        umbrella: &str,
        new: NewPartnership,
    ) -> Result<Partnership, LedgerError> {
        new.validate()?;
        self.with_tenant_mut(umbrella, |t| {
            let id = t.partnerships.fresh_id()?;
            let partnership = new.into_partnership(id, Utc::now());
            tracing::info!(
                umbrella,
                id = %partnership.id,
                partner = %partnership.partner,
                "partnership bound"
            );
            t.partnerships.append(partnership.clone());
            Ok(partnership)
        })
        .await
    }
}
