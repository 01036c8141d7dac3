//! Region repository: list, create, toggle, rail add/remove.

use pf_core::entities::{NewRegion, Region};
use pf_core::enums::EntityType;

use crate::LedgerStore;
use crate::error::LedgerError;

impl LedgerStore {
    pub async fn list_regions(&self, umbrella: &str) -> Vec<Region> {
        self.with_tenant(umbrella, |t| t.regions.to_vec()).await
    }

    /// Validate and append a region. Returns the full region list.
    pub async fn create_region(
        &self,
        umbrella: &str,
        new: NewRegion,
    ) -> Result<Vec<Region>, LedgerError> {
        new.validate()?;
        self.with_tenant_mut(umbrella, |t| {
            let id = t.regions.fresh_id()?;
            tracing::info!(umbrella, %id, code = %new.code, "region created");
            t.regions.append(new.into_region(id));
            Ok(t.regions.to_vec())
        })
        .await
    }

    /// Flip a region between `ACTIVE` and `SUSPENDED`.
    pub async fn toggle_region(&self, umbrella: &str, id: &str) -> Result<Region, LedgerError> {
        self.with_tenant_mut(umbrella, |t| {
            let region = t.regions.get_mut(id)?;
            region.status = region.status.toggled();
            tracing::info!(umbrella, id, status = %region.status, "region toggled");
            Ok(region.clone())
        })
        .await
    }

    /// Attach a rail to a region. Adding a rail that is already attached is
    /// a no-op. Returns the region's rails.
    pub async fn add_rail(
        &self,
        umbrella: &str,
        id: &str,
        rail: &str,
    ) -> Result<Vec<String>, LedgerError> {
        let rail = rail.trim();
        if rail.is_empty() {
            return Err(LedgerError::Validation("'railName' must not be empty".into()));
        }
        self.with_tenant_mut(umbrella, |t| {
            let region = t.regions.get_mut(id)?;
            if !region.rails.iter().any(|r| r == rail) {
                region.rails.push(rail.to_string());
                tracing::info!(umbrella, id, rail, "rail added");
            }
            Ok(region.rails.clone())
        })
        .await
    }

    /// Detach a rail, matched after trimming like [`Self::add_rail`]. A
    /// missing region or a rail the region does not carry is `NotFound`.
    pub async fn remove_rail(&self, umbrella: &str, id: &str, rail: &str) -> Result<(), LedgerError> {
        let rail = rail.trim();
        self.with_tenant_mut(umbrella, |t| {
            let region = t.regions.get_mut(id)?;
            let pos = region
                .rails
                .iter()
                .position(|r| r == rail)
                .ok_or_else(|| LedgerError::not_found(EntityType::Rail, rail))?;
            region.rails.remove(pos);
            tracing::info!(umbrella, id, rail, "rail removed");
            Ok(())
        })
        .await
    }
}
