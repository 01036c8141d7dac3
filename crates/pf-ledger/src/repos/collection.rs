//! Collections repository: list and whole-list replace.

use pf_core::entities::Collection;

use crate::LedgerStore;
use crate::error::LedgerError;
use crate::table::Table;

impl LedgerStore {
    pub async fn list_collections(&self, umbrella: &str) -> Vec<Collection> {
        self.with_tenant(umbrella, |t| t.collections.to_vec()).await
    }

    /// Swap the tenant's collection list for `collections`.
    ///
    /// Every entry is validated before anything is replaced. Entries without
    /// an id get a fresh `COL-XXXX` one. Returns the number stored.
    pub async fn replace_collections(
        &self,
        umbrella: &str,
        collections: Vec<Collection>,
    ) -> Result<usize, LedgerError> {
        for collection in &collections {
            collection.validate()?;
        }
        let mut table = Table::from_rows(collections);
        for index in 0..table.len() {
            if table.rows()[index].id.trim().is_empty() {
                let id = table.fresh_id()?;
                table.rows_mut()[index].id = id;
            }
        }

        let count = table.len();
        self.with_tenant_mut(umbrella, |t| {
            t.collections = table;
        })
        .await;
        tracing::info!(umbrella, count, "collections replaced");
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pf_core::entities::Collection;
    use pf_core::enums::CollectionStatus;
    use pretty_assertions::assert_eq;

    use crate::error::LedgerError;
    use crate::test_support::helpers::{TENANT, seeded_store};

    fn collection(id: &str, payer: &str) -> Collection {
        Collection {
            id: id.into(),
            payer: payer.into(),
            amount: 1_000.0,
            currency: "USD".into(),
            due_date: NaiveDate::from_ymd_opt(2026, 11, 1).unwrap(),
            status: CollectionStatus::Scheduled,
        }
    }

    #[tokio::test]
    async fn replace_swaps_whole_list() {
        let store = seeded_store();
        let count = store
            .replace_collections(TENANT, vec![collection("COL-AAAA", "Acme")])
            .await
            .unwrap();
        assert_eq!(count, 1);
        assert_eq!(
            store.list_collections(TENANT).await,
            vec![collection("COL-AAAA", "Acme")]
        );
    }

    #[tokio::test]
    async fn replace_assigns_missing_ids() {
        let store = seeded_store();
        store
            .replace_collections(TENANT, vec![collection("", "Acme"), collection("", "Globex")])
            .await
            .unwrap();
        let listed = store.list_collections(TENANT).await;
        assert!(listed.iter().all(|c| c.id.starts_with("COL-")));
        assert_ne!(listed[0].id, listed[1].id);
    }

    #[tokio::test]
    async fn invalid_entry_leaves_list_untouched() {
        let store = seeded_store();
        let before = store.list_collections(TENANT).await;
        let err = store
            .replace_collections(TENANT, vec![collection("COL-AAAA", "Acme"), collection("", "")])
            .await
            .unwrap_err();
        assert!(matches!(err, LedgerError::Validation(_)));
        assert_eq!(store.list_collections(TENANT).await, before);
    }

    #[tokio::test]
    async fn replace_with_empty_list_clears() {
        let store = seeded_store();
        store.replace_collections(TENANT, Vec::new()).await.unwrap();
        assert!(store.list_collections(TENANT).await.is_empty());
    }
}
