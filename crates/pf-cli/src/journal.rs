//! Local remittance-tracking journal: one JSON transaction per line.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::Context;

use pf_core::entities::Transaction;
use pf_core::ids::{PREFIX_TRANSACTION, generate_id};

/// File name of the journal inside the PayFlow data directory.
pub const JOURNAL_FILE: &str = "payflow_transactions.jsonl";

/// Maximum id draws before giving up on finding a free id.
const MAX_ID_DRAWS: usize = 16;

/// Draw ids until one is not in `taken`.
fn draw_unused(
    taken: &HashSet<String>,
    mut draw: impl FnMut() -> anyhow::Result<String>,
) -> anyhow::Result<String> {
    for _ in 0..MAX_ID_DRAWS {
        let id = draw()?;
        if !taken.contains(&id) {
            return Ok(id);
        }
        tracing::debug!(%id, "journal id collision, redrawing");
    }
    anyhow::bail!("no free transaction id after {MAX_ID_DRAWS} draws")
}

#[derive(Debug, Clone)]
pub struct RemitJournal {
    path: PathBuf,
}

impl RemitJournal {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data_dir>/payflow/payflow_transactions.jsonl`.
    pub fn default_path() -> anyhow::Result<PathBuf> {
        let data_dir = dirs::data_dir().context("no data directory for this platform")?;
        Ok(data_dir.join("payflow").join(JOURNAL_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All tracked remittances, oldest first. A missing file is empty.
    pub fn entries(&self) -> anyhow::Result<Vec<Transaction>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        serde_jsonlines::json_lines(&self.path)
            .with_context(|| format!("failed to open {}", self.path.display()))?
            .collect::<std::io::Result<Vec<Transaction>>>()
            .with_context(|| format!("corrupt journal {}", self.path.display()))
    }

    /// A `TXN-XXXX` id not used by any tracked remittance.
    pub fn fresh_id(&self) -> anyhow::Result<String> {
        let taken: HashSet<String> = self.entries()?.into_iter().map(|e| e.id).collect();
        draw_unused(&taken, || Ok(generate_id(PREFIX_TRANSACTION)?))
    }

    /// Record `txn`, replacing an entry with the same id. Returns `true` when
    /// the entry was new.
    pub fn track(&self, txn: &Transaction) -> anyhow::Result<bool> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let mut entries = self.entries()?;
        if let Some(slot) = entries.iter_mut().find(|e| e.id == txn.id) {
            *slot = txn.clone();
            serde_jsonlines::write_json_lines(&self.path, &entries)
                .with_context(|| format!("failed to rewrite {}", self.path.display()))?;
            tracing::debug!(id = %txn.id, "journal entry updated");
            return Ok(false);
        }

        serde_jsonlines::append_json_lines(&self.path, [txn])
            .with_context(|| format!("failed to append to {}", self.path.display()))?;
        tracing::debug!(id = %txn.id, "journal entry added");
        Ok(true)
    }

    /// Remove the journal. Returns how many entries it held.
    pub fn clear(&self) -> anyhow::Result<usize> {
        let count = self.entries()?.len();
        if self.path.exists() {
            std::fs::remove_file(&self.path)
                .with_context(|| format!("failed to remove {}", self.path.display()))?;
        }
        Ok(count)
    }
}
