use chrono::Utc;

use pf_core::entities::Transaction;

use crate::cli::{OutputFormat, RemitAction};
use crate::journal::RemitJournal;
use crate::output::output;

/// `pfctl remit track|list|clear` over the default journal.
pub fn handle(action: RemitAction, format: OutputFormat) -> anyhow::Result<()> {
    let journal = RemitJournal::new(RemitJournal::default_path()?);
    run(&journal, action, format)
}

fn run(journal: &RemitJournal, action: RemitAction, format: OutputFormat) -> anyhow::Result<()> {
    match action {
        RemitAction::Track {
            id,
            reference,
            amount,
            currency,
            counterparty,
            corridor,
            status,
        } => {
            let id = match id {
                Some(id) => id,
                None => journal.fresh_id()?,
            };
            let txn = Transaction {
                id,
                reference,
                amount,
                currency: currency.to_ascii_uppercase(),
                counterparty,
                corridor,
                status,
                timestamp: Utc::now(),
            };
            txn.validate()?;
            let inserted = journal.track(&txn)?;
            tracing::info!(id = %txn.id, inserted, path = %journal.path().display(), "remittance tracked");
            output(&txn, format)
        }
        RemitAction::List => output(&journal.entries()?, format),
        RemitAction::Clear => {
            let removed = journal.clear()?;
            output(&serde_json::json!({ "removed": removed }), format)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::enums::TransactionStatus;

    fn track(reference: &str, currency: &str) -> RemitAction {
        RemitAction::Track {
            id: None,
            reference: reference.into(),
            amount: 99.0,
            currency: currency.into(),
            counterparty: "Helios".into(),
            corridor: None,
            status: TransactionStatus::Pending,
        }
    }

    #[test]
    fn track_generates_id_and_normalizes_currency() {
        let dir = tempfile::tempdir().unwrap();
        let journal = RemitJournal::new(dir.path().join("j.jsonl"));
        run(&journal, track("INV-7", "eur"), OutputFormat::Raw).unwrap();

        let entries = journal.entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].id.starts_with("TXN-"));
        assert_eq!(entries[0].currency, "EUR");
    }

    #[test]
    fn generated_ids_do_not_overwrite_entries() {
        let dir = tempfile::tempdir().unwrap();
        let journal = RemitJournal::new(dir.path().join("j.jsonl"));
        for n in 0..20 {
            run(&journal, track(&format!("INV-{n}"), "USD"), OutputFormat::Raw).unwrap();
        }
        let entries = journal.entries().unwrap();
        assert_eq!(entries.len(), 20);
        let ids: std::collections::HashSet<_> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn invalid_remittance_is_not_written() {
        let dir = tempfile::tempdir().unwrap();
        let journal = RemitJournal::new(dir.path().join("j.jsonl"));
        assert!(run(&journal, track("", "EUR"), OutputFormat::Raw).is_err());
        assert!(journal.entries().unwrap().is_empty());
    }
}
