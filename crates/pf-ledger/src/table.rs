//! Typed, ordered record table.
//!
//! A `Table<T>` is a `Vec` with id-keyed helpers. Lookups are linear scans
//! and the first match wins, which is fine at mock-ledger sizes and keeps the
//! dashboard's display order (insertion order) intact.

use pf_core::entities::Record;
use pf_core::ids;

use crate::error::LedgerError;

/// Maximum id draws before giving up on finding a free id.
const MAX_ID_DRAWS: usize = 16;

#[derive(Debug, Clone)]
pub struct Table<T> {
    rows: Vec<T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<T: Record> Table<T> {
    #[must_use]
    pub const fn from_rows(rows: Vec<T>) -> Self {
        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [T] {
        &mut self.rows
    }

    /// Owned copy of every row, in display order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.rows.clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.rows.iter().any(|r| r.id() == id)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&T> {
        self.rows.iter().find(|r| r.id() == id)
    }

    /// Mutable access to the first row with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::NotFound`] if no row has that id.
    pub fn get_mut(&mut self, id: &str) -> Result<&mut T, LedgerError> {
        self.rows
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| LedgerError::not_found(T::ENTITY, id))
    }

    /// Insert at the front (newest first).
    pub fn prepend(&mut self, row: T) {
        self.rows.insert(0, row);
    }

    /// Insert at the back.
    pub fn append(&mut self, row: T) {
        self.rows.push(row);
    }

    /// Replace the first row with the same id, or prepend if none exists.
    /// Returns `true` when a new row was inserted.
    pub fn upsert(&mut self, row: T) -> bool {
        if let Some(slot) = self.rows.iter_mut().find(|r| r.id() == row.id()) {
            *slot = row;
            false
        } else {
            self.prepend(row);
            true
        }
    }

    pub fn replace_all(&mut self, rows: Vec<T>) {
        self.rows = rows;
    }

    /// Draw a `PREFIX-XXXX` id not used by any row in this table.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::IdSpaceExhausted`] if every draw collides, or
    /// [`LedgerError::Core`] if the random source fails.
    pub fn fresh_id(&self) -> Result<String, LedgerError> {
        for _ in 0..MAX_ID_DRAWS {
            let id = ids::generate_id(T::PREFIX)?;
            if !self.contains(&id) {
                return Ok(id);
            }
            tracing::debug!(entity = %T::ENTITY, %id, "id collision, redrawing");
        }
        Err(LedgerError::IdSpaceExhausted(T::ENTITY))
    }
}
