//! Repository methods on [`LedgerStore`](crate::LedgerStore), one module per
//! collection. Every method takes the umbrella id first and locks the store
//! exactly once.

pub mod approval;
pub mod collection;
pub mod directory;
pub mod partnership;
pub mod region;
pub mod trade;
pub mod transaction;
