//! # pf-core
//!
//! Core types, ID generation, and error types for PayFlow.
//!
//! This crate provides the foundational types shared across all PayFlow crates:
//! - Ledger record structs (regions, approvals, transactions, webhooks, ...)
//! - Status enums with state machine transitions
//! - ID prefix constants and the `PREFIX-XXXX` generator
//! - Insight result shapes with their fallback instances
//! - The `Insight<T>` provenance wrapper
//! - Trade settlement math
//! - API response envelopes
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod insights;
pub mod provenance;
pub mod responses;
pub mod trade;
