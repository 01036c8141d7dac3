//! ID prefix constants and the `PREFIX-XXXX` generator.
//!
//! Every ledger record is keyed by a prefix naming its collection, a dash,
//! and four random base36 characters in upper case (e.g. `APP-7K2Q`).
//!
//! The random space is 36^4 (about 1.7M) per prefix. Collisions are unlikely
//! at mock-ledger sizes but not impossible; callers that need a hard
//! guarantee must check for an existing id before inserting.

use crate::errors::CoreError;

pub const PREFIX_REGION: &str = "REG";
pub const PREFIX_APPROVAL: &str = "APP";
pub const PREFIX_TRANSACTION: &str = "TXN";
pub const PREFIX_WEBHOOK: &str = "EVT";
pub const PREFIX_EMPLOYEE: &str = "EMP";
pub const PREFIX_WALLET: &str = "WAL";
pub const PREFIX_COLLECTION: &str = "COL";
pub const PREFIX_PARTNERSHIP: &str = "PTN";

/// All id prefixes in use.
pub const ALL_PREFIXES: &[&str] = &[
    PREFIX_REGION,
    PREFIX_APPROVAL,
    PREFIX_TRANSACTION,
    PREFIX_WEBHOOK,
    PREFIX_EMPLOYEE,
    PREFIX_WALLET,
    PREFIX_COLLECTION,
    PREFIX_PARTNERSHIP,
];

/// Length of the random suffix.
pub const SUFFIX_LEN: usize = 4;

const ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Largest multiple of 36 that fits in a byte. Bytes at or above it are
/// rejected so every symbol is equally likely.
const REJECT_AT: u8 = 252;

/// Generate a prefixed ID. Returns e.g. `"APP-7K2Q"`.
///
/// # Errors
///
/// Returns [`CoreError::Entropy`] if the OS random source fails.
pub fn generate_id(prefix: &str) -> Result<String, CoreError> {
    let mut id = String::with_capacity(prefix.len() + 1 + SUFFIX_LEN);
    id.push_str(prefix);
    id.push('-');

    let mut produced = 0;
    let mut buf = [0u8; 8];
    while produced < SUFFIX_LEN {
        getrandom::fill(&mut buf).map_err(|e| CoreError::Entropy(e.to_string()))?;
        for byte in buf {
            if produced == SUFFIX_LEN {
                break;
            }
            if byte < REJECT_AT {
                id.push(char::from(ALPHABET[usize::from(byte % 36)]));
                produced += 1;
            }
        }
    }
    Ok(id)
}

/// Check whether `id` has the `PREFIX-XXXX` shape: an upper-case ASCII
/// prefix, a dash, and four upper-case base36 characters.
#[must_use]
pub fn is_well_formed(id: &str) -> bool {
    let Some((prefix, suffix)) = id.split_once('-') else {
        return false;
    };
    !prefix.is_empty()
        && prefix.bytes().all(|b| b.is_ascii_uppercase())
        && suffix.len() == SUFFIX_LEN
        && suffix
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
}
