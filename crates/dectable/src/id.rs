//! Table identifier generation.
//!
//! Identifiers are `DAK.DT.` followed by the current Unix time in
//! milliseconds, base36, uppercase. Two calls within the same millisecond
//! return the same identifier; that is accepted for single-user editing and
//! these are not meant to be unguessable.

use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;

/// Prefix shared by every generated table id.
pub const TABLE_ID_PREFIX: &str = "DAK.DT.";

static TABLE_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^DAK\.DT\.[0-9A-Z]+$").expect("table id pattern is valid"));

/// Generate an identifier for a table that has none yet.
pub fn new_table_id() -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    table_id_at(millis)
}

/// The identifier generated at the given Unix time in milliseconds.
pub fn table_id_at(millis: u64) -> String {
    format!("{}{}", TABLE_ID_PREFIX, to_base36(millis))
}

/// Check whether a string has the shape of a generated table id.
pub fn is_table_id(id: &str) -> bool {
    TABLE_ID_PATTERN.is_match(id)
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.iter().rev().map(|&d| d as char).collect()
}
