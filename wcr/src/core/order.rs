// src/core/order.rs
use crate::models::FrequencyTable;

/// Collects every key of `table` into a sequence sorted ascending by plain
/// codepoint comparison, no locale folding. Keys are unique by construction,
/// so no tie-breaking is involved.
#[must_use]
pub fn ordered_keys(table: &FrequencyTable) -> Vec<String> {
    let mut keys: Vec<String> = table.keys().cloned().collect();
    keys.sort_unstable();
    keys
}
