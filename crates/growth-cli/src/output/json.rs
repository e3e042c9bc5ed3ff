//! JSON output formatting for entries.

use growth_core::JournalEntry;

/// Convert an entry to JSON for output.
pub fn entry_json(entry: &JournalEntry) -> anyhow::Result<serde_json::Value> {
    Ok(serde_json::to_value(entry)?)
}

/// Convert entries to a JSON array, keeping their order.
pub fn entries_json(entries: &[JournalEntry]) -> anyhow::Result<serde_json::Value> {
    Ok(serde_json::to_value(entries)?)
}
