//! Entry store: CRUD and backup over one serialized collection.
//!
//! The whole collection lives as a single JSON array under one key in a
//! [`Substrate`]. Every mutation is a read-modify-write of that array.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

use chrono::NaiveDate;

use crate::error::{GrowthError, Result};
use crate::storage::traits::Substrate;
use crate::storage::types::{timestamp_now, JournalEntry};

/// Key the collection is stored under unless the caller picks another.
pub const DEFAULT_KEY: &str = "growthTracker_journalEntries";

/// Result of a strict read of the stored collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrityReport {
    /// Number of entries in the collection
    pub entries: usize,
    /// Dates carried by more than one entry, ascending
    pub duplicate_dates: Vec<NaiveDate>,
}

/// Durable CRUD over the entry collection.
///
/// Construct once with a substrate handle and reuse it for every operation.
/// Callers always get owned copies of entries.
pub struct EntryStore<S: Substrate> {
    substrate: S,
    key: String,
    write_lock: Mutex<()>,
}

impl<S: Substrate> EntryStore<S> {
    pub fn new(substrate: S) -> Self {
        Self::with_key(substrate, DEFAULT_KEY)
    }

    pub fn with_key(substrate: S, key: impl Into<String>) -> Self {
        Self {
            substrate,
            key: key.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn substrate(&self) -> &S {
        &self.substrate
    }

    fn ensure_available(&self) -> Result<()> {
        self.substrate
            .probe()
            .map_err(|e| GrowthError::StorageUnavailable(e.to_string()))
    }

    fn lock_writes(&self) -> MutexGuard<'_, ()> {
        self.write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Read the stored collection, treating any failure as an empty one.
    fn load_lenient(&self) -> Vec<JournalEntry> {
        let stored = match self.substrate.get(&self.key) {
            Ok(Some(value)) => value,
            Ok(None) => return Vec::new(),
            Err(err) => {
                tracing::warn!(
                    key = %self.key,
                    error = %err,
                    "failed to read entries; using empty collection"
                );
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<JournalEntry>>(&stored) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(
                    key = %self.key,
                    error = %err,
                    "stored entries do not parse; using empty collection"
                );
                Vec::new()
            }
        }
    }

    fn persist(&self, entries: &[JournalEntry]) -> Result<()> {
        let serialized = serde_json::to_string(entries)
            .map_err(|e| GrowthError::PersistFailed(e.to_string()))?;
        self.substrate
            .set(&self.key, &serialized)
            .map_err(|e| GrowthError::PersistFailed(e.to_string()))?;
        tracing::debug!(key = %self.key, entries = entries.len(), "persisted entries");
        Ok(())
    }

    /// All entries in stored order.
    ///
    /// # Errors
    ///
    /// Returns `GrowthError::StorageUnavailable` if the substrate cannot be
    /// probed. A stored value that cannot be read or parsed is reported as
    /// an empty collection instead of an error.
    pub fn read_all(&self) -> Result<Vec<JournalEntry>> {
        self.ensure_available()?;
        Ok(self.load_lenient())
    }

    /// Number of stored entries.
    pub fn len(&self) -> Result<usize> {
        Ok(self.read_all()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Look up an entry by id.
    pub fn read_by_id(&self, id: &str) -> Result<Option<JournalEntry>> {
        Ok(self.read_all()?.into_iter().find(|entry| entry.id == id))
    }

    /// First entry in stored order whose date matches.
    pub fn read_by_date(&self, date: NaiveDate) -> Result<Option<JournalEntry>> {
        Ok(self.read_all()?.into_iter().find(|entry| entry.date == date))
    }

    /// Insert or update an entry by id.
    ///
    /// An existing entry is replaced in place with `updated_at` set to now.
    /// A new id is appended unchanged, so stored order is creation order.
    ///
    /// # Errors
    ///
    /// Returns `GrowthError::StorageUnavailable` if the substrate cannot be
    /// probed, or `GrowthError::PersistFailed` if the write is rejected.
    pub fn save(&self, entry: &JournalEntry) -> Result<()> {
        self.ensure_available()?;
        let _guard = self.lock_writes();
        let mut entries = self.load_lenient();
        match entries.iter().position(|existing| existing.id == entry.id) {
            Some(index) => {
                let mut updated = entry.clone();
                updated.updated_at = timestamp_now();
                entries[index] = updated;
            }
            None => entries.push(entry.clone()),
        }
        self.persist(&entries)
    }

    /// Remove the entry with `id`. Removing a missing id succeeds.
    pub fn delete_by_id(&self, id: &str) -> Result<()> {
        self.ensure_available()?;
        let _guard = self.lock_writes();
        let mut entries = self.load_lenient();
        entries.retain(|entry| entry.id != id);
        self.persist(&entries)
    }

    /// Pretty-printed JSON snapshot of the whole collection.
    pub fn export_all(&self) -> Result<String> {
        let entries = self.read_all()?;
        serde_json::to_string_pretty(&entries)
            .map_err(|e| GrowthError::Serialization(e.to_string()))
    }

    /// Replace the whole collection with the entries in `blob`.
    ///
    /// This never merges: whatever was stored before is gone.
    ///
    /// # Errors
    ///
    /// Returns `GrowthError::ImportParseFailed` if `blob` is not a valid
    /// entry collection or repeats an id; nothing is written in that case.
    pub fn import_all(&self, blob: &str) -> Result<usize> {
        self.ensure_available()?;
        let entries: Vec<JournalEntry> = serde_json::from_str(blob)
            .map_err(|e| GrowthError::ImportParseFailed(e.to_string()))?;
        if let Some(id) = first_duplicate_id(&entries) {
            return Err(GrowthError::ImportParseFailed(format!(
                "duplicate entry id \"{}\"",
                id
            )));
        }
        let _guard = self.lock_writes();
        self.persist(&entries)?;
        tracing::info!(key = %self.key, entries = entries.len(), "imported entries");
        Ok(entries.len())
    }

    /// Strict read of the stored collection.
    ///
    /// # Errors
    ///
    /// Returns `GrowthError::Corrupt` if the stored value cannot be read,
    /// does not parse, or repeats an id.
    pub fn check_integrity(&self) -> Result<IntegrityReport> {
        self.ensure_available()?;
        let stored = self
            .substrate
            .get(&self.key)
            .map_err(|e| GrowthError::Corrupt(e.to_string()))?;
        let entries: Vec<JournalEntry> = match stored {
            Some(value) => {
                serde_json::from_str(&value).map_err(|e| GrowthError::Corrupt(e.to_string()))?
            }
            None => Vec::new(),
        };
        if let Some(id) = first_duplicate_id(&entries) {
            return Err(GrowthError::Corrupt(format!("duplicate entry id \"{}\"", id)));
        }

        let mut seen = HashSet::new();
        let mut duplicate_dates: Vec<NaiveDate> = entries
            .iter()
            .filter(|entry| !seen.insert(entry.date))
            .map(|entry| entry.date)
            .collect();
        duplicate_dates.sort();
        duplicate_dates.dedup();

        Ok(IntegrityReport {
            entries: entries.len(),
            duplicate_dates,
        })
    }
}

fn first_duplicate_id(entries: &[JournalEntry]) -> Option<&str> {
    let mut seen = HashSet::new();
    entries
        .iter()
        .map(|entry| entry.id.as_str())
        .find(|id| !seen.insert(*id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemorySubstrate;
    use crate::storage::types::{padded_checklist, ChecklistKind};

    fn day(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
    }

    fn entry(id: &str, date: &str) -> JournalEntry {
        JournalEntry::new(day(date), format!("Title {}", id), format!("Body {}", id)).with_id(id)
    }

    fn store() -> EntryStore<MemorySubstrate> {
        EntryStore::new(MemorySubstrate::new())
    }

    fn ids(entries: &[JournalEntry]) -> Vec<&str> {
        entries.iter().map(|entry| entry.id.as_str()).collect()
    }

    #[test]
    fn test_empty_store_reads_empty() {
        let store = store();
        assert!(store.read_all().unwrap().is_empty());
        assert!(store.is_empty().unwrap());
        assert_eq!(store.read_by_id("a").unwrap(), None);
    }

    #[test]
    fn test_first_save_keeps_matching_timestamps() {
        let store = store();
        let a = entry("a", "2024-01-01");
        store.save(&a).unwrap();

        let all = store.read_all().unwrap();
        assert_eq!(all, vec![a.clone()]);
        assert_eq!(all[0].created_at, all[0].updated_at);
    }

    #[test]
    fn test_save_then_read_by_id_round_trips() {
        let store = store();
        let a = entry("a", "2024-01-01")
            .with_checklist(ChecklistKind::StudyToday, padded_checklist(["graphs"]))
            .with_quote("Small steps");
        store.save(&a).unwrap();

        let loaded = store.read_by_id("a").unwrap().unwrap();
        assert_eq!(loaded.id, a.id);
        assert_eq!(loaded.title, a.title);
        assert_eq!(loaded.study_today, a.study_today);
        assert_eq!(loaded.motivational_quote, a.motivational_quote);
        assert!(loaded.updated_at >= a.updated_at);
    }

    #[test]
    fn test_update_replaces_in_place_and_refreshes_updated_at() {
        let store = store();
        store.save(&entry("a", "2024-01-01")).unwrap();
        store.save(&entry("b", "2024-01-02")).unwrap();
        store.save(&entry("c", "2024-01-03")).unwrap();

        let mut b = store.read_by_id("b").unwrap().unwrap();
        let original_created = b.created_at;
        b.title = "Edited".to_string();
        b.updated_at = original_created - chrono::Duration::days(30);
        store.save(&b).unwrap();

        let all = store.read_all().unwrap();
        assert_eq!(ids(&all), vec!["a", "b", "c"]);
        assert_eq!(all[1].title, "Edited");
        assert_eq!(all[1].created_at, original_created);
        assert!(all[1].updated_at >= original_created);
    }

    #[test]
    fn test_new_ids_append_in_creation_order() {
        let store = store();
        store.save(&entry("late", "2024-12-31")).unwrap();
        store.save(&entry("early", "2024-01-01")).unwrap();
        assert_eq!(ids(&store.read_all().unwrap()), vec!["late", "early"]);
    }

    #[test]
    fn test_read_by_date_returns_first_stored_match() {
        let store = store();
        store.save(&entry("a", "2024-01-01")).unwrap();
        store.save(&entry("b", "2024-01-02")).unwrap();
        store.save(&entry("c", "2024-01-02")).unwrap();

        let found = store.read_by_date(day("2024-01-02")).unwrap().unwrap();
        assert_eq!(found.id, "b");
        assert_eq!(store.read_by_date(day("2024-06-01")).unwrap(), None);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let store = store();
        store.save(&entry("a", "2024-01-01")).unwrap();
        store.save(&entry("b", "2024-01-02")).unwrap();

        store.delete_by_id("a").unwrap();
        let once = store.read_all().unwrap();
        store.delete_by_id("a").unwrap();
        let twice = store.read_all().unwrap();

        assert_eq!(once, twice);
        assert_eq!(ids(&twice), vec!["b"]);
    }

    #[test]
    fn test_delete_missing_id_leaves_collection_unchanged() {
        let store = store();
        store.save(&entry("a", "2024-01-01")).unwrap();
        let before = store.read_all().unwrap();

        store.delete_by_id("b").unwrap();

        assert_eq!(store.read_all().unwrap(), before);
    }

    #[test]
    fn test_export_import_round_trip() {
        let store = store();
        store.save(&entry("a", "2024-01-01")).unwrap();
        store
            .save(
                &entry("b", "2024-01-02")
                    .with_checklist(ChecklistKind::MustDo, padded_checklist(["call mom"])),
            )
            .unwrap();
        let before = store.read_all().unwrap();

        let exported = store.export_all().unwrap();
        assert!(exported.starts_with("[\n  {"));
        let count = store.import_all(&exported).unwrap();

        assert_eq!(count, 2);
        assert_eq!(store.read_all().unwrap(), before);
    }

    #[test]
    fn test_import_replaces_instead_of_merging() {
        let source = store();
        source.save(&entry("x", "2023-05-05")).unwrap();
        let blob = source.export_all().unwrap();

        let target = store();
        target.save(&entry("a", "2024-01-01")).unwrap();
        target.import_all(&blob).unwrap();

        assert_eq!(ids(&target.read_all().unwrap()), vec!["x"]);
    }

    #[test]
    fn test_import_invalid_json_keeps_existing_entries() {
        let store = store();
        store.save(&entry("a", "2024-01-01")).unwrap();
        let before = store.read_all().unwrap();

        let err = store.import_all("not json").unwrap_err();

        assert!(matches!(err, GrowthError::ImportParseFailed(_)));
        assert_eq!(store.read_all().unwrap(), before);
    }

    #[test]
    fn test_import_rejects_duplicate_ids() {
        let store = store();
        let blob = serde_json::to_string(&vec![
            entry("a", "2024-01-01"),
            entry("a", "2024-01-02"),
        ])
        .unwrap();

        let err = store.import_all(&blob).unwrap_err();
        assert!(matches!(err, GrowthError::ImportParseFailed(_)));
        assert!(store.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_blob_reads_as_empty() {
        let substrate = MemorySubstrate::new();
        substrate.set(DEFAULT_KEY, "{ definitely not an array").unwrap();
        let store = EntryStore::new(substrate);

        assert!(store.read_all().unwrap().is_empty());
        assert!(matches!(
            store.check_integrity(),
            Err(GrowthError::Corrupt(_))
        ));
    }

    #[test]
    fn test_disabled_substrate_is_unavailable_everywhere() {
        let store = EntryStore::new(MemorySubstrate::disabled());
        let a = entry("a", "2024-01-01");

        assert!(matches!(store.read_all(), Err(GrowthError::StorageUnavailable(_))));
        assert!(matches!(store.read_by_id("a"), Err(GrowthError::StorageUnavailable(_))));
        assert!(matches!(
            store.read_by_date(day("2024-01-01")),
            Err(GrowthError::StorageUnavailable(_))
        ));
        assert!(matches!(store.save(&a), Err(GrowthError::StorageUnavailable(_))));
        assert!(matches!(store.delete_by_id("a"), Err(GrowthError::StorageUnavailable(_))));
        assert!(matches!(store.export_all(), Err(GrowthError::StorageUnavailable(_))));
        assert!(matches!(store.import_all("[]"), Err(GrowthError::StorageUnavailable(_))));
    }

    #[test]
    fn test_quota_exceeded_write_fails_and_keeps_previous_value() {
        let store = EntryStore::new(MemorySubstrate::new().with_quota(400));
        let small = entry("a", "2024-01-01");
        store.save(&small).unwrap();

        let mut big = entry("b", "2024-01-02");
        big.body = "x".repeat(400);
        let err = store.save(&big).unwrap_err();

        assert!(matches!(err, GrowthError::PersistFailed(_)));
        assert_eq!(store.read_all().unwrap(), vec![small]);
    }

    #[test]
    fn test_import_over_quota_fails_and_keeps_previous_value() {
        let store = EntryStore::new(MemorySubstrate::new().with_quota(400));
        let small = entry("a", "2024-01-01");
        store.save(&small).unwrap();

        let mut big = entry("b", "2024-01-02");
        big.body = "x".repeat(400);
        let blob = serde_json::to_string(&vec![big]).unwrap();
        let err = store.import_all(&blob).unwrap_err();

        assert!(matches!(err, GrowthError::PersistFailed(_)));
        assert_eq!(store.read_all().unwrap(), vec![small]);
    }

    #[test]
    fn test_integrity_report_lists_duplicate_dates() {
        let store = store();
        store.save(&entry("a", "2024-01-02")).unwrap();
        store.save(&entry("b", "2024-01-01")).unwrap();
        store.save(&entry("c", "2024-01-02")).unwrap();
        store.save(&entry("d", "2024-01-02")).unwrap();

        let report = store.check_integrity().unwrap();
        assert_eq!(report.entries, 4);
        assert_eq!(report.duplicate_dates, vec![day("2024-01-02")]);
    }

    #[test]
    fn test_custom_key_isolates_collections() {
        let substrate = MemorySubstrate::new();
        let work = EntryStore::with_key(&substrate, "work");
        let home = EntryStore::with_key(&substrate, "home");

        work.save(&entry("a", "2024-01-01")).unwrap();

        assert_eq!(work.len().unwrap(), 1);
        assert!(home.is_empty().unwrap());
        assert_eq!(work.key(), "work");
    }
}
