//! Storage layer for Growth.
//!
//! Provides the `Substrate` trait for key-value backends, the memory and
//! file implementations, and the `EntryStore` that keeps the journal
//! collection on top of them.

pub mod entry_store;
pub mod file;
pub mod memory;
pub mod traits;
pub mod types;

pub use entry_store::{EntryStore, IntegrityReport, DEFAULT_KEY};
pub use file::FileSubstrate;
pub use memory::MemorySubstrate;
pub use traits::{Substrate, SubstrateResult};
pub use types::{
    padded_checklist, timestamp_now, ChecklistItem, ChecklistKind, JournalEntry, CHECKLIST_SLOTS,
};
