//! # Growth Core
//!
//! Core library for Growth - a personal journal with daily goal checklists.
//!
//! This crate provides the entry model, the storage substrate abstraction,
//! and the entry store, independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **storage::types**: `JournalEntry`, checklists, and the read-time shape upgrade
//! - **storage::traits**: the `Substrate` key-value trait
//! - **storage::memory** / **storage::file**: substrate implementations
//! - **storage::entry_store**: CRUD, export, and import over one serialized collection
//! - **fs**: atomic file replacement

pub mod error;
pub mod fs;
pub mod storage;

pub use error::{GrowthError, Result, SubstrateError};
pub use storage::{EntryStore, FileSubstrate, JournalEntry, MemorySubstrate, Substrate};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
