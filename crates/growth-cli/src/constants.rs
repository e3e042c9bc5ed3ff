//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// 0 is success, 1 is an unclassified error, and 2 is left to clap for
/// usage errors. Everything from 3 up maps to a specific failure.
pub mod exit_codes {
    /// Entry, config, or file not found.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// The storage directory cannot be written at all.
    pub const STORAGE_UNAVAILABLE: i32 = 5;

    /// A save or delete could not be written.
    pub const PERSIST_FAILED: i32 = 6;

    /// Import data was rejected.
    pub const IMPORT_FAILED: i32 = 7;

    /// Integrity check failed.
    pub const INTEGRITY_FAILED: i32 = 8;
}
