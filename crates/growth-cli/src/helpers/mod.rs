//! Input and parsing helper functions for the CLI.
//!
//! - Title prompts, confirmations, and entry body reading (`input`)
//! - Date, checklist, format, and entry ID parsing (`parsing`)

mod input;
mod parsing;

pub use input::{confirm, prompt_title, read_entry_body};
pub use parsing::{
    checklist_from_flags, parse_date, parse_output_format, require_entry, OutputFormat,
};
