//! Output formatting for journal entries.
//!
//! JSON output uses the stored camelCase shape, so `list --json` can be fed
//! back into `import`. Text output goes through the `ui` primitives.

mod json;
mod text;

pub use json::{entries_json, entry_json};
pub use text::{print_entry, print_entry_list, sort_newest_first};
