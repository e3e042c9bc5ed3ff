//! Collection-level commands: import and integrity check.

mod check;
mod import;

pub use check::handle_check;
pub use import::handle_import;
