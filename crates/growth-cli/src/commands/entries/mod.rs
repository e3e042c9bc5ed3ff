//! Entry commands: write, edit, tick, list, show, delete, export.

mod delete;
mod edit;
mod export;
mod list;
mod show;
mod tick;
mod write;

pub use delete::handle_delete;
pub use edit::handle_edit;
pub use export::handle_export;
pub use list::handle_list;
pub use show::handle_show;
pub use tick::handle_tick;
pub use write::handle_write;
