//! UI primitives for the Growth CLI.
//!
//! - **Context**: Environment detection (TTY, width, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badges, checkbox symbols, owo-colors styles
//! - **Render**: Tables, headers, receipts, hints, checklist lines
//! - **Format**: String and date helpers (truncate, wrap, long dates)
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::{UiContext, Badge};
//! use crate::ui::render::{header_with_context, simple_table, hint};
//!
//! let ctx = UiContext::from_env(args.json, args.format.as_deref(), cli.no_color, cli.ascii);
//!
//! if ctx.mode.is_json() {
//!     return Ok(());
//! }
//!
//! println!("{}", header_with_context(&ctx, "list", None, None));
//! println!("{}", simple_table(&ctx, &columns, &rows));
//! println!("{}", hint(&ctx, "growth show <id>"));
//! ```

mod context;
pub mod format;
mod mode;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use mode::OutputMode;
pub use theme::Badge;

pub use render::{
    badge, blank_line, checklist_item, divider, header_with_context, hint, kv, print,
    print_error, receipt, simple_table, Column,
};

pub use format::{format_datetime, format_long_date, short_id, single_line, truncate, wrap};
