//! Application-level utilities for the Growth CLI.
//!
//! - Application context for unified CLI + config handling
//! - Path resolution for the config file and data directory

mod context;
mod resolver;

pub use context::AppContext;
pub use resolver::{load_config, resolve_config_path, resolve_data_dir};
