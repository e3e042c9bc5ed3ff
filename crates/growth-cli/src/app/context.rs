//! Application context for the Growth CLI.
//!
//! Bundles CLI arguments with the lazily loaded config file so handlers
//! can open the store and resolve "today" without re-reading it.

use std::path::PathBuf;

use chrono::{Local, NaiveDate, Utc};
use chrono_tz::Tz;
use once_cell::unsync::OnceCell;

use growth_core::storage::{EntryStore, FileSubstrate};

use crate::cli::Cli;
use crate::config::GrowthConfig;
use crate::ui::UiContext;

use super::resolver::{load_config, resolve_data_dir};

pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<GrowthConfig>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the config, loading it on first use.
    pub fn config(&self) -> anyhow::Result<&GrowthConfig> {
        self.config.get_or_try_init(load_config)
    }

    /// Get the configured editor override, if any.
    pub fn editor(&self) -> anyhow::Result<Option<&str>> {
        Ok(self.config()?.ui.editor.as_deref())
    }

    /// Configured timezone, if one is set.
    pub fn timezone(&self) -> anyhow::Result<Option<Tz>> {
        match self.config()?.ui.timezone.as_deref() {
            Some(name) => name
                .parse::<Tz>()
                .map(Some)
                .map_err(|_| anyhow::anyhow!("Invalid timezone in config: {}", name)),
            None => Ok(None),
        }
    }

    /// Today's date in the configured timezone, or the system one.
    pub fn today(&self) -> anyhow::Result<NaiveDate> {
        Ok(match self.timezone()? {
            Some(tz) => Utc::now().with_timezone(&tz).date_naive(),
            None => Local::now().date_naive(),
        })
    }

    pub fn data_dir(&self) -> anyhow::Result<PathBuf> {
        resolve_data_dir(self.cli, self.config()?)
    }

    /// Open the entry store over the resolved data directory.
    pub fn open_store(&self) -> anyhow::Result<EntryStore<FileSubstrate>> {
        let substrate = FileSubstrate::new(self.data_dir()?);
        let store = match self.config()?.storage.key.as_deref() {
            Some(key) => EntryStore::with_key(substrate, key),
            None => EntryStore::new(substrate),
        };
        tracing::debug!(
            root = %store.substrate().root().display(),
            key = store.key(),
            "opened store"
        );
        Ok(store)
    }

    /// UI context for this invocation's output flags.
    pub fn ui_context(&self, json: bool, format: Option<&str>) -> UiContext {
        UiContext::from_env(json, format, self.cli.no_color, self.cli.ascii)
    }
}
