//! Path resolution for the config file and data directory.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::{default_config_path, default_data_dir, read_config, GrowthConfig};

/// Resolve the config file path, checking GROWTH_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("GROWTH_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Load the config file, or defaults when there is none yet.
pub fn load_config() -> anyhow::Result<GrowthConfig> {
    let path = resolve_config_path()?;
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(GrowthConfig::default());
    }
    read_config(&path)
}

/// Pick the data directory: flag or env first, then config, then XDG default.
pub fn resolve_data_dir(cli: &Cli, config: &GrowthConfig) -> anyhow::Result<PathBuf> {
    if let Some(dir) = cli.data_dir.as_deref().filter(|d| !d.trim().is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    if let Some(dir) = config
        .storage
        .data_dir
        .as_deref()
        .filter(|d| !d.trim().is_empty())
    {
        return Ok(PathBuf::from(dir));
    }
    default_data_dir()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_flag_wins_over_config() {
        let cli = Cli::parse_from(["growth", "--data-dir", "/from/flag", "check"]);
        let mut config = GrowthConfig::default();
        config.storage.data_dir = Some("/from/config".to_string());

        assert_eq!(
            resolve_data_dir(&cli, &config).unwrap(),
            PathBuf::from("/from/flag")
        );
    }

    #[test]
    fn test_config_used_without_flag() {
        let cli = Cli::parse_from(["growth", "--data-dir", "", "check"]);
        let mut config = GrowthConfig::default();
        config.storage.data_dir = Some("/from/config".to_string());

        assert_eq!(
            resolve_data_dir(&cli, &config).unwrap(),
            PathBuf::from("/from/config")
        );
    }
}
