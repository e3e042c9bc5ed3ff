use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GrowthConfig {
    #[serde(default)]
    pub storage: StorageSection,
    #[serde(default)]
    pub ui: UiSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StorageSection {
    /// Directory holding the collection file
    pub data_dir: Option<String>,
    /// Storage key, which becomes the collection file name
    pub key: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UiSection {
    pub timezone: Option<String>,
    pub editor: Option<String>,
}

impl GrowthConfig {
    pub fn new(data_dir: PathBuf, timezone: Option<String>, editor: Option<String>) -> Self {
        Self {
            storage: StorageSection {
                data_dir: Some(data_dir.to_string_lossy().to_string()),
                key: None,
            },
            ui: UiSection { timezone, editor },
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_data_dir() -> anyhow::Result<PathBuf> {
    xdg_data_dir()
}

pub fn read_config(path: &Path) -> anyhow::Result<GrowthConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn write_config(path: &Path, config: &GrowthConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Some(value) = non_empty_env("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(value).join("growth"));
    }
    Ok(home_dir()?.join(".config").join("growth"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Some(value) = non_empty_env("XDG_DATA_HOME") {
        return Ok(PathBuf::from(value).join("growth"));
    }
    Ok(home_dir()?.join(".local").join("share").join("growth"))
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = non_empty_env("HOME")
        .ok_or_else(|| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = GrowthConfig::new(
            PathBuf::from("/data/growth"),
            Some("Europe/Berlin".to_string()),
            None,
        );

        write_config(&path, &config).unwrap();
        let loaded = read_config(&path).unwrap();

        assert_eq!(loaded.storage.data_dir.as_deref(), Some("/data/growth"));
        assert_eq!(loaded.storage.key, None);
        assert_eq!(loaded.ui.timezone.as_deref(), Some("Europe/Berlin"));
        assert_eq!(loaded.ui.editor, None);
    }

    #[test]
    fn test_sections_are_optional() {
        let config: GrowthConfig = toml::from_str("[ui]\neditor = \"vim\"\n").unwrap();
        assert_eq!(config.storage.data_dir, None);
        assert_eq!(config.ui.editor.as_deref(), Some("vim"));

        let empty: GrowthConfig = toml::from_str("").unwrap();
        assert!(empty.ui.timezone.is_none());
    }

    #[test]
    fn test_read_config_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[storage\n").unwrap();

        let err = read_config(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }
}
