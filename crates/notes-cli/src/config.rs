use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use notes_core::config::default_log_path;
use notes_core::StoreConfig;

#[derive(Debug, Serialize, Deserialize)]
pub struct NotesConfig {
    pub notes: NotesSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NotesSection {
    pub directory: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_path: Option<String>,
}

impl NotesConfig {
    pub fn new(directory: &Path, log_path: Option<&Path>) -> Self {
        Self {
            notes: NotesSection {
                directory: directory.to_string_lossy().to_string(),
                log_path: log_path.map(|path| path.to_string_lossy().to_string()),
            },
        }
    }

    /// Build the store configuration handed to the core.
    pub fn store_config(&self, home: &Path) -> StoreConfig {
        let log_path = self
            .notes
            .log_path
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| default_log_path(home));
        StoreConfig::new(PathBuf::from(&self.notes.directory), log_path)
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn read_config(path: &Path) -> anyhow::Result<NotesConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn write_config(path: &Path, config: &NotesConfig) -> anyhow::Result<()> {
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
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("notes"));
        }
    }
    Ok(home_dir()?.join(".config").join("notes"))
}

pub fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
