//! User settings, persisted as TOML in the platform config directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use roster_ingest::DEFAULT_SOURCE;
use roster_model::PageSize;
use serde::{Deserialize, Serialize};

/// CLI settings. Every field has a default, so a partial or missing file is
/// fine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where the initial user list is fetched from: a path or an HTTP(S) URL.
    pub source: String,

    /// Directory holding the persisted dashboard state.
    pub data_dir: Option<PathBuf>,

    /// Directory exports are written to. Defaults to the working directory.
    pub export_dir: Option<PathBuf>,

    /// Page size used until one is chosen and persisted.
    pub default_page_size: PageSize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            data_dir: None,
            export_dir: None,
            default_page_size: PageSize::default(),
        }
    }
}

impl Settings {
    /// Load settings from the default path.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from `path`, falling back to defaults if the file is
    /// missing or does not parse.
    pub fn load_from(path: &Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Self::default();
        };
        match toml::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "ignoring malformed settings file"
                );
                Self::default()
            }
        }
    }

    /// Save settings to `path`, creating its directory.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create config directory {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("serialize settings")?;
        std::fs::write(path, content)
            .with_context(|| format!("write settings to {}", path.display()))
    }

    /// Default config file location.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "Roster", "Roster")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("roster.toml"))
    }
}
