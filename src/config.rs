use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub(crate) const ENV_PREFIX: &str = "SPENDTUI_";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Config {
    /// Where the database and log live. Defaults to the platform data dir.
    pub(crate) data_dir: Option<PathBuf>,
    /// Default directory for CSV exports. Defaults to the home directory.
    pub(crate) export_dir: Option<PathBuf>,
    pub(crate) notifications: bool,
    pub(crate) log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            export_dir: None,
            notifications: true,
            log_filter: "info".into(),
        }
    }
}

impl Config {
    /// Defaults, then `<config_dir>/config.toml`, then `SPENDTUI_*` env vars.
    pub(crate) fn load() -> Result<Self> {
        let file = project_dirs().map(|d| d.config_dir().join(CONFIG_FILENAME));
        Self::load_from(file.as_deref())
    }

    pub(crate) fn load_from(file: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        if let Some(path) = file.filter(|p| p.exists()) {
            figment = figment.merge(Toml::file(path));
        }
        figment
            .merge(Env::prefixed(ENV_PREFIX).ignore(&["log"]))
            .extract()
            .context("Failed to load configuration")
    }

    pub(crate) fn data_dir(&self) -> Result<PathBuf> {
        let dir = match &self.data_dir {
            Some(dir) => dir.clone(),
            None => project_dirs()
                .map(|d| d.data_dir().to_path_buf())
                .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?,
        };
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create data directory: {}", dir.display()))?;
        Ok(dir)
    }

    pub(crate) fn export_dir(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| {
            directories::UserDirs::new()
                .map(|d| d.home_dir().to_path_buf())
                .unwrap_or_else(|| PathBuf::from("."))
        })
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "spendtui", "SpendTUI")
}

/// Expand `~` or a leading `~/` to the home directory.
pub(crate) fn shellexpand(path: &str) -> PathBuf {
    let home = || PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    if path == "~" {
        home()
    } else if let Some(rest) = path.strip_prefix("~/") {
        home().join(rest)
    } else {
        PathBuf::from(path)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
