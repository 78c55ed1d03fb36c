//! User configuration, persisted as JSON.
//!
//! Location: `$MATRIX_TERM_CONFIG` if set, else `~/.matrix-term/config.json`.
//! A missing file means defaults. So does a broken one, with a warning in
//! the log.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::context::ROOT_DIR;
use crate::shell::DEFAULT_SHELL;

pub const CONFIG_ENV: &str = "MATRIX_TERM_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Colour of borders, the active tab and the snake. Any colour ratatui
    /// can parse: a name (`green`) or `#rrggbb`.
    pub accent: String,
    /// Screen background; `reset` keeps the terminal's own.
    pub background: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent: "#00ff00".to_string(),
            background: "reset".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub theme: ThemeConfig,
    /// Program run with `-c <command>` for every prompt command.
    pub shell: String,
    /// Directory the browser starts in.
    pub start_dir: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: ThemeConfig::default(),
            shell: DEFAULT_SHELL.to_string(),
            start_dir: ROOT_DIR.to_string(),
        }
    }
}

pub fn default_config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }
    let home = std::env::var_os("HOME").map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
    home.join(".matrix-term").join("config.json")
}

pub fn load(path: &Path) -> anyhow::Result<AppConfig> {
    let raw = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let config: AppConfig =
        serde_json::from_str(&raw).with_context(|| format!("Invalid config JSON at {}", path.display()))?;
    Ok(config)
}

/// Load the config, falling back to defaults when it is missing or broken.
pub fn load_or_default(path: &Path) -> AppConfig {
    if !path.exists() {
        tracing::info!("No config at {}, using defaults", path.display());
        return AppConfig::default();
    }
    match load(path) {
        Ok(config) => {
            tracing::info!("Loaded config from {}", path.display());
            config
        }
        Err(e) => {
            tracing::warn!("{:#}; using defaults", e);
            AppConfig::default()
        }
    }
}

fn write_atomic(path: &Path, data: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
    }
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, data).with_context(|| format!("Failed to write temp file: {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("Failed to replace {} with {}", path.display(), tmp.display()))?;
    Ok(())
}

pub fn save(path: &Path, config: &AppConfig) -> anyhow::Result<()> {
    let data = serde_json::to_vec_pretty(config).context("Failed to serialize config")?;
    write_atomic(path, &data)
}
