use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize, Clone)]
pub struct Config {
    /// Where the task snapshot lives. Default: `tasks.json` in the working directory
    #[serde(default)]
    pub tasks_file: Option<PathBuf>,

    /// Log destination. Default: ~/.todolist/todolist.log
    #[serde(default)]
    pub log_file: Option<PathBuf>,

    /// One of error, warn, info, debug, trace. Default: info
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Config {
    pub fn tasks_file(&self) -> PathBuf {
        self.tasks_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TASKS_FILE))
    }

    pub fn log_file(&self) -> Result<PathBuf> {
        match &self.log_file {
            Some(path) => Ok(path.clone()),
            None => default_log_path(),
        }
    }

    /// Parsed log level; unknown names fall back to info.
    pub fn log_level(&self) -> tracing::Level {
        self.log_level
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or(tracing::Level::INFO)
    }
}

pub const DEFAULT_TASKS_FILE: &str = "tasks.json";

/// Returns the base config directory: ~/.todolist/
pub fn base_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("could not determine home directory")?;
    Ok(home.join(".todolist"))
}

/// Returns the path to the config file
pub fn config_path() -> Result<PathBuf> {
    Ok(base_dir()?.join("config.toml"))
}

fn default_log_path() -> Result<PathBuf> {
    Ok(base_dir()?.join("todolist.log"))
}

/// Ensure the base directory exists
pub fn ensure_dirs() -> Result<()> {
    let base = base_dir()?;
    fs::create_dir_all(&base).context("failed to create ~/.todolist/")?;
    Ok(())
}

/// Load config from ~/.todolist/config.toml (or return defaults if it doesn't exist)
pub fn load() -> Result<Config> {
    let Ok(path) = config_path() else {
        return Ok(Config::default());
    };
    load_from(&path)
}

pub fn load_from(path: &Path) -> Result<Config> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Config =
            toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(config)
    } else {
        Ok(Config::default())
    }
}
