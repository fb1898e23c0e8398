//! TOML-based application configuration.
//!
//! Stores the active user id and the Supabase connection settings at
//! `~/.config/vault/config.toml`. Set `VAULT_ENV=dev` to use a separate
//! development data directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::store::SupabaseConfig;

const CONFIG_FILE: &str = "config.toml";

/// Returns `~/.config/vault[-dev]/` based on VAULT_ENV.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("VAULT_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("vault-dev")
    } else {
        base_dir.join("vault")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Active user settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserConfig {
    /// Opaque user id the profile store is keyed by.
    #[serde(default)]
    pub id: Option<String>,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/vault/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub user: UserConfig,
    /// Backend connection; absent means the store is unavailable.
    #[serde(default)]
    pub supabase: Option<SupabaseConfig>,
}

impl Config {
    /// Load configuration from the default path.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration, falling back to defaults on any failure.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Save configuration to the default path.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = config_path()?;
        self.save_to(&path)
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))
    }

    /// Save configuration to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

fn config_path() -> Result<PathBuf, ConfigError> {
    let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
        path: PathBuf::from("~/.config/vault"),
        message: e.to_string(),
    })?;
    Ok(dir.join(CONFIG_FILE))
}
