use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_REMOTE: &str = "origin";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GitdeckConfig {
    pub version: u32,
    #[serde(default)]
    pub remote: RemoteConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RemoteConfig {
    #[serde(default = "default_remote_name")]
    pub name: String,
    /// Branch used for the rebase-pull before pushing. When unset the
    /// remote's advertised default branch is used.
    #[serde(default)]
    pub pull_branch: Option<String>,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            name: default_remote_name(),
            pull_branch: None,
        }
    }
}

impl Default for GitdeckConfig {
    fn default() -> Self {
        Self {
            version: 1,
            remote: RemoteConfig::default(),
        }
    }
}

fn default_remote_name() -> String {
    DEFAULT_REMOTE.to_string()
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not resolve home directory for config path")]
    HomeDirectoryUnavailable,
    #[error("failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config: {message}")]
    Validation { message: String },
}

pub fn resolve_config_dir() -> Result<PathBuf, ConfigError> {
    let base_dirs = BaseDirs::new().ok_or(ConfigError::HomeDirectoryUnavailable)?;
    Ok(base_dirs.home_dir().join(".config").join("gitdeck"))
}

pub fn resolve_config_path() -> Result<PathBuf, ConfigError> {
    Ok(resolve_config_dir()?.join("config.toml"))
}

pub fn load_config(path: &Path) -> Result<GitdeckConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let parsed: GitdeckConfig = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    validate_config(&parsed)?;
    Ok(parsed)
}

/// A missing file is not an error; defaults apply.
pub fn load_config_or_default(path: &Path) -> Result<GitdeckConfig, ConfigError> {
    if !path.exists() {
        return Ok(GitdeckConfig::default());
    }

    load_config(path)
}

pub fn validate_config(config: &GitdeckConfig) -> Result<(), ConfigError> {
    if config.version != 1 {
        return Err(ConfigError::Validation {
            message: "version must be 1".to_string(),
        });
    }

    let name = config.remote.name.trim();
    if name.is_empty() {
        return Err(ConfigError::Validation {
            message: "remote name must be non-empty".to_string(),
        });
    }

    if name.contains(char::is_whitespace) {
        return Err(ConfigError::Validation {
            message: format!("remote name '{name}' must not contain whitespace"),
        });
    }

    // Both values are passed to git as standalone arguments.
    if name.starts_with('-') {
        return Err(ConfigError::Validation {
            message: format!("remote name '{name}' must not start with '-'"),
        });
    }

    if let Some(branch) = config.remote.pull_branch.as_deref()
        && branch.trim().is_empty()
    {
        return Err(ConfigError::Validation {
            message: "remote.pull_branch must be non-empty when set".to_string(),
        });
    }

    if let Some(branch) = config.remote.pull_branch.as_deref()
        && branch.trim_start().starts_with('-')
    {
        return Err(ConfigError::Validation {
            message: format!("remote.pull_branch '{branch}' must not start with '-'"),
        });
    }

    Ok(())
}
