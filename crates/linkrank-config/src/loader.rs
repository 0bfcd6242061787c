//! Configuration loading with format dispatch by file extension

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Result};
use crate::types::Config;
use crate::validation::Validate;

/// Default file names probed by [`Config::load`], in order.
pub const DEFAULT_CONFIG_FILES: &[&str] = &[
    ".linkrank.toml",
    ".linkrank.yml",
    ".linkrank.yaml",
    ".linkrank.json",
];

impl Config {
    /// Load from the first default config file that exists in the current
    /// directory, or fall back to built-in defaults.
    pub fn load() -> Result<Self> {
        for name in DEFAULT_CONFIG_FILES {
            let path = Path::new(name);
            if path.exists() {
                return Self::from_file(path);
            }
        }
        Ok(Self::default())
    }

    /// Load and validate a specific config file. The format is chosen by
    /// extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => toml::from_str(&content).map_err(|e| ConfigError::Toml {
                path: path.to_path_buf(),
                message: e.message().to_string(),
            })?,
            Some("yml") | Some("yaml") => {
                serde_yaml::from_str(&content).map_err(|e| ConfigError::Yaml {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?
            }
            Some("json") => serde_json::from_str(&content).map_err(|e| ConfigError::Json {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?,
            _ => {
                return Err(ConfigError::UnknownFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        config.validate()?;
        Ok(config)
    }
}
