//! Top-level service configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{defaults, ModelConfig, ObservabilityConfig, ServerConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`PORT`, `BOXOFFICE_*`)
/// 2. Config file (`$BOXOFFICE_CONFIG`, else `boxoffice.toml` if present)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BoxofficeConfig {
    pub server: ServerConfig,
    pub model: ModelConfig,
    pub observability: ObservabilityConfig,
}

impl BoxofficeConfig {
    /// Load configuration from the process environment and working directory.
    pub fn load() -> Result<Self, ConfigError> {
        let explicit = std::env::var(defaults::ENV_CONFIG_PATH).ok().map(PathBuf::from);
        Self::load_with(explicit.as_deref(), |key| std::env::var(key).ok())
    }

    /// Load configuration from an optional explicit file and an environment
    /// lookup.
    ///
    /// An explicit file must exist. Without one, `boxoffice.toml` in the
    /// working directory is merged only if present.
    pub fn load_with<F>(config_path: Option<&Path>, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::FileNotFound {
                        path: path.display().to_string(),
                    });
                }
                Self::from_file(path)?
            }
            None => {
                let local = Path::new(defaults::DEFAULT_CONFIG_FILENAME);
                if local.exists() {
                    Self::from_file(local)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env_overrides(env);
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply environment overrides. Unparseable values are ignored.
    pub fn apply_env_overrides<F>(&mut self, env: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = env(defaults::ENV_PORT) {
            if let Ok(port) = val.trim().parse::<u16>() {
                self.server.port = port;
            }
        }
        if let Some(val) = env(defaults::ENV_HOST) {
            if !val.trim().is_empty() {
                self.server.host = val.trim().to_string();
            }
        }
        if let Some(val) = env(defaults::ENV_MODE) {
            self.server.production = val.trim().eq_ignore_ascii_case("production");
        }
        if let Some(val) = env(defaults::ENV_MODEL_PATH) {
            if !val.trim().is_empty() {
                self.model.path = val;
            }
        }
        if let Some(val) = env(defaults::ENV_MODEL_MANIFEST) {
            if !val.trim().is_empty() {
                self.model.manifest_path = Some(val);
            }
        }
        if let Some(val) = env(defaults::ENV_LOG_JSON) {
            if let Ok(json) = val.trim().parse::<bool>() {
                self.observability.json = json;
            }
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "server.port".to_string(),
                message: "must be between 1 and 65535".to_string(),
            });
        }
        if self.model.path.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "model.path".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.model.intra_threads == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "model.intra_threads".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
