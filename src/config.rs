//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/treewalk/treewalk.toml`
//! 3. Explicit config file: `--config <path>`
//! 4. Environment variables: `TREEWALK_*` prefix

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::SearchPolicy;

/// Unified configuration for treewalk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Which node `search` reports when values repeat (default: first)
    pub search_policy: SearchPolicy,
    /// String placed between visited values in output (default: single space)
    pub separator: String,
    /// Colored terminal output (default: true)
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            search_policy: SearchPolicy::First,
            separator: " ".into(),
            color: true,
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified, inherit").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub search_policy: Option<SearchPolicy>,
    pub separator: Option<String>,
    pub color: Option<bool>,
}

/// Get the XDG config directory for treewalk.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "treewalk").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("treewalk.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> ApplicationResult<RawSettings> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

fn parse_search_policy(value: &str) -> ApplicationResult<SearchPolicy> {
    match value.trim().to_ascii_lowercase().as_str() {
        "first" => Ok(SearchPolicy::First),
        "last" => Ok(SearchPolicy::Last),
        other => Err(ApplicationError::Config {
            message: format!("unknown search_policy '{}', expected 'first' or 'last'", other),
        }),
    }
}

impl Settings {
    /// Overlay wins where it specifies a value, otherwise keep self.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            search_policy: overlay.search_policy.unwrap_or(self.search_policy),
            separator: overlay
                .separator
                .clone()
                .unwrap_or_else(|| self.separator.clone()),
            color: overlay.color.unwrap_or(self.color),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; unlike the global file it must exist
    pub fn load(config_file: Option<&Path>) -> ApplicationResult<Self> {
        Self::load_layers(global_config_path().as_deref(), config_file, None)
    }

    /// Load settings from explicit layers.
    ///
    /// A missing `global` file is skipped, a missing `local` file is an error.
    /// `env` replaces the process environment as the source of `TREEWALK_*`
    /// overrides when given.
    #[instrument(level = "debug", skip(env))]
    pub fn load_layers(
        global: Option<&Path>,
        local: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> ApplicationResult<Self> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config, optional
        if let Some(global_path) = global {
            if global_path.exists() {
                debug!("global config: {}", global_path.display());
                current = current.merge_with(&load_raw_settings(global_path)?);
            }
        }

        // 3. Explicit config, required if named
        if let Some(local_path) = local {
            debug!("config file: {}", local_path.display());
            current = current.merge_with(&load_raw_settings(local_path)?);
        }

        // 4. Environment variables (explicit override)
        Self::apply_env_overrides(current, env)
    }

    /// Apply TREEWALK_* environment variables as explicit overrides.
    fn apply_env_overrides(
        mut settings: Self,
        env: Option<HashMap<String, String>>,
    ) -> ApplicationResult<Self> {
        // Use config crate just for env var parsing
        let config = Config::builder()
            .add_source(Environment::with_prefix("TREEWALK").source(env))
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("search_policy") {
            settings.search_policy = parse_search_policy(&val)?;
        }
        if let Ok(val) = config.get_string("separator") {
            settings.separator = val;
        }
        if let Ok(val) = config.get_string("color") {
            settings.color = match val.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                other => {
                    return Err(ApplicationError::Config {
                        message: format!("invalid boolean for color: '{}'", other),
                    })
                }
            };
        }

        Ok(settings)
    }

    /// Render the effective settings as TOML.
    pub fn to_toml(&self) -> ApplicationResult<String> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_policy_is_case_insensitive() {
        assert_eq!(parse_search_policy("LAST").unwrap(), SearchPolicy::Last);
        assert_eq!(parse_search_policy(" first ").unwrap(), SearchPolicy::First);
        assert!(parse_search_policy("middle").is_err());
    }

    #[test]
    fn test_merge_keeps_unspecified_fields() {
        let base = Settings::default();
        let overlay = RawSettings {
            separator: Some(", ".into()),
            ..Default::default()
        };
        let merged = base.merge_with(&overlay);
        assert_eq!(merged.separator, ", ");
        assert_eq!(merged.search_policy, SearchPolicy::First);
        assert!(merged.color);
    }
}
