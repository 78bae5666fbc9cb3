//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/patternbook/patternbook.toml`
//! 3. Local config: `--config <file>` or `./.patterns.toml`
//! 4. Environment variables: `PATTERNBOOK_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::behavioural::chain::DiscountTier;
use crate::error::PatternError;

/// File name of the local config, looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = ".patterns.toml";

/// Prefix of environment overrides.
pub const ENV_PREFIX: &str = "PATTERNBOOK";

/// Discount chain configuration. Tiers are linked in the listed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DiscountSettings {
    pub tiers: Vec<DiscountTier>,
}

impl Default for DiscountSettings {
    fn default() -> Self {
        Self {
            tiers: vec![
                DiscountTier { threshold: 300.0, rate: 0.30 },
                DiscountTier { threshold: 200.0, rate: 0.20 },
                DiscountTier { threshold: 100.0, rate: 0.10 },
            ],
        }
    }
}

/// Settings consumed by the pattern demonstrations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Separator between children when a shape group renders
    pub separator: String,
    /// Widget family for the abstract factory demo (`windows`, `macos`)
    pub theme: String,
    /// Sort strategy for the strategy demo (`ascending`, `descending`)
    pub sort_order: String,
    /// Discount chain tiers
    pub discount: DiscountSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            separator: "\n".to_string(),
            theme: "windows".to_string(),
            sort_order: "ascending".to_string(),
            discount: DiscountSettings::default(),
        }
    }
}

/// Raw settings for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub separator: Option<String>,
    pub theme: Option<String>,
    pub sort_order: Option<String>,
    pub discount: Option<RawDiscountSettings>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawDiscountSettings {
    pub tiers: Option<Vec<DiscountTier>>,
}

/// Get the XDG config directory for patternbook.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "patternbook").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("patternbook.toml"))
}

/// Environment source for `PATTERNBOOK_SORT_ORDER` style variables.
pub fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, PatternError> {
    let content = std::fs::read_to_string(path).map_err(|e| PatternError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| PatternError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins wherever it specifies a value. Tier lists are replaced whole.
    pub fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            separator: overlay
                .separator
                .clone()
                .unwrap_or_else(|| self.separator.clone()),
            theme: overlay.theme.clone().unwrap_or_else(|| self.theme.clone()),
            sort_order: overlay
                .sort_order
                .clone()
                .unwrap_or_else(|| self.sort_order.clone()),
            discount: DiscountSettings {
                tiers: overlay
                    .discount
                    .as_ref()
                    .and_then(|d| d.tiers.clone())
                    .unwrap_or_else(|| self.discount.tiers.clone()),
            },
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_config` - Optional local config file; it must exist when given
    pub fn load(local_config: Option<&Path>) -> Result<Self, PatternError> {
        Self::load_from(global_config_path().as_deref(), local_config, env_source())
    }

    /// Layered load with every source passed in.
    ///
    /// A missing global file is skipped, a missing local file is an error.
    #[instrument(level = "debug", skip(env))]
    pub fn load_from(
        global_config: Option<&Path>,
        local_config: Option<&Path>,
        env: Environment,
    ) -> Result<Self, PatternError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config.filter(|p| p.exists()) {
            debug!(path = %global_path.display(), "applying global config");
            current = current.merge_with(&load_raw_settings(global_path)?);
        }

        if let Some(local_path) = local_config {
            if !local_path.exists() {
                return Err(PatternError::Config {
                    message: format!("config file not found: {}", local_path.display()),
                });
            }
            debug!(path = %local_path.display(), "applying local config");
            current = current.merge_with(&load_raw_settings(local_path)?);
        }

        current.apply_env_overrides(env)
    }

    /// Scalar overrides from the environment win over every file.
    fn apply_env_overrides(mut self, env: Environment) -> Result<Self, PatternError> {
        let config = Config::builder()
            .add_source(env)
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("separator") {
            self.separator = val;
        }
        if let Ok(val) = config.get_string("theme") {
            self.theme = val;
        }
        if let Ok(val) = config.get_string("sort_order") {
            self.sort_order = val;
        }

        Ok(self)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, PatternError> {
        toml::to_string_pretty(self).map_err(|e| PatternError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# patternbook configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/patternbook/patternbook.toml
#   Local:  ./.patterns.toml or --config <file>
#   Env:    PATTERNBOOK_SEPARATOR, PATTERNBOOK_THEME, PATTERNBOOK_SORT_ORDER

# Separator placed between children when a shape group renders
# separator = "\n"

# Widget family for the abstract factory demo: "windows" or "macos"
# theme = "windows"

# Sort order for the strategy demo: "ascending" or "descending"
# sort_order = "ascending"

# Discount tiers, asked in the listed order (first match wins)
# [[discount.tiers]]
# threshold = 300.0
# rate = 0.30
#
# [[discount.tiers]]
# threshold = 200.0
# rate = 0.20
#
# [[discount.tiers]]
# threshold = 100.0
# rate = 0.10
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> PatternError {
    PatternError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_defaults_when_created_then_tiers_are_highest_first() {
        let settings = Settings::default();
        let thresholds: Vec<f64> = settings.discount.tiers.iter().map(|t| t.threshold).collect();
        assert_eq!(thresholds, vec![300.0, 200.0, 100.0]);
        assert_eq!(settings.separator, "\n");
    }

    #[test]
    fn given_partial_overlay_when_merging_then_keeps_unspecified_fields() {
        let base = Settings::default();
        let overlay = RawSettings {
            theme: Some("macos".to_string()),
            ..Default::default()
        };

        let merged = base.merge_with(&overlay);

        assert_eq!(merged.theme, "macos");
        assert_eq!(merged.sort_order, base.sort_order);
        assert_eq!(merged.discount, base.discount);
    }

    #[test]
    fn given_overlay_tiers_when_merging_then_replaces_list() {
        let overlay = RawSettings {
            discount: Some(RawDiscountSettings {
                tiers: Some(vec![DiscountTier { threshold: 50.0, rate: 0.05 }]),
            }),
            ..Default::default()
        };

        let merged = Settings::default().merge_with(&overlay);

        assert_eq!(merged.discount.tiers.len(), 1);
    }

    #[test]
    fn given_settings_when_serialized_then_parses_back() {
        let settings = Settings::default();
        let text = settings.to_toml().unwrap();
        let raw: RawSettings = toml::from_str(&text).unwrap();
        assert_eq!(Settings::default().merge_with(&raw), settings);
    }

    #[test]
    fn given_single_underscore_env_names_when_loading_then_overrides_apply() {
        let vars: config::Map<String, String> = [
            ("PATTERNBOOK_SORT_ORDER", "descending"),
            ("PATTERNBOOK_THEME", "macos"),
            ("PATTERNBOOK_SEPARATOR", ", "),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let settings = Settings::load_from(None, None, env_source().source(Some(vars))).unwrap();

        assert_eq!(settings.sort_order, "descending");
        assert_eq!(settings.theme, "macos");
        assert_eq!(settings.separator, ", ");
    }

    #[test]
    fn given_unrelated_env_names_when_loading_then_defaults_stay() {
        let vars: config::Map<String, String> = [
            ("PATTERNBOOK_CONFIG".to_string(), "/tmp/x.toml".to_string()),
            ("OTHER_THEME".to_string(), "macos".to_string()),
        ]
        .into_iter()
        .collect();

        let settings = Settings::load_from(None, None, env_source().source(Some(vars))).unwrap();

        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn given_template_when_parsed_then_is_valid_toml() {
        let raw: RawSettings = toml::from_str(&Settings::template()).unwrap();
        assert!(raw.theme.is_none());
    }
}
