//! Render settings with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/treekit/treekit.toml`
//! 3. Explicit config file (`--config`)
//! 4. Environment variables: `TREEKIT__*` prefix

use std::path::{Path, PathBuf};

use config::{Config, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::errors::SettingsError;

/// Text tokens used when drawing trees.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderSettings {
    /// Printed in place of an empty slot in the visual drawing
    pub absent_marker: String,
    /// Printed in place of an empty slot in level-order lines
    pub placeholder: String,
    /// Printed instead of level-order lines for an empty tree
    pub empty_notice: String,
    /// Skip empty slots in the visual drawing
    pub ignore_absent: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            absent_marker: "NULL".into(),
            placeholder: "-".into(),
            empty_notice: "tree empty".into(),
            ignore_absent: false,
        }
    }
}

impl RenderSettings {
    pub fn ignoring_absent(mut self, ignore_absent: bool) -> Self {
        self.ignore_absent = ignore_absent;
        self
    }
}

/// Raw render settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawRenderSettings {
    pub absent_marker: Option<String>,
    pub placeholder: Option<String>,
    pub empty_notice: Option<String>,
    pub ignore_absent: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub render: RawRenderSettings,
}

/// Unified configuration for treekit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Settings {
    pub render: RenderSettings,
}

/// Get the XDG config directory for treekit.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "treekit").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("treekit.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, SettingsError> {
    let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|e| SettingsError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

impl Settings {
    /// Scalar options: overlay wins if specified, otherwise keep self.
    pub fn merge_with(&self, overlay: &RawSettings) -> Self {
        let base = &self.render;
        let raw = &overlay.render;
        Self {
            render: RenderSettings {
                absent_marker: raw
                    .absent_marker
                    .clone()
                    .unwrap_or_else(|| base.absent_marker.clone()),
                placeholder: raw
                    .placeholder
                    .clone()
                    .unwrap_or_else(|| base.placeholder.clone()),
                empty_notice: raw
                    .empty_notice
                    .clone()
                    .unwrap_or_else(|| base.empty_notice.clone()),
                ignore_absent: raw.ignore_absent.unwrap_or(base.ignore_absent),
            },
        }
    }

    /// Load settings with layered precedence.
    ///
    /// A missing global file is skipped; an explicit `config_file` must exist.
    #[instrument(level = "debug")]
    pub fn load(config_file: Option<&Path>) -> Result<Self, SettingsError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("global config: {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(path) = config_file {
            debug!("explicit config: {}", path.display());
            current = current.merge_with(&load_raw_settings(path)?);
        }

        Self::apply_env_overrides(current)
    }

    /// Load only the given file on top of the defaults, ignoring global
    /// config and environment.
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        Ok(Self::default().merge_with(&load_raw_settings(path)?))
    }

    /// Apply TREEKIT__* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, SettingsError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("TREEKIT").separator("__"))
            .build()
            .map_err(|e| SettingsError::Env(e.to_string()))?;

        if let Ok(val) = config.get_string("render.absent_marker") {
            settings.render.absent_marker = val;
        }
        if let Ok(val) = config.get_string("render.placeholder") {
            settings.render.placeholder = val;
        }
        if let Ok(val) = config.get_string("render.empty_notice") {
            settings.render.empty_notice = val;
        }
        if let Ok(val) = config.get_bool("render.ignore_absent") {
            settings.render.ignore_absent = val;
        }

        Ok(settings)
    }

    /// Serialize to TOML for `config show`.
    pub fn to_toml(&self) -> Result<String, SettingsError> {
        toml::to_string_pretty(self).map_err(|e| SettingsError::Parse {
            path: PathBuf::from("<settings>"),
            message: e.to_string(),
        })
    }
}
