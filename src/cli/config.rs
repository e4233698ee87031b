use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

use crate::cli::args::Width;

/// Settings resolved from all configuration layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub width: Width,
    pub padded: bool,
}

/// One layer of configuration, as read from a TOML file.
///
/// ```toml
/// width = 64
/// padded = false
/// ```
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub width: Option<Width>,
    #[serde(default)]
    pub padded: Option<bool>,
}

impl ConfigFile {
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../defaults.toml");
        Ok(Self::from_toml(content)?)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|e| format!("{}: {}", path.display(), e).into())
    }

    /// Load configuration with overrides.
    ///
    /// With an explicit path, only the built-in defaults and that file are
    /// used, and a broken file is an error. Otherwise:
    /// 1. Start with the built-in defaults
    /// 2. Override with ~/.config/k-hhc/config.toml if it exists
    /// 3. Override with ./k-hhc.toml if it exists in current directory
    pub fn load_with_overrides(
        explicit: Option<&Path>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        if let Some(path) = explicit {
            config.merge(Self::load_from_file(path)?);
            debug!(path = %path.display(), "loaded config");
            return Ok(config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("k-hhc").join("config.toml");
            if user_config_path.exists() {
                config.merge_or_warn(&user_config_path);
            }
        }

        let local_config_path = Path::new("k-hhc.toml");
        if local_config_path.exists() {
            config.merge_or_warn(local_config_path);
        }

        Ok(config)
    }

    fn merge_or_warn(&mut self, path: &Path) {
        match Self::load_from_file(path) {
            Ok(layer) => {
                debug!(path = %path.display(), "loaded config");
                self.merge(layer);
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load config, ignoring it");
            }
        }
    }

    /// Merge another layer into this one; values set in `other` win.
    pub fn merge(&mut self, other: ConfigFile) {
        if other.width.is_some() {
            self.width = other.width;
        }
        if other.padded.is_some() {
            self.padded = other.padded;
        }
    }

    pub fn settings(&self) -> Settings {
        Settings {
            width: self.width.unwrap_or(Width::Bits32),
            padded: self.padded.unwrap_or(true),
        }
    }
}
