//! Resize configuration.
//!
//! Tunables for the column decorator, read from a JSON file. Every field is
//! optional in the file; missing fields take their defaults. `max_size`
//! absent or `null` means unbounded.
//!
//! ```json
//! {
//!     "min_size": 40,
//!     "max_size": 600,
//!     "default_width": 120,
//!     "append_expander": true,
//!     "disable_user_select_when_resizing": true
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::resize::{Bounds, DEFAULT_MAX_SIZE, DEFAULT_MIN_SIZE};

const CONFIG_DIR_NAME: &str = "colresize";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResizeConfig {
    /// Smallest width a column can be dragged to
    pub min_size: f32,
    /// Largest width a column can be dragged to; `None` for no limit
    pub max_size: Option<f32>,
    /// Width given to columns that have no entry yet
    pub default_width: f32,
    pub append_expander: bool,
    pub disable_user_select_when_resizing: bool,
    pub restore_cursor_on_release: bool,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            min_size: DEFAULT_MIN_SIZE,
            max_size: None,
            default_width: 120.0,
            append_expander: false,
            disable_user_select_when_resizing: false,
            restore_cursor_on_release: false,
        }
    }
}

impl ResizeConfig {
    /// Parses and validates a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("invalid resize configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::from_json_str(&json).with_context(|| format!("in config file {}", path.display()))?;
        debug!(path = %path.display(), ?config, "loaded resize configuration");
        Ok(config)
    }

    /// Configuration for the demo's `--config` flag.
    ///
    /// An explicitly named file must load; its errors are returned. Without
    /// one, the default location is tried with [`ResizeConfig::load_or_default`].
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::load_or_default()),
        }
    }

    /// Loads the file at the default location, falling back to defaults.
    pub fn load_or_default() -> Self {
        match Self::default_path() {
            Some(path) => Self::load_or_default_at(&path),
            None => Self::default(),
        }
    }

    /// A missing file yields the defaults silently; any other failure is
    /// logged and also falls back to the defaults.
    fn load_or_default_at(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                warn!("{err:#}; using default resize configuration");
                Self::default()
            }
        }
    }

    /// `<config dir>/colresize/config.json` for the current user.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Writes this configuration as pretty JSON to `path`, creating parent
    /// directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create config directory {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).with_context(|| format!("failed to write config file {}", path.display()))?;
        Ok(())
    }

    /// Width limits described by this configuration.
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.min_size, self.max_size.unwrap_or(DEFAULT_MAX_SIZE))
    }

    /// Rejects settings that would make resizing misbehave.
    pub fn validate(&self) -> Result<()> {
        if !self.min_size.is_finite() || self.min_size < 0.0 {
            bail!("min_size must be a non-negative number, got {}", self.min_size);
        }
        if let Some(max_size) = self.max_size {
            if max_size.is_nan() || max_size < self.min_size {
                bail!("max_size ({max_size}) must not be smaller than min_size ({})", self.min_size);
            }
        }
        if !self.default_width.is_finite() || self.default_width <= 0.0 {
            bail!("default_width must be a positive number, got {}", self.default_width);
        }
        Ok(())
    }

    /// Width Vector with `count` columns at the default width, clamped into
    /// the configured bounds.
    pub fn initial_sizes(&self, count: usize) -> Vec<f32> {
        vec![self.bounds().clamp(self.default_width); count]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = ResizeConfig::from_json_str("{}").unwrap();
        assert_eq!(config, ResizeConfig::default());
        assert_eq!(config.bounds(), Bounds::default());
    }

    #[test]
    fn test_partial_config() {
        let config = ResizeConfig::from_json_str(r#"{"max_size": 300, "append_expander": true}"#).unwrap();
        assert_eq!(config.bounds(), Bounds::new(40.0, 300.0));
        assert!(config.append_expander);
        assert!(!config.disable_user_select_when_resizing);
    }

    #[test]
    fn test_null_max_size_is_unbounded() {
        let config = ResizeConfig::from_json_str(r#"{"max_size": null}"#).unwrap();
        assert_eq!(config.bounds().max_size, f32::INFINITY);
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        let err = ResizeConfig::from_json_str(r#"{"min_size": 200, "max_size": 100}"#).unwrap_err();
        assert!(err.to_string().contains("max_size"));
    }

    #[test]
    fn test_rejects_unknown_fields() {
        assert!(ResizeConfig::from_json_str(r#"{"minSize": 10}"#).is_err());
    }

    #[test]
    fn test_initial_sizes_respect_bounds() {
        let config = ResizeConfig {
            min_size: 40.0,
            max_size: Some(100.0),
            default_width: 150.0,
            ..ResizeConfig::default()
        };
        assert_eq!(config.initial_sizes(3), vec![100.0; 3]);
    }

    #[test]
    fn test_save_and_load_roundtrip() -> Result<()> {
        let path = env::temp_dir().join("colresize_config_test").join(CONFIG_FILE_NAME);
        let config = ResizeConfig {
            min_size: 20.0,
            max_size: Some(400.0),
            disable_user_select_when_resizing: true,
            ..ResizeConfig::default()
        };

        config.save(&path)?;
        let loaded = ResizeConfig::load(&path)?;
        assert_eq!(loaded, config);

        fs::remove_file(&path)?;
        Ok(())
    }

    #[test]
    fn test_load_or_default_on_bad_file() {
        let path = env::temp_dir().join("colresize_bad_config.json");
        fs::write(&path, "not json").unwrap();

        assert_eq!(ResizeConfig::load_or_default_at(&path), ResizeConfig::default());

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let path = env::temp_dir().join("colresize_missing_config.json");
        let _ = fs::remove_file(&path);
        assert_eq!(ResizeConfig::load_or_default_at(&path), ResizeConfig::default());
    }

    #[test]
    fn test_resolve_fails_on_explicit_missing_file() {
        let path = env::temp_dir().join("colresize_explicit_missing_config.json");
        let _ = fs::remove_file(&path);

        let err = ResizeConfig::resolve(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config file"));
    }

    #[test]
    fn test_resolve_fails_on_explicit_invalid_file() {
        let path = env::temp_dir().join("colresize_explicit_invalid_config.json");
        fs::write(&path, r#"{ "min_size": 300, "max_size": 100 }"#).unwrap();

        assert!(ResizeConfig::resolve(Some(&path)).is_err());

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_resolve_loads_explicit_file() -> Result<()> {
        let path = env::temp_dir().join("colresize_explicit_config.json");
        fs::write(&path, r#"{ "min_size": 25 }"#)?;

        assert_eq!(ResizeConfig::resolve(Some(&path))?.min_size, 25.0);

        fs::remove_file(&path)?;
        Ok(())
    }
}
