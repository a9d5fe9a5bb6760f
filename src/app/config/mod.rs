// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language, theme mode and drop notifications
//! - `[reading]` - Initial slider levels and page render scale
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `NIGHTREAD_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use nightread::app::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.reading.darkness = Some(40);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::{FilterSettings, Level};
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,

    /// Show an info toast when a dropped file is not a PDF.
    #[serde(default = "default_notify_rejected_drops")]
    pub notify_rejected_drops: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
            notify_rejected_drops: DEFAULT_NOTIFY_REJECTED_DROPS,
        }
    }
}

/// Reading comfort settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReadingConfig {
    /// Darkness slider level. Read as any integer, clamped to 0-100 on use.
    #[serde(default = "default_darkness", skip_serializing_if = "Option::is_none")]
    pub darkness: Option<i64>,

    /// Coffee slider level. Read as any integer, clamped to 0-100 on use.
    #[serde(default = "default_coffee", skip_serializing_if = "Option::is_none")]
    pub coffee: Option<i64>,

    /// Persist slider changes back to this file.
    #[serde(default = "default_remember_levels")]
    pub remember_levels: bool,

    /// Page rasterization scale.
    #[serde(
        default = "default_render_scale",
        skip_serializing_if = "Option::is_none"
    )]
    pub render_scale: Option<f32>,
}

impl Default for ReadingConfig {
    fn default() -> Self {
        Self {
            darkness: default_darkness(),
            coffee: default_coffee(),
            remember_levels: DEFAULT_REMEMBER_LEVELS,
            render_scale: default_render_scale(),
        }
    }
}

impl ReadingConfig {
    /// Slider levels to start with, clamped to 0-100.
    #[must_use]
    pub fn levels(&self) -> FilterSettings {
        FilterSettings::new(
            configured_level(self.darkness, DEFAULT_DARKNESS),
            configured_level(self.coffee, DEFAULT_COFFEE),
        )
    }

    /// Stores slider levels.
    pub fn set_levels(&mut self, levels: FilterSettings) {
        self.darkness = Some(i64::from(levels.darkness.value()));
        self.coffee = Some(i64::from(levels.coffee.value()));
    }

    /// Render scale, clamped to the supported range.
    #[must_use]
    pub fn effective_render_scale(&self) -> f32 {
        clamp_render_scale(self.render_scale.unwrap_or(DEFAULT_RENDER_SCALE))
    }
}

fn configured_level(value: Option<i64>, default: u8) -> Level {
    match value {
        // Saturate first so huge values still clamp to the right end.
        Some(value) => Level::new(i32::try_from(value).unwrap_or(if value < 0 {
            i32::MIN
        } else {
            i32::MAX
        })),
        None => Level::from(default),
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Reading comfort settings.
    #[serde(default)]
    pub reading: ReadingConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_notify_rejected_drops() -> bool {
    DEFAULT_NOTIFY_REJECTED_DROPS
}

fn default_darkness() -> Option<i64> {
    Some(i64::from(DEFAULT_DARKNESS))
}

fn default_coffee() -> Option<i64> {
    Some(i64::from(DEFAULT_COFFEE))
}

fn default_remember_levels() -> bool {
    DEFAULT_REMEMBER_LEVELS
}

fn default_render_scale() -> Option<f32> {
    Some(DEFAULT_RENDER_SCALE)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "using default config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
                notify_rejected_drops: true,
            },
            reading: ReadingConfig {
                darkness: Some(40),
                coffee: Some(65),
                remember_levels: false,
                render_scale: Some(2.0),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn default_config_has_first_launch_levels() {
        let config = Config::default();
        let levels = config.reading.levels();
        assert_eq!(levels.darkness.value(), 90);
        assert_eq!(levels.coffee.value(), 0);
        assert!(!config.general.notify_rejected_drops);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.reading.effective_render_scale(), DEFAULT_RENDER_SCALE);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("[general]\nlanguage = \"fr\"\n").unwrap();
        assert_eq!(config.general.language.as_deref(), Some("fr"));
        assert_eq!(config.reading, ReadingConfig::default());
    }

    #[test]
    fn out_of_range_levels_are_clamped() {
        let config: Config =
            toml::from_str("[reading]\ndarkness = 250\nrender_scale = 90.0\n").unwrap();
        assert_eq!(config.reading.levels().darkness, Level::MAX);
        assert_eq!(config.reading.effective_render_scale(), MAX_RENDER_SCALE);
    }

    #[test]
    fn levels_beyond_u8_range_are_clamped_without_losing_other_settings() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(
            temp_dir.path().join(CONFIG_FILE),
            "[general]\nlanguage = \"fr\"\n\n[reading]\ndarkness = 300\ncoffee = -5\n",
        )
        .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(config.general.language.as_deref(), Some("fr"));
        assert_eq!(config.reading.levels().darkness, Level::MAX);
        assert_eq!(config.reading.levels().coffee, Level::MIN);
    }

    #[test]
    fn huge_levels_saturate_to_the_matching_bound() {
        let reading = ReadingConfig {
            darkness: Some(i64::MAX),
            coffee: Some(i64::MIN),
            ..ReadingConfig::default()
        };
        assert_eq!(reading.levels().darkness, Level::MAX);
        assert_eq!(reading.levels().coffee, Level::MIN);
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let result: std::result::Result<Config, _> =
            toml::from_str("[general]\ntheme_mode = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn set_levels_updates_reading_section() {
        let mut reading = ReadingConfig::default();
        reading.set_levels(FilterSettings::new(Level::new(12), Level::new(34)));
        assert_eq!(reading.darkness, Some(12));
        assert_eq!(reading.coffee, Some(34));
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let mut config = Config::default();
        config.reading.darkness = Some(55);
        save_with_override(&config, Some(base_dir.clone())).expect("save should succeed");

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(loaded.reading.darkness, Some(55));
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[reading\ndarkness = ")
            .expect("failed to write corrupted config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn saved_config_uses_sectioned_format() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        save_to_path(&Config::default(), &config_path).expect("save should succeed");

        let content = fs::read_to_string(&config_path).expect("read back");
        assert!(content.contains("[general]"));
        assert!(content.contains("[reading]"));
        assert!(content.contains("darkness = 90"));
    }
}
