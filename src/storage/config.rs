//! Settings handling for draggable tasklists
//!
//! Settings are an immutable value stored as TOML in
//! `~/.config/draggable-tasklist/settings.toml` (platform dependent), or at
//! an explicit path. Changing a setting produces a new value; resetting
//! replaces the current value with [`Settings::DEFAULT`].

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{IndentationPolicy, ReorderOptions};

/// Upper bound for `animation_speed`, in milliseconds
pub const MAX_ANIMATION_SPEED: u32 = 500;

/// Granularity of `animation_speed`, in milliseconds
pub const ANIMATION_SPEED_STEP: u32 = 50;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Unknown setting: {0}")]
    UnknownKey(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Cursor style of the drag handle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DragHandleStyle {
    #[default]
    Grab,
    Move,
    /// Uses `custom_drag_handle_class` for the handle
    Custom,
}

impl DragHandleStyle {
    pub fn as_str(&self) -> &str {
        match self {
            DragHandleStyle::Grab => "grab",
            DragHandleStyle::Move => "move",
            DragHandleStyle::Custom => "custom",
        }
    }
}

impl FromStr for DragHandleStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grab" => Ok(DragHandleStyle::Grab),
            "move" => Ok(DragHandleStyle::Move),
            "custom" => Ok(DragHandleStyle::Custom),
            other => Err(ConfigError::Invalid(format!(
                "drag_handle_style must be grab, move or custom (got '{}')",
                other
            ))),
        }
    }
}

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Decorate task lists in every document, not only opted-in ones
    pub enable_in_preview_mode: bool,

    /// Write the reordered text back to the file after each move
    pub save_order_automatically: bool,

    pub drag_handle_style: DragHandleStyle,

    /// Extra class for the drag handle (only used with `custom`)
    pub custom_drag_handle_class: String,

    /// Drag animation duration in milliseconds
    pub animation_speed: u32,

    /// Mark nesting with a left border
    pub indentation_marker: bool,

    /// How indentation is redistributed on a move
    pub indentation_policy: IndentationPolicy,
}

impl Settings {
    pub const DEFAULT: Settings = Settings {
        enable_in_preview_mode: true,
        save_order_automatically: true,
        drag_handle_style: DragHandleStyle::Grab,
        custom_drag_handle_class: String::new(),
        animation_speed: 200,
        indentation_marker: true,
        indentation_policy: IndentationPolicy::FollowTask,
    };

    /// Names accepted by [`Settings::with`]
    pub const KEYS: [&'static str; 7] = [
        "enable_in_preview_mode",
        "save_order_automatically",
        "drag_handle_style",
        "custom_drag_handle_class",
        "animation_speed",
        "indentation_marker",
        "indentation_policy",
    ];

    /// Returns a copy with one setting changed
    pub fn with(&self, key: &str, value: &str) -> Result<Settings, ConfigError> {
        let mut next = self.clone();

        match key {
            "enable_in_preview_mode" => next.enable_in_preview_mode = parse_bool(key, value)?,
            "save_order_automatically" => next.save_order_automatically = parse_bool(key, value)?,
            "drag_handle_style" => next.drag_handle_style = value.parse()?,
            "custom_drag_handle_class" => next.custom_drag_handle_class = value.trim().to_string(),
            "animation_speed" => {
                next.animation_speed = value.parse().map_err(|_| {
                    ConfigError::Invalid(format!("animation_speed must be a number (got '{}')", value))
                })?
            }
            "indentation_marker" => next.indentation_marker = parse_bool(key, value)?,
            "indentation_policy" => {
                next.indentation_policy = match value {
                    "follow-task" => IndentationPolicy::FollowTask,
                    "follow-slot" => IndentationPolicy::FollowSlot,
                    other => {
                        return Err(ConfigError::Invalid(format!(
                            "indentation_policy must be follow-task or follow-slot (got '{}')",
                            other
                        )))
                    }
                }
            }
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }

        next.validate()?;
        Ok(next)
    }

    /// Returns the default settings, discarding this value
    pub fn reset(&self) -> Settings {
        Settings::DEFAULT
    }

    /// Checks value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.animation_speed > MAX_ANIMATION_SPEED {
            return Err(ConfigError::Invalid(format!(
                "animation_speed must be at most {} (got {})",
                MAX_ANIMATION_SPEED, self.animation_speed
            )));
        }

        if self.animation_speed % ANIMATION_SPEED_STEP != 0 {
            return Err(ConfigError::Invalid(format!(
                "animation_speed must be a multiple of {} (got {})",
                ANIMATION_SPEED_STEP, self.animation_speed
            )));
        }

        let class = &self.custom_drag_handle_class;
        if !class.is_empty() && !is_class_name(class) {
            return Err(ConfigError::Invalid(format!(
                "custom_drag_handle_class must be a class name of letters, digits, '-' or '_', not starting with a digit (got '{}')",
                self.custom_drag_handle_class
            )));
        }

        Ok(())
    }

    /// Class added to the drag handle next to `drag-handle`, if any
    pub fn handle_class(&self) -> Option<&str> {
        match self.drag_handle_style {
            DragHandleStyle::Custom if !self.custom_drag_handle_class.is_empty() => {
                Some(self.custom_drag_handle_class.as_str())
            }
            _ => None,
        }
    }

    /// Options passed to the reorderer
    pub fn reorder_options(&self) -> ReorderOptions {
        ReorderOptions {
            indentation: self.indentation_policy,
        }
    }

    /// Returns the setting as a display string
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        let value = match key {
            "enable_in_preview_mode" => self.enable_in_preview_mode.to_string(),
            "save_order_automatically" => self.save_order_automatically.to_string(),
            "drag_handle_style" => self.drag_handle_style.as_str().to_string(),
            "custom_drag_handle_class" => self.custom_drag_handle_class.clone(),
            "animation_speed" => self.animation_speed.to_string(),
            "indentation_marker" => self.indentation_marker.to_string(),
            "indentation_policy" => self.indentation_policy.as_str().to_string(),
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        };
        Ok(value)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings::DEFAULT
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value {
        "true" | "on" | "yes" => Ok(true),
        "false" | "off" | "no" => Ok(false),
        other => Err(ConfigError::Invalid(format!(
            "{} must be true or false (got '{}')",
            key, other
        ))),
    }
}

/// Location of the settings file
#[derive(Debug, Clone)]
pub struct SettingsFile {
    path: PathBuf,
}

impl SettingsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Uses `path` when given, otherwise the platform config directory
    pub fn locate(path: Option<PathBuf>) -> Result<Self> {
        match path {
            Some(path) => Ok(Self::new(path)),
            None => {
                let dir = Self::config_dir()
                    .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
                Ok(Self::new(dir.join("settings.toml")))
            }
        }
    }

    /// Returns the platform config directory
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "tasklist", "draggable-tasklist")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads settings, falling back to defaults when the file is missing
    pub fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            return Ok(Settings::DEFAULT);
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings: {}", self.path.display()))?;

        let settings: Settings = toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .context("Failed to parse settings")?;

        settings
            .validate()
            .with_context(|| format!("Invalid settings in {}", self.path.display()))?;

        Ok(settings)
    }

    /// Saves settings
    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(settings).context("Failed to serialize settings")?;

        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write settings: {}", self.path.display()))
    }
}

/// The class is spliced into a CSS selector, so only plain identifiers pass
fn is_class_name(class: &str) -> bool {
    let body = class.strip_prefix('-').unwrap_or(class);
    match body.chars().next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '-' => {}
        _ => return false,
    }
    body.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_settings() {
        let settings = Settings::default();

        assert!(settings.enable_in_preview_mode);
        assert!(settings.save_order_automatically);
        assert_eq!(settings.drag_handle_style, DragHandleStyle::Grab);
        assert_eq!(settings.custom_drag_handle_class, "");
        assert_eq!(settings.animation_speed, 200);
        assert!(settings.indentation_marker);
        assert_eq!(settings.indentation_policy, IndentationPolicy::FollowTask);
    }

    #[test]
    fn parse_partial_settings() {
        let toml = r#"
save_order_automatically = false
drag_handle_style = "move"
"#;

        let settings: Settings = toml::from_str(toml).unwrap();
        assert!(!settings.save_order_automatically);
        assert_eq!(settings.drag_handle_style, DragHandleStyle::Move);
        assert_eq!(settings.animation_speed, 200);
    }

    #[test]
    fn with_returns_new_value() {
        let settings = Settings::DEFAULT;
        let changed = settings.with("animation_speed", "350").unwrap();

        assert_eq!(changed.animation_speed, 350);
        assert_eq!(settings.animation_speed, 200);
    }

    #[test]
    fn with_rejects_bad_values() {
        let settings = Settings::DEFAULT;

        assert!(matches!(
            settings.with("animation_speed", "550"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            settings.with("animation_speed", "125"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            settings.with("animation_speed", "fast"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            settings.with("drag_handle_style", "pointer"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            settings.with("custom_drag_handle_class", "two classes"),
            Err(ConfigError::Invalid(_))
        ));
        assert_eq!(
            settings.with("colour", "red"),
            Err(ConfigError::UnknownKey("colour".to_string()))
        );
    }

    #[test]
    fn handle_class_must_be_css_identifier() {
        let settings = Settings::DEFAULT;

        for bad in ["a{}body", "9lives", "-9lives", "x.y", "grip;color:red"] {
            assert!(
                matches!(
                    settings.with("custom_drag_handle_class", bad),
                    Err(ConfigError::Invalid(_))
                ),
                "{}",
                bad
            );
        }
        for good in ["my-handle", "_grip", "Handle2"] {
            assert!(settings.with("custom_drag_handle_class", good).is_ok(), "{}", good);
        }
        assert!(settings.with("custom_drag_handle_class", "").is_ok());
    }

    #[test]
    fn every_key_round_trips_through_get() {
        let settings = Settings::DEFAULT;
        for key in Settings::KEYS {
            let value = settings.get(key).unwrap();
            assert_eq!(settings.with(key, &value).unwrap(), settings, "{}", key);
        }
    }

    #[test]
    fn reset_restores_default() {
        let settings = Settings::DEFAULT
            .with("drag_handle_style", "custom")
            .unwrap()
            .with("custom_drag_handle_class", "my-handle")
            .unwrap();

        assert_eq!(settings.handle_class(), Some("my-handle"));
        assert_eq!(settings.reset(), Settings::DEFAULT);
    }

    #[test]
    fn handle_class_only_for_custom_style() {
        let settings = Settings::DEFAULT
            .with("custom_drag_handle_class", "my-handle")
            .unwrap();

        assert_eq!(settings.handle_class(), None);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let file = SettingsFile::new(dir.path().join("settings.toml"));

        assert_eq!(file.load().unwrap(), Settings::DEFAULT);
    }

    #[test]
    fn save_and_load() {
        let dir = TempDir::new().unwrap();
        let file = SettingsFile::new(dir.path().join("nested").join("settings.toml"));

        let settings = Settings::DEFAULT
            .with("indentation_policy", "follow-slot")
            .unwrap();
        file.save(&settings).unwrap();

        assert_eq!(file.load().unwrap(), settings);
    }

    #[test]
    fn load_rejects_out_of_range_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "animation_speed = 900\n").unwrap();

        assert!(SettingsFile::new(&path).load().is_err());
    }
}
