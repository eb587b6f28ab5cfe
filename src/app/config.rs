//! Configuration Management
//!
//! The gesture configuration is constructed once at session start, from a
//! preset or a TOML file, and is read-only for the session's duration.
//! Changing settings mid-session means starting a new session.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Named configuration bundles tuned for a usage profile. Presets differ
/// only in values, never in logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// High accuracy, less sensitive
    Precise,
    /// Balanced defaults
    Responsive,
    /// More forgiving gestures, heavier smoothing
    Beginner,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Precise, Preset::Responsive, Preset::Beginner];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Precise => "precise",
            Preset::Responsive => "responsive",
            Preset::Beginner => "beginner",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "precise" => Ok(Preset::Precise),
            "responsive" => Ok(Preset::Responsive),
            "beginner" => Ok(Preset::Beginner),
            other => Err(crate::Error::Config(format!(
                "unknown preset '{other}', expected one of: precise, responsive, beginner"
            ))),
        }
    }
}

/// Gesture detection and cursor behavior configuration.
///
/// Distance thresholds are in normalized coordinate space (0.0 to 1.0,
/// smaller = more sensitive). Every field has a `Responsive` default, so a
/// partial TOML file overrides only the keys it names.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Thumb tip to index tip pinch distance for a left click
    pub click_threshold: f64,
    /// Index tip to middle tip pinch distance for a double click
    pub double_click_threshold: f64,
    /// Thumb tip to index base pinch distance for a right click
    pub right_click_threshold: f64,
    /// Thumb tip to ring/pinky tip pinch distance for scrolling
    pub scroll_threshold: f64,
    /// Thumb tip to index tip distance below which the cursor tracks
    pub move_threshold: f64,
    /// Weight of the previous cursor position in the moving average,
    /// 0.0 (raw) to 1.0 (frozen)
    pub smoothing_factor: f64,
    /// Seconds between consecutive non-move gesture firings
    pub action_cooldown: f64,
    /// Target capture rate of the camera collaborator
    pub camera_fps: u32,
    /// Capture frame width in pixels
    pub camera_width: u32,
    /// Capture frame height in pixels
    pub camera_height: u32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self::preset(Preset::Responsive)
    }
}

impl GestureConfig {
    /// The fixed value bundle for a preset.
    pub fn preset(preset: Preset) -> Self {
        let camera = (30, 640, 480);
        match preset {
            Preset::Precise => Self {
                click_threshold: 0.02,
                double_click_threshold: 0.015,
                right_click_threshold: 0.02,
                scroll_threshold: 0.02,
                move_threshold: 0.10,
                smoothing_factor: 0.8,
                action_cooldown: 0.2,
                camera_fps: camera.0,
                camera_width: camera.1,
                camera_height: camera.2,
            },
            Preset::Responsive => Self {
                click_threshold: 0.03,
                double_click_threshold: 0.02,
                right_click_threshold: 0.03,
                scroll_threshold: 0.03,
                move_threshold: 0.15,
                smoothing_factor: 0.7,
                action_cooldown: 0.3,
                camera_fps: camera.0,
                camera_width: camera.1,
                camera_height: camera.2,
            },
            Preset::Beginner => Self {
                click_threshold: 0.06,
                double_click_threshold: 0.04,
                right_click_threshold: 0.06,
                scroll_threshold: 0.06,
                move_threshold: 0.25,
                smoothing_factor: 0.9,
                action_cooldown: 0.5,
                camera_fps: camera.0,
                camera_width: camera.1,
                camera_height: camera.2,
            },
        }
    }

    /// The action cooldown as a [`Duration`].
    pub fn cooldown(&self) -> Duration {
        Duration::from_secs_f64(self.action_cooldown.max(0.0))
    }

    /// Validate config values are within acceptable ranges.
    /// Returns Ok(()) if valid, or Err with a description of the first
    /// invalid field. Clamping is deliberately not done: it would change
    /// gesture behavior unpredictably.
    pub fn validate(&self) -> Result<(), crate::Error> {
        let thresholds = [
            ("click_threshold", self.click_threshold),
            ("double_click_threshold", self.double_click_threshold),
            ("right_click_threshold", self.right_click_threshold),
            ("scroll_threshold", self.scroll_threshold),
            ("move_threshold", self.move_threshold),
        ];
        for (name, value) in thresholds {
            if !(value > 0.0) || !value.is_finite() {
                return Err(crate::Error::Config(format!(
                    "{name} must be > 0, got {value}"
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.smoothing_factor) {
            return Err(crate::Error::Config(format!(
                "smoothing_factor must be in [0, 1], got {}",
                self.smoothing_factor
            )));
        }
        if !(self.action_cooldown >= 0.0) || !self.action_cooldown.is_finite() {
            return Err(crate::Error::Config(format!(
                "action_cooldown must be >= 0, got {}",
                self.action_cooldown
            )));
        }
        if self.camera_fps == 0 {
            return Err(crate::Error::Config("camera_fps must be > 0".to_string()));
        }
        if self.camera_width == 0 || self.camera_height == 0 {
            return Err(crate::Error::Config(
                "camera dimensions must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Load config from file
    pub fn load(path: &PathBuf) -> Result<Self, crate::Error> {
        let content = std::fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from the default location, falling back to the
    /// `Responsive` defaults when no file exists.
    pub fn load_default() -> Result<Self, crate::Error> {
        let path = Self::default_path();
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file
    pub fn save(&self, path: &PathBuf) -> Result<(), crate::Error> {
        let content = self.to_toml()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Save to default location
    pub fn save_default(&self) -> Result<(), crate::Error> {
        self.save(&Self::default_path())
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".virtual_mouse").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Generate TOML representation
    pub fn to_toml(&self) -> Result<String, crate::Error> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_is_responsive() {
        let config = GestureConfig::default();
        assert_eq!(config, GestureConfig::preset(Preset::Responsive));
        assert_eq!(config.click_threshold, 0.03);
        assert_eq!(config.double_click_threshold, 0.02);
        assert_eq!(config.move_threshold, 0.15);
        assert_eq!(config.smoothing_factor, 0.7);
        assert_eq!(config.action_cooldown, 0.3);
        assert_eq!(config.camera_fps, 30);
    }

    #[test]
    fn test_all_presets_validate() {
        for preset in Preset::ALL {
            let config = GestureConfig::preset(preset);
            assert!(config.validate().is_ok(), "preset {preset} should be valid");
        }
    }

    #[test]
    fn test_preset_values_differ_not_logic() {
        let precise = GestureConfig::preset(Preset::Precise);
        let beginner = GestureConfig::preset(Preset::Beginner);
        assert!(precise.click_threshold < beginner.click_threshold);
        assert!(precise.action_cooldown < beginner.action_cooldown);
        assert!(precise.smoothing_factor < beginner.smoothing_factor);
    }

    #[test]
    fn test_validate_smoothing_out_of_range() {
        let config = GestureConfig {
            smoothing_factor: 1.5,
            ..GestureConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_threshold() {
        let config = GestureConfig {
            click_threshold: 0.0,
            ..GestureConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_negative_threshold() {
        let config = GestureConfig {
            click_threshold: -0.01,
            ..GestureConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_nan_threshold() {
        let config = GestureConfig {
            scroll_threshold: f64::NAN,
            ..GestureConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_negative_cooldown() {
        let config = GestureConfig {
            action_cooldown: -0.1,
            ..GestureConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_boundary_values() {
        let mut config = GestureConfig::default();
        config.smoothing_factor = 0.0;
        assert!(config.validate().is_ok());
        config.smoothing_factor = 1.0;
        assert!(config.validate().is_ok());
        config.action_cooldown = 0.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_camera_fps() {
        let config = GestureConfig {
            camera_fps: 0,
            ..GestureConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cooldown_duration() {
        let config = GestureConfig::default();
        assert_eq!(config.cooldown(), Duration::from_millis(300));
    }

    #[test]
    fn test_toml_roundtrip() {
        let original = GestureConfig::preset(Preset::Precise);
        let toml_str = original.to_toml().unwrap();
        let back: GestureConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(original, back);
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        // Only the keys named in the file are overridden.
        let config: GestureConfig = toml::from_str("click_threshold = 0.05").unwrap();
        assert_eq!(config.click_threshold, 0.05);
        assert_eq!(config.move_threshold, 0.15);
        assert_eq!(config.smoothing_factor, 0.7);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("test_config.toml");

        let mut original = GestureConfig::default();
        original.click_threshold = 0.025;
        original.smoothing_factor = 0.85;

        original.save(&config_path).expect("Failed to save config");
        assert!(config_path.exists());

        let loaded = GestureConfig::load(&config_path).expect("Failed to load config");
        assert_eq!(loaded.click_threshold, 0.025);
        assert_eq!(loaded.smoothing_factor, 0.85);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let nested_path = temp_dir.path().join("nested").join("config.toml");

        GestureConfig::default()
            .save(&nested_path)
            .expect("Failed to save config");
        assert!(nested_path.exists());
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("bad_config.toml");
        std::fs::write(&config_path, "smoothing_factor = 2.0\n").unwrap();

        let result = GestureConfig::load(&config_path);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_nonexistent_file() {
        let path = PathBuf::from("/tmp/nonexistent_vmouse_config_12345.toml");
        assert!(GestureConfig::load(&path).is_err());
    }

    #[test]
    fn test_preset_from_str() {
        assert_eq!(Preset::from_str("precise").unwrap(), Preset::Precise);
        assert_eq!(Preset::from_str("Responsive").unwrap(), Preset::Responsive);
        assert_eq!(Preset::from_str("BEGINNER").unwrap(), Preset::Beginner);
        assert!(Preset::from_str("turbo").is_err());
    }

    #[test]
    fn test_default_path_ends_with_config_toml() {
        let path = GestureConfig::default_path();
        assert!(path.to_string_lossy().contains("config.toml"));
    }
}
