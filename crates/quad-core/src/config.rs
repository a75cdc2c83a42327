// ABOUTME: Application configuration handling.
// ABOUTME: Loads, validates and saves settings from TOML config files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::{GeometryError, GestureSettings, LayoutSettings, OverdragPolicy};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Press-then-drag recognition
    pub gesture: GestureSettings,

    /// Pane sizing and handle geometry
    pub layout: LayoutSettings,

    /// Behavior once a pane has been dragged down to nothing
    pub overdrag: OverdragPolicy,

    /// Window dimensions
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gesture: GestureSettings::default(),
            layout: LayoutSettings::default(),
            overdrag: OverdragPolicy::default(),
            window_width: 1200,
            window_height: 800,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Invalid initial split ratio: {0}")]
    InvalidSplitRatio(#[from] GeometryError),

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: f64 },

    #[error("Could not determine config directory")]
    NoConfigDir,
}

impl Config {
    /// Get the default config file path (~/.config/quadsplit/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("quadsplit").join("config.toml"))
    }

    /// Load and validate config from a path
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from default path, or return default config if not found
    pub fn load_or_default() -> Self {
        Self::default_path()
            .and_then(|path| match Self::load(&path) {
                Ok(config) => Some(config),
                Err(ConfigError::ReadError(e)) if e.kind() == std::io::ErrorKind::NotFound => None,
                Err(e) => {
                    tracing::warn!("Ignoring config at {}: {}", path.display(), e);
                    None
                }
            })
            .unwrap_or_default()
    }

    /// Save config to a path
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Save config to default path
    pub fn save_to_default(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::default_path().ok_or(ConfigError::NoConfigDir)?;
        self.save(&path)?;
        Ok(path)
    }

    /// Reject values the layout and gesture code cannot use
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.layout.initial_split_ratio.validate()?;

        let checks: [(&'static str, f64, bool); 6] = [
            (
                "gesture.minimum_press_duration",
                self.gesture.minimum_press_duration,
                self.gesture.minimum_press_duration >= 0.0,
            ),
            (
                "gesture.movement_tolerance",
                self.gesture.movement_tolerance as f64,
                self.gesture.movement_tolerance >= 0.0,
            ),
            (
                "layout.padding_factor",
                self.layout.padding_factor as f64,
                self.layout.padding_factor > 0.0 && self.layout.padding_factor <= 1.0,
            ),
            (
                "layout.divider_width",
                self.layout.divider_width as f64,
                self.layout.divider_width >= 0.0 && self.layout.divider_width.is_finite(),
            ),
            (
                "layout.handle_size.width",
                self.layout.handle_size.width as f64,
                self.layout.handle_size.width >= 0.0 && self.layout.handle_size.width.is_finite(),
            ),
            (
                "layout.handle_size.height",
                self.layout.handle_size.height as f64,
                self.layout.handle_size.height >= 0.0 && self.layout.handle_size.height.is_finite(),
            ),
        ];

        for (field, value, ok) in checks {
            if !ok {
                return Err(ConfigError::InvalidValue { field, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SplitRatio;

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.layout.initial_split_ratio = SplitRatio::new(0.3, 0.7);
        config.overdrag = OverdragPolicy::Clamped;
        config.gesture.minimum_press_duration = 0.2;

        let temp_path = std::env::temp_dir()
            .join("quadsplit-config-test")
            .join("config.toml");
        config.save(&temp_path).unwrap();

        let loaded = Config::load(&temp_path).unwrap();
        assert_eq!(loaded, config);

        let _ = std::fs::remove_file(&temp_path);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            overdrag = "clamped"

            [layout]
            padding_factor = 0.8
            "#,
        )
        .unwrap();

        assert_eq!(config.overdrag, OverdragPolicy::Clamped);
        assert_eq!(config.layout.padding_factor, 0.8);
        assert_eq!(config.layout.divider_width, 1.0);
        assert_eq!(config.gesture, GestureSettings::default());
        assert_eq!(config.window_width, 1200);
    }

    #[test]
    fn test_validate_rejects_bad_ratio() {
        let mut config = Config::default();
        config.layout.initial_split_ratio = SplitRatio { x: 1.2, y: 0.5 };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSplitRatio(_))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_padding() {
        let mut config = Config::default();
        config.layout.padding_factor = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue {
                field: "layout.padding_factor",
                ..
            })
        ));
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let temp_path = std::env::temp_dir().join("quadsplit-invalid-config.toml");
        std::fs::write(&temp_path, "[gesture]\nmovement_tolerance = -4.0\n").unwrap();

        let result = Config::load(&temp_path);
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));

        let _ = std::fs::remove_file(&temp_path);
    }

    #[test]
    fn test_default_path() {
        if let Some(p) = Config::default_path() {
            assert!(p.ends_with("quadsplit/config.toml"));
        }
    }
}
