// Runtime configuration for the window manager

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::state::error::{StateError, StateResult};
use crate::state::geometry::{WindowSize, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};

/// Environment variable naming a JSON config file
pub const CONFIG_ENV_VAR: &str = "VALENTINE_OS_CONFIG";

/// Largest accepted z-index seed. Leaves the counter room to grow and keeps
/// values exact as JavaScript numbers.
pub const MAX_INITIAL_Z_INDEX: u64 = u32::MAX as u64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowManagerConfig {
    /// Size of the desktop area windows live in
    pub viewport: WindowSize,
    /// Height kept free for the menu bar and dock when maximizing
    pub reserved_chrome_height: f64,
    pub min_window_size: WindowSize,
    /// Seed for the z-index counter; the first window gets seed + 1
    pub initial_z_index: u64,
}

impl Default for WindowManagerConfig {
    fn default() -> Self {
        Self {
            viewport: WindowSize::new(1280.0, 720.0),
            reserved_chrome_height: 80.0,
            min_window_size: WindowSize::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT),
            initial_z_index: 100,
        }
    }
}

impl WindowManagerConfig {
    pub fn from_json_str(json: &str) -> StateResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> StateResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Load from the file named by `VALENTINE_OS_CONFIG`, falling back to defaults
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            return Self::default();
        };

        match Self::load(Path::new(&path)) {
            Ok(config) => {
                log::info!("Loaded window manager config from {:?}", path);
                config
            }
            Err(e) => {
                log::warn!("Ignoring config {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> StateResult<()> {
        let numbers = [
            self.viewport.width,
            self.viewport.height,
            self.reserved_chrome_height,
            self.min_window_size.width,
            self.min_window_size.height,
        ];
        if numbers.iter().any(|n| !n.is_finite()) {
            return Err(StateError::InvalidConfig(
                "all sizes must be finite numbers".to_string(),
            ));
        }
        if self.min_window_size.width <= 0.0 || self.min_window_size.height <= 0.0 {
            return Err(StateError::InvalidConfig(format!(
                "minimum window size must be positive, got {}x{}",
                self.min_window_size.width, self.min_window_size.height
            )));
        }
        if self.reserved_chrome_height < 0.0 {
            return Err(StateError::InvalidConfig(format!(
                "reserved chrome height cannot be negative, got {}",
                self.reserved_chrome_height
            )));
        }
        if self.initial_z_index > MAX_INITIAL_Z_INDEX {
            return Err(StateError::InvalidConfig(format!(
                "initial z-index must be at most {}, got {}",
                MAX_INITIAL_Z_INDEX, self.initial_z_index
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_desktop_constants() {
        let config = WindowManagerConfig::default();
        assert_eq!(config.min_window_size, WindowSize::MIN);
        assert_eq!(config.initial_z_index, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{ "viewport": { "width": 1920, "height": 1080 } }"#;
        let config = WindowManagerConfig::from_json_str(json).unwrap();
        assert_eq!(config.viewport, WindowSize::new(1920.0, 1080.0));
        assert_eq!(config.reserved_chrome_height, 80.0);
    }

    #[test]
    fn test_rejects_bad_minimum() {
        let err = WindowManagerConfig::from_json_str(
            r#"{ "min_window_size": { "width": 0, "height": 200 } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, StateError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = WindowManagerConfig::from_json_str("{ viewport").unwrap_err();
        assert!(matches!(err, StateError::ConfigParse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = Path::new("/nonexistent/valentine-os.json");
        let err = WindowManagerConfig::load(path).unwrap_err();
        assert!(matches!(err, StateError::ConfigIo(_)));
    }

    #[test]
    fn test_rejects_z_index_seed_near_overflow() {
        let json = r#"{ "initial_z_index": 18446744073709551614 }"#;
        let err = WindowManagerConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, StateError::InvalidConfig(_)));

        let json = format!(r#"{{ "initial_z_index": {} }}"#, MAX_INITIAL_Z_INDEX);
        let config = WindowManagerConfig::from_json_str(&json).unwrap();
        assert_eq!(config.initial_z_index, MAX_INITIAL_Z_INDEX);
    }
}
