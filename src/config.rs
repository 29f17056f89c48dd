//! Application configuration
//!
//! Provides centralized configuration for the session timers, the simulated
//! detector and the window. Values are read from a TOML file; every field has
//! a default so a partial (or missing) file is fine.

use crate::error::{HavdefError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Upper bound for either session timer
pub const MAX_TIMER_SECS: u64 = 3600;

/// Complete application configuration
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Session timers
    pub timing: TimingConfig,
    /// Simulated detector parameters
    pub detection: DetectionConfig,
    /// Window and theme
    pub ui: UiConfig,
}

/// Session timer configuration
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct TimingConfig {
    /// Recording auto-stops after this many seconds
    pub recording_limit_secs: u64,
    /// Length of the simulated analysis in seconds
    pub analysis_delay_secs: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            recording_limit_secs: 5,
            analysis_delay_secs: 3,
        }
    }
}

impl TimingConfig {
    /// Recording limit as a `Duration`, capped at [`MAX_TIMER_SECS`]
    pub fn recording_limit(&self) -> Duration {
        Duration::from_secs(self.recording_limit_secs.min(MAX_TIMER_SECS))
    }

    /// Analysis delay as a `Duration`, capped at [`MAX_TIMER_SECS`]
    pub fn analysis_delay(&self) -> Duration {
        Duration::from_secs(self.analysis_delay_secs.min(MAX_TIMER_SECS))
    }
}

/// Simulated detector configuration
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct DetectionConfig {
    /// A uniform sample strictly above this yields DEEPFAKE
    pub deepfake_threshold: f32,
    /// Lower bound of the reported confidence (inclusive)
    pub min_confidence: f32,
    /// Upper bound of the reported confidence (exclusive)
    pub max_confidence: f32,
    /// Fixed RNG seed for reproducible verdicts
    pub seed: Option<u64>,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            deepfake_threshold: 0.7,
            min_confidence: 0.7,
            max_confidence: 1.0,
            seed: None,
        }
    }
}

/// Window and theme configuration
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Start in the dark theme
    pub start_dark: bool,
    /// Initial window width
    pub window_width: f32,
    /// Initial window height
    pub window_height: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            start_dark: true,
            window_width: 1100.0,
            window_height: 800.0,
        }
    }
}

impl AppConfig {
    /// Default config file location (`<config_dir>/havdef/config.toml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("havdef").join("config.toml"))
    }

    /// Load a configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            HavdefError::Config(format!("failed to read '{}': {}", path.display(), e))
        })?;

        let config = Self::from_toml_str(&content).map_err(|e| match e {
            HavdefError::Config(msg) => {
                HavdefError::Config(format!("'{}': {}", path.display(), msg))
            }
            other => other,
        })?;

        info!("[CONFIG] Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load from `path`, or from the default location, falling back to
    /// defaults when no file exists there
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(default) if default.exists() => Self::load(default),
            _ => {
                debug!("[CONFIG] No configuration file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Parse and validate a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: AppConfig =
            toml::from_str(content).map_err(|e| HavdefError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.timing.recording_limit_secs == 0 {
            return Err(HavdefError::Config(
                "timing.recording_limit_secs must be at least 1".to_string(),
            ));
        }
        for (name, secs) in [
            ("recording_limit_secs", self.timing.recording_limit_secs),
            ("analysis_delay_secs", self.timing.analysis_delay_secs),
        ] {
            if secs > MAX_TIMER_SECS {
                return Err(HavdefError::Config(format!(
                    "timing.{} must be at most {}, got {}",
                    name, MAX_TIMER_SECS, secs
                )));
            }
        }

        let d = &self.detection;
        if !(0.0..=1.0).contains(&d.deepfake_threshold) {
            return Err(HavdefError::Config(format!(
                "detection.deepfake_threshold must be within [0, 1], got {}",
                d.deepfake_threshold
            )));
        }
        if !(0.0 <= d.min_confidence && d.min_confidence < d.max_confidence && d.max_confidence <= 1.0)
        {
            return Err(HavdefError::Config(format!(
                "detection confidence range [{}, {}) is not a valid sub-range of [0, 1]",
                d.min_confidence, d.max_confidence
            )));
        }

        if self.ui.window_width <= 0.0 || self.ui.window_height <= 0.0 {
            return Err(HavdefError::Config(
                "ui window size must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.timing.recording_limit(), Duration::from_secs(5));
        assert_eq!(config.timing.analysis_delay(), Duration::from_secs(3));
        assert_eq!(config.detection.deepfake_threshold, 0.7);
        assert!(config.ui.start_dark);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [detection]
            seed = 42

            [ui]
            start_dark = false
        "#,
        )
        .unwrap();

        assert_eq!(config.detection.seed, Some(42));
        assert_eq!(config.detection.min_confidence, 0.7);
        assert!(!config.ui.start_dark);
        assert_eq!(config.timing, TimingConfig::default());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_invalid_confidence_range() {
        let err = AppConfig::from_toml_str(
            r#"
            [detection]
            min_confidence = 0.9
            max_confidence = 0.8
        "#,
        )
        .unwrap_err();
        assert!(matches!(err, HavdefError::Config(_)));
    }

    #[test]
    fn test_zero_recording_limit_rejected() {
        let err = AppConfig::from_toml_str("[timing]\nrecording_limit_secs = 0\n").unwrap_err();
        assert!(err.to_string().contains("recording_limit_secs"));
    }

    #[test]
    fn test_huge_timers_rejected() {
        let err = AppConfig::from_toml_str("[timing]\nrecording_limit_secs = 9223372036854775807\n")
            .unwrap_err();
        assert!(err.to_string().contains("recording_limit_secs"));

        let err = AppConfig::from_toml_str("[timing]\nanalysis_delay_secs = 3601\n").unwrap_err();
        assert!(err.to_string().contains("analysis_delay_secs"));

        let config = AppConfig::from_toml_str("[timing]\nrecording_limit_secs = 3600\n").unwrap();
        assert_eq!(config.timing.recording_limit(), Duration::from_secs(MAX_TIMER_SECS));
    }

    #[test]
    fn test_malformed_toml() {
        assert!(AppConfig::from_toml_str("[timing\n").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = AppConfig::load("/nonexistent/havdef/config.toml").unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
