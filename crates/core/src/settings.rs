//! Application configuration.
//!
//! Settings are stored as TOML with kebab-case keys:
//!
//! ```toml
//! [navigator]
//! transition-ms = 250
//! edge-fraction = 0.25
//! commit-fraction = 0.5
//! easing = "ease-out-cubic"
//!
//! [logging]
//! enabled = true
//! level = "info"
//! max-files = 3
//! directory = "logs"
//! ```

use crate::animation::Easing;
use crate::color::{Color, WHITE};
use anyhow::{Context, Error};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Settings {
    pub navigator: NavigatorSettings,
    pub logging: LoggingSettings,
}

/// Tunables of the stack navigator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct NavigatorSettings {
    /// Duration of push/pop transitions, in milliseconds.
    pub transition_ms: u64,
    /// Fraction of the screen width forming the left admission zone for
    /// the back gesture.
    pub edge_fraction: f32,
    /// Fraction of the screen width a drag must reach on release to commit
    /// to a pop (inclusive).
    pub commit_fraction: f32,
    pub easing: Easing,
    /// Backdrop behind the screen stack.
    pub background: Color,
}

impl Default for NavigatorSettings {
    fn default() -> Self {
        NavigatorSettings {
            transition_ms: 250,
            edge_fraction: 0.25,
            commit_fraction: 0.5,
            easing: Easing::default(),
            background: WHITE,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LoggingSettings {
    pub enabled: bool,
    pub level: String,
    /// How many run log files to retain (0 keeps all).
    pub max_files: usize,
    pub directory: PathBuf,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            enabled: true,
            level: "info".to_string(),
            max_files: 3,
            directory: PathBuf::from("logs"),
        }
    }
}

impl Settings {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Settings, Error> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("can't read settings file {}", path.display()))?;

        toml::from_str(&text)
            .with_context(|| format!("can't parse settings file {}", path.display()))
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        let text = toml::to_string(self).context("can't serialize settings")?;

        fs::write(path, text)
            .with_context(|| format!("can't write settings file {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_the_reference_behavior() {
        let settings = Settings::default();

        assert_eq!(settings.navigator.transition_ms, 250);
        assert_eq!(settings.navigator.edge_fraction, 0.25);
        assert_eq!(settings.navigator.commit_fraction, 0.5);
        assert_eq!(settings.navigator.easing, Easing::EaseOutCubic);
        assert!(settings.logging.enabled);
    }

    #[test]
    fn settings_survive_a_save_and_load_round_trip() -> Result<(), Error> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("Settings.toml");

        let mut settings = Settings::default();
        settings.navigator.transition_ms = 180;
        settings.navigator.commit_fraction = 0.4;
        settings.navigator.easing = Easing::Linear;
        settings.logging.level = "debug".to_string();

        settings.save(&path)?;
        let loaded = Settings::load(&path)?;

        assert_eq!(loaded.navigator.transition_ms, 180);
        assert_eq!(loaded.navigator.commit_fraction, 0.4);
        assert_eq!(loaded.navigator.easing, Easing::Linear);
        assert_eq!(loaded.logging.level, "debug");

        Ok(())
    }

    #[test]
    fn keys_are_kebab_case() -> Result<(), Error> {
        let text = toml::to_string(&Settings::default())?;

        assert!(text.contains("transition-ms"));
        assert!(text.contains("edge-fraction"));
        assert!(text.contains("max-files"));

        Ok(())
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() -> Result<(), Error> {
        let settings: Settings = toml::from_str("[navigator]\ntransition-ms = 100\n")?;

        assert_eq!(settings.navigator.transition_ms, 100);
        assert_eq!(settings.navigator.edge_fraction, 0.25);
        assert_eq!(settings.logging.max_files, 3);

        Ok(())
    }

    #[test]
    fn load_reports_the_offending_path() {
        let err = Settings::load("/nonexistent/Settings.toml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/Settings.toml"));
    }
}
