//! Configuration loading for the junbi splash.
//!
//! Reads `config.toml` from the platform config directory; a missing file
//! yields the defaults. Timing constants (ramp duration, tick interval,
//! step size, settle delay) are configuration rather than code variants.

use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;
use junbi_core::{Easing, Phase, PhaseError, PhaseSet, TimerPolicy};
use serde::Deserialize;
use thiserror::Error;

/// Failure while loading or validating the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("failed to read {path}")]
    Read {
        /// Path of the offending file.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
    /// The config file is not valid TOML for [`Config`].
    #[error("failed to parse {path}")]
    Parse {
        /// Path of the offending file.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },
    /// The phase table failed validation.
    #[error("invalid phase table")]
    Phases(#[from] PhaseError),
}

/// Which timer policy the splash runs with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerMode {
    /// Ease over a fixed wall-clock duration.
    #[default]
    Duration,
    /// Add a fixed step on a fixed period.
    Tick,
}

/// Timing constants for the progress timer.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    /// Timer policy selector.
    pub mode: TimerMode,
    /// Total ramp duration for duration mode, in milliseconds.
    pub duration_ms: u64,
    /// Easing curve for duration mode.
    pub easing: Easing,
    /// Tick period for tick mode, in milliseconds.
    pub tick_ms: u64,
    /// Percent added per tick in tick mode.
    pub step: f64,
    /// Delay between reaching 100 and reporting completion, in milliseconds.
    pub settle_ms: u64,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            mode: TimerMode::Duration,
            duration_ms: 12_000,
            easing: Easing::EaseOutQuart,
            tick_ms: 80,
            step: 1.0,
            settle_ms: 800,
        }
    }
}

impl TimerConfig {
    /// Convert to the core timer policy.
    pub fn policy(&self) -> TimerPolicy {
        match self.mode {
            TimerMode::Duration => TimerPolicy::Duration {
                total_ms: self.duration_ms,
                easing: self.easing,
            },
            TimerMode::Tick => TimerPolicy::Tick {
                interval_ms: self.tick_ms,
                step: self.step,
            },
        }
    }
}

/// Presentation options for the splash screen.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Color theme name (cyan, green, magenta, yellow, red, blue, white).
    pub theme: String,
    /// Brand line shown above the percent readout.
    pub brand: String,
    /// Tagline shown below the progress bar.
    pub tagline: String,
    /// Whether to show the key-binding help line.
    pub show_help: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "cyan".to_string(),
            brand: "J U N B I".to_string(),
            tagline: "Preparing your workspace".to_string(),
            show_help: true,
        }
    }
}

/// Top-level splash configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Timer policy and timing constants.
    pub timer: TimerConfig,
    /// Presentation options.
    pub ui: UiConfig,
    /// Phase table, as `[[phase]]` entries in TOML.
    #[serde(rename = "phase", default)]
    pub phases: Vec<Phase>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timer: TimerConfig::default(),
            ui: UiConfig::default(),
            phases: default_phases(),
        }
    }
}

impl Config {
    /// Load from the platform config directory, falling back to defaults
    /// when no config file is present.
    pub fn load() -> Result<Self, ConfigError> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(path),
            _ => Ok(Self::default()),
        }
    }

    /// Load and parse a specific config file.
    pub fn load_from(path: PathBuf) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let mut config: Config =
            toml::from_str(&raw).map_err(|source| ConfigError::Parse { path, source })?;
        // An omitted phase table means "use the stock phases", not "no phases".
        if config.phases.is_empty() {
            config.phases = default_phases();
        }
        Ok(config)
    }

    /// Validate the phase table into a core [`PhaseSet`].
    pub fn phase_set(&self) -> Result<PhaseSet, ConfigError> {
        Ok(PhaseSet::new(self.phases.clone())?)
    }
}

/// Stock phase table used when the config file does not define one.
pub fn default_phases() -> Vec<Phase> {
    vec![
        Phase::new(15.0, "Initializing"),
        Phase::new(35.0, "Loading modules"),
        Phase::new(60.0, "Connecting services"),
        Phase::new(85.0, "Preparing workspace"),
        Phase::new(100.0, "Almost ready"),
    ]
}

/// Location of the user config file, if a home directory can be resolved.
fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "junbi").map(|dirs| dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_stock_constants() {
        let config = Config::default();
        assert_eq!(config.timer.duration_ms, 12_000);
        assert_eq!(config.timer.settle_ms, 800);
        assert_eq!(config.timer.easing, Easing::EaseOutQuart);
        assert_eq!(config.phases.len(), 5);
        assert!(config.phase_set().is_ok());
    }

    #[test]
    fn test_parse_duration_config() {
        let config: Config = toml::from_str(
            r#"
            [timer]
            mode = "duration"
            duration_ms = 3000
            easing = "linear"
            settle_ms = 0

            [ui]
            brand = "ACME"

            [[phase]]
            threshold = 50.0
            label = "Halfway"

            [[phase]]
            threshold = 100.0
            label = "Done"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.timer.policy(),
            TimerPolicy::Duration {
                total_ms: 3000,
                easing: Easing::Linear,
            }
        );
        assert_eq!(config.ui.brand, "ACME");
        // Unspecified UI fields keep their defaults.
        assert_eq!(config.ui.theme, "cyan");
        assert_eq!(config.phase_set().unwrap().label_for(30.0), "Halfway");
    }

    #[test]
    fn test_parse_tick_config() {
        let config: Config = toml::from_str(
            r#"
            [timer]
            mode = "tick"
            tick_ms = 40
            step = 2.5
            "#,
        )
        .unwrap();
        assert_eq!(
            config.timer.policy(),
            TimerPolicy::Tick {
                interval_ms: 40,
                step: 2.5,
            }
        );
        // No [[phase]] entries parses to the stock table via load_from;
        // plain toml::from_str leaves the list empty.
        assert!(config.phases.is_empty());
    }

    #[test]
    fn test_invalid_phase_table_rejected() {
        let config: Config = toml::from_str(
            r#"
            [[phase]]
            threshold = 60.0
            label = "Late"

            [[phase]]
            threshold = 20.0
            label = "Early"
            "#,
        )
        .unwrap();
        assert!(matches!(
            config.phase_set(),
            Err(ConfigError::Phases(PhaseError::NotIncreasing(1)))
        ));
    }
}
