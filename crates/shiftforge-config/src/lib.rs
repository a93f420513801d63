//! Configuration system for ShiftForge.
//!
//! Load the model's numeric knobs from TOML or YAML files to tune weights,
//! the solver time budget and holidays without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use shiftforge_config::ShiftConfig;
//! use std::time::Duration;
//!
//! let config = ShiftConfig::from_toml_str(r#"
//!     [weights]
//!     wish = 500.0
//!
//!     [solver]
//!     time_limit_seconds = 60
//! "#).unwrap();
//!
//! assert_eq!(config.time_limit(), Duration::from_secs(60));
//! assert_eq!(config.weights.wish, 500.0);
//! assert_eq!(config.weights.cost, 1.0);
//! assert_eq!(config.slot_hours, 4);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use shiftforge_config::ShiftConfig;
//!
//! let config = ShiftConfig::load("shiftforge.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;
use std::time::Duration;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shiftforge_core::HolidayList;
use thiserror::Error;

/// Default length of one slot in hours.
pub const DEFAULT_SLOT_HOURS: u32 = 4;

/// Default solver time budget in seconds.
pub const DEFAULT_TIME_LIMIT_SECS: u64 = 300;

/// Default extra time granted to the backend before the watchdog gives up.
pub const DEFAULT_WATCHDOG_GRACE_SECS: u64 = 30;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main model configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ShiftConfig {
    /// Length of one slot in hours.
    pub slot_hours: u32,

    /// Objective weights.
    pub weights: ObjectiveWeights,

    /// Solver invocation settings.
    pub solver: SolverSettings,

    /// Holiday calendar settings.
    pub holidays: HolidaySettings,
}

impl Default for ShiftConfig {
    fn default() -> Self {
        Self {
            slot_hours: DEFAULT_SLOT_HOURS,
            weights: ObjectiveWeights::default(),
            solver: SolverSettings::default(),
            holidays: HolidaySettings::default(),
        }
    }
}

impl ShiftConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, choosing YAML for `.yaml`/`.yml`
    /// extensions and TOML otherwise.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the solver time budget.
    pub fn with_time_limit_seconds(mut self, seconds: u64) -> Self {
        self.solver.time_limit_seconds = seconds;
        self
    }

    /// Sets the objective weights.
    pub fn with_weights(mut self, weights: ObjectiveWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Turns solver logging on or off.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.solver.verbose = verbose;
        self
    }

    /// Sets the solver random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.solver.random_seed = Some(seed);
        self
    }

    /// Adds an extra holiday on top of Sundays.
    pub fn with_extra_holiday(mut self, date: NaiveDate) -> Self {
        self.holidays.extra_dates.push(date);
        self
    }

    /// Returns the solver time budget.
    pub fn time_limit(&self) -> Duration {
        self.solver.time_limit()
    }

    /// Returns the holiday calendar described by this configuration.
    pub fn holiday_calendar(&self) -> HolidayList {
        HolidayList::new(self.holidays.extra_dates.iter().copied())
    }

    /// Checks the numeric knobs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a zero slot length, a zero time
    /// budget, or a weight that is negative or not finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slot_hours == 0 {
            return Err(ConfigError::Invalid("slot_hours must be positive".into()));
        }
        if self.solver.time_limit_seconds == 0 {
            return Err(ConfigError::Invalid(
                "solver.time_limit_seconds must be positive".into(),
            ));
        }
        self.weights.validate()
    }
}

/// Weights of the three objective terms.
///
/// No normalization is applied between the terms: cost is in currency units
/// while wishes and deviation are small counts, so the defaults let cost
/// dominate. Raise `wish` or `fairness` to shift emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ObjectiveWeights {
    /// Weight of total wage cost.
    pub cost: f64,

    /// Reward per granted wish.
    pub wish: f64,

    /// Penalty per hour of deviation from the team's mean hours.
    pub fairness: f64,
}

impl Default for ObjectiveWeights {
    fn default() -> Self {
        Self {
            cost: 1.0,
            wish: 1.0,
            fairness: 1.0,
        }
    }
}

impl ObjectiveWeights {
    pub fn new(cost: f64, wish: f64, fairness: f64) -> Self {
        Self {
            cost,
            wish,
            fairness,
        }
    }

    /// Rejects negative or non-finite weights.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("cost", self.cost),
            ("wish", self.wish),
            ("fairness", self.fairness),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "weights.{name} must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Solver invocation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SolverSettings {
    /// Wall-clock budget handed to the MILP backend.
    pub time_limit_seconds: u64,

    /// Whether the backend prints its own log.
    pub verbose: bool,

    /// Extra seconds the caller waits past the time budget before giving up
    /// on the backend.
    pub watchdog_grace_seconds: u64,

    /// Backend random seed for reproducible runs.
    pub random_seed: Option<u64>,

    /// Backend thread count; backend default when unset.
    pub threads: Option<u32>,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            time_limit_seconds: DEFAULT_TIME_LIMIT_SECS,
            verbose: false,
            watchdog_grace_seconds: DEFAULT_WATCHDOG_GRACE_SECS,
            random_seed: None,
            threads: None,
        }
    }
}

impl SolverSettings {
    /// Returns the time budget as a Duration.
    pub fn time_limit(&self) -> Duration {
        Duration::from_secs(self.time_limit_seconds)
    }

    /// Returns how long the caller waits for the backend in total.
    ///
    /// Saturates at `u64::MAX` seconds instead of wrapping.
    pub fn watchdog_deadline(&self) -> Duration {
        Duration::from_secs(
            self.time_limit_seconds
                .saturating_add(self.watchdog_grace_seconds),
        )
    }
}

/// Holiday calendar settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct HolidaySettings {
    /// Holidays in addition to Sundays.
    pub extra_dates: Vec<NaiveDate>,
}

#[cfg(test)]
mod tests;
