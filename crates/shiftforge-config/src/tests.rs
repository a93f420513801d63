//! Tests for model configuration.

use super::*;
use shiftforge_core::HolidayCalendar;

#[test]
fn test_defaults_match_documented_knobs() {
    let config = ShiftConfig::default();
    assert_eq!(config.slot_hours, 4);
    assert_eq!(config.weights, ObjectiveWeights::new(1.0, 1.0, 1.0));
    assert_eq!(config.time_limit(), Duration::from_secs(300));
    assert!(!config.solver.verbose);
    assert_eq!(config.solver.watchdog_deadline(), Duration::from_secs(330));
    assert!(config.holidays.extra_dates.is_empty());
    assert!(config.validate().is_ok());
}

#[test]
fn test_toml_parsing() {
    let toml = r#"
        slot_hours = 4

        [weights]
        cost = 1.0
        wish = 250.0
        fairness = 10.0

        [solver]
        time_limit_seconds = 30
        verbose = true
        random_seed = 42

        [holidays]
        extra_dates = ["2025-05-28"]
    "#;

    let config = ShiftConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.weights.wish, 250.0);
    assert_eq!(config.weights.fairness, 10.0);
    assert_eq!(config.solver.time_limit_seconds, 30);
    assert!(config.solver.verbose);
    assert_eq!(config.solver.random_seed, Some(42));
    assert_eq!(config.solver.watchdog_grace_seconds, 30);
    assert_eq!(
        config.holidays.extra_dates,
        vec![NaiveDate::from_ymd_opt(2025, 5, 28).unwrap()]
    );
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        weights:
          fairness: 0.0
        solver:
          time_limit_seconds: 5
          threads: 1
    "#;

    let config = ShiftConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.weights.fairness, 0.0);
    assert_eq!(config.weights.cost, 1.0);
    assert_eq!(config.solver.threads, Some(1));
    assert_eq!(config.time_limit(), Duration::from_secs(5));
}

#[test]
fn test_invalid_toml_is_reported() {
    let err = ShiftConfig::from_toml_str("slot_hours = \"four\"").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_load_missing_file_is_io_error() {
    let err = ShiftConfig::load("does/not/exist.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_builder() {
    let wednesday = NaiveDate::from_ymd_opt(2025, 5, 28).unwrap();
    let config = ShiftConfig::new()
        .with_time_limit_seconds(60)
        .with_weights(ObjectiveWeights::new(1.0, 100.0, 0.0))
        .with_verbose(true)
        .with_random_seed(7)
        .with_extra_holiday(wednesday);

    assert_eq!(config.time_limit(), Duration::from_secs(60));
    assert_eq!(config.weights.wish, 100.0);
    assert!(config.solver.verbose);
    assert_eq!(config.solver.random_seed, Some(7));
    assert!(config.holiday_calendar().is_holiday(wednesday));
}

#[test]
fn test_zero_fairness_weight_is_valid() {
    let config = ShiftConfig::new().with_weights(ObjectiveWeights::new(1.0, 1.0, 0.0));
    assert!(config.validate().is_ok());
}

#[test]
fn test_negative_weight_is_rejected() {
    let config = ShiftConfig::new().with_weights(ObjectiveWeights::new(1.0, 1.0, -1.0));
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("weights.fairness"));
}

#[test]
fn test_zero_time_limit_is_rejected() {
    let config = ShiftConfig::new().with_time_limit_seconds(0);
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_zero_slot_hours_is_rejected() {
    let mut config = ShiftConfig::new();
    config.slot_hours = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_watchdog_deadline_adds_grace() {
    let config = ShiftConfig::new().with_time_limit_seconds(60);
    assert_eq!(config.solver.watchdog_deadline(), Duration::from_secs(90));
}

#[test]
fn test_huge_time_limit_saturates_watchdog_deadline() {
    let config = ShiftConfig::new().with_time_limit_seconds(u64::MAX);
    assert!(config.validate().is_ok());
    assert_eq!(
        config.solver.watchdog_deadline(),
        Duration::from_secs(u64::MAX)
    );
    assert!(config.solver.watchdog_deadline() >= config.time_limit());
}
