//! ShiftForge - Weekly shift scheduling in Rust
//!
//! One call turns a week of staff, availability, demand and wage tables into
//! a schedule: the input is compiled into a mixed-integer program, handed to
//! the solver backend under a time budget, and read back as schedule, hours
//! and KPI tables.
//!
//! # Example
//!
//! ```rust
//! use shiftforge::prelude::*;
//!
//! let config = ShiftConfig::new().with_time_limit_seconds(30);
//! assert_eq!(config.weights, ObjectiveWeights::default());
//! assert!(!SolveStatus::Infeasible.has_solution());
//! ```

#[cfg(feature = "console")]
pub mod console;

use std::sync::Arc;

pub use shiftforge_config::{
    ConfigError, HolidaySettings, ObjectiveWeights, ShiftConfig, SolverSettings,
};
pub use shiftforge_core::{
    AvailabilityRecord, AvailabilityState, DemandRecord, HolidayCalendar, HolidayList, HoursRow,
    KpiRow, Result, ScheduleRow, ShiftForgeError, ShiftInput, ShiftSolution, Slot, SolveStatus,
    StaffId, StaffMember, SundayHolidays, WageRates,
};
#[cfg(feature = "highs")]
pub use shiftforge_solver::HighsBackend;
pub use shiftforge_solver::{
    BackendOptions, BackendOutcome, BackendStatus, CancelToken, LinearModel, MilpBackend,
    ModelState, ShiftModel,
};

/// Builds and solves the week with the default backend.
///
/// # Errors
///
/// Fails on invalid input or configuration and on backend failures.
/// Infeasible weeks are not errors; see [`ShiftSolution::status`].
#[cfg(feature = "highs")]
pub fn solve(input: &ShiftInput, config: &ShiftConfig) -> Result<ShiftSolution> {
    solve_with(input, config, Arc::new(HighsBackend::new()), &CancelToken::new())
}

/// Builds and solves the week with an explicit backend and cancel token.
pub fn solve_with(
    input: &ShiftInput,
    config: &ShiftConfig,
    backend: Arc<dyn MilpBackend>,
    cancel: &CancelToken,
) -> Result<ShiftSolution> {
    let mut model = ShiftModel::build(input, config)?;
    model.solve_with_cancel(backend, cancel)
}

pub mod prelude {
    pub use super::{
        AvailabilityState, ObjectiveWeights, ShiftConfig, ShiftInput, ShiftSolution, Slot,
        SolveStatus, StaffId, StaffMember,
    };
    #[cfg(feature = "highs")]
    pub use super::solve;
}
