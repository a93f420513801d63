//! ShiftForge Solver
//!
//! This crate turns one week of shift input into a mixed-integer linear
//! program and solves it:
//! - Parameter preparation (costs, availability and wish indicators)
//! - Decision variables and hard constraints
//! - Weighted objective (cost, wishes, fairness)
//! - Backend invocation with a time budget, watchdog and cancellation
//! - Extraction of the schedule, hours and KPI tables
//!
//! The model is assembled as a solver-agnostic [`LinearModel`]; the HiGHS
//! backend ships behind the `highs` feature (on by default).

pub mod backend;
pub mod builder;
pub mod extract;
pub mod invoke;
pub mod linear;
pub mod model;
pub mod objective;
pub mod params;

#[cfg(test)]
mod test_utils;

#[cfg(feature = "highs")]
pub use backend::HighsBackend;
pub use backend::{BackendOptions, BackendOutcome, BackendStatus, MilpBackend};
pub use builder::{ShiftVariables, MAX_SLOTS_PER_DAY, MAX_WORKED_DAYS};
pub use invoke::CancelToken;
pub use linear::{LinearExpr, LinearModel, Sense, VarId, VarKind};
pub use model::{ModelState, ShiftModel};
pub use params::ModelParameters;
