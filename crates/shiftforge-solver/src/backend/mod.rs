//! MILP backends.
//!
//! A backend receives a finished [`LinearModel`] and returns the raw status
//! and variable values. Interpreting those into a [`SolveStatus`] happens in
//! [`crate::invoke`], so every backend is held to the same rules.
//!
//! [`SolveStatus`]: shiftforge_core::SolveStatus

#[cfg(feature = "highs")]
mod highs;

#[cfg(feature = "highs")]
pub use highs::HighsBackend;

use std::fmt::Debug;
use std::time::Duration;

use shiftforge_config::SolverSettings;
use shiftforge_core::Result;

use crate::linear::LinearModel;

/// Options handed to a backend for one solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendOptions {
    pub time_limit: Duration,
    pub verbose: bool,
    pub random_seed: Option<u64>,
    pub threads: Option<u32>,
}

impl BackendOptions {
    pub fn new(time_limit: Duration) -> Self {
        Self {
            time_limit,
            verbose: false,
            random_seed: None,
            threads: None,
        }
    }
}

impl From<&SolverSettings> for BackendOptions {
    fn from(settings: &SolverSettings) -> Self {
        Self {
            time_limit: settings.time_limit(),
            verbose: settings.verbose,
            random_seed: settings.random_seed,
            threads: settings.threads,
        }
    }
}

/// Raw termination status reported by a backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendStatus {
    /// Proven optimal.
    Optimal,
    /// Stopped by the time limit; `values` hold the incumbent, if any.
    TimeLimit,
    /// Stopped by the MIP gap limit; `values` hold the incumbent.
    GapLimit,
    Infeasible,
    Unbounded,
    /// The backend finished without a usable status.
    NotSet,
    /// Anything the backend reports that the model has no mapping for.
    Unknown(String),
}

/// Result of one backend call.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendOutcome {
    pub status: BackendStatus,
    /// One value per model variable, in [`LinearModel::variables`] order.
    /// Empty when the status carries no solution.
    pub values: Vec<f64>,
}

impl BackendOutcome {
    pub fn new(status: BackendStatus, values: Vec<f64>) -> Self {
        Self { status, values }
    }

    /// An outcome without variable values.
    pub fn status_only(status: BackendStatus) -> Self {
        Self::new(status, Vec::new())
    }
}

/// An external MILP solver.
///
/// Implementations must be callable from a worker thread and must honor
/// `options.time_limit` themselves; the caller only enforces a coarser
/// watchdog deadline on top of it.
pub trait MilpBackend: Send + Sync + Debug {
    /// Short backend name for logs.
    fn name(&self) -> &'static str;

    /// Minimizes the model's objective subject to its constraints.
    ///
    /// Infeasible and unbounded models are reported through
    /// [`BackendStatus`], not as errors. Errors are reserved for failures of
    /// the backend itself.
    fn solve(&self, model: &LinearModel, options: &BackendOptions) -> Result<BackendOutcome>;
}
