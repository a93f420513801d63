//! The shift model: build once, solve once.

use std::sync::Arc;
use std::time::Instant;

use shiftforge_config::{ShiftConfig, SolverSettings};
use shiftforge_core::{
    HolidayCalendar, Result, ShiftForgeError, ShiftInput, ShiftSolution, SolveStatus,
};
use tracing::{info, warn};

use crate::backend::{BackendOptions, MilpBackend};
use crate::builder::{add_hard_constraints, ShiftVariables};
use crate::extract::extract;
use crate::invoke::{interpret, run_with_watchdog, solve_trivial, CancelToken};
use crate::linear::LinearModel;
use crate::objective;
use crate::params::ModelParameters;

/// Lifecycle of a [`ShiftModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelState {
    /// Variables, constraints and objective are in place.
    Built,
    /// The backend is running.
    Solving,
    /// The backend returned one of the five statuses.
    Solved(SolveStatus),
    /// The solve ended in an error.
    Failed,
}

/// A built MILP for one week of input.
///
/// # Example
///
/// ```
/// use shiftforge_config::ShiftConfig;
/// use shiftforge_core::ShiftInput;
/// use shiftforge_solver::{ModelState, ShiftModel};
///
/// let input = ShiftInput::default();
/// let model = ShiftModel::build(&input, &ShiftConfig::default()).unwrap();
///
/// assert_eq!(model.state(), ModelState::Built);
/// assert_eq!(model.linear_model().num_variables(), 0);
/// ```
#[derive(Debug)]
pub struct ShiftModel<'a> {
    params: ModelParameters<'a>,
    vars: ShiftVariables,
    model: Arc<LinearModel>,
    settings: SolverSettings,
    state: ModelState,
}

impl<'a> ShiftModel<'a> {
    /// Builds the model using the configuration's holiday calendar.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftForgeError::Configuration`] when the configuration or
    /// the input tables are invalid.
    pub fn build(input: &'a ShiftInput, config: &ShiftConfig) -> Result<Self> {
        let calendar = config.holiday_calendar();
        Self::build_with_calendar(input, config, &calendar)
    }

    /// Builds the model with a caller-supplied holiday calendar.
    pub fn build_with_calendar(
        input: &'a ShiftInput,
        config: &ShiftConfig,
        calendar: &dyn HolidayCalendar,
    ) -> Result<Self> {
        config
            .validate()
            .map_err(|e| ShiftForgeError::configuration(e.to_string()))?;

        let params = ModelParameters::prepare(input, config.slot_hours, calendar)?;
        let mut model = LinearModel::new("shift_schedule");
        let vars = ShiftVariables::allocate(&mut model, &params);
        add_hard_constraints(&mut model, &params, &vars);
        model.set_objective(objective::compose(&params, &vars, &config.weights));

        info!(
            event = "model_built",
            staff = params.staff_count(),
            slot_keys = params.key_count(),
            variables = model.num_variables(),
            constraints = model.num_constraints(),
        );

        Ok(Self {
            params,
            vars,
            model: Arc::new(model),
            settings: config.solver.clone(),
            state: ModelState::Built,
        })
    }

    pub fn state(&self) -> ModelState {
        self.state
    }

    /// The assembled solver-agnostic model.
    pub fn linear_model(&self) -> &LinearModel {
        &self.model
    }

    pub fn parameters(&self) -> &ModelParameters<'a> {
        &self.params
    }

    pub fn variables(&self) -> &ShiftVariables {
        &self.vars
    }

    /// Solves the model with `backend`.
    ///
    /// Infeasible, unbounded and undefined outcomes are returned as a
    /// solution with that status and empty tables.
    ///
    /// # Errors
    ///
    /// - [`ShiftForgeError::InvalidState`] when the model was already solved.
    /// - [`ShiftForgeError::SolverIntegration`] for backend failures and
    ///   unrecognized statuses.
    /// - [`ShiftForgeError::DeadlineExceeded`] when the backend overruns the
    ///   watchdog deadline.
    pub fn solve(&mut self, backend: Arc<dyn MilpBackend>) -> Result<ShiftSolution> {
        self.solve_with_cancel(backend, &CancelToken::new())
    }

    /// Like [`solve`](Self::solve), returning [`ShiftForgeError::Cancelled`]
    /// once `cancel` fires.
    pub fn solve_with_cancel(
        &mut self,
        backend: Arc<dyn MilpBackend>,
        cancel: &CancelToken,
    ) -> Result<ShiftSolution> {
        if self.state != ModelState::Built {
            return Err(ShiftForgeError::InvalidState(format!(
                "model can only be solved once (state: {:?})",
                self.state
            )));
        }
        self.state = ModelState::Solving;

        info!(
            event = "solve_start",
            backend = backend.name(),
            variables = self.model.num_variables(),
            integer_variables = self.model.num_integer_variables(),
            constraints = self.model.num_constraints(),
            time_limit_secs = self.settings.time_limit_seconds,
        );

        let started = Instant::now();
        let outcome = if self.model.num_variables() == 0 {
            Ok(solve_trivial(&self.model))
        } else {
            run_with_watchdog(
                backend,
                Arc::clone(&self.model),
                BackendOptions::from(&self.settings),
                self.settings.watchdog_deadline(),
                cancel,
            )
        };
        let result = outcome.and_then(|o| interpret(&o, &self.model).map(|status| (status, o)));
        let duration = started.elapsed();

        match result {
            Ok((status, outcome)) => {
                self.state = ModelState::Solved(status);
                let solution = extract(
                    &self.model,
                    &self.params,
                    &self.vars,
                    status,
                    &outcome.values,
                    duration,
                );
                info!(
                    event = "solve_end",
                    status = %status,
                    objective = solution.objective_value(),
                    assignments = solution.schedule.len(),
                    duration_ms = duration.as_millis() as u64,
                );
                Ok(solution)
            }
            Err(e) => {
                self.state = ModelState::Failed;
                warn!(event = "solve_failed", error = %e, duration_ms = duration.as_millis() as u64);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
