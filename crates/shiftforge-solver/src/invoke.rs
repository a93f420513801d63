//! Solver invocation.
//!
//! The backend runs on a dedicated worker thread. The calling thread waits for
//! it under a watchdog deadline and polls a [`CancelToken`]; when either fires
//! the worker is left detached and finishes on its own.

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use shiftforge_core::{Result, ShiftForgeError, SolveStatus};
use tracing::{debug, warn};

use crate::backend::{BackendOptions, BackendOutcome, BackendStatus, MilpBackend};
use crate::linear::LinearModel;

/// Absolute tolerance used when checking a time-limited incumbent.
pub const FEASIBILITY_TOLERANCE: f64 = 1e-6;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Cooperative cancellation flag shared between the host and a solve.
///
/// Cloning yields a handle to the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. Thread-safe.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Runs `backend` on a worker thread and waits at most `deadline` for it.
///
/// # Errors
///
/// - [`ShiftForgeError::Cancelled`] when `cancel` fires first.
/// - [`ShiftForgeError::DeadlineExceeded`] when the deadline passes first.
/// - [`ShiftForgeError::SolverIntegration`] when the worker cannot be spawned,
///   panics, or the backend itself fails.
pub fn run_with_watchdog(
    backend: Arc<dyn MilpBackend>,
    model: Arc<LinearModel>,
    options: BackendOptions,
    deadline: Duration,
    cancel: &CancelToken,
) -> Result<BackendOutcome> {
    if cancel.is_cancelled() {
        return Err(ShiftForgeError::Cancelled);
    }

    let (tx, rx) = mpsc::channel();
    let backend_name = backend.name();
    thread::Builder::new()
        .name("shiftforge-milp".into())
        .spawn(move || {
            let result =
                panic::catch_unwind(AssertUnwindSafe(|| backend.solve(&model, &options)));
            // The receiver is gone when the caller already gave up.
            let _ = tx.send(result);
        })
        .map_err(|e| ShiftForgeError::solver(format!("failed to spawn solver thread: {e}")))?;

    let started = Instant::now();
    loop {
        let remaining = deadline.saturating_sub(started.elapsed());
        match rx.recv_timeout(remaining.min(POLL_INTERVAL)) {
            Ok(Ok(result)) => return result,
            Ok(Err(_)) => {
                return Err(ShiftForgeError::solver(format!(
                    "backend '{backend_name}' panicked"
                )))
            }
            Err(RecvTimeoutError::Timeout) => {
                if cancel.is_cancelled() {
                    warn!(event = "solve_cancelled", backend = backend_name);
                    return Err(ShiftForgeError::Cancelled);
                }
                if started.elapsed() >= deadline {
                    warn!(
                        event = "solve_deadline_exceeded",
                        backend = backend_name,
                        deadline_secs = deadline.as_secs_f64(),
                    );
                    return Err(ShiftForgeError::DeadlineExceeded(deadline));
                }
            }
            Err(RecvTimeoutError::Disconnected) => {
                return Err(ShiftForgeError::solver(format!(
                    "backend '{backend_name}' exited without a result"
                )))
            }
        }
    }
}

/// Maps a raw backend outcome onto the five solve statuses.
///
/// A time- or gap-limited outcome counts as [`SolveStatus::NotSolved`] only
/// when its incumbent satisfies the model; otherwise it is
/// [`SolveStatus::Undefined`].
///
/// # Errors
///
/// Returns [`ShiftForgeError::SolverIntegration`] for unknown statuses, and
/// for an optimal outcome whose value vector does not match the model.
pub fn interpret(outcome: &BackendOutcome, model: &LinearModel) -> Result<SolveStatus> {
    let status = match &outcome.status {
        BackendStatus::Optimal => {
            if outcome.values.len() != model.num_variables() {
                return Err(ShiftForgeError::solver(format!(
                    "optimal outcome carries {} values for {} variables",
                    outcome.values.len(),
                    model.num_variables()
                )));
            }
            SolveStatus::Optimal
        }
        BackendStatus::TimeLimit | BackendStatus::GapLimit => {
            match model.first_violation(&outcome.values, FEASIBILITY_TOLERANCE) {
                None => SolveStatus::NotSolved,
                Some(violation) => {
                    debug!(event = "incumbent_rejected", %violation);
                    SolveStatus::Undefined
                }
            }
        }
        BackendStatus::Infeasible => SolveStatus::Infeasible,
        BackendStatus::Unbounded => SolveStatus::Unbounded,
        BackendStatus::NotSet => SolveStatus::Undefined,
        BackendStatus::Unknown(raw) => {
            return Err(ShiftForgeError::solver(format!(
                "unrecognized solver status '{raw}'"
            )))
        }
    };
    Ok(status)
}

/// Solves a model without variables by checking its constant rows.
pub fn solve_trivial(model: &LinearModel) -> BackendOutcome {
    match model.first_violation(&[], FEASIBILITY_TOLERANCE) {
        None => BackendOutcome::new(BackendStatus::Optimal, Vec::new()),
        Some(_) => BackendOutcome::status_only(BackendStatus::Infeasible),
    }
}

#[cfg(test)]
#[path = "invoke_tests.rs"]
mod tests;
