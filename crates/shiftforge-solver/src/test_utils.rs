//! Test utilities for shiftforge-solver
//!
//! A scripted backend lets invocation and model-state logic be tested
//! without a real MILP solver.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use shiftforge_core::Result;

use crate::backend::{BackendOptions, BackendOutcome, BackendStatus, MilpBackend};
use crate::linear::{LinearModel, VarDef};

type Script = dyn Fn(&LinearModel, &BackendOptions) -> Result<BackendOutcome> + Send + Sync;

/// Backend whose answer is produced by a closure.
pub struct ScriptedBackend {
    script: Box<Script>,
    calls: AtomicUsize,
}

impl ScriptedBackend {
    pub fn new<F>(script: F) -> Self
    where
        F: Fn(&LinearModel, &BackendOptions) -> Result<BackendOutcome> + Send + Sync + 'static,
    {
        Self {
            script: Box::new(script),
            calls: AtomicUsize::new(0),
        }
    }

    /// Always answers `status` with no values.
    pub fn status(status: BackendStatus) -> Self {
        Self::new(move |_, _| Ok(BackendOutcome::status_only(status.clone())))
    }

    /// Answers `status` with one value per variable taken from `value_of`.
    pub fn with_values<F>(status: BackendStatus, value_of: F) -> Self
    where
        F: Fn(&VarDef) -> f64 + Send + Sync + 'static,
    {
        Self::new(move |model, _| {
            let values = model.variables().iter().map(&value_of).collect();
            Ok(BackendOutcome::new(status.clone(), values))
        })
    }

    /// Number of times `solve` has been called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl fmt::Debug for ScriptedBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptedBackend")
            .field("calls", &self.calls())
            .finish()
    }
}

impl MilpBackend for ScriptedBackend {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn solve(&self, model: &LinearModel, options: &BackendOptions) -> Result<BackendOutcome> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.script)(model, options)
    }
}
