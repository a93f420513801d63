//! HiGHS backend through `good_lp`.

use good_lp::solvers::highs::highs;
use good_lp::solvers::SolutionStatus;
use good_lp::{
    constraint, variable, Expression, ProblemVariables, ResolutionError, Solution, SolverModel,
    Variable,
};
use shiftforge_core::Result;
use tracing::{debug, trace};

use super::{BackendOptions, BackendOutcome, BackendStatus, MilpBackend};
use crate::linear::{LinearExpr, LinearModel, Sense, VarKind};

/// Solves models with the HiGHS MIP solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct HighsBackend;

impl HighsBackend {
    pub fn new() -> Self {
        Self
    }
}

fn to_expression(expr: &LinearExpr, vars: &[Variable]) -> Expression {
    let mut out = Expression::with_capacity(expr.terms().len());
    for &(var, coefficient) in expr.terms() {
        out.add_mul(coefficient, vars[var.index()]);
    }
    out
}

impl MilpBackend for HighsBackend {
    fn name(&self) -> &'static str {
        "highs"
    }

    fn solve(&self, model: &LinearModel, options: &BackendOptions) -> Result<BackendOutcome> {
        let mut problem = ProblemVariables::new();
        let vars: Vec<Variable> = model
            .variables()
            .iter()
            .map(|def| {
                let mut v = variable().name(def.name.clone()).min(def.lower);
                if let Some(upper) = def.upper {
                    v = v.max(upper);
                }
                if def.kind != VarKind::Continuous {
                    v = v.integer();
                }
                problem.add(v)
            })
            .collect();

        let objective = to_expression(model.objective(), &vars);
        let mut lp = problem
            .minimise(objective)
            .using(highs)
            .set_option("output_flag", options.verbose)
            .set_option("time_limit", options.time_limit.as_secs_f64());
        if let Some(seed) = options.random_seed {
            lp = lp.set_option("random_seed", (seed % i32::MAX as u64) as i32);
        }
        if let Some(threads) = options.threads {
            lp = lp.set_option("threads", i32::try_from(threads).unwrap_or(i32::MAX));
        }

        for c in model.constraints() {
            let lhs = to_expression(&c.expr, &vars);
            let rhs = c.rhs;
            trace!(constraint = %c.name, sense = %c.sense, rhs);
            lp.add_constraint(match c.sense {
                Sense::Le => constraint!(lhs <= rhs),
                Sense::Ge => constraint!(lhs >= rhs),
                Sense::Eq => constraint!(lhs == rhs),
            });
        }

        debug!(
            event = "backend_dispatch",
            backend = self.name(),
            model = model.name(),
            variables = vars.len(),
            constraints = model.num_constraints(),
        );

        match lp.solve() {
            Ok(solution) => {
                let status = match solution.status() {
                    SolutionStatus::Optimal => BackendStatus::Optimal,
                    SolutionStatus::TimeLimit => BackendStatus::TimeLimit,
                    SolutionStatus::GapLimit => BackendStatus::GapLimit,
                    #[allow(unreachable_patterns)]
                    other => BackendStatus::Unknown(format!("{other:?}")),
                };
                let values = vars.iter().map(|&v| solution.value(v)).collect();
                Ok(BackendOutcome::new(status, values))
            }
            Err(ResolutionError::Infeasible) => {
                Ok(BackendOutcome::status_only(BackendStatus::Infeasible))
            }
            Err(ResolutionError::Unbounded) => {
                Ok(BackendOutcome::status_only(BackendStatus::Unbounded))
            }
            Err(ResolutionError::Other("NotSet")) => {
                Ok(BackendOutcome::status_only(BackendStatus::NotSet))
            }
            Err(other) => Ok(BackendOutcome::status_only(BackendStatus::Unknown(
                other.to_string(),
            ))),
        }
    }
}
