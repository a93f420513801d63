//! Result extraction.
//!
//! Reads solved variable values back into the schedule, hours and KPI tables.
//! KPI figures other than the objective are recomputed from the extracted
//! schedule, so they do not depend on how tight `dev` was in the solve.

use std::time::Duration;

use shiftforge_core::{HoursRow, KpiRow, ScheduleRow, ShiftSolution, SolveStatus};
use tracing::trace;

use crate::builder::ShiftVariables;
use crate::linear::LinearModel;
use crate::params::ModelParameters;

/// Threshold above which a binary assignment reads as 1.
const ASSIGNED_THRESHOLD: f64 = 0.5;

/// Builds the output tables for a solve.
///
/// Statuses without a solution yield empty tables and no KPI row.
pub fn extract(
    model: &LinearModel,
    params: &ModelParameters<'_>,
    vars: &ShiftVariables,
    status: SolveStatus,
    values: &[f64],
    solve_duration: Duration,
) -> ShiftSolution {
    if !status.has_solution() || values.len() != model.num_variables() {
        return ShiftSolution::empty(status, solve_duration);
    }

    let mut schedule = Vec::new();
    let mut hours = Vec::with_capacity(params.staff_count());
    let mut labor_cost = 0.0;
    let mut wishes_granted = 0;

    for (s, member) in params.staff().iter().enumerate() {
        for (k, &(date, slot)) in params.slot_keys().iter().enumerate() {
            if values[vars.x(s, k).index()] > ASSIGNED_THRESHOLD {
                trace!(staff = %member.id, %date, %slot, "assigned");
                schedule.push(ScheduleRow {
                    staff_id: member.id.clone(),
                    date,
                    slot,
                    assigned: 1,
                });
                labor_cost += params.cost(s, k);
                if params.wish(s, k) {
                    wishes_granted += 1;
                }
            }
        }
        let h = values[vars.h(s).index()].round().max(0.0);
        hours.push(HoursRow {
            staff_id: member.id.clone(),
            hours: h as u32,
        });
    }

    let kpi = KpiRow {
        objective_value: model.objective().eval(values),
        status,
        verified_optimal: status == SolveStatus::Optimal,
        labor_cost,
        wishes_granted,
        hours_deviation: hours_deviation(&hours),
    };

    ShiftSolution {
        status,
        schedule,
        hours,
        kpi: Some(kpi),
        solve_duration,
    }
}

/// `Σ |hours − mean(hours)|`; zero for an empty table.
pub fn hours_deviation(hours: &[HoursRow]) -> f64 {
    if hours.is_empty() {
        return 0.0;
    }
    let mean = hours.iter().map(|r| f64::from(r.hours)).sum::<f64>() / hours.len() as f64;
    hours
        .iter()
        .map(|r| (f64::from(r.hours) - mean).abs())
        .sum()
}
