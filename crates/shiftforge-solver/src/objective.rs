//! Objective composition.

use shiftforge_config::ObjectiveWeights;
use tracing::debug;

use crate::builder::ShiftVariables;
use crate::linear::LinearExpr;
use crate::params::ModelParameters;

/// Builds `W_COST·Σ cost·x − W_WISH·Σ wish·x + W_FAIR·Σ dev`.
///
/// Cost and wish terms share the same `x`, so they are merged into a single
/// coefficient per assignment. Terms whose weight is zero contribute nothing.
pub fn compose(
    params: &ModelParameters<'_>,
    vars: &ShiftVariables,
    weights: &ObjectiveWeights,
) -> LinearExpr {
    let mut objective = LinearExpr::new();

    for s in 0..params.staff_count() {
        for k in 0..params.key_count() {
            let mut coefficient = weights.cost * params.cost(s, k);
            if params.wish(s, k) {
                coefficient -= weights.wish;
            }
            objective.add_term(vars.x(s, k), coefficient);
        }
    }

    if weights.fairness != 0.0 {
        for s in 0..params.staff_count() {
            objective.add_term(vars.dev(s), weights.fairness);
        }
    }

    debug!(
        event = "objective_composed",
        terms = objective.terms().len(),
        cost_weight = weights.cost,
        wish_weight = weights.wish,
        fairness_weight = weights.fairness,
    );
    objective
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shiftforge_core::{
        AvailabilityRecord, AvailabilityState, DemandRecord, ShiftInput, Slot, StaffMember,
        SundayHolidays,
    };

    use crate::linear::LinearModel;

    fn input() -> ShiftInput {
        let monday = NaiveDate::from_ymd_opt(2025, 5, 26).unwrap();
        ShiftInput::default()
            .with_staff(StaffMember::new("S1", "A", 25, 1000.0).with_weekly_hours(0, 40))
            .with_staff(StaffMember::new("S2", "B", 25, 1100.0).with_weekly_hours(0, 40))
            .with_demand(DemandRecord::new(monday, Slot::Morning, 1))
            .with_availability(AvailabilityRecord::new("S1", monday, Slot::Morning, AvailabilityState::Wish))
            .with_availability(AvailabilityRecord::new("S2", monday, Slot::Morning, AvailabilityState::Ok))
    }

    fn coefficient(objective: &LinearExpr, var: crate::linear::VarId) -> f64 {
        objective
            .terms()
            .iter()
            .filter(|(v, _)| *v == var)
            .map(|(_, c)| c)
            .sum()
    }

    #[test]
    fn test_cost_and_wish_merge_per_assignment() {
        let input = input();
        let params = ModelParameters::prepare(&input, 4, &SundayHolidays).unwrap();
        let mut model = LinearModel::new("t");
        let vars = ShiftVariables::allocate(&mut model, &params);

        let objective = compose(&params, &vars, &ObjectiveWeights::new(1.0, 500.0, 2.0));

        assert_eq!(coefficient(&objective, vars.x(0, 0)), 3500.0);
        assert_eq!(coefficient(&objective, vars.x(1, 0)), 4400.0);
        assert_eq!(coefficient(&objective, vars.dev(0)), 2.0);
        assert_eq!(coefficient(&objective, vars.dev(1)), 2.0);
    }

    #[test]
    fn test_zero_fairness_drops_deviation_terms() {
        let input = input();
        let params = ModelParameters::prepare(&input, 4, &SundayHolidays).unwrap();
        let mut model = LinearModel::new("t");
        let vars = ShiftVariables::allocate(&mut model, &params);

        let objective = compose(&params, &vars, &ObjectiveWeights::new(1.0, 1.0, 0.0));

        assert!(objective
            .terms()
            .iter()
            .all(|(v, _)| *v != vars.dev(0) && *v != vars.dev(1)));
        assert_eq!(objective.terms().len(), 2);
    }
}
