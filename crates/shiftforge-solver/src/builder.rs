//! Decision variables and hard constraints.
//!
//! Every rule is a separate function so each row family can be inspected and
//! tested on its own. All of them append to a [`LinearModel`] and read
//! parameters by index from [`ModelParameters`].

use tracing::debug;

use crate::linear::{LinearExpr, LinearModel, Sense, VarId};
use crate::params::ModelParameters;

/// Maximum number of slots one staff member works on a single date.
pub const MAX_SLOTS_PER_DAY: u32 = 2;

/// Maximum number of distinct dates one staff member works per week.
pub const MAX_WORKED_DAYS: u32 = 6;

/// Handles of every decision variable of the shift model.
#[derive(Debug, Clone)]
pub struct ShiftVariables {
    n_keys: usize,
    n_dates: usize,
    x: Vec<VarId>,
    h: Vec<VarId>,
    mean_h: Option<VarId>,
    dev: Vec<VarId>,
    worked: Vec<VarId>,
}

impl ShiftVariables {
    /// Allocates `x`, `h`, `mean_h`, `dev` and `worked`.
    ///
    /// `mean_h` is only allocated when there is at least one staff member.
    pub fn allocate(model: &mut LinearModel, params: &ModelParameters<'_>) -> Self {
        let n_keys = params.key_count();
        let n_dates = params.dates().len();

        let mut x = Vec::with_capacity(params.staff_count() * n_keys);
        let mut h = Vec::with_capacity(params.staff_count());
        let mut dev = Vec::with_capacity(params.staff_count());
        let mut worked = Vec::with_capacity(params.staff_count() * n_dates);

        for member in params.staff() {
            for (date, slot) in params.slot_keys() {
                x.push(model.add_binary(format!("x[{},{date},{slot}]", member.id)));
            }
            h.push(model.add_integer(format!("h[{}]", member.id), 0.0, None));
            dev.push(model.add_continuous(format!("dev[{}]", member.id), 0.0, None));
            for date in params.dates() {
                worked.push(model.add_binary(format!("worked[{},{date}]", member.id)));
            }
        }

        let mean_h = (params.staff_count() > 0).then(|| model.add_continuous("mean_h", 0.0, None));

        debug!(
            event = "variables_allocated",
            x = x.len(),
            worked = worked.len(),
            total = model.num_variables(),
        );

        Self {
            n_keys,
            n_dates,
            x,
            h,
            mean_h,
            dev,
            worked,
        }
    }

    /// Assignment of staff `s` to demand key `k`.
    pub fn x(&self, s: usize, k: usize) -> VarId {
        self.x[s * self.n_keys + k]
    }

    /// Weekly hours of staff `s`.
    pub fn h(&self, s: usize) -> VarId {
        self.h[s]
    }

    /// Team mean of weekly hours; absent for an empty staff table.
    pub fn mean_h(&self) -> Option<VarId> {
        self.mean_h
    }

    /// Absolute deviation of staff `s` from the mean.
    pub fn dev(&self, s: usize) -> VarId {
        self.dev[s]
    }

    /// Whether staff `s` works on `dates()[d]`.
    pub fn worked(&self, s: usize, d: usize) -> VarId {
        self.worked[s * self.n_dates + d]
    }

    pub fn staff_count(&self) -> usize {
        self.h.len()
    }
}

/// Adds every hard constraint of the shift model.
pub fn add_hard_constraints(
    model: &mut LinearModel,
    params: &ModelParameters<'_>,
    vars: &ShiftVariables,
) {
    add_eligibility(model, params, vars);
    add_demand_cover(model, params, vars);
    add_hours_definition(model, params, vars);
    add_daily_cap(model, params, vars);
    add_worked_days(model, params, vars);
    add_mean_and_deviation(model, params, vars);
    debug!(
        event = "constraints_built",
        constraints = model.num_constraints(),
    );
}

/// `x = 0` where the staff member is unavailable, or is a minor on a night slot.
pub fn add_eligibility(model: &mut LinearModel, params: &ModelParameters<'_>, vars: &ShiftVariables) {
    let before = model.num_constraints();
    for (s, member) in params.staff().iter().enumerate() {
        for (k, (date, slot)) in params.slot_keys().iter().enumerate() {
            if !params.eligible(s, k) {
                model.add_constraint(
                    format!("eligible[{},{date},{slot}]", member.id),
                    vars.x(s, k).into(),
                    Sense::Le,
                    0.0,
                );
            }
        }
    }
    debug!(event = "eligibility_rows", rows = model.num_constraints() - before);
}

/// `Σ_s x[s,k] ≥ required[k]`. Overstaffing is allowed.
pub fn add_demand_cover(
    model: &mut LinearModel,
    params: &ModelParameters<'_>,
    vars: &ShiftVariables,
) {
    for (k, (date, slot)) in params.slot_keys().iter().enumerate() {
        let covered = LinearExpr::sum((0..vars.staff_count()).map(|s| vars.x(s, k)));
        model.add_constraint(
            format!("demand[{date},{slot}]"),
            covered,
            Sense::Ge,
            f64::from(params.required(k)),
        );
    }
}

/// `h = slot_hours · Σ x` and `min ≤ h ≤ max`.
pub fn add_hours_definition(
    model: &mut LinearModel,
    params: &ModelParameters<'_>,
    vars: &ShiftVariables,
) {
    let slot_hours = f64::from(params.slot_hours());
    for (s, member) in params.staff().iter().enumerate() {
        let mut link = LinearExpr::from(vars.h(s));
        for k in 0..params.key_count() {
            link.add_term(vars.x(s, k), -slot_hours);
        }
        model.add_constraint(format!("hours[{}]", member.id), link, Sense::Eq, 0.0);
        model.add_constraint(
            format!("min_hours[{}]", member.id),
            vars.h(s).into(),
            Sense::Ge,
            f64::from(member.weekly_min_hours),
        );
        model.add_constraint(
            format!("max_hours[{}]", member.id),
            vars.h(s).into(),
            Sense::Le,
            f64::from(member.weekly_max_hours),
        );
    }
}

/// At most [`MAX_SLOTS_PER_DAY`] slots per staff member per date.
pub fn add_daily_cap(model: &mut LinearModel, params: &ModelParameters<'_>, vars: &ShiftVariables) {
    for (s, member) in params.staff().iter().enumerate() {
        for (d, date) in params.dates().iter().enumerate() {
            let keys = params.keys_on_date(d);
            if keys.is_empty() {
                continue;
            }
            model.add_constraint(
                format!("daily_cap[{},{date}]", member.id),
                LinearExpr::sum(keys.iter().map(|&k| vars.x(s, k))),
                Sense::Le,
                f64::from(MAX_SLOTS_PER_DAY),
            );
        }
    }
}

/// `x ≤ worked` on each date and at most [`MAX_WORKED_DAYS`] worked dates.
pub fn add_worked_days(
    model: &mut LinearModel,
    params: &ModelParameters<'_>,
    vars: &ShiftVariables,
) {
    for (s, member) in params.staff().iter().enumerate() {
        for (d, date) in params.dates().iter().enumerate() {
            for &k in params.keys_on_date(d) {
                let (_, slot) = params.slot_keys()[k];
                model.add_constraint(
                    format!("worked_link[{},{date},{slot}]", member.id),
                    LinearExpr::from(vars.x(s, k)).term(vars.worked(s, d), -1.0),
                    Sense::Le,
                    0.0,
                );
            }
        }
        model.add_constraint(
            format!("worked_days[{}]", member.id),
            LinearExpr::sum((0..params.dates().len()).map(|d| vars.worked(s, d))),
            Sense::Le,
            f64::from(MAX_WORKED_DAYS),
        );
    }
}

/// `mean_h · |staff| = Σ h` and `dev ≥ |h − mean_h|`.
pub fn add_mean_and_deviation(
    model: &mut LinearModel,
    params: &ModelParameters<'_>,
    vars: &ShiftVariables,
) {
    let Some(mean_h) = vars.mean_h() else {
        return;
    };
    let n_staff = params.staff_count() as f64;

    let mut mean = LinearExpr::new().term(mean_h, n_staff);
    for s in 0..vars.staff_count() {
        mean.add_term(vars.h(s), -1.0);
    }
    model.add_constraint("mean_hours", mean, Sense::Eq, 0.0);

    for (s, member) in params.staff().iter().enumerate() {
        model.add_constraint(
            format!("dev_above[{}]", member.id),
            LinearExpr::from(vars.dev(s))
                .term(vars.h(s), -1.0)
                .term(mean_h, 1.0),
            Sense::Ge,
            0.0,
        );
        model.add_constraint(
            format!("dev_below[{}]", member.id),
            LinearExpr::from(vars.dev(s))
                .term(vars.h(s), 1.0)
                .term(mean_h, -1.0),
            Sense::Ge,
            0.0,
        );
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
