//! Parameter preparation.
//!
//! Turns the input tables into dense per-(staff, demand slot) arrays that the
//! constraint builder and objective read by index. Staff attributes are looked
//! up through a single StaffID-keyed map built here.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use chrono::NaiveDate;
use shiftforge_core::{
    HolidayCalendar, Result, ShiftForgeError, ShiftInput, Slot, StaffId, StaffMember,
};
use tracing::debug;

/// Derived parameters of one solve, borrowed from the input tables.
#[derive(Debug)]
pub struct ModelParameters<'a> {
    staff: &'a [StaffMember],
    staff_index: HashMap<&'a StaffId, usize>,
    slot_keys: Vec<(NaiveDate, Slot)>,
    required: Vec<u32>,
    dates: Vec<NaiveDate>,
    keys_by_date: Vec<Vec<usize>>,
    slot_hours: u32,
    cost: Vec<f64>,
    avail_ok: Vec<bool>,
    wish: Vec<bool>,
}

impl<'a> ModelParameters<'a> {
    /// Validates the input tables and derives every model parameter.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftForgeError::Configuration`] for duplicate staff IDs,
    /// invalid wages or hour bounds, invalid wage rates, or availability
    /// records that reference unknown staff.
    pub fn prepare(
        input: &'a ShiftInput,
        slot_hours: u32,
        calendar: &dyn HolidayCalendar,
    ) -> Result<Self> {
        input.wages.validate()?;

        let mut staff_index = HashMap::with_capacity(input.staff.len());
        for (idx, member) in input.staff.iter().enumerate() {
            validate_member(member)?;
            if staff_index.insert(&member.id, idx).is_some() {
                return Err(ShiftForgeError::configuration(format!(
                    "duplicate StaffID '{}'",
                    member.id
                )));
            }
        }

        // Demand keys keep first-seen order; a repeated key takes the last count.
        let mut key_index: HashMap<(NaiveDate, Slot), usize> = HashMap::new();
        let mut slot_keys = Vec::new();
        let mut required = Vec::new();
        for record in &input.demand {
            match key_index.entry((record.date, record.slot)) {
                Entry::Occupied(e) => required[*e.get()] = record.required,
                Entry::Vacant(e) => {
                    e.insert(slot_keys.len());
                    slot_keys.push((record.date, record.slot));
                    required.push(record.required);
                }
            }
        }

        let n_staff = input.staff.len();
        let n_keys = slot_keys.len();
        let mut avail_ok = vec![false; n_staff * n_keys];
        let mut wish = vec![false; n_staff * n_keys];
        let mut dates: Vec<NaiveDate> = Vec::new();

        for record in &input.availability {
            let staff_idx = *staff_index.get(&record.staff_id).ok_or_else(|| {
                ShiftForgeError::configuration(format!(
                    "availability references unknown StaffID '{}'",
                    record.staff_id
                ))
            })?;
            if !dates.contains(&record.date) {
                dates.push(record.date);
            }
            // Entries outside the demand domain are ignored.
            if let Some(&key_idx) = key_index.get(&(record.date, record.slot)) {
                let cell = staff_idx * n_keys + key_idx;
                avail_ok[cell] = record.state.is_available();
                wish[cell] = record.state.is_wish();
            }
        }

        let keys_by_date = dates
            .iter()
            .map(|date| {
                slot_keys
                    .iter()
                    .enumerate()
                    .filter(|(_, (d, _))| d == date)
                    .map(|(k, _)| k)
                    .collect()
            })
            .collect();

        let mut cost = Vec::with_capacity(n_staff * n_keys);
        for member in &input.staff {
            for &(date, slot) in &slot_keys {
                let mut multiplier = 1.0;
                if slot.is_night() {
                    multiplier *= input.wages.night_rate;
                }
                if calendar.is_holiday(date) {
                    multiplier *= input.wages.holiday_rate;
                }
                cost.push((member.hourly_wage * f64::from(slot_hours) * multiplier).trunc());
            }
        }

        debug!(
            event = "parameters_prepared",
            staff = n_staff,
            slot_keys = n_keys,
            dates = dates.len(),
        );

        Ok(Self {
            staff: &input.staff,
            staff_index,
            slot_keys,
            required,
            dates,
            keys_by_date,
            slot_hours,
            cost,
            avail_ok,
            wish,
        })
    }

    pub fn staff(&self) -> &'a [StaffMember] {
        self.staff
    }

    pub fn staff_count(&self) -> usize {
        self.staff.len()
    }

    /// Position of a staff member in the staff table.
    pub fn staff_index(&self, id: &StaffId) -> Option<usize> {
        self.staff_index.get(id).copied()
    }

    /// Demand (date, slot) keys in first-seen order.
    pub fn slot_keys(&self) -> &[(NaiveDate, Slot)] {
        &self.slot_keys
    }

    pub fn key_count(&self) -> usize {
        self.slot_keys.len()
    }

    /// Required head count of demand key `k`.
    pub fn required(&self, k: usize) -> u32 {
        self.required[k]
    }

    /// Unique dates of the availability table, in first-seen order.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Demand keys falling on `dates()[d]`.
    pub fn keys_on_date(&self, d: usize) -> &[usize] {
        &self.keys_by_date[d]
    }

    pub fn slot_hours(&self) -> u32 {
        self.slot_hours
    }

    /// Wage cost of staff `s` working demand key `k`.
    pub fn cost(&self, s: usize, k: usize) -> f64 {
        self.cost[s * self.slot_keys.len() + k]
    }

    /// True when staff `s` declared `OK` or `Wish` for demand key `k`.
    pub fn avail_ok(&self, s: usize, k: usize) -> bool {
        self.avail_ok[s * self.slot_keys.len() + k]
    }

    /// True when staff `s` declared `Wish` for demand key `k`.
    pub fn wish(&self, s: usize, k: usize) -> bool {
        self.wish[s * self.slot_keys.len() + k]
    }

    /// True when staff `s` may be assigned demand key `k` at all.
    pub fn eligible(&self, s: usize, k: usize) -> bool {
        let (_, slot) = self.slot_keys[k];
        self.avail_ok(s, k) && !(slot.is_night() && self.staff[s].is_minor())
    }
}

fn validate_member(member: &StaffMember) -> Result<()> {
    if !member.hourly_wage.is_finite() || member.hourly_wage < 0.0 {
        return Err(ShiftForgeError::configuration(format!(
            "staff '{}' has invalid HourlyWage {}",
            member.id, member.hourly_wage
        )));
    }
    if member.weekly_min_hours > member.weekly_max_hours {
        return Err(ShiftForgeError::configuration(format!(
            "staff '{}' has WeeklyMinHours {} above WeeklyMaxHours {}",
            member.id, member.weekly_min_hours, member.weekly_max_hours
        )));
    }
    Ok(())
}
