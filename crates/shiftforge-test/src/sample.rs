//! Deterministic sample-week generator.
//!
//! Produces a realistic seven-day input: a roster with mixed ages and
//! contracts, weighted random availability, and a demand profile that is
//! heavier on Friday and Saturday.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use shiftforge_core::{
    AvailabilityRecord, AvailabilityState, DemandRecord, ShiftInput, Slot, StaffMember, WageRates,
    ADULT_AGE,
};

/// Hourly wage paid to every minor.
pub const MINOR_WAGE: f64 = 1050.0;

const WEEKLY_MIN_CHOICES: [u32; 3] = [4, 8, 12];
const WEEKLY_MAX_CHOICES: [u32; 4] = [20, 24, 28, 32];

/// Shape of a generated week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleSpec {
    pub staff_count: usize,
    /// First of the seven generated dates.
    pub week_start: NaiveDate,
    pub seed: u64,
}

impl Default for SampleSpec {
    fn default() -> Self {
        Self {
            staff_count: 30,
            week_start: NaiveDate::from_ymd_opt(2025, 5, 26).unwrap_or(NaiveDate::MIN),
            seed: 42,
        }
    }
}

impl SampleSpec {
    pub fn with_staff_count(mut self, staff_count: usize) -> Self {
        self.staff_count = staff_count;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_week_start(mut self, week_start: NaiveDate) -> Self {
        self.week_start = week_start;
        self
    }
}

/// Head count required for `slot` on `weekday`.
pub fn required_count(weekday: Weekday, slot: Slot) -> u32 {
    let profile = match weekday {
        Weekday::Fri | Weekday::Sat => [4, 3, 5, 3],
        Weekday::Sun => [3, 3, 4, 2],
        _ => [3, 2, 4, 2],
    };
    profile[slot as usize]
}

fn random_state(rng: &mut ChaCha8Rng) -> AvailabilityState {
    let roll: f64 = rng.random();
    if roll < 0.7 {
        AvailabilityState::Ok
    } else if roll < 0.9 {
        AvailabilityState::Ng
    } else {
        AvailabilityState::Wish
    }
}

/// Generates one week of input. The same `SampleSpec` always yields the same input.
pub fn generate_week(spec: &SampleSpec) -> ShiftInput {
    let mut rng = ChaCha8Rng::seed_from_u64(spec.seed);
    let dates: Vec<NaiveDate> = (0..7).map(|i| spec.week_start + Days::new(i)).collect();

    let mut input = ShiftInput::default().with_wages(WageRates::new(1.0, 1.25, 1.35));

    for i in 1..=spec.staff_count {
        let age = rng.random_range(17..=30);
        let wage = if age < ADULT_AGE {
            MINOR_WAGE
        } else {
            f64::from(rng.random_range(1100..=1300u32))
        };
        let min = WEEKLY_MIN_CHOICES[rng.random_range(0..WEEKLY_MIN_CHOICES.len())];
        let max = WEEKLY_MAX_CHOICES[rng.random_range(0..WEEKLY_MAX_CHOICES.len())];
        input = input.with_staff(
            StaffMember::new(format!("S{i:02}"), format!("Staff_{i:02}"), age, wage)
                .with_weekly_hours(min, max),
        );
    }

    let ids: Vec<_> = input.staff.iter().map(|m| m.id.clone()).collect();
    for id in ids {
        for &date in &dates {
            for slot in Slot::ALL {
                let state = random_state(&mut rng);
                input = input.with_availability(AvailabilityRecord::new(id.clone(), date, slot, state));
            }
        }
    }

    for &date in &dates {
        for slot in Slot::ALL {
            input = input.with_demand(DemandRecord::new(
                date,
                slot,
                required_count(date.weekday(), slot),
            ));
        }
    }

    input
}
