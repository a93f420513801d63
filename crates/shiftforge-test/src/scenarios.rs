//! Small inputs whose optimal outcome can be worked out by hand.

use chrono::NaiveDate;
use shiftforge_core::{
    AvailabilityRecord, AvailabilityState, DemandRecord, ShiftInput, Slot, StaffMember, WageRates,
};

/// Monday of the reference week.
pub fn week_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, 26).expect("valid date")
}

/// One adult (age 20, wage 1200, 4-12h) and one "10-14" slot needing one
/// person, with the given availability.
///
/// `Ok` solves to one assignment, 4 hours and an objective of 4800; `Ng` is
/// infeasible.
pub fn single_slot(state: AvailabilityState) -> ShiftInput {
    let day = week_start();
    ShiftInput::default()
        .with_staff(StaffMember::new("S01", "Staff_01", 20, 1200.0).with_weekly_hours(4, 12))
        .with_demand(DemandRecord::new(day, Slot::Morning, 1))
        .with_availability(AvailabilityRecord::new("S01", day, Slot::Morning, state))
        .with_wages(WageRates::default())
}

/// A 17-year-old available for the only demanded slot, "22-26". Infeasible.
pub fn minor_night_only() -> ShiftInput {
    let day = week_start();
    ShiftInput::default()
        .with_staff(StaffMember::new("S01", "Staff_01", 17, 1050.0).with_weekly_hours(0, 12))
        .with_demand(DemandRecord::new(day, Slot::Night, 1))
        .with_availability(AvailabilityRecord::new("S01", day, Slot::Night, AvailabilityState::Ok))
        .with_wages(WageRates::default())
}

/// Two identical adults for one "10-14" slot; `S02` marked it `Wish`.
///
/// The wish reward breaks the tie, so `S02` is assigned.
pub fn wish_tie_break() -> ShiftInput {
    let day = week_start();
    ShiftInput::default()
        .with_staff(StaffMember::new("S01", "Staff_01", 25, 1200.0).with_weekly_hours(0, 12))
        .with_staff(StaffMember::new("S02", "Staff_02", 25, 1200.0).with_weekly_hours(0, 12))
        .with_demand(DemandRecord::new(day, Slot::Morning, 1))
        .with_availability(AvailabilityRecord::new("S01", day, Slot::Morning, AvailabilityState::Ok))
        .with_availability(AvailabilityRecord::new("S02", day, Slot::Morning, AvailabilityState::Wish))
        .with_wages(WageRates::default())
}

/// Three adults with different wages over two days; demand forces four
/// assignments and hour bounds force a spread.
pub fn small_team() -> ShiftInput {
    let monday = week_start();
    let tuesday = monday.succ_opt().expect("valid date");
    let mut input = ShiftInput::default()
        .with_staff(StaffMember::new("S01", "Staff_01", 22, 1100.0).with_weekly_hours(4, 8))
        .with_staff(StaffMember::new("S02", "Staff_02", 30, 1300.0).with_weekly_hours(4, 8))
        .with_staff(StaffMember::new("S03", "Staff_03", 17, 1050.0).with_weekly_hours(0, 8))
        .with_wages(WageRates::default());

    for day in [monday, tuesday] {
        input = input
            .with_demand(DemandRecord::new(day, Slot::Evening, 1))
            .with_demand(DemandRecord::new(day, Slot::Night, 1));
        for id in ["S01", "S02", "S03"] {
            for slot in [Slot::Evening, Slot::Night] {
                input = input.with_availability(AvailabilityRecord::new(
                    id,
                    day,
                    slot,
                    AvailabilityState::Ok,
                ));
            }
        }
    }
    input
}
