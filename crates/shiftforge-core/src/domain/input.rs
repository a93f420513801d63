//! The four input tables of one weekly solve.

use super::{AvailabilityRecord, DemandRecord, StaffMember, WageRates};

/// Typed input tables for one solve.
///
/// Tables are read-only for the duration of a solve; the solver borrows them
/// and builds its own lookups.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShiftInput {
    pub staff: Vec<StaffMember>,
    pub availability: Vec<AvailabilityRecord>,
    pub demand: Vec<DemandRecord>,
    pub wages: WageRates,
}

impl ShiftInput {
    pub fn new(
        staff: Vec<StaffMember>,
        availability: Vec<AvailabilityRecord>,
        demand: Vec<DemandRecord>,
        wages: WageRates,
    ) -> Self {
        Self {
            staff,
            availability,
            demand,
            wages,
        }
    }

    pub fn with_staff(mut self, member: StaffMember) -> Self {
        self.staff.push(member);
        self
    }

    pub fn with_availability(mut self, record: AvailabilityRecord) -> Self {
        self.availability.push(record);
        self
    }

    pub fn with_demand(mut self, record: DemandRecord) -> Self {
        self.demand.push(record);
        self
    }

    pub fn with_wages(mut self, wages: WageRates) -> Self {
        self.wages = wages;
        self
    }

    /// Sum of required head counts over all demand records.
    pub fn total_required(&self) -> u64 {
        self.demand.iter().map(|d| u64::from(d.required)).sum()
    }
}
