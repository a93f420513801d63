//! Staff roster records.

use std::fmt;

/// Identifier of a staff member, unique within one roster.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StaffId(String);

impl StaffId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StaffId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StaffId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for StaffId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Minimum age for working the night slot.
pub const ADULT_AGE: u32 = 18;

/// A member of staff with the contract data the model needs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaffMember {
    pub id: StaffId,
    pub name: String,
    pub age: u32,
    /// Base pay per hour in currency units.
    pub hourly_wage: f64,
    pub weekly_min_hours: u32,
    pub weekly_max_hours: u32,
}

impl StaffMember {
    /// Creates a staff member with no weekly hour requirements.
    ///
    /// # Example
    ///
    /// ```
    /// use shiftforge_core::StaffMember;
    ///
    /// let alice = StaffMember::new("S01", "Alice", 20, 1200.0).with_weekly_hours(4, 12);
    /// assert!(!alice.is_minor());
    /// assert_eq!(alice.weekly_max_hours, 12);
    /// ```
    pub fn new(id: impl Into<StaffId>, name: impl Into<String>, age: u32, hourly_wage: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
            hourly_wage,
            weekly_min_hours: 0,
            weekly_max_hours: u32::MAX,
        }
    }

    pub fn with_weekly_hours(mut self, min: u32, max: u32) -> Self {
        self.weekly_min_hours = min;
        self.weekly_max_hours = max;
        self
    }

    /// Under-18 staff may never work the night slot.
    pub fn is_minor(&self) -> bool {
        self.age < ADULT_AGE
    }
}
