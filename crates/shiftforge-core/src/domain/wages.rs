//! Wage multipliers.

use crate::error::{Result, ShiftForgeError};

/// Multiplicative pay factors applied on top of each staff member's hourly wage.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WageRates {
    /// Factor for ordinary hours. Kept for completeness; ordinary hours are paid at base rate.
    pub normal_rate: f64,
    /// Factor for the night slot.
    pub night_rate: f64,
    /// Factor for holidays.
    pub holiday_rate: f64,
}

impl WageRates {
    pub fn new(normal_rate: f64, night_rate: f64, holiday_rate: f64) -> Self {
        Self {
            normal_rate,
            night_rate,
            holiday_rate,
        }
    }

    /// Checks that every factor is finite and positive.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("NormalRate", self.normal_rate),
            ("NightRate", self.night_rate),
            ("HolidayRate", self.holiday_rate),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ShiftForgeError::configuration(format!(
                    "wage rate {name} must be a positive number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for WageRates {
    fn default() -> Self {
        Self::new(1.0, 1.25, 1.35)
    }
}
