//! Shift model.
//!
//! This module defines the Shift struct representing a single day's raw
//! time-clock punches as recorded by an external time-tracking system.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents one day's raw clock-in/clock-out punches for an employee.
///
/// The punch times are kept as the 24-hour `HH:MM` text exactly as recorded;
/// parsing and validation happen in the time classifier so that a malformed
/// punch surfaces as an [`crate::error::EngineError::InvalidTimeFormat`]
/// at classification time rather than being silently corrected.
///
/// Both times are wall-clock values on the same local day. If `time_out`
/// reads earlier than `time_in`, the shift is interpreted as crossing
/// midnight and `time_out` belongs to the following day.
///
/// A shift is immutable once recorded; the engine never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique identifier for the shift.
    pub id: String,
    /// The employee this shift belongs to.
    pub employee_id: String,
    /// The calendar date of the shift (the day of the clock-in punch).
    pub date: NaiveDate,
    /// The clock-in time in 24-hour `HH:MM` form.
    pub time_in: String,
    /// The clock-out time in 24-hour `HH:MM` form.
    pub time_out: String,
}
