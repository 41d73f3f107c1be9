//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type that defines the date window
//! over which hours and pay are aggregated. Payroll in this engine runs on
//! weekly periods, but the window boundaries are caller-supplied.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Represents a pay period with an inclusive date range.
///
/// A pay period defines the time window for payroll calculations. Both
/// boundary dates are inclusive: a shift dated exactly on `start_date` or
/// `end_date` belongs to the period.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2023, 6, 12).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2023, 6, 18).unwrap(),
/// };
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2023, 6, 15).unwrap()));
/// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2023, 6, 19).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Builds the Monday-to-Sunday week containing the given date.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::PayPeriod;
    /// use chrono::NaiveDate;
    ///
    /// // 2023-06-15 is a Thursday
    /// let week = PayPeriod::week_containing(NaiveDate::from_ymd_opt(2023, 6, 15).unwrap());
    /// assert_eq!(week.start_date, NaiveDate::from_ymd_opt(2023, 6, 12).unwrap()); // Monday
    /// assert_eq!(week.end_date, NaiveDate::from_ymd_opt(2023, 6, 18).unwrap()); // Sunday
    /// ```
    pub fn week_containing(date: NaiveDate) -> Self {
        let days_from_monday = date.weekday().num_days_from_monday() as u64;
        let start_date = date - Days::new(days_from_monday);
        let end_date = start_date + Days::new(6);
        Self {
            start_date,
            end_date,
        }
    }

    /// Returns this period shifted by a whole number of weeks.
    ///
    /// Positive offsets move forward in time, negative offsets backward.
    pub fn offset_weeks(&self, offset: i64) -> Self {
        let days = offset * 7;
        let shift = |d: NaiveDate| {
            if days >= 0 {
                d + Days::new(days as u64)
            } else {
                d - Days::new(days.unsigned_abs())
            }
        };
        Self {
            start_date: shift(self.start_date),
            end_date: shift(self.end_date),
        }
    }

    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}
