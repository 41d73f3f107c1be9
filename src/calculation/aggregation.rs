//! Weekly hour aggregation functionality.
//!
//! This module sums classified shift minutes over a pay period into the
//! [`WeeklyHours`] consumed by the gross pay calculator.

use rust_decimal::Decimal;

use crate::config::ScheduleConfig;
use crate::error::EngineResult;
use crate::models::{PayPeriod, Shift, WeeklyHours};

use super::attendance::classify_shift;

/// Aggregates hours for all shifts that fall within a pay period.
///
/// Shifts are filtered to those whose date lies within the period, inclusive
/// on both ends, then classified independently and summed. Summation runs in
/// ascending date order (shift ID as tiebreaker) so results are reproducible
/// regardless of input order; with decimal accumulation the result is the
/// same for any permutation of the input.
///
/// An empty period yields the all-zero [`WeeklyHours`], not an error. The
/// first classification failure from any contained shift propagates; no
/// partial result is returned.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::aggregate_hours;
/// use payroll_engine::config::ScheduleConfig;
/// use payroll_engine::models::PayPeriod;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let period = PayPeriod::week_containing(NaiveDate::from_ymd_opt(2023, 6, 15).unwrap());
/// let hours = aggregate_hours(&[], &ScheduleConfig::default(), &period).unwrap();
/// assert_eq!(hours.total_hours, Decimal::ZERO);
/// ```
pub fn aggregate_hours(
    shifts: &[Shift],
    schedule: &ScheduleConfig,
    period: &PayPeriod,
) -> EngineResult<WeeklyHours> {
    let mut retained: Vec<&Shift> = shifts
        .iter()
        .filter(|shift| period.contains_date(shift.date))
        .collect();
    retained.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));

    let mut regular_hours = Decimal::ZERO;
    let mut overtime_minutes: u64 = 0;

    for shift in retained {
        let classified = classify_shift(shift, schedule)?;
        regular_hours += classified.regular_hours;
        overtime_minutes += u64::from(classified.overtime_minutes);
    }

    let overtime_hours = Decimal::from(overtime_minutes) / Decimal::from(60);
    Ok(WeeklyHours::new(regular_hours, overtime_hours))
}
