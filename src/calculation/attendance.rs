//! Time classification functionality.
//!
//! This module converts one shift's raw clock-in/clock-out punches plus the
//! configured schedule into classified minutes: regular, late, undertime and
//! overtime. All arithmetic is same-day wall-clock math in whole minutes,
//! with a single midnight-crossing correction when the clock-out reads
//! earlier than the clock-in.

use chrono::{NaiveTime, Timelike};
use rust_decimal::Decimal;

use crate::config::ScheduleConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{ClassifiedShift, Shift};

/// Minutes in one day, used for the midnight-crossing correction.
const MINUTES_PER_DAY: i64 = 1440;

/// Parses a 24-hour `HH:MM` wall-clock string.
///
/// The format is strict: exactly two digits, a colon, two digits. Chrono's
/// `%H` alone would also accept single-digit hours, which the wire contract
/// does not.
///
/// # Errors
///
/// Returns [`EngineError::InvalidTimeFormat`] for unparseable input or an
/// hour/minute outside the valid range.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::parse_clock_time;
/// use chrono::NaiveTime;
///
/// let time = parse_clock_time("08:30").unwrap();
/// assert_eq!(time, NaiveTime::from_hms_opt(8, 30, 0).unwrap());
///
/// assert!(parse_clock_time("8:30").is_err());
/// assert!(parse_clock_time("25:00").is_err());
/// assert!(parse_clock_time("eight").is_err());
/// ```
pub fn parse_clock_time(value: &str) -> EngineResult<NaiveTime> {
    let invalid = || EngineError::InvalidTimeFormat {
        value: value.to_string(),
    };

    if value.len() != 5 || value.as_bytes()[2] != b':' {
        return Err(invalid());
    }
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| invalid())
}

/// Minutes elapsed since midnight for a wall-clock time.
fn minutes_from_midnight(time: NaiveTime) -> i64 {
    (time.num_seconds_from_midnight() / 60) as i64
}

/// Classifies one shift's worked time against the schedule.
///
/// The punches and the expected start are anchored to the same calendar day;
/// if the clock-out reads strictly earlier than the clock-in, the shift is
/// treated as crossing midnight and the clock-out is advanced by one day.
///
/// Classification rules:
/// - Lateness is charged only once the grace period is exceeded, and is then
///   measured from the expected start, not the grace boundary.
/// - Undertime is the shortfall before the expected end of shift.
/// - Overtime is the time worked past the expected end of shift.
/// - Regular minutes are the worked minutes net of overtime, capped at the
///   standard shift length, reduced by late and undertime minutes, and
///   floored at zero. A shift that is both late and undertime is penalized
///   on both axes.
/// - A shift with zero or negative worked time classifies as the all-zero
///   record rather than an error.
///
/// # Errors
///
/// - [`EngineError::InvalidTimeFormat`] for a malformed punch.
/// - [`EngineError::InvalidShiftWindow`] for a schedule whose window cannot
///   be reconciled (zero-length or longer-than-a-day standard shift).
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::classify_shift;
/// use payroll_engine::config::ScheduleConfig;
/// use payroll_engine::models::Shift;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let shift = Shift {
///     id: "shift_001".to_string(),
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2023, 6, 12).unwrap(),
///     time_in: "08:00".to_string(),
///     time_out: "16:00".to_string(),
/// };
///
/// let classified = classify_shift(&shift, &ScheduleConfig::default()).unwrap();
/// assert_eq!(classified.regular_hours, Decimal::from(8));
/// assert_eq!(classified.late_minutes, 0);
/// ```
pub fn classify_shift(shift: &Shift, schedule: &ScheduleConfig) -> EngineResult<ClassifiedShift> {
    if schedule.standard_shift_minutes == 0 || schedule.standard_shift_minutes as i64 > MINUTES_PER_DAY
    {
        return Err(EngineError::InvalidShiftWindow {
            shift_id: shift.id.clone(),
            message: format!(
                "standard shift of {} minutes cannot be reconciled with a single day",
                schedule.standard_shift_minutes
            ),
        });
    }

    let time_in = minutes_from_midnight(parse_clock_time(&shift.time_in)?);
    let mut time_out = minutes_from_midnight(parse_clock_time(&shift.time_out)?);

    // Clock-out earlier than clock-in means the shift crossed midnight.
    if time_out < time_in {
        time_out += MINUTES_PER_DAY;
    }

    let expected_in = minutes_from_midnight(schedule.expected_time_in);
    let grace_end = expected_in + schedule.grace_period_minutes as i64;
    let expected_out = expected_in + schedule.standard_shift_minutes as i64;

    let total_worked_minutes = time_out - time_in;
    if total_worked_minutes <= 0 {
        return Ok(ClassifiedShift::zero());
    }

    let late_minutes = if time_in > grace_end {
        time_in - expected_in
    } else {
        0
    };

    let undertime_minutes = if time_out < expected_out {
        expected_out - time_out
    } else {
        0
    };

    let overtime_minutes = (time_out - expected_out).max(0);

    let capped = (total_worked_minutes - overtime_minutes).min(schedule.standard_shift_minutes as i64);
    let regular_minutes = (capped - late_minutes - undertime_minutes).max(0);

    Ok(ClassifiedShift {
        regular_hours: Decimal::from(regular_minutes) / Decimal::from(60),
        late_minutes: late_minutes as u32,
        undertime_minutes: undertime_minutes as u32,
        overtime_minutes: overtime_minutes as u32,
    })
}
