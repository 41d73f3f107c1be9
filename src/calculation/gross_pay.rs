//! Gross pay calculation functionality.
//!
//! This module converts aggregated hours and an hourly rate into the
//! [`PayComponents`] consumed by the deduction engine.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{PayComponents, WeeklyHours};

/// Calculates gross pay from aggregated hours.
///
/// Regular pay is `regular_hours x hourly_rate`; overtime pay is
/// `overtime_hours x hourly_rate x overtime_multiplier`. The multiplier is
/// a configuration value (default 1.25, a 25% premium) so the façade can
/// carry a different policy; holiday and night differentials are not
/// modeled, a single flat overtime rate only.
///
/// # Errors
///
/// Returns [`EngineError::InvalidPayInput`] for a non-positive hourly rate
/// or overtime multiplier.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_gross_pay;
/// use payroll_engine::models::WeeklyHours;
/// use rust_decimal::Decimal;
///
/// let hours = WeeklyHours::new(Decimal::from(40), Decimal::from(2));
/// let pay = calculate_gross_pay(&hours, Decimal::from(100), Decimal::new(125, 2)).unwrap();
/// assert_eq!(pay.regular_pay, Decimal::from(4000));
/// assert_eq!(pay.overtime_pay, Decimal::from(250));
/// assert_eq!(pay.gross_pay, Decimal::from(4250));
/// ```
pub fn calculate_gross_pay(
    hours: &WeeklyHours,
    hourly_rate: Decimal,
    overtime_multiplier: Decimal,
) -> EngineResult<PayComponents> {
    if hourly_rate <= Decimal::ZERO {
        return Err(EngineError::InvalidPayInput {
            field: "hourly_rate".to_string(),
            message: format!("must be greater than zero, got {hourly_rate}"),
        });
    }
    if overtime_multiplier <= Decimal::ZERO {
        return Err(EngineError::InvalidPayInput {
            field: "overtime_multiplier".to_string(),
            message: format!("must be greater than zero, got {overtime_multiplier}"),
        });
    }

    let regular_pay = hours.regular_hours * hourly_rate;
    let overtime_pay = hours.overtime_hours * hourly_rate * overtime_multiplier;

    Ok(PayComponents::new(regular_pay, overtime_pay))
}
