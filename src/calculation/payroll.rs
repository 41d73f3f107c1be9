//! Payroll façade.
//!
//! This module composes the aggregation, gross pay and deduction stages into
//! the single entry point external callers use: one full salary record per
//! employee per period.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::PayrollConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, PayPeriod, SalaryComputation, Shift};

use super::aggregation::aggregate_hours;
use super::deductions::calculate_deductions;
use super::gross_pay::calculate_gross_pay;

/// Computes the full payroll record for one employee over one period.
///
/// Composes the pipeline: aggregate hours over the period, calculate gross
/// pay at the employee's hourly rate, then derive statutory deductions and
/// net pay. Every intermediate figure is retained in the returned record
/// for display and audit.
///
/// The function is pure and idempotent: calling it twice with identical
/// inputs yields a bit-identical record, it never mutates its inputs, and
/// it is safe to call in parallel across independent employees and periods.
///
/// A period in which no hours were worked returns the all-zero record;
/// deduction math is defined only for positive pay.
///
/// # Errors
///
/// - [`EngineError::InvalidPayInput`] for a non-positive hourly rate.
/// - Any classification failure from a contained shift, propagated unmasked.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_salary;
/// use payroll_engine::config::PayrollConfig;
/// use payroll_engine::models::{Employee, PayPeriod};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     employee_number: "EMP-0001".to_string(),
///     first_name: "Maria".to_string(),
///     last_name: "Santos".to_string(),
///     position: "Accountant".to_string(),
///     department: "Finance".to_string(),
///     hourly_rate: Decimal::from(150),
/// };
/// let period = PayPeriod::week_containing(NaiveDate::from_ymd_opt(2023, 6, 15).unwrap());
///
/// let record = compute_salary(&[], &employee, &period, &PayrollConfig::default()).unwrap();
/// assert_eq!(record.net_pay, Decimal::ZERO);
/// ```
pub fn compute_salary(
    shifts: &[Shift],
    employee: &Employee,
    period: &PayPeriod,
    config: &PayrollConfig,
) -> EngineResult<SalaryComputation> {
    if employee.hourly_rate <= Decimal::ZERO {
        return Err(EngineError::InvalidPayInput {
            field: "hourly_rate".to_string(),
            message: format!(
                "employee '{}' has non-positive hourly rate {}",
                employee.id, employee.hourly_rate
            ),
        });
    }

    let hours = aggregate_hours(shifts, &config.schedule, period)?;

    if hours.total_hours == Decimal::ZERO {
        debug!(
            employee_id = %employee.id,
            period_start = %period.start_date,
            "no worked hours in period, returning zero record"
        );
        return Ok(SalaryComputation::zero(employee.id.clone(), period.clone()));
    }

    let pay = calculate_gross_pay(
        &hours,
        employee.hourly_rate,
        config.settings.overtime_multiplier,
    )?;

    let deductions = calculate_deductions(
        pay.gross_pay,
        config.settings.periods_per_month,
        &config.statutory,
    )?;

    debug!(
        employee_id = %employee.id,
        gross_pay = %pay.gross_pay,
        net_pay = %deductions.net_pay,
        "computed salary"
    );

    Ok(SalaryComputation::from_parts(
        employee.id.clone(),
        period.clone(),
        hours,
        pay,
        deductions,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_employee(rate: &str) -> Employee {
        Employee {
            id: "emp_001".to_string(),
            employee_number: "EMP-0001".to_string(),
            first_name: "Maria".to_string(),
            last_name: "Santos".to_string(),
            position: "Accountant".to_string(),
            department: "Finance".to_string(),
            hourly_rate: dec(rate),
        }
    }

    fn make_shift(id: &str, date: &str, time_in: &str, time_out: &str) -> Shift {
        Shift {
            id: id.to_string(),
            employee_id: "emp_001".to_string(),
            date: make_date(date),
            time_in: time_in.to_string(),
            time_out: time_out.to_string(),
        }
    }

    fn june_week() -> PayPeriod {
        PayPeriod {
            start_date: make_date("2023-06-12"),
            end_date: make_date("2023-06-18"),
        }
    }

    fn standard_week() -> Vec<Shift> {
        (12..17)
            .map(|day| {
                make_shift(
                    &format!("shift_{day}"),
                    &format!("2023-06-{day}"),
                    "08:00",
                    "16:00",
                )
            })
            .collect()
    }

    /// PF-001: a standard week at 100/hour
    #[test]
    fn test_standard_week_end_to_end() {
        let record = compute_salary(
            &standard_week(),
            &make_employee("100"),
            &june_week(),
            &PayrollConfig::default(),
        )
        .unwrap();

        assert_eq!(record.regular_hours, dec("40"));
        assert_eq!(record.overtime_hours, Decimal::ZERO);
        assert_eq!(record.gross_pay, dec("4000"));

        // Monthly 16,000: SSS 720, PhilHealth 240, Pag-IBIG 100, no tax.
        assert_eq!(record.sss_deduction, dec("180"));
        assert_eq!(record.philhealth_deduction, dec("60"));
        assert_eq!(record.pagibig_deduction, dec("25"));
        assert_eq!(record.tax_deduction, Decimal::ZERO);
        assert_eq!(record.total_deductions, dec("265"));
        assert_eq!(record.net_pay, dec("3735"));
    }

    /// PF-002: overtime flows through the premium multiplier
    #[test]
    fn test_week_with_overtime() {
        let mut shifts = standard_week();
        // One extra hour on Friday
        shifts[4].time_out = "17:00".to_string();

        let record = compute_salary(
            &shifts,
            &make_employee("100"),
            &june_week(),
            &PayrollConfig::default(),
        )
        .unwrap();

        assert_eq!(record.regular_hours, dec("40"));
        assert_eq!(record.overtime_hours, dec("1"));
        assert_eq!(record.regular_pay, dec("4000"));
        assert_eq!(record.overtime_pay, dec("125"));
        assert_eq!(record.gross_pay, dec("4125"));
    }

    /// PF-003: idempotence, bit-identical repeat
    #[test]
    fn test_compute_salary_is_idempotent() {
        let shifts = standard_week();
        let employee = make_employee("137.50");
        let config = PayrollConfig::default();

        let first = compute_salary(&shifts, &employee, &june_week(), &config).unwrap();
        let second = compute_salary(&shifts, &employee, &june_week(), &config).unwrap();
        assert_eq!(first, second);
    }

    /// PF-004: empty period yields the zero record, not an error
    #[test]
    fn test_empty_period_yields_zero_record() {
        let record = compute_salary(
            &[],
            &make_employee("150"),
            &june_week(),
            &PayrollConfig::default(),
        )
        .unwrap();
        assert_eq!(
            record,
            SalaryComputation::zero("emp_001".to_string(), june_week())
        );
    }

    /// PF-005: non-positive hourly rate is rejected before any work
    #[test]
    fn test_non_positive_rate_is_rejected() {
        let result = compute_salary(
            &standard_week(),
            &make_employee("0"),
            &june_week(),
            &PayrollConfig::default(),
        );
        match result.unwrap_err() {
            EngineError::InvalidPayInput { field, .. } => assert_eq!(field, "hourly_rate"),
            other => panic!("Expected InvalidPayInput, got {:?}", other),
        }
    }

    /// PF-006: a malformed punch fails the whole computation
    #[test]
    fn test_malformed_punch_propagates() {
        let mut shifts = standard_week();
        shifts[2].time_in = "late-ish".to_string();

        let result = compute_salary(
            &shifts,
            &make_employee("100"),
            &june_week(),
            &PayrollConfig::default(),
        );
        assert!(matches!(
            result,
            Err(EngineError::InvalidTimeFormat { .. })
        ));
    }

    /// PF-007: per-call schedule override, no global state
    #[test]
    fn test_schedule_override_changes_classification() {
        let config = PayrollConfig {
            schedule: crate::config::ScheduleConfig {
                standard_shift_minutes: 240,
                ..Default::default()
            },
            ..Default::default()
        };

        let shifts = vec![make_shift("shift_12", "2023-06-12", "08:00", "16:00")];
        let record =
            compute_salary(&shifts, &make_employee("100"), &june_week(), &config).unwrap();

        // A 4-hour standard day turns the back half into overtime.
        assert_eq!(record.regular_hours, dec("4"));
        assert_eq!(record.overtime_hours, dec("4"));
    }

    /// PF-008: the record echoes employee and period identity
    #[test]
    fn test_record_identity_fields() {
        let record = compute_salary(
            &standard_week(),
            &make_employee("100"),
            &june_week(),
            &PayrollConfig::default(),
        )
        .unwrap();
        assert_eq!(record.employee_id, "emp_001");
        assert_eq!(record.period, june_week());
    }
}
