//! Derived payroll result models.
//!
//! This module contains the value objects produced by the calculation
//! pipeline: classified minutes for one shift, aggregated weekly hours,
//! gross pay components, the statutory deduction set, and the full
//! [`SalaryComputation`] record returned by the payroll façade.
//!
//! All of these are pure functions of their inputs; none is ever persisted
//! or mutated after construction.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PayPeriod;

/// The classification of one shift's worked time against the schedule.
///
/// Produced fresh per shift by the time classifier. All fields are
/// non-negative; a shift with zero or negative worked time classifies as
/// the all-zero record rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedShift {
    /// Hours counted as regular time, after removing overtime and the late
    /// and undertime penalties, capped at the standard shift length.
    pub regular_hours: Decimal,
    /// Minutes of lateness beyond the grace period, charged from the
    /// expected start time.
    pub late_minutes: u32,
    /// Minutes short of the expected end-of-shift time.
    pub undertime_minutes: u32,
    /// Minutes worked past the expected end-of-shift time.
    pub overtime_minutes: u32,
}

impl ClassifiedShift {
    /// The all-zero classification, used for shifts with no reconcilable
    /// worked time.
    pub fn zero() -> Self {
        Self {
            regular_hours: Decimal::ZERO,
            late_minutes: 0,
            undertime_minutes: 0,
            overtime_minutes: 0,
        }
    }
}

/// Hours aggregated over one pay period.
///
/// `total_hours` is exactly `regular_hours + overtime_hours`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyHours {
    /// Total regular hours across all shifts in the period.
    pub regular_hours: Decimal,
    /// Total overtime hours across all shifts in the period.
    pub overtime_hours: Decimal,
    /// The sum of regular and overtime hours.
    pub total_hours: Decimal,
}

impl WeeklyHours {
    /// Builds a `WeeklyHours` from its parts, deriving the total.
    pub fn new(regular_hours: Decimal, overtime_hours: Decimal) -> Self {
        Self {
            regular_hours,
            overtime_hours,
            total_hours: regular_hours + overtime_hours,
        }
    }

    /// The all-zero aggregation, returned for periods with no shifts.
    pub fn zero() -> Self {
        Self::new(Decimal::ZERO, Decimal::ZERO)
    }
}

/// Gross pay split into its components.
///
/// `gross_pay` is exactly `regular_pay + overtime_pay`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayComponents {
    /// Pay for regular hours at the base hourly rate.
    pub regular_pay: Decimal,
    /// Pay for overtime hours at the premium rate.
    pub overtime_pay: Decimal,
    /// The sum of regular and overtime pay, before deductions.
    pub gross_pay: Decimal,
}

impl PayComponents {
    /// Builds a `PayComponents` from its parts, deriving the gross.
    pub fn new(regular_pay: Decimal, overtime_pay: Decimal) -> Self {
        Self {
            regular_pay,
            overtime_pay,
            gross_pay: regular_pay + overtime_pay,
        }
    }
}

/// The four Philippine statutory deductions for one pay period, with the
/// resulting net pay.
///
/// `total_deductions` is the exact sum of the four deduction amounts.
/// `net_pay` is `gross pay - total_deductions` and is deliberately not
/// floored at zero: deductions exceeding gross pay yield a negative net.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionSet {
    /// Social Security System contribution for the period.
    pub sss_deduction: Decimal,
    /// PhilHealth contribution for the period.
    pub philhealth_deduction: Decimal,
    /// Pag-IBIG housing fund contribution for the period.
    pub pagibig_deduction: Decimal,
    /// Withholding tax for the period.
    pub tax_deduction: Decimal,
    /// The sum of the four deductions above.
    pub total_deductions: Decimal,
    /// Gross pay minus total deductions; may be negative.
    pub net_pay: Decimal,
}

impl DeductionSet {
    /// The all-zero deduction set, used for periods with no pay.
    pub fn zero() -> Self {
        Self {
            sss_deduction: Decimal::ZERO,
            philhealth_deduction: Decimal::ZERO,
            pagibig_deduction: Decimal::ZERO,
            tax_deduction: Decimal::ZERO,
            total_deductions: Decimal::ZERO,
            net_pay: Decimal::ZERO,
        }
    }
}

/// The complete payroll record for one employee over one pay period.
///
/// This is the payroll façade's output: every intermediate figure is
/// retained for display and audit, not just the net pay. Computing the
/// record twice from identical inputs yields a bit-identical result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryComputation {
    /// The employee this record was computed for.
    pub employee_id: String,
    /// The pay period the record covers.
    pub period: PayPeriod,
    /// Total regular hours worked in the period.
    pub regular_hours: Decimal,
    /// Total overtime hours worked in the period.
    pub overtime_hours: Decimal,
    /// The sum of regular and overtime hours.
    pub total_hours: Decimal,
    /// Pay for regular hours.
    pub regular_pay: Decimal,
    /// Pay for overtime hours at the premium rate.
    pub overtime_pay: Decimal,
    /// Gross pay before deductions.
    pub gross_pay: Decimal,
    /// SSS contribution for the period.
    pub sss_deduction: Decimal,
    /// PhilHealth contribution for the period.
    pub philhealth_deduction: Decimal,
    /// Pag-IBIG contribution for the period.
    pub pagibig_deduction: Decimal,
    /// Withholding tax for the period.
    pub tax_deduction: Decimal,
    /// The sum of the four deductions.
    pub total_deductions: Decimal,
    /// Gross pay minus total deductions; may be negative.
    pub net_pay: Decimal,
}

impl SalaryComputation {
    /// Assembles the full record from the pipeline's stage outputs.
    pub fn from_parts(
        employee_id: String,
        period: PayPeriod,
        hours: WeeklyHours,
        pay: PayComponents,
        deductions: DeductionSet,
    ) -> Self {
        Self {
            employee_id,
            period,
            regular_hours: hours.regular_hours,
            overtime_hours: hours.overtime_hours,
            total_hours: hours.total_hours,
            regular_pay: pay.regular_pay,
            overtime_pay: pay.overtime_pay,
            gross_pay: pay.gross_pay,
            sss_deduction: deductions.sss_deduction,
            philhealth_deduction: deductions.philhealth_deduction,
            pagibig_deduction: deductions.pagibig_deduction,
            tax_deduction: deductions.tax_deduction,
            total_deductions: deductions.total_deductions,
            net_pay: deductions.net_pay,
        }
    }

    /// The all-zero record for a period in which no hours were worked.
    pub fn zero(employee_id: String, period: PayPeriod) -> Self {
        Self::from_parts(
            employee_id,
            period,
            WeeklyHours::zero(),
            PayComponents::new(Decimal::ZERO, Decimal::ZERO),
            DeductionSet::zero(),
        )
    }
}
