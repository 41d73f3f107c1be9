//! Statutory deduction calculation functionality.
//!
//! This module computes the four Philippine statutory deductions: the SSS
//! and PhilHealth contributions, the Pag-IBIG housing fund contribution and
//! the withholding tax. Each sub-calculator is an independent pure function
//! of monthly salary with no shared state.
//!
//! The statutory schedules are defined on a monthly salary scale while
//! payroll here runs per period (weekly by default). The composer
//! extrapolates `monthly = gross_period_pay x periods_per_month`, computes
//! monthly amounts, then divides each back by `periods_per_month`. The flat
//! x4 convention deliberately ignores calendar variance (4.33 weeks per
//! month); this is a documented limitation of the scheme, not a defect.

use rust_decimal::Decimal;

use crate::config::StatutoryTables;
use crate::error::{EngineError, EngineResult};
use crate::models::DeductionSet;

/// Looks up the monthly SSS contribution for a monthly salary.
///
/// The salary belongs to the first bracket whose ceiling is greater than or
/// equal to it (ceilings inclusive); salaries above the top bracket pay the
/// maximum contribution.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::sss_contribution;
/// use payroll_engine::config::StatutoryTables;
/// use rust_decimal::Decimal;
///
/// let tables = StatutoryTables::default();
/// assert_eq!(sss_contribution(Decimal::from(20000), &tables), Decimal::from(900));
/// assert_eq!(sss_contribution(Decimal::from(100000), &tables), Decimal::from(1125));
/// ```
pub fn sss_contribution(monthly_salary: Decimal, tables: &StatutoryTables) -> Decimal {
    tables
        .sss_brackets
        .iter()
        .find(|bracket| monthly_salary <= bracket.salary_ceiling)
        .map(|bracket| bracket.contribution)
        .unwrap_or(tables.sss_max_contribution)
}

/// Calculates the monthly PhilHealth employee contribution.
///
/// A flat rate on the salary, with the contribution base capped.
pub fn philhealth_contribution(monthly_salary: Decimal, tables: &StatutoryTables) -> Decimal {
    let base = monthly_salary.min(tables.philhealth.salary_ceiling);
    base * tables.philhealth.rate
}

/// Calculates the monthly Pag-IBIG employee contribution.
///
/// The standard rate applies above the rate threshold, the reduced rate at
/// or below it; the contribution base has its own, much lower cap.
pub fn pagibig_contribution(monthly_salary: Decimal, tables: &StatutoryTables) -> Decimal {
    let rate = if monthly_salary > tables.pagibig.rate_threshold {
        tables.pagibig.standard_rate
    } else {
        tables.pagibig.reduced_rate
    };
    let base = monthly_salary.min(tables.pagibig.salary_ceiling);
    base * rate
}

/// Calculates the monthly withholding tax.
///
/// Taxable income is the monthly salary less the three monthly statutory
/// contributions. The progressive bracket table then applies: the bracket is
/// the first whose ceiling is at or above the taxable income (ceilings
/// inclusive, so income exactly at a ceiling uses the lower bracket), and
/// tax is the bracket's base amount plus the marginal rate on the excess
/// over its floor. Income at or below the tax-exempt floor owes nothing.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::withholding_tax;
/// use payroll_engine::config::StatutoryTables;
/// use rust_decimal::Decimal;
///
/// let tables = StatutoryTables::default();
/// let zero = Decimal::ZERO;
/// assert_eq!(withholding_tax(Decimal::from(20833), zero, zero, zero, &tables), Decimal::ZERO);
/// ```
pub fn withholding_tax(
    monthly_salary: Decimal,
    sss: Decimal,
    philhealth: Decimal,
    pagibig: Decimal,
    tables: &StatutoryTables,
) -> Decimal {
    let taxable_income = monthly_salary - (sss + philhealth + pagibig);

    let bracket = tables.tax_brackets.iter().find(|bracket| {
        bracket
            .ceiling
            .map_or(true, |ceiling| taxable_income <= ceiling)
    });

    // A validated table always matches: the top bracket is unbounded.
    match bracket {
        Some(bracket) => bracket.base_tax + (taxable_income - bracket.floor) * bracket.marginal_rate,
        None => Decimal::ZERO,
    }
}

/// Computes the period-level deduction set and net pay for gross period pay.
///
/// Extrapolates a monthly salary, computes the four monthly statutory
/// amounts, divides each by `periods_per_month` for the period share, and
/// derives `net_pay = gross_period_pay - total_deductions`. Net pay is not
/// floored at zero: deductions exceeding gross pay yield a negative net.
///
/// # Errors
///
/// Returns [`EngineError::InvalidPayInput`] for non-positive gross pay;
/// deduction math on non-positive income is undefined policy.
pub fn calculate_deductions(
    gross_period_pay: Decimal,
    periods_per_month: Decimal,
    tables: &StatutoryTables,
) -> EngineResult<DeductionSet> {
    if gross_period_pay <= Decimal::ZERO {
        return Err(EngineError::InvalidPayInput {
            field: "gross_period_pay".to_string(),
            message: format!("must be greater than zero, got {gross_period_pay}"),
        });
    }

    let monthly_salary = gross_period_pay * periods_per_month;

    let monthly_sss = sss_contribution(monthly_salary, tables);
    let monthly_philhealth = philhealth_contribution(monthly_salary, tables);
    let monthly_pagibig = pagibig_contribution(monthly_salary, tables);
    let monthly_tax = withholding_tax(
        monthly_salary,
        monthly_sss,
        monthly_philhealth,
        monthly_pagibig,
        tables,
    );

    let sss_deduction = monthly_sss / periods_per_month;
    let philhealth_deduction = monthly_philhealth / periods_per_month;
    let pagibig_deduction = monthly_pagibig / periods_per_month;
    let tax_deduction = monthly_tax / periods_per_month;

    let total_deductions = sss_deduction + philhealth_deduction + pagibig_deduction + tax_deduction;

    Ok(DeductionSet {
        sss_deduction,
        philhealth_deduction,
        pagibig_deduction,
        tax_deduction,
        total_deductions,
        net_pay: gross_period_pay - total_deductions,
    })
}
