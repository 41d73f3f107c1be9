//! Calculation logic for the payroll engine.
//!
//! This module contains the calculation functions for the payroll pipeline:
//! time classification of raw punches against a schedule, weekly hour
//! aggregation, gross pay calculation, statutory deduction calculation, and
//! the payroll façade that composes them into one salary record.
//!
//! Data flows one way through the pipeline: raw shifts become classified
//! minutes, classified minutes become weekly hours, weekly hours become
//! gross pay, and gross pay becomes deductions and net pay. No stage reads
//! back from a later one, and every function is stateless and synchronous.

mod aggregation;
mod attendance;
mod deductions;
mod gross_pay;
mod payroll;

pub use aggregation::aggregate_hours;
pub use attendance::{classify_shift, parse_clock_time};
pub use deductions::{
    calculate_deductions, pagibig_contribution, philhealth_contribution, sss_contribution,
    withholding_tax,
};
pub use gross_pay::calculate_gross_pay;
pub use payroll::compute_salary;
