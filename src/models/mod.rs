//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod pay_period;
mod payroll_result;
mod shift;

pub use employee::Employee;
pub use pay_period::PayPeriod;
pub use payroll_result::{
    ClassifiedShift, DeductionSet, PayComponents, SalaryComputation, WeeklyHours,
};
pub use shift::Shift;
