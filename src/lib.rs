//! Attendance and Payroll Computation Engine
//!
//! This crate computes employee attendance status and payroll figures from raw
//! time-clock punches under Philippine statutory rules: classified minutes
//! (regular, late, undertime, overtime), weekly hours, gross pay, statutory
//! deductions (SSS, PhilHealth, Pag-IBIG, withholding tax) and net pay.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
