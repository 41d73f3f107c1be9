//! API request types.
//!
//! This module contains the wire-format request structures and their
//! conversions into domain types. Request DTOs are kept separate from the
//! domain models so the wire contract can evolve without touching the
//! calculation pipeline.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::parse_clock_time;
use crate::config::ScheduleConfig;
use crate::error::EngineResult;
use crate::models::{Employee, PayPeriod, Shift};

/// The request body for the compute endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeRequest {
    /// The employee the computation is for.
    pub employee: EmployeeRequest,
    /// The pay period to aggregate over.
    pub pay_period: PayPeriodRequest,
    /// The raw shifts recorded for the employee.
    pub shifts: Vec<ShiftRequest>,
    /// Optional per-request schedule override; when absent the configured
    /// default schedule applies.
    #[serde(default)]
    pub schedule: Option<ScheduleRequest>,
}

/// Wire format for an employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// The company-assigned employee number.
    pub employee_number: String,
    /// The employee's given name.
    pub first_name: String,
    /// The employee's family name.
    pub last_name: String,
    /// The employee's job title.
    pub position: String,
    /// The department the employee belongs to.
    pub department: String,
    /// The hourly rate in pesos.
    pub hourly_rate: Decimal,
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            id: req.id,
            employee_number: req.employee_number,
            first_name: req.first_name,
            last_name: req.last_name,
            position: req.position,
            department: req.department,
            hourly_rate: req.hourly_rate,
        }
    }
}

/// Wire format for a pay period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayPeriodRequest {
    /// The start date of the period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the period (inclusive).
    pub end_date: NaiveDate,
}

impl From<PayPeriodRequest> for PayPeriod {
    fn from(req: PayPeriodRequest) -> Self {
        PayPeriod {
            start_date: req.start_date,
            end_date: req.end_date,
        }
    }
}

/// Wire format for a shift.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRequest {
    /// Unique identifier for the shift.
    pub id: String,
    /// The employee the shift belongs to.
    pub employee_id: String,
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// The clock-in time in 24-hour `HH:MM` form.
    pub time_in: String,
    /// The clock-out time in 24-hour `HH:MM` form.
    pub time_out: String,
}

impl From<ShiftRequest> for Shift {
    fn from(req: ShiftRequest) -> Self {
        Shift {
            id: req.id,
            employee_id: req.employee_id,
            date: req.date,
            time_in: req.time_in,
            time_out: req.time_out,
        }
    }
}

/// Wire format for a per-request schedule override.
///
/// The expected start is the same `HH:MM` text the punches use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// The expected clock-in time in 24-hour `HH:MM` form.
    pub expected_time_in: String,
    /// Minutes of grace after the expected start.
    pub grace_period_minutes: u32,
    /// The standard shift length in minutes.
    pub standard_shift_minutes: u32,
}

impl ScheduleRequest {
    /// Converts the override into a [`ScheduleConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::InvalidTimeFormat`] if the
    /// expected start time is malformed.
    pub fn into_schedule(self) -> EngineResult<ScheduleConfig> {
        Ok(ScheduleConfig {
            expected_time_in: parse_clock_time(&self.expected_time_in)?,
            grace_period_minutes: self.grace_period_minutes,
            standard_shift_minutes: self.standard_shift_minutes,
        })
    }
}
