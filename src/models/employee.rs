//! Employee model.
//!
//! This module defines the Employee struct representing a worker whose
//! attendance and pay are computed by the engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents an employee subject to payroll computation.
///
/// Employees are owned and supplied by an external system; the engine only
/// reads the hourly rate for pay math and the identity fields for results
/// and logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The company-assigned employee number (e.g., "EMP-0042").
    pub employee_number: String,
    /// The employee's given name.
    pub first_name: String,
    /// The employee's family name.
    pub last_name: String,
    /// The employee's job title (e.g., "Software Engineer").
    pub position: String,
    /// The department the employee belongs to.
    pub department: String,
    /// The hourly rate in pesos. Must be greater than zero for pay math.
    pub hourly_rate: Decimal,
}

impl Employee {
    /// Returns the employee's full display name.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     employee_number: "EMP-0001".to_string(),
    ///     first_name: "Maria".to_string(),
    ///     last_name: "Santos".to_string(),
    ///     position: "Accountant".to_string(),
    ///     department: "Finance".to_string(),
    ///     hourly_rate: Decimal::new(15000, 2),
    /// };
    /// assert_eq!(employee.full_name(), "Maria Santos");
    /// ```
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
