//! HTTP API module for the payroll engine.
//!
//! This module provides the REST boundary external callers use to reach the
//! computation pipeline: a single endpoint that accepts an employee, a pay
//! period and the period's shifts, and returns the full salary record.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ComputeRequest;
pub use response::ApiError;
pub use state::AppState;
