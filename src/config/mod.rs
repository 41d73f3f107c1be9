//! Configuration for the payroll engine.
//!
//! This module provides the strongly-typed configuration objects used by the
//! calculation pipeline: the work schedule, pay policy settings, and the
//! frozen snapshot of the Philippine statutory contribution and tax tables.
//! Built-in defaults are always available via [`PayrollConfig::default`];
//! the [`ConfigLoader`] exists so deployments can pin a different snapshot
//! from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/ph2023").unwrap();
//! println!("Grace period: {} minutes", config.schedule.grace_period_minutes);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    PagibigConfig, PayrollConfig, PayrollSettings, PhilhealthConfig, ScheduleConfig, SssBracket,
    StatutoryTables, TaxBracket,
};
