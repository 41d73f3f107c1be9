//! Configuration types for payroll computation.
//!
//! This module contains the strongly-typed configuration structures that can
//! be deserialized from YAML configuration files, together with `Default`
//! implementations carrying the built-in 2023 statutory snapshot.
//!
//! The statutory tables are immutable, process-wide read-only data: they are
//! frozen snapshots of the published schedules, not live government tables.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// The configured work schedule a shift is classified against.
///
/// Defaults to an 08:00 expected start, a 10-minute grace period and a
/// 480-minute (8-hour) standard day. The schedule is always passed
/// explicitly into calculations so callers and tests can override it per
/// call without process-wide side effects.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScheduleConfig {
    /// The expected clock-in time.
    pub expected_time_in: NaiveTime,
    /// Minutes after the expected start during which a late arrival incurs
    /// no penalty. Once exceeded, lateness is charged from the expected
    /// start, not the grace boundary.
    pub grace_period_minutes: u32,
    /// The standard shift length in minutes. Must be positive and at most
    /// one day.
    pub standard_shift_minutes: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            expected_time_in: NaiveTime::from_hms_opt(8, 0, 0).expect("08:00 is a valid time"),
            grace_period_minutes: 10,
            standard_shift_minutes: 480,
        }
    }
}

impl ScheduleConfig {
    /// Validates the schedule window.
    ///
    /// A zero-length or longer-than-a-day standard shift defines a window
    /// that shift classification cannot reconcile.
    pub fn validate(&self) -> EngineResult<()> {
        if self.standard_shift_minutes == 0 {
            return Err(EngineError::ConfigInvalid {
                message: "standard_shift_minutes must be greater than zero".to_string(),
            });
        }
        if self.standard_shift_minutes > 1440 {
            return Err(EngineError::ConfigInvalid {
                message: "standard_shift_minutes must not exceed one day (1440)".to_string(),
            });
        }
        Ok(())
    }
}

/// Pay policy settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PayrollSettings {
    /// The overtime premium multiplier applied to the hourly rate for
    /// overtime hours. Defaults to 1.25 (a 25% premium).
    pub overtime_multiplier: Decimal,
    /// The number of pay periods assumed per month when extrapolating a
    /// monthly salary from period pay. Defaults to the flat 4 used by the
    /// weekly payroll convention; calendar variance (4.33 weeks per month)
    /// is deliberately ignored.
    pub periods_per_month: Decimal,
}

impl Default for PayrollSettings {
    fn default() -> Self {
        Self {
            overtime_multiplier: Decimal::new(125, 2),
            periods_per_month: Decimal::from(4),
        }
    }
}

impl PayrollSettings {
    /// Validates the pay policy settings.
    pub fn validate(&self) -> EngineResult<()> {
        if self.overtime_multiplier <= Decimal::ZERO {
            return Err(EngineError::ConfigInvalid {
                message: "overtime_multiplier must be greater than zero".to_string(),
            });
        }
        if self.periods_per_month <= Decimal::ZERO {
            return Err(EngineError::ConfigInvalid {
                message: "periods_per_month must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

/// One bracket of the SSS monthly contribution table.
///
/// A monthly salary belongs to the first bracket whose `salary_ceiling` is
/// greater than or equal to the salary; ceilings are inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SssBracket {
    /// The inclusive upper bound of monthly salary for this bracket.
    pub salary_ceiling: Decimal,
    /// The employee's monthly contribution in this bracket.
    pub contribution: Decimal,
}

/// The PhilHealth contribution model: a flat rate on a capped salary base.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PhilhealthConfig {
    /// The employee's share of the contribution rate.
    pub rate: Decimal,
    /// The maximum monthly salary counted toward the contribution base.
    pub salary_ceiling: Decimal,
}

/// The Pag-IBIG housing fund contribution model: a two-step rate on a
/// capped salary base.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PagibigConfig {
    /// The rate for monthly salaries at or below `rate_threshold`.
    pub reduced_rate: Decimal,
    /// The rate for monthly salaries above `rate_threshold`.
    pub standard_rate: Decimal,
    /// The monthly salary above which the standard rate applies.
    pub rate_threshold: Decimal,
    /// The maximum monthly salary counted toward the contribution base.
    pub salary_ceiling: Decimal,
}

/// One bracket of the progressive withholding tax table.
///
/// Tax for a taxable income in this bracket is
/// `base_tax + (taxable - floor) * marginal_rate`. Ceilings are inclusive;
/// the top bracket has no ceiling.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaxBracket {
    /// The exclusive lower bound of taxable income for this bracket.
    pub floor: Decimal,
    /// The inclusive upper bound of taxable income, or `None` for the top
    /// bracket.
    pub ceiling: Option<Decimal>,
    /// The fixed tax owed at the bracket floor.
    pub base_tax: Decimal,
    /// The marginal rate on the excess over the bracket floor.
    pub marginal_rate: Decimal,
}

/// The frozen snapshot of the Philippine statutory contribution and tax
/// tables used by the deduction engine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatutoryTables {
    /// The SSS contribution brackets, ordered by ascending salary ceiling.
    pub sss_brackets: Vec<SssBracket>,
    /// The contribution for monthly salaries above the top SSS bracket.
    pub sss_max_contribution: Decimal,
    /// The PhilHealth contribution model.
    pub philhealth: PhilhealthConfig,
    /// The Pag-IBIG contribution model.
    pub pagibig: PagibigConfig,
    /// The withholding tax brackets, ordered by ascending floor.
    pub tax_brackets: Vec<TaxBracket>,
}

impl Default for StatutoryTables {
    /// The built-in 2023 snapshot.
    ///
    /// The SSS table runs in 500-peso salary increments from 3,250 up to
    /// 20,750, then four 1,000-peso brackets to 24,750, capped at a maximum
    /// contribution of 1,125 above that. The tax table is the six-bracket
    /// 2023 monthly withholding schedule with a 20,833 tax-exempt floor.
    fn default() -> Self {
        let peso = |units: i64| Decimal::from(units);
        let centavo = |cents: i64| Decimal::new(cents, 2);

        // 500-peso brackets: contribution starts at 135.00 and climbs in
        // 22.50 steps up to 922.50 at the 20,750 ceiling.
        let mut sss_brackets: Vec<SssBracket> = (0..36)
            .map(|i| SssBracket {
                salary_ceiling: peso(3250 + 500 * i),
                contribution: centavo(13500 + 2250 * i),
            })
            .collect();
        // Wider 1,000-peso brackets at the top of the table.
        for (ceiling, cents) in [
            (21750, 96750),
            (22750, 101250),
            (23750, 105750),
            (24750, 110250),
        ] {
            sss_brackets.push(SssBracket {
                salary_ceiling: peso(ceiling),
                contribution: centavo(cents),
            });
        }

        let tax_brackets = vec![
            TaxBracket {
                floor: peso(0),
                ceiling: Some(peso(20833)),
                base_tax: peso(0),
                marginal_rate: Decimal::ZERO,
            },
            TaxBracket {
                floor: peso(20833),
                ceiling: Some(peso(33332)),
                base_tax: peso(0),
                marginal_rate: centavo(15),
            },
            TaxBracket {
                floor: peso(33332),
                ceiling: Some(peso(66666)),
                base_tax: peso(1875),
                marginal_rate: centavo(20),
            },
            TaxBracket {
                floor: peso(66666),
                ceiling: Some(peso(166666)),
                base_tax: centavo(854_180),
                marginal_rate: centavo(25),
            },
            TaxBracket {
                floor: peso(166666),
                ceiling: Some(peso(666666)),
                base_tax: centavo(3_354_180),
                marginal_rate: centavo(30),
            },
            TaxBracket {
                floor: peso(666666),
                ceiling: None,
                base_tax: centavo(18_354_180),
                marginal_rate: centavo(35),
            },
        ];

        Self {
            sss_brackets,
            sss_max_contribution: peso(1125),
            philhealth: PhilhealthConfig {
                rate: Decimal::new(15, 3),
                salary_ceiling: peso(60000),
            },
            pagibig: PagibigConfig {
                reduced_rate: centavo(1),
                standard_rate: centavo(2),
                rate_threshold: peso(1500),
                salary_ceiling: peso(5000),
            },
            tax_brackets,
        }
    }
}

impl StatutoryTables {
    /// Validates the statutory tables.
    ///
    /// Checks that the SSS table is non-empty with strictly ascending
    /// ceilings and non-decreasing contributions, that the rates are
    /// fractions, and that the tax brackets form a contiguous ascending
    /// ladder whose top bracket is unbounded.
    pub fn validate(&self) -> EngineResult<()> {
        if self.sss_brackets.is_empty() {
            return Err(EngineError::ConfigInvalid {
                message: "SSS contribution table must not be empty".to_string(),
            });
        }
        for pair in self.sss_brackets.windows(2) {
            if pair[1].salary_ceiling <= pair[0].salary_ceiling {
                return Err(EngineError::ConfigInvalid {
                    message: "SSS salary ceilings must be strictly ascending".to_string(),
                });
            }
            if pair[1].contribution < pair[0].contribution {
                return Err(EngineError::ConfigInvalid {
                    message: "SSS contributions must be non-decreasing".to_string(),
                });
            }
        }
        if let Some(last) = self.sss_brackets.last() {
            if self.sss_max_contribution < last.contribution {
                return Err(EngineError::ConfigInvalid {
                    message: "SSS maximum contribution must be at least the top bracket"
                        .to_string(),
                });
            }
        }

        let rate_is_fraction = |rate: Decimal| rate >= Decimal::ZERO && rate <= Decimal::ONE;
        if !rate_is_fraction(self.philhealth.rate) {
            return Err(EngineError::ConfigInvalid {
                message: "PhilHealth rate must be between 0 and 1".to_string(),
            });
        }
        if !rate_is_fraction(self.pagibig.reduced_rate)
            || !rate_is_fraction(self.pagibig.standard_rate)
        {
            return Err(EngineError::ConfigInvalid {
                message: "Pag-IBIG rates must be between 0 and 1".to_string(),
            });
        }

        if self.tax_brackets.is_empty() {
            return Err(EngineError::ConfigInvalid {
                message: "tax bracket table must not be empty".to_string(),
            });
        }
        for pair in self.tax_brackets.windows(2) {
            match pair[0].ceiling {
                Some(ceiling) if ceiling == pair[1].floor => {}
                Some(_) => {
                    return Err(EngineError::ConfigInvalid {
                        message: "tax brackets must be contiguous: each floor must equal the \
                                  previous ceiling"
                            .to_string(),
                    });
                }
                None => {
                    return Err(EngineError::ConfigInvalid {
                        message: "only the top tax bracket may be unbounded".to_string(),
                    });
                }
            }
        }
        let last = self.tax_brackets.last().expect("checked non-empty");
        if last.ceiling.is_some() {
            return Err(EngineError::ConfigInvalid {
                message: "the top tax bracket must be unbounded".to_string(),
            });
        }
        for bracket in &self.tax_brackets {
            if !rate_is_fraction(bracket.marginal_rate) {
                return Err(EngineError::ConfigInvalid {
                    message: "tax marginal rates must be between 0 and 1".to_string(),
                });
            }
        }

        Ok(())
    }
}

/// The engine-wide configuration: schedule, pay policy and statutory tables.
///
/// Immutable after construction; shared read-only across all calculations.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct PayrollConfig {
    /// The default work schedule, overridable per call.
    #[serde(default)]
    pub schedule: ScheduleConfig,
    /// The pay policy settings.
    #[serde(default)]
    pub settings: PayrollSettings,
    /// The statutory contribution and tax tables.
    #[serde(default)]
    pub statutory: StatutoryTables,
}

impl PayrollConfig {
    /// Validates every section of the configuration.
    pub fn validate(&self) -> EngineResult<()> {
        self.schedule.validate()?;
        self.settings.validate()?;
        self.statutory.validate()?;
        Ok(())
    }
}
