//! Salary model
//!
//! A salary is a range in some currency. Its valuation is the midpoint of the
//! range converted to the base currency; no rounding is applied here.

use serde::Serialize;

use crate::error::{Result, VacancyStatsError};
use crate::models::currency::CurrencyTable;

/// Salary range of a vacancy with its validated currency
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Salary {
    /// Lower bound of the range
    pub salary_from: f64,
    /// Upper bound of the range
    pub salary_to: f64,
    /// Currency code, guaranteed to be present in the table used at construction
    pub salary_currency: String,
    #[serde(skip)]
    rate: f64,
}

impl Salary {
    /// Create a salary from numeric bounds
    ///
    /// # Arguments
    /// * `salary_from` - Lower bound of the range
    /// * `salary_to` - Upper bound of the range
    /// * `currency` - Currency code
    /// * `table` - Table the currency is validated against
    ///
    /// # Errors
    /// Returns `InvalidSalary` for negative or non-finite bounds and
    /// `UnknownCurrency` if the currency is not in the table
    pub fn new(salary_from: f64, salary_to: f64, currency: &str, table: &CurrencyTable) -> Result<Self> {
        check_bound("salary_from", salary_from)?;
        check_bound("salary_to", salary_to)?;
        let rate = table.rate(currency)?;

        Ok(Self {
            salary_from,
            salary_to,
            salary_currency: currency.to_string(),
            rate,
        })
    }

    /// Create a salary from raw text fields, coercing the bounds to reals
    ///
    /// # Errors
    /// Returns `InvalidSalary` if a bound is not numeric
    pub fn parse(salary_from: &str, salary_to: &str, currency: &str, table: &CurrencyTable) -> Result<Self> {
        let from = parse_bound("salary_from", salary_from)?;
        let to = parse_bound("salary_to", salary_to)?;
        Self::new(from, to, currency, table)
    }

    /// Midpoint of the range expressed in the base currency
    #[must_use]
    pub fn valuation(&self) -> f64 {
        self.rate * (self.salary_from + self.salary_to) / 2.0
    }
}

fn parse_bound(column: &str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| VacancyStatsError::InvalidSalary {
            column: column.to_string(),
            value: value.to_string(),
        })
}

fn check_bound(column: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(VacancyStatsError::InvalidSalary {
            column: column.to_string(),
            value: value.to_string(),
        })
    }
}
