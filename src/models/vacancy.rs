//! Vacancy entity model
//!
//! A vacancy is created once from a normalized row and never mutated afterwards.

use serde::Serialize;

use crate::config::ColumnNames;
use crate::error::{Result, VacancyStatsError};
use crate::models::currency::CurrencyTable;
use crate::models::salary::Salary;
use crate::reader::FieldMap;

/// A single job vacancy
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vacancy {
    /// Vacancy title
    pub name: String,
    /// Salary range and currency
    pub salary: Salary,
    /// Region the vacancy is published in
    pub area_name: String,
    /// Raw publication timestamp
    pub published_at: String,
    /// Year taken from the first four characters of `published_at`
    pub published_year: i32,
}

impl Vacancy {
    /// Create a vacancy from already typed parts
    ///
    /// # Errors
    /// Returns `InvalidPublicationDate` if the timestamp has no 4-digit year prefix
    pub fn new(
        name: impl Into<String>,
        salary: Salary,
        area_name: impl Into<String>,
        published_at: impl Into<String>,
    ) -> Result<Self> {
        let published_at = published_at.into();
        let published_year = parse_year(&published_at)?;
        Ok(Self {
            name: name.into(),
            salary,
            area_name: area_name.into(),
            published_at,
            published_year,
        })
    }

    /// Build a vacancy from a normalized row
    ///
    /// # Arguments
    /// * `fields` - Column name to cleaned value mapping
    /// * `columns` - Names of the required columns
    /// * `table` - Currency table used to validate the salary currency
    ///
    /// # Returns
    /// The typed vacancy
    ///
    /// # Errors
    /// Returns `MissingColumn`, `InvalidSalary`, `UnknownCurrency` or
    /// `InvalidPublicationDate` depending on which field is bad
    pub fn from_fields(fields: &FieldMap, columns: &ColumnNames, table: &CurrencyTable) -> Result<Self> {
        let salary = Salary::parse(
            field(fields, &columns.salary_from)?,
            field(fields, &columns.salary_to)?,
            field(fields, &columns.salary_currency)?,
            table,
        )?;

        Self::new(
            field(fields, &columns.name)?,
            salary,
            field(fields, &columns.area_name)?,
            field(fields, &columns.published_at)?,
        )
    }

    /// Salary valuation in the base currency
    #[must_use]
    pub fn valuation(&self) -> f64 {
        self.salary.valuation()
    }
}

fn field<'a>(fields: &'a FieldMap, column: &str) -> Result<&'a str> {
    fields
        .get(column)
        .map(String::as_str)
        .ok_or_else(|| VacancyStatsError::MissingColumn(column.to_string()))
}

/// Extract the publication year from a timestamp such as `2007-12-03T17:34:36+0300`
///
/// # Errors
/// Returns `InvalidPublicationDate` if the first four characters are not digits
pub fn parse_year(published_at: &str) -> Result<i32> {
    published_at
        .get(..4)
        .filter(|prefix| prefix.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|prefix| prefix.parse::<i32>().ok())
        .ok_or_else(|| VacancyStatsError::InvalidPublicationDate(published_at.to_string()))
}
