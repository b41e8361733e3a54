//! Configuration for vacancy ingestion and aggregation.

use std::sync::Arc;

use crate::error::{Result, VacancyStatsError};
use crate::filter::YearRange;
use crate::models::CurrencyTable;

/// Default size of the worker pool used by the temporal pass
pub const DEFAULT_MAX_WORKERS: usize = 6;

/// Default bucket name for regions under the share threshold
pub const DEFAULT_OTHER_LABEL: &str = "Other";

/// Names of the columns a vacancy is built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnNames {
    /// Vacancy title
    pub name: String,
    /// Lower salary bound
    pub salary_from: String,
    /// Upper salary bound
    pub salary_to: String,
    /// Salary currency code
    pub salary_currency: String,
    /// Region name
    pub area_name: String,
    /// Publication timestamp
    pub published_at: String,
}

impl ColumnNames {
    /// All required column names, in declaration order
    #[must_use]
    pub fn required(&self) -> [&str; 6] {
        [
            self.name.as_str(),
            self.salary_from.as_str(),
            self.salary_to.as_str(),
            self.salary_currency.as_str(),
            self.area_name.as_str(),
            self.published_at.as_str(),
        ]
    }
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            name: "name".to_string(),
            salary_from: "salary_from".to_string(),
            salary_to: "salary_to".to_string(),
            salary_currency: "salary_currency".to_string(),
            area_name: "area_name".to_string(),
            published_at: "published_at".to_string(),
        }
    }
}

/// Configuration for the statistics pipeline
#[derive(Debug, Clone)]
pub struct StatisticsConfig {
    /// Publication years kept by the record filter (inclusive)
    pub year_range: YearRange,
    /// Number of workers used for the temporal pass
    pub max_workers: usize,
    /// Minimum share, in whole percent, for a region to count as big
    pub big_region_threshold_percent: u32,
    /// Bucket name absorbing the share of small regions
    pub other_label: String,
    /// Names of the required columns
    pub columns: ColumnNames,
    /// Exchange rates used for salary valuation
    pub currency_table: Arc<CurrencyTable>,
    /// Abort ingestion on an unknown currency instead of skipping the row
    pub fail_on_unknown_currency: bool,
    /// Draw a progress bar during the temporal pass
    pub show_progress: bool,
}

impl Default for StatisticsConfig {
    fn default() -> Self {
        Self {
            year_range: YearRange::new(2007, 2014),
            max_workers: DEFAULT_MAX_WORKERS,
            big_region_threshold_percent: 1,
            other_label: DEFAULT_OTHER_LABEL.to_string(),
            columns: ColumnNames::default(),
            currency_table: Arc::new(CurrencyTable::default()),
            fail_on_unknown_currency: false,
            show_progress: false,
        }
    }
}

impl StatisticsConfig {
    /// Defaults overridden by `VACANCY_STATS_*` environment variables
    ///
    /// Unparseable values are ignored with a warning.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(workers) = env_value::<usize>("VACANCY_STATS_MAX_WORKERS") {
            config.max_workers = workers;
        }
        if let Some(start) = env_value::<i32>("VACANCY_STATS_YEAR_START") {
            config.year_range = YearRange::new(start, config.year_range.end);
        }
        if let Some(end) = env_value::<i32>("VACANCY_STATS_YEAR_END") {
            config.year_range = YearRange::new(config.year_range.start, end);
        }
        config
    }

    /// Check the configuration for values the pipeline cannot work with
    ///
    /// # Errors
    /// Returns a `Config` error describing the first invalid value
    pub fn validate(&self) -> Result<()> {
        if self.max_workers == 0 {
            return Err(VacancyStatsError::Config(
                "max_workers must be at least 1".to_string(),
            ));
        }
        if self.year_range.start > self.year_range.end {
            return Err(VacancyStatsError::Config(format!(
                "year range {}..={} is empty",
                self.year_range.start, self.year_range.end
            )));
        }
        if self.big_region_threshold_percent > 100 {
            return Err(VacancyStatsError::Config(format!(
                "big region threshold {}% exceeds 100%",
                self.big_region_threshold_percent
            )));
        }
        Ok(())
    }
}

fn env_value<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("Ignoring {key}={raw}: not a valid value");
            None
        }
    }
}
