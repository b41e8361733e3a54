//! A Rust library for aggregating job-vacancy salary and volume statistics
//! by publication year and by region, with salaries normalized to a single
//! base currency.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod reader;
pub mod utils;

// Core types
pub use config::{ColumnNames, StatisticsConfig};
pub use error::{Result, VacancyStatsError};
pub use models::{CurrencyTable, Salary, Vacancy};
pub use reader::{FieldMap, NormalizedRows, VacancyReader};

// Filtering
pub use filter::{FilteredVacancies, YearRange, filter_vacancies};

// Aggregation
pub use algorithm::{RegionalStatistics, StatisticsReport, YearlyStatistics};
pub use utils::find_partition_files;
