//! Error handling for vacancy ingestion and aggregation.

pub mod util;

use std::io;
use std::path::PathBuf;

/// Specialized error type for vacancy statistics
#[derive(Debug, thiserror::Error)]
pub enum VacancyStatsError {
    /// The input stream has no header row
    #[error("Empty file: {0}")]
    EmptyInput(String),

    /// A header is present but no data row survived row-shape validation
    #[error("No data: every row of {0} was discarded")]
    NoData(String),

    /// A salary bound is not a non-negative number
    #[error("Invalid salary in column '{column}': '{value}'")]
    InvalidSalary {
        /// Column the value was read from
        column: String,
        /// Raw field value
        value: String,
    },

    /// The currency code is absent from the currency table
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// The publication timestamp does not start with a 4-digit year
    #[error("Invalid publication date '{0}': expected a YYYY prefix")]
    InvalidPublicationDate(String),

    /// Nothing is left to aggregate after filtering
    #[error("No vacancies to aggregate for {0}")]
    NoVacancies(String),

    /// A required column is not part of the header
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// Error opening a file or directory
    #[error("Cannot access {}: {context}", path.display())]
    FileAccess {
        /// Offending path
        path: PathBuf,
        /// What went wrong, in words
        context: String,
        /// Underlying IO error, when there is one
        #[source]
        source: Option<io::Error>,
    },

    /// Error reading delimited data
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The worker pool could not be created
    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// A cleaning pattern failed to compile
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),
}

impl VacancyStatsError {
    /// Create a file access error without an underlying IO source
    pub fn file_access(path: impl Into<PathBuf>, context: impl Into<String>) -> Self {
        Self::FileAccess {
            path: path.into(),
            context: context.into(),
            source: None,
        }
    }

    /// Create a file access error wrapping an IO error
    pub fn file_access_with_source(
        path: impl Into<PathBuf>,
        context: impl Into<String>,
        source: io::Error,
    ) -> Self {
        Self::FileAccess {
            path: path.into(),
            context: context.into(),
            source: Some(source),
        }
    }

    /// Whether the error terminates the whole run rather than a single record
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            Self::InvalidSalary { .. } | Self::UnknownCurrency(_) | Self::InvalidPublicationDate(_)
        )
    }
}

/// Result type for vacancy statistics operations
pub type Result<T> = std::result::Result<T, VacancyStatsError>;
