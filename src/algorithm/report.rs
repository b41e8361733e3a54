//! End-to-end statistics for one dataset
//!
//! Ingests the source file, runs the geographic pass over the vacancies in
//! the year range and the temporal pass either over year-partition files or,
//! without partitions, over the source file as a single partition.

use std::path::{Path, PathBuf};
use std::time::Instant;

use log::info;
use serde::Serialize;

use crate::algorithm::regional::RegionalStatistics;
use crate::algorithm::yearly::YearlyStatistics;
use crate::config::StatisticsConfig;
use crate::error::Result;
use crate::filter::filter_vacancies;
use crate::reader::VacancyReader;

/// Number of entries per regional listing in the text summary
pub const SUMMARY_REGION_LIMIT: usize = 10;

/// Temporal and geographic statistics for a dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsReport {
    /// Title search term used for the name-filtered statistics
    pub name: String,
    /// Statistics by publication year
    pub yearly: YearlyStatistics,
    /// Statistics by region
    pub regional: RegionalStatistics,
}

impl StatisticsReport {
    /// Build the report for a dataset
    ///
    /// # Arguments
    /// * `input` - Source vacancy file
    /// * `name` - Title search term
    /// * `partitions` - Optional year-partition files of the same dataset
    /// * `config` - Pipeline configuration
    ///
    /// # Errors
    /// Returns fatal ingestion errors (empty file, no data, unknown currency in
    /// strict mode) and invalid configuration
    pub fn generate(
        input: &Path,
        name: &str,
        partitions: Option<&[PathBuf]>,
        config: &StatisticsConfig,
    ) -> Result<Self> {
        let start = Instant::now();
        config.validate()?;

        let reader = VacancyReader::new(config.clone())?;
        let vacancies = reader.read_vacancies(input)?;
        let filtered = filter_vacancies(&vacancies, config.year_range, name);
        let regional = RegionalStatistics::from_vacancies(&filtered.all_in_range, config)?;

        let yearly = match partitions {
            Some(paths) => YearlyStatistics::from_partition_files(paths, name, config)?,
            None => YearlyStatistics::from_partitions(&[vacancies.as_slice()], name, config)?,
        };

        info!("Generated statistics for '{name}' in {:?}", start.elapsed());
        Ok(Self {
            name: name.to_string(),
            yearly,
            regional,
        })
    }

    /// Text rendering of both passes
    #[must_use]
    pub fn summary(&self) -> String {
        let mut summary = self.regional.summary(SUMMARY_REGION_LIMIT);
        summary.push_str(&self.yearly.summary());
        summary
    }
}
