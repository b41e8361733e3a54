//! Salary and volume statistics by publication year
//!
//! Statistics are computed per partition and merged by a union of the
//! per-year mappings. Partitions are split upstream by publication year, so a
//! year never appears in two partitions and the union is collision-free.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{info, warn};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::config::StatisticsConfig;
use crate::error::{Result, VacancyStatsError};
use crate::filter::{FilteredVacancies, filter_vacancies};
use crate::models::Vacancy;
use crate::reader::VacancyReader;
use crate::utils::logging::{create_partition_progress_bar, finish_progress_bar};

/// Year to floored mean valuation
pub type SalaryByYear = BTreeMap<i32, i64>;

/// Year to number of vacancies
pub type CountByYear = BTreeMap<i32, u64>;

/// Temporal statistics for a dataset and its name-filtered subset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct YearlyStatistics {
    /// Floored mean valuation per year, all vacancies
    pub salary_by_year: SalaryByYear,
    /// Vacancy count per year, all vacancies
    pub count_by_year: CountByYear,
    /// Floored mean valuation per year, name-filtered vacancies
    pub salary_by_year_name: SalaryByYear,
    /// Vacancy count per year, name-filtered vacancies
    pub count_by_year_name: CountByYear,
}

impl YearlyStatistics {
    /// Compute the statistics of one partition
    #[must_use]
    pub fn from_filtered(filtered: &FilteredVacancies) -> Self {
        Self {
            salary_by_year: salary_by_year(&filtered.all_in_range),
            count_by_year: count_by_year(&filtered.all_in_range),
            salary_by_year_name: salary_by_year(&filtered.name_matches),
            count_by_year_name: count_by_year(&filtered.name_matches),
        }
    }

    /// Merge per-partition statistics into one
    ///
    /// Each statistic is merged independently and empty partial mappings are
    /// left out, so a year absent from every partition stays absent rather
    /// than showing up with a zero. Partials are applied in order; if a year
    /// does occur twice the later partial wins.
    #[must_use]
    pub fn merge<I>(partials: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let mut merged = Self::default();
        for partial in partials {
            union_into(&mut merged.salary_by_year, partial.salary_by_year, "salary");
            union_into(&mut merged.count_by_year, partial.count_by_year, "count");
            union_into(
                &mut merged.salary_by_year_name,
                partial.salary_by_year_name,
                "name salary",
            );
            union_into(
                &mut merged.count_by_year_name,
                partial.count_by_year_name,
                "name count",
            );
        }
        merged
    }

    /// Compute statistics over in-memory partitions in parallel
    ///
    /// # Arguments
    /// * `partitions` - Vacancy partitions, disjoint by publication year
    /// * `name` - Title search term for the name-filtered statistics
    /// * `config` - Year range and worker pool size
    ///
    /// # Returns
    /// The merged statistics
    ///
    /// # Errors
    /// Returns an error if the worker pool cannot be created
    pub fn from_partitions<P>(partitions: &[P], name: &str, config: &StatisticsConfig) -> Result<Self>
    where
        P: AsRef<[Vacancy]> + Sync,
    {
        let pool = build_pool(config)?;
        let partials: Vec<Self> = pool.install(|| {
            partitions
                .par_iter()
                .map(|partition| {
                    let filtered = filter_vacancies(partition.as_ref(), config.year_range, name);
                    Self::from_filtered(&filtered)
                })
                .collect()
        });
        Ok(Self::merge(partials))
    }

    /// Compute statistics over partition files in parallel
    ///
    /// Each worker reads, normalizes, filters and aggregates one file end to
    /// end. A partition that cannot be read contributes nothing.
    ///
    /// # Arguments
    /// * `paths` - Partition files, one per publication year
    /// * `name` - Title search term for the name-filtered statistics
    /// * `config` - Year range, worker pool size and reader settings
    ///
    /// # Returns
    /// The merged statistics
    ///
    /// # Errors
    /// Returns an error if the worker pool cannot be created, or
    /// `UnknownCurrency` when `fail_on_unknown_currency` is set
    pub fn from_partition_files(paths: &[PathBuf], name: &str, config: &StatisticsConfig) -> Result<Self> {
        let start = Instant::now();
        let reader = VacancyReader::new(config.clone())?;
        let pool = build_pool(config)?;
        info!(
            "Aggregating {} partitions with {} workers",
            paths.len(),
            pool.current_num_threads()
        );

        let pb = create_partition_progress_bar(paths.len() as u64, config.show_progress);
        let results: Vec<Result<Option<Self>>> = pool.install(|| {
            paths
                .par_iter()
                .map(|path| {
                    let result = process_partition(&reader, path, name);
                    pb.inc(1);
                    result
                })
                .collect()
        });
        finish_progress_bar(&pb, Some("partitions aggregated"));

        let mut partials = Vec::with_capacity(results.len());
        for result in results {
            if let Some(partial) = result? {
                partials.push(partial);
            }
        }

        info!(
            "Merged {} of {} partitions in {:?}",
            partials.len(),
            paths.len(),
            start.elapsed()
        );
        Ok(Self::merge(partials))
    }

    /// Render the statistics as text lines
    #[must_use]
    pub fn summary(&self) -> String {
        let mut summary = String::new();
        let _ = writeln!(summary, "Salary dynamics by year: {:?}", self.salary_by_year);
        let _ = writeln!(summary, "Vacancy count dynamics by year: {:?}", self.count_by_year);
        let _ = writeln!(
            summary,
            "Salary dynamics by year for the selected profession: {:?}",
            self.salary_by_year_name
        );
        let _ = writeln!(
            summary,
            "Vacancy count dynamics by year for the selected profession: {:?}",
            self.count_by_year_name
        );
        summary
    }
}

/// Floored mean valuation per publication year
#[must_use]
pub fn salary_by_year(vacancies: &[Vacancy]) -> SalaryByYear {
    let mut sums: FxHashMap<i32, (f64, u64)> = FxHashMap::default();
    for vacancy in vacancies {
        let entry = sums.entry(vacancy.published_year).or_insert((0.0, 0));
        entry.0 += vacancy.valuation();
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(year, (sum, count))| (year, floor_mean(sum, count)))
        .collect()
}

/// Number of vacancies per publication year
#[must_use]
pub fn count_by_year(vacancies: &[Vacancy]) -> CountByYear {
    let mut counts = CountByYear::new();
    for vacancy in vacancies {
        *counts.entry(vacancy.published_year).or_insert(0) += 1;
    }
    counts
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub(crate) fn floor_mean(sum: f64, count: u64) -> i64 {
    (sum / count as f64).floor() as i64
}

fn union_into<V: Copy>(target: &mut BTreeMap<i32, V>, partial: BTreeMap<i32, V>, statistic: &str) {
    if partial.is_empty() {
        return;
    }
    for (year, value) in partial {
        if target.insert(year, value).is_some() {
            warn!("Year {year} appears in more than one partition ({statistic}); keeping the later value");
        }
    }
}

fn build_pool(config: &StatisticsConfig) -> Result<rayon::ThreadPool> {
    if config.max_workers == 0 {
        return Err(VacancyStatsError::Config(
            "max_workers must be at least 1".to_string(),
        ));
    }
    Ok(rayon::ThreadPoolBuilder::new()
        .num_threads(config.max_workers)
        .thread_name(|i| format!("vacancy-partition-{i}"))
        .build()?)
}

/// Read, filter and aggregate a single partition file
///
/// Read failures are logged and reported as `None`; only a strict-mode
/// unknown currency is propagated.
fn process_partition(reader: &VacancyReader, path: &Path, name: &str) -> Result<Option<YearlyStatistics>> {
    let vacancies = match reader.read_vacancies(path) {
        Ok(vacancies) => vacancies,
        Err(e @ VacancyStatsError::UnknownCurrency(_)) => return Err(e),
        Err(e) => {
            warn!("Partition {} contributes nothing: {e}", path.display());
            return Ok(None);
        }
    };

    let filtered = filter_vacancies(&vacancies, reader.config().year_range, name);
    Ok(Some(YearlyStatistics::from_filtered(&filtered)))
}
