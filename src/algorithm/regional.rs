//! Vacancy share and salary statistics by region
//!
//! A region is big when its un-rounded share of all vacancies is at least the
//! configured threshold (1% by default). The rounded shares of the remaining
//! regions are summed into a single bucket.

use std::fmt::Write as _;

use itertools::Itertools;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;

use crate::algorithm::yearly::floor_mean;
use crate::config::StatisticsConfig;
use crate::error::{Result, VacancyStatsError};
use crate::models::Vacancy;

/// Region name with its share of all vacancies, ordered by share descending
pub type RegionShares = Vec<(String, f64)>;

/// Region name with its floored mean valuation, ordered by valuation descending
pub type RegionSalaries = Vec<(String, i64)>;

/// Geographic statistics for a dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RegionalStatistics {
    /// Shares of big regions plus the bucket of all other regions
    pub region_share_all: RegionShares,
    /// Shares of big regions only
    pub region_share_big: RegionShares,
    /// Floored mean valuation of big regions
    pub region_avg_salary: RegionSalaries,
}

impl RegionalStatistics {
    /// Compute regional statistics over the full record set
    ///
    /// # Arguments
    /// * `vacancies` - All vacancies of the dataset (not name-filtered)
    /// * `config` - Threshold and bucket label
    ///
    /// # Returns
    /// Share and salary listings, each sorted by value descending with ties
    /// kept in order of first appearance
    ///
    /// # Errors
    /// Returns `NoVacancies` for an empty record set
    pub fn from_vacancies(vacancies: &[Vacancy], config: &StatisticsConfig) -> Result<Self> {
        if vacancies.is_empty() {
            return Err(VacancyStatsError::NoVacancies(
                "regional statistics".to_string(),
            ));
        }

        let total = vacancies.len() as u64;
        let threshold = u64::from(config.big_region_threshold_percent);

        let counts = count_by_region(vacancies);
        let region_count = counts.len();

        let mut big = RegionShares::new();
        let mut other_share = 0.0;
        for (region, count) in counts {
            let share = round_share(count, total);
            // floor(100 * count / total) >= threshold
            if count * 100 >= threshold * total {
                big.push((region.to_string(), share));
            } else {
                other_share += share;
            }
        }
        sort_shares(&mut big);

        let mut all = big.clone();
        all.push((config.other_label.clone(), other_share));
        sort_shares(&mut all);

        let region_avg_salary = salary_by_region(vacancies, &big);

        log::info!(
            "{} of {} regions hold at least {}% of vacancies",
            big.len(),
            region_count,
            threshold
        );

        Ok(Self {
            region_share_all: all,
            region_share_big: big,
            region_avg_salary,
        })
    }

    /// Share of a region, looked up in the listing that includes the bucket
    #[must_use]
    pub fn share_of(&self, region: &str) -> Option<f64> {
        self.region_share_all
            .iter()
            .find(|(name, _)| name == region)
            .map(|(_, share)| *share)
    }

    #[must_use]
    pub fn salary_of(&self, region: &str) -> Option<i64> {
        self.region_avg_salary
            .iter()
            .find(|(name, _)| name == region)
            .map(|(_, salary)| *salary)
    }

    /// Render the first `limit` entries of each listing as text lines
    #[must_use]
    pub fn summary(&self, limit: usize) -> String {
        let salaries = self
            .region_avg_salary
            .iter()
            .take(limit)
            .map(|(region, salary)| format!("'{region}': {salary}"))
            .join(", ");
        let shares = self
            .region_share_big
            .iter()
            .take(limit)
            .map(|(region, share)| format!("'{region}': {share}"))
            .join(", ");

        let mut summary = String::new();
        let _ = writeln!(summary, "Salary level by region (descending): {{{salaries}}}");
        let _ = writeln!(summary, "Vacancy share by region (descending): {{{shares}}}");
        summary
    }
}

/// Round a share to 4 decimal places
///
/// Rounding works on the exact decimal value of the quotient, so an exact tie
/// such as 1/32 = 0.03125 goes to the even digit (0.0312).
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn round_share(count: u64, total: u64) -> f64 {
    let share = count as f64 / total as f64;
    format!("{share:.4}").parse().unwrap_or(share)
}

/// Count vacancies per region in order of first appearance
fn count_by_region(vacancies: &[Vacancy]) -> Vec<(&str, u64)> {
    let mut index: FxHashMap<&str, usize> = FxHashMap::default();
    let mut counts: Vec<(&str, u64)> = Vec::new();
    for vacancy in vacancies {
        let region = vacancy.area_name.as_str();
        match index.get(region) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(region, counts.len());
                counts.push((region, 1));
            }
        }
    }
    counts
}

/// Floored mean valuation of each big region
fn salary_by_region(vacancies: &[Vacancy], big: &RegionShares) -> RegionSalaries {
    let mut index: FxHashMap<&str, usize> = FxHashMap::default();
    let mut sums: Vec<(&str, f64, u64)> = Vec::with_capacity(big.len());
    let is_big = big
        .iter()
        .map(|(region, _)| region.as_str())
        .collect::<FxHashSet<_>>();

    for vacancy in vacancies {
        let region = vacancy.area_name.as_str();
        if !is_big.contains(region) {
            continue;
        }
        match index.get(region) {
            Some(&i) => {
                sums[i].1 += vacancy.valuation();
                sums[i].2 += 1;
            }
            None => {
                index.insert(region, sums.len());
                sums.push((region, vacancy.valuation(), 1));
            }
        }
    }

    let mut salaries: RegionSalaries = sums
        .into_iter()
        .map(|(region, sum, count)| (region.to_string(), floor_mean(sum, count)))
        .collect();
    salaries.sort_by(|a, b| b.1.cmp(&a.1));
    salaries
}

fn sort_shares(shares: &mut RegionShares) {
    shares.sort_by(|a, b| b.1.total_cmp(&a.1));
}
