//! Record filtering
//!
//! Vacancies are first restricted to a publication year range; the
//! name-filtered subset is then taken from the vacancies in range.

pub mod generic;
pub mod title;
pub mod year;

pub use generic::{AndFilter, Filter};
pub use title::TitleFilter;
pub use year::{YearRange, YearRangeFilter};

use crate::models::Vacancy;

/// Vacancies split by the record filter
#[derive(Debug, Clone, Default)]
pub struct FilteredVacancies {
    /// Vacancies published within the year range
    pub all_in_range: Vec<Vacancy>,
    /// Subset of `all_in_range` whose title contains the search term
    pub name_matches: Vec<Vacancy>,
}

/// Split vacancies into the in-range set and its name-matched subset
///
/// # Arguments
/// * `vacancies` - Normalized vacancies
/// * `range` - Inclusive publication year range
/// * `name` - Case-sensitive title substring
///
/// # Returns
/// Both sequences, preserving input order
#[must_use]
pub fn filter_vacancies(vacancies: &[Vacancy], range: YearRange, name: &str) -> FilteredVacancies {
    let all_in_range = YearRangeFilter::new(range).select(vacancies);
    let name_matches = AndFilter::default()
        .and(YearRangeFilter::new(range))
        .and(TitleFilter::new(name))
        .select(vacancies);

    log::debug!(
        "{} of {} vacancies in {}..={}, {} matching '{}'",
        all_in_range.len(),
        vacancies.len(),
        range.start,
        range.end,
        name_matches.len(),
        name
    );

    FilteredVacancies {
        all_in_range,
        name_matches,
    }
}
