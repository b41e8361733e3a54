//! Publication year filtering

use serde::Serialize;

use crate::filter::generic::Filter;
use crate::models::Vacancy;

/// Inclusive range of publication years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearRange {
    /// First year kept
    pub start: i32,
    /// Last year kept
    pub end: i32,
}

impl YearRange {
    #[must_use]
    pub const fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn contains(&self, year: i32) -> bool {
        self.start <= year && year <= self.end
    }
}

/// A filter that keeps vacancies published within a year range
#[derive(Debug, Clone, Copy)]
pub struct YearRangeFilter {
    range: YearRange,
}

impl YearRangeFilter {
    #[must_use]
    pub fn new(range: YearRange) -> Self {
        Self { range }
    }
}

impl Filter<Vacancy> for YearRangeFilter {
    fn matches(&self, vacancy: &Vacancy) -> bool {
        self.range.contains(vacancy.published_year)
    }
}
