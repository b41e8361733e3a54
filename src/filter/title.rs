//! Title substring filtering

use crate::filter::generic::Filter;
use crate::models::Vacancy;

/// A filter that keeps vacancies whose title contains a search term
///
/// Matching is a plain, case-sensitive substring test on the cleaned title.
/// An empty term matches every vacancy.
#[derive(Debug, Clone)]
pub struct TitleFilter {
    term: String,
}

impl TitleFilter {
    #[must_use]
    pub fn new(term: impl Into<String>) -> Self {
        Self { term: term.into() }
    }
}

impl Filter<Vacancy> for TitleFilter {
    fn matches(&self, vacancy: &Vacancy) -> bool {
        vacancy.name.contains(&self.term)
    }
}
