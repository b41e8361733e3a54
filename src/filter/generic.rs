//! Generic filtering framework
//!
//! A small trait-based approach to filtering domain entities. Filters are
//! predicates, and combinators build larger predicates from smaller ones.

use std::fmt::Debug;

/// A generic filter trait that can be applied to any data type
pub trait Filter<T>: Debug + Send + Sync {
    /// Whether `input` passes the filter
    fn matches(&self, input: &T) -> bool;

    /// Clone every element of `items` that passes the filter
    fn select(&self, items: &[T]) -> Vec<T>
    where
        T: Clone,
    {
        items.iter().filter(|item| self.matches(item)).cloned().collect()
    }
}

/// A filter that combines multiple filters with a logical AND
#[derive(Debug)]
pub struct AndFilter<T> {
    filters: Vec<Box<dyn Filter<T>>>,
}

impl<T> Default for AndFilter<T> {
    fn default() -> Self {
        Self {
            filters: Vec::new(),
        }
    }
}

impl<T> AndFilter<T> {
    /// Add another filter to the conjunction
    #[must_use]
    pub fn and(mut self, filter: impl Filter<T> + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }
}

impl<T: Debug> Filter<T> for AndFilter<T> {
    fn matches(&self, input: &T) -> bool {
        self.filters.iter().all(|filter| filter.matches(input))
    }
}
