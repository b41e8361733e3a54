//! Aggregation passes over vacancy records
//!
//! The temporal pass groups by publication year and can run over year
//! partitions in parallel. The geographic pass groups by region over the
//! full record set.

pub mod regional;
pub mod report;
pub mod yearly;

pub use regional::RegionalStatistics;
pub use report::StatisticsReport;
pub use yearly::YearlyStatistics;
