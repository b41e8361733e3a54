//! Logging utilities for output and progress tracking

pub mod log;
pub mod progress;

pub use log::{log_partitions_found, log_read_complete, log_read_start};
pub use progress::{create_partition_progress_bar, finish_progress_bar};
