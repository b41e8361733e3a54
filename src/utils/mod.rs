//! Utility functions for logging, progress and file discovery

pub mod io;
pub mod logging;

pub use io::find_partition_files;
