//! Discovery of year-partition files
//!
//! The partitions themselves are produced by an external splitting step, one
//! file per publication year, each carrying the header of the source file.

use std::path::{Path, PathBuf};

use itertools::Itertools;

use crate::error::util::validate_directory;
use crate::error::{Result, VacancyStatsError};
use crate::utils::logging::log_partitions_found;

/// Extension of partition files
pub const PARTITION_EXTENSION: &str = "csv";

/// Find all partition files in a directory, sorted by file name
///
/// # Arguments
/// * `dir` - Directory holding the partition files
///
/// # Returns
/// Paths of the `*.csv` files in the directory
///
/// # Errors
/// Returns an error if the directory is missing or cannot be listed
pub fn find_partition_files(dir: &Path) -> Result<Vec<PathBuf>> {
    validate_directory(dir, "year partitions")?;

    let entries = std::fs::read_dir(dir).map_err(|e| {
        VacancyStatsError::file_access_with_source(dir, "Failed to read directory", e)
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == PARTITION_EXTENSION) {
            files.push(path);
        }
    }
    let files = files.into_iter().sorted().collect_vec();

    log_partitions_found(dir, files.len());
    Ok(files)
}
