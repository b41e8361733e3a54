//! Log lines shared by ingestion and partition discovery

use std::path::Path;
use std::time::Duration;

/// Log the start of reading a source or partition file
pub fn log_read_start(path: &Path) {
    log::info!("Reading vacancies from {}", path.display());
}

/// Log a finished read
///
/// # Arguments
/// * `path` - File that was read
/// * `vacancies` - Number of vacancies built from the file
/// * `discarded` - Number of rows dropped as malformed
/// * `elapsed` - Time spent reading and normalizing
pub fn log_read_complete(path: &Path, vacancies: usize, discarded: usize, elapsed: Duration) {
    if discarded > 0 {
        log::info!(
            "Read {vacancies} vacancies from {} in {elapsed:?} ({discarded} malformed rows discarded)",
            path.display()
        );
    } else {
        log::info!("Read {vacancies} vacancies from {} in {elapsed:?}", path.display());
    }
}

/// Log the outcome of a partition directory scan
pub fn log_partitions_found(dir: &Path, count: usize) {
    if count == 0 {
        log::warn!("No partition files found in {}", dir.display());
    } else {
        log::info!("Found {count} partition files in {}", dir.display());
    }
}
