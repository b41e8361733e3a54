//! IO utilities for file operations

pub mod partitions;

pub use partitions::find_partition_files;
