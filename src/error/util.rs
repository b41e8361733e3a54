//! Utility functions for error handling
//!
//! This module provides utility functions to make file access errors more descriptive.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Result, VacancyStatsError};

/// Safely open a file with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
///
/// # Returns
/// * `Result<fs::File>` - The opened file or a detailed error
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.exists() {
        return Err(VacancyStatsError::file_access(
            path,
            format!("File not found, needed for: {purpose}"),
        ));
    }

    if !path.is_file() {
        return Err(VacancyStatsError::file_access(
            path,
            format!("Path is not a file, expected a file for: {purpose}"),
        ));
    }

    fs::File::open(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => "Permission denied - check file permissions".to_string(),
            io::ErrorKind::NotFound => {
                "File not found - it may have been deleted during operation".to_string()
            }
            _ => format!("Failed to open file for: {purpose}"),
        };
        VacancyStatsError::file_access_with_source(path, context, e)
    })
}

/// Check if a directory exists and is readable, with rich error information
pub fn validate_directory(path: &Path, purpose: &str) -> Result<()> {
    if !path.exists() {
        return Err(VacancyStatsError::file_access(
            path,
            format!("Directory not found, needed for: {purpose}"),
        ));
    }

    if !path.is_dir() {
        return Err(VacancyStatsError::file_access(
            path,
            format!("Path is not a directory, expected a directory for: {purpose}"),
        ));
    }

    match fs::read_dir(path) {
        Ok(_) => Ok(()),
        Err(e) => {
            let context = match e.kind() {
                io::ErrorKind::PermissionDenied => {
                    "Permission denied - check directory permissions".to_string()
                }
                _ => format!("Failed to access directory for: {purpose}"),
            };
            Err(VacancyStatsError::file_access_with_source(path, context, e))
        }
    }
}
