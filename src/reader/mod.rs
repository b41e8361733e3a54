//! Module for reading vacancy files into normalized rows and typed vacancies.
//!
//! The first row of the input is the header. A data row is discarded when it
//! has an empty field or a field count different from the header's. Every
//! retained field has HTML-like tags removed and its whitespace collapsed.

use std::io::Read;
use std::path::Path;
use std::time::Instant;

use csv::ReaderBuilder;
use itertools::Itertools;
use regex::Regex;
use rustc_hash::FxHashMap;

use crate::config::StatisticsConfig;
use crate::error::util::safe_open_file;
use crate::error::{Result, VacancyStatsError};
use crate::models::Vacancy;
use crate::models::vacancy::parse_year;
use crate::utils::logging::{log_read_complete, log_read_start};

/// Column name to cleaned value mapping for a single row
pub type FieldMap = FxHashMap<String, String>;

const HTML_TAG_PATTERN: &str = "<.*?>";
const UTF8_BOM: char = '\u{feff}';

/// Rows that survived row-shape validation
#[derive(Debug, Clone, Default)]
pub struct NormalizedRows {
    /// Header fields in file order
    pub header: Vec<String>,
    /// Retained rows
    pub rows: Vec<FieldMap>,
    /// Number of data rows that were discarded
    pub discarded: usize,
}

impl NormalizedRows {
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Reads comma-delimited vacancy data
#[derive(Debug, Clone)]
pub struct VacancyReader {
    config: StatisticsConfig,
    html_tags: Regex,
}

impl VacancyReader {
    /// Create a reader using the given configuration
    ///
    /// # Errors
    /// Returns a `Pattern` error if the tag pattern cannot be compiled
    pub fn new(config: StatisticsConfig) -> Result<Self> {
        Ok(Self {
            config,
            html_tags: Regex::new(HTML_TAG_PATTERN)?,
        })
    }

    #[must_use]
    pub fn config(&self) -> &StatisticsConfig {
        &self.config
    }

    /// Remove tags, trim and collapse internal whitespace runs
    #[must_use]
    pub fn clean_field(&self, value: &str) -> String {
        self.html_tags.replace_all(value, "").split_whitespace().join(" ")
    }

    /// Read and normalize rows from a text stream
    ///
    /// # Arguments
    /// * `input` - Comma-delimited UTF-8 data, optionally starting with a BOM
    /// * `source` - Name of the input used in errors and logs
    ///
    /// # Returns
    /// The header and the retained rows
    ///
    /// # Errors
    /// Returns `EmptyInput` without a header row, `NoData` when every data row
    /// is discarded, and `Csv` if the stream cannot be decoded
    pub fn read_rows<R: Read>(&self, input: R, source: &str) -> Result<NormalizedRows> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(input);
        let mut records = reader.records();

        let header: Vec<String> = match records.next() {
            Some(record) => record?
                .iter()
                .enumerate()
                .map(|(i, title)| {
                    if i == 0 {
                        title.trim_start_matches(UTF8_BOM).to_string()
                    } else {
                        title.to_string()
                    }
                })
                .collect(),
            None => return Err(VacancyStatsError::EmptyInput(source.to_string())),
        };

        let mut rows = Vec::new();
        let mut discarded = 0;
        for record in records {
            let record = record?;
            if record.len() != header.len() || record.iter().any(str::is_empty) {
                discarded += 1;
                continue;
            }
            let fields = header
                .iter()
                .zip(record.iter())
                .map(|(title, value)| (title.clone(), self.clean_field(value)))
                .collect::<FieldMap>();
            rows.push(fields);
        }

        if rows.is_empty() {
            return Err(VacancyStatsError::NoData(source.to_string()));
        }
        log::debug!("Kept {} rows of {source}, discarded {discarded}", rows.len());

        Ok(NormalizedRows {
            header,
            rows,
            discarded,
        })
    }

    /// Read and normalize rows from a file
    pub fn read_rows_from_path(&self, path: &Path) -> Result<NormalizedRows> {
        let file = safe_open_file(path, "reading vacancies")?;
        self.read_rows(file, &path.display().to_string())
    }

    /// Convert normalized rows into vacancies
    ///
    /// Rows with a bad salary or publication date are skipped with a warning.
    /// Rows with an unknown currency are skipped too, unless
    /// `fail_on_unknown_currency` is set and the row is published within the
    /// configured year range.
    ///
    /// # Errors
    /// Returns `MissingColumn` if the header lacks a required column, and
    /// `UnknownCurrency` in strict currency mode
    pub fn to_vacancies(&self, rows: &NormalizedRows) -> Result<Vec<Vacancy>> {
        let columns = &self.config.columns;
        if let Some(missing) = columns
            .required()
            .into_iter()
            .find(|column| !rows.header.iter().any(|title| title.as_str() == *column))
        {
            return Err(VacancyStatsError::MissingColumn(missing.to_string()));
        }

        let table = self.config.currency_table.as_ref();
        let mut vacancies = Vec::with_capacity(rows.len());
        let mut skipped = 0usize;
        for fields in &rows.rows {
            match Vacancy::from_fields(fields, columns, table) {
                Ok(vacancy) => vacancies.push(vacancy),
                Err(e @ VacancyStatsError::UnknownCurrency(_))
                    if self.config.fail_on_unknown_currency && self.in_year_range(fields) =>
                {
                    return Err(e);
                }
                Err(e) if !e.is_fatal() => {
                    log::debug!("Skipping vacancy: {e}");
                    skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        if skipped > 0 {
            log::warn!("Skipped {skipped} vacancies with invalid salary, currency or date");
        }
        Ok(vacancies)
    }

    fn in_year_range(&self, fields: &FieldMap) -> bool {
        fields
            .get(&self.config.columns.published_at)
            .and_then(|published_at| parse_year(published_at).ok())
            .is_some_and(|year| self.config.year_range.contains(year))
    }

    /// Read a file straight into vacancies
    pub fn read_vacancies(&self, path: &Path) -> Result<Vec<Vacancy>> {
        let start = Instant::now();
        log_read_start(path);
        let rows = self.read_rows_from_path(path)?;
        let vacancies = self.to_vacancies(&rows)?;
        log_read_complete(path, vacancies.len(), rows.discarded, start.elapsed());
        Ok(vacancies)
    }
}
