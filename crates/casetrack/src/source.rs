//! CSV record source.
//!
//! Reads category-tagged case counts from a CSV with a header row. Column
//! names and accepted date formats come from [`SourceConfig`].

use std::fs::File;
use std::io::Read;
use std::path::Path;

use case_events::{CategoryRecord, InvalidInput, Record};
use chrono::NaiveDate;
use csv::StringRecord;
use timeline::SourceConfig;

use crate::error::CliError;

/// Header positions of the columns the timeline needs.
#[derive(Debug, Clone, Copy)]
struct Columns {
    date: usize,
    category: usize,
    confirmed: usize,
    deaths: usize,
}

/// Reads [`CategoryRecord`]s from CSV.
#[derive(Debug, Clone)]
pub struct RecordSource {
    config: SourceConfig,
}

impl RecordSource {
    /// Creates a source using the given column configuration.
    pub fn new(config: SourceConfig) -> Self {
        Self { config }
    }

    /// Reads every row of the CSV file at `path`.
    pub fn read_path(&self, path: &Path) -> Result<Vec<CategoryRecord>, CliError> {
        let file = File::open(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let rows = self.read(file)?;
        if rows.is_empty() {
            tracing::warn!(path = %path.display(), "no data rows in input");
        } else {
            tracing::info!(path = %path.display(), rows = rows.len(), "loaded records");
        }
        Ok(rows)
    }

    /// Reads every row from `reader`.
    ///
    /// Fails on the first row that does not fit the record schema.
    pub fn read<R: Read>(&self, reader: R) -> Result<Vec<CategoryRecord>, InvalidInput> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers().map_err(|e| InvalidInput::MalformedRow {
            row: 0,
            reason: e.to_string(),
        })?;
        let columns = self.locate_columns(headers)?;

        rdr.records()
            .enumerate()
            .map(|(i, result)| {
                let row = i + 1;
                let record = result.map_err(|e| InvalidInput::MalformedRow {
                    row,
                    reason: e.to_string(),
                })?;
                self.parse_row(row, &record, columns)
            })
            .collect()
    }

    fn locate_columns(&self, headers: &StringRecord) -> Result<Columns, InvalidInput> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| InvalidInput::MissingColumn(name.to_string()))
        };

        Ok(Columns {
            date: find(&self.config.date_column)?,
            category: find(&self.config.category_column)?,
            confirmed: find(&self.config.confirmed_column)?,
            deaths: find(&self.config.deaths_column)?,
        })
    }

    fn parse_row(
        &self,
        row: usize,
        record: &StringRecord,
        columns: Columns,
    ) -> Result<CategoryRecord, InvalidInput> {
        let field = |index: usize| {
            record.get(index).ok_or_else(|| InvalidInput::MalformedRow {
                row,
                reason: format!("missing field {}", index),
            })
        };

        let date = self.parse_date(row, field(columns.date)?)?;
        let confirmed = parse_count(row, &self.config.confirmed_column, field(columns.confirmed)?)?;
        let deaths = parse_count(row, &self.config.deaths_column, field(columns.deaths)?)?;

        Ok(CategoryRecord::new(
            field(columns.category)?,
            Record::new(date, confirmed, deaths),
        ))
    }

    fn parse_date(&self, row: usize, value: &str) -> Result<NaiveDate, InvalidInput> {
        self.config
            .date_formats
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
            .ok_or_else(|| InvalidInput::UnparseableDate {
                row,
                value: value.to_string(),
            })
    }
}

impl Default for RecordSource {
    fn default() -> Self {
        Self::new(SourceConfig::default())
    }
}

fn parse_count(row: usize, field: &str, value: &str) -> Result<u64, InvalidInput> {
    value
        .parse::<u64>()
        .map_err(|_| InvalidInput::NonNumericCount {
            row,
            field: field.to_string(),
            value: value.to_string(),
        })
}

/// Returns the distinct category names, sorted.
pub fn categories(rows: &[CategoryRecord]) -> Vec<String> {
    let mut names: Vec<String> = rows.iter().map(|r| r.category.clone()).collect();
    names.sort();
    names.dedup();
    names
}

/// Returns the records of one category, stable-sorted by date.
pub fn select(rows: &[CategoryRecord], category: &str) -> Vec<Record> {
    let mut records: Vec<Record> = rows
        .iter()
        .filter(|r| r.category == category)
        .map(|r| r.record)
        .collect();
    records.sort_by_key(|r| r.date);
    records
}
