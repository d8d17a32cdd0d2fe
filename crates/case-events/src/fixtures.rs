//! Sample data fixtures for testing.
//!
//! This module provides ready-made test data for other crates to use.
//! Enable the `test-fixtures` feature to access these helpers.
//!
//! # Example
//!
//! ```ignore
//! // In your Cargo.toml:
//! // [dev-dependencies]
//! // case-events = { path = "../case-events", features = ["test-fixtures"] }
//!
//! use case_events::fixtures;
//!
//! let rows = fixtures::sample_rows();
//! let series = fixtures::series("Maharashtra");
//! ```

use crate::{CategoryRecord, Record};

/// Returns every sample row across all categories.
///
/// Contains 26 rows in three categories:
/// - Kerala: 5 records, no spikes at default thresholds
/// - Maharashtra: 16 records, 4 confirmed spikes and 1 deaths-only spike
/// - Delhi: 5 consecutive days, 4 confirmed spikes
pub fn sample_rows() -> Vec<CategoryRecord> {
    let jsonl = include_str!("../tests/fixtures/sample_records.jsonl");
    jsonl
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| {
            serde_json::from_str(l).unwrap_or_else(|e| {
                panic!("Failed to parse record line: {}\nError: {}", l, e)
            })
        })
        .collect()
}

/// Returns the date-ordered series for one category.
pub fn series(category: &str) -> Vec<Record> {
    let mut records: Vec<Record> = sample_rows()
        .into_iter()
        .filter(|row| row.category == category)
        .map(|row| row.record)
        .collect();
    records.sort_by_key(|r| r.date);
    records
}

/// Returns the distinct sample categories, sorted.
pub fn categories() -> Vec<String> {
    let mut names: Vec<String> = sample_rows().into_iter().map(|row| row.category).collect();
    names.sort();
    names.dedup();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_rows_load() {
        assert_eq!(sample_rows().len(), 26);
    }

    #[test]
    fn test_series_is_sorted() {
        let series = series("Maharashtra");
        assert_eq!(series.len(), 16);
        assert!(series.windows(2).all(|w| w[0].date <= w[1].date));
    }

    #[test]
    fn test_categories() {
        assert_eq!(categories(), vec!["Delhi", "Kerala", "Maharashtra"]);
    }
}
