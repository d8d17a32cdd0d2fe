//! Record Types
//!
//! One row of case counts, with and without its category.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Cumulative case counts for one category on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    pub date: NaiveDate,
    pub confirmed: u64,
    pub deaths: u64,
}

impl Record {
    /// Creates a new Record.
    pub fn new(date: NaiveDate, confirmed: u64, deaths: u64) -> Self {
        Self {
            date,
            confirmed,
            deaths,
        }
    }

    /// Absolute change in confirmed cases relative to `previous`.
    pub fn confirmed_change(&self, previous: &Record) -> u64 {
        self.confirmed.abs_diff(previous.confirmed)
    }

    /// Absolute change in deaths relative to `previous`.
    pub fn deaths_change(&self, previous: &Record) -> u64 {
        self.deaths.abs_diff(previous.deaths)
    }
}

/// A record tagged with the category (region) it belongs to.
///
/// This is the shape of a row straight out of a tabular source, before it is
/// filtered down to a single category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub category: String,
    #[serde(flatten)]
    pub record: Record,
}

impl CategoryRecord {
    /// Creates a new CategoryRecord.
    pub fn new(category: impl Into<String>, record: Record) -> Self {
        Self {
            category: category.into(),
            record,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_changes_are_absolute() {
        let earlier = Record::new(date(2020, 5, 1), 1500, 40);
        let later = Record::new(date(2020, 5, 2), 1200, 55);

        // Downward corrections count the same as increases
        assert_eq!(later.confirmed_change(&earlier), 300);
        assert_eq!(earlier.confirmed_change(&later), 300);
        assert_eq!(later.deaths_change(&earlier), 15);
    }

    #[test]
    fn test_record_serialization() {
        let record = Record::new(date(2020, 3, 24), 519, 10);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"date":"2020-03-24","confirmed":519,"deaths":10}"#);
    }

    #[test]
    fn test_category_record_flattens() {
        let row = CategoryRecord::new("Kerala", Record::new(date(2020, 1, 30), 1, 0));
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(
            json,
            r#"{"category":"Kerala","date":"2020-01-30","confirmed":1,"deaths":0}"#
        );

        let parsed: CategoryRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, row);
    }
}
