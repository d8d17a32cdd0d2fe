//! Timeline Axis
//!
//! Converts calendar dates to the scalar the timeline is laid out on.
//!
//! # Example
//!
//! ```
//! use case_events::{axis_day, date_from_axis_day};
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(1970, 1, 11).unwrap();
//! assert_eq!(axis_day(date), 10);
//! assert_eq!(date_from_axis_day(10), Some(date));
//! ```

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Day number of 1970-01-01 counted from 0001-01-01 (day 1).
pub const EPOCH_DAYS_FROM_CE: i64 = 719_163;

/// Returns the axis position of a date: days since 1970-01-01.
pub fn axis_day(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) - EPOCH_DAYS_FROM_CE
}

/// Maps an axis position back to a calendar date.
///
/// Returns `None` when the position falls outside the representable range.
pub fn date_from_axis_day(day: i64) -> Option<NaiveDate> {
    let from_ce = i32::try_from(day + EPOCH_DAYS_FROM_CE).ok()?;
    NaiveDate::from_num_days_from_ce_opt(from_ce)
}

/// Which screen axis the timeline runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Time runs left to right
    #[default]
    Horizontal,
    /// Time runs top to bottom
    Vertical,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "horizontal"),
            Orientation::Vertical => write!(f, "vertical"),
        }
    }
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "horizontal" => Ok(Orientation::Horizontal),
            "vertical" => Ok(Orientation::Vertical),
            _ => Err(format!("invalid orientation: '{}'", s)),
        }
    }
}
