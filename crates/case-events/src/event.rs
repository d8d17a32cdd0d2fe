//! Event Types
//!
//! Flagged spikes, manual milestones, and their laid-out positions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::axis::date_from_axis_day;
use crate::record::Record;

/// What caused an event to appear on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventSource {
    /// Day-over-day change in confirmed cases exceeded its threshold
    ConfirmedSpike,
    /// Day-over-day change in deaths exceeded its threshold
    DeathsSpike,
    /// Curated milestone supplied by configuration
    Manual,
}

impl EventSource {
    /// Returns true for events derived from case data.
    pub fn is_spike(&self) -> bool {
        matches!(self, EventSource::ConfirmedSpike | EventSource::DeathsSpike)
    }
}

/// A dated, labelled point of interest on the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub date: NaiveDate,
    pub label: String,
    pub source: EventSource,
}

impl Event {
    /// Creates a new Event.
    pub fn new(date: NaiveDate, label: impl Into<String>, source: EventSource) -> Self {
        Self {
            date,
            label: label.into(),
            source,
        }
    }

    /// Creates a manual milestone.
    pub fn milestone(date: NaiveDate, label: impl Into<String>) -> Self {
        Self::new(date, label, EventSource::Manual)
    }

    /// Creates a spike event for a flagged record.
    pub fn spike(record: &Record, source: EventSource) -> Self {
        Self::new(record.date, spike_label(record), source)
    }
}

/// Formats the label shown for a flagged record.
///
/// ```
/// use case_events::{spike_label, Record};
/// use chrono::NaiveDate;
///
/// let record = Record::new(NaiveDate::from_ymd_opt(2020, 4, 2).unwrap(), 2069, 53);
/// assert_eq!(spike_label(&record), "2020-04-02: 2069 confirmed, 53 deaths");
/// ```
pub fn spike_label(record: &Record) -> String {
    format!(
        "{}: {} confirmed, {} deaths",
        record.date.format("%Y-%m-%d"),
        record.confirmed,
        record.deaths
    )
}

/// An event with its assigned offset along the display axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionedEvent {
    pub event: Event,
    pub position: i64,
}

impl PositionedEvent {
    /// Creates a new PositionedEvent.
    pub fn new(event: Event, position: i64) -> Self {
        Self { event, position }
    }

    /// The calendar date the marker is drawn at on a date axis.
    ///
    /// Differs from `event.date` when the layout pushed the label forward.
    pub fn position_date(&self) -> Option<NaiveDate> {
        date_from_axis_day(self.position)
    }

    /// Returns the (position, label) pair a renderer draws.
    pub fn marker(&self) -> (i64, &str) {
        (self.position, &self.event.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::axis_day;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_event_source_serialization() {
        assert_eq!(
            serde_json::to_string(&EventSource::ConfirmedSpike).unwrap(),
            r#""confirmed_spike""#
        );
        assert_eq!(
            serde_json::to_string(&EventSource::DeathsSpike).unwrap(),
            r#""deaths_spike""#
        );
        assert_eq!(serde_json::to_string(&EventSource::Manual).unwrap(), r#""manual""#);
    }

    #[test]
    fn test_is_spike() {
        assert!(EventSource::ConfirmedSpike.is_spike());
        assert!(EventSource::DeathsSpike.is_spike());
        assert!(!EventSource::Manual.is_spike());
    }

    #[test]
    fn test_spike_event_label() {
        let record = Record::new(date(2020, 5, 10), 62939, 2109);
        let event = Event::spike(&record, EventSource::ConfirmedSpike);

        assert_eq!(event.date, record.date);
        assert!(event.label.contains("2020-05-10"));
        assert!(event.label.contains("62939"));
        assert!(event.label.contains("2109"));
    }

    #[test]
    fn test_event_deserialization() {
        let json = r#"{"date":"2020-03-24","label":"National Lockdown Starts","source":"manual"}"#;
        let event: Event = serde_json::from_str(json).unwrap();

        assert_eq!(event, Event::milestone(date(2020, 3, 24), "National Lockdown Starts"));
    }

    #[test]
    fn test_position_date_follows_push() {
        let event = Event::milestone(date(2020, 1, 2), "pushed");
        let positioned = PositionedEvent::new(event, axis_day(date(2020, 1, 6)));

        assert_eq!(positioned.position_date(), Some(date(2020, 1, 6)));
        assert_eq!(positioned.marker().1, "pushed");
    }
}
