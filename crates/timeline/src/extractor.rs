//! Spike detection over a case-count series.
//!
//! Flags records whose day-over-day change in confirmed cases or deaths is
//! larger than a fixed threshold.

use case_events::{Event, EventSource, Record};
use serde::{Deserialize, Serialize};

/// Thresholds for the spike rule. A change must be strictly greater to flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpikeThresholds {
    /// Day-over-day change in confirmed cases
    pub confirmed: u64,
    /// Day-over-day change in deaths
    pub deaths: u64,
}

impl Default for SpikeThresholds {
    fn default() -> Self {
        Self {
            confirmed: 1000,
            deaths: 100,
        }
    }
}

impl SpikeThresholds {
    /// Creates thresholds with explicit values.
    pub fn new(confirmed: u64, deaths: u64) -> Self {
        Self { confirmed, deaths }
    }

    /// Classifies `current` against its predecessor.
    ///
    /// Returns the source to attribute the event to, or `None` when neither
    /// change exceeds its threshold. Confirmed takes precedence when both fire.
    pub fn classify(&self, previous: &Record, current: &Record) -> Option<EventSource> {
        if current.confirmed_change(previous) > self.confirmed {
            Some(EventSource::ConfirmedSpike)
        } else if current.deaths_change(previous) > self.deaths {
            Some(EventSource::DeathsSpike)
        } else {
            None
        }
    }
}

/// Extracts spike events from a date-ordered series.
#[derive(Debug, Clone, Default)]
pub struct EventExtractor {
    thresholds: SpikeThresholds,
}

impl EventExtractor {
    /// Creates a new extractor with the given thresholds.
    pub fn new(thresholds: SpikeThresholds) -> Self {
        Self { thresholds }
    }

    /// Returns the thresholds in use.
    pub fn thresholds(&self) -> SpikeThresholds {
        self.thresholds
    }

    /// Flags every record whose change from the preceding record exceeds a threshold.
    ///
    /// Records are compared in the order given; the caller is responsible for
    /// sorting by date. The first record has no predecessor and is never flagged.
    pub fn extract(&self, records: &[Record]) -> Vec<Event> {
        records
            .windows(2)
            .filter_map(|pair| {
                let (previous, current) = (&pair[0], &pair[1]);
                let source = self.thresholds.classify(previous, current)?;
                tracing::debug!(
                    date = %current.date,
                    confirmed_change = current.confirmed_change(previous),
                    deaths_change = current.deaths_change(previous),
                    ?source,
                    "flagged spike"
                );
                Some(Event::spike(current, source))
            })
            .collect()
    }
}

/// Flags spikes using explicit thresholds.
///
/// Shorthand for `EventExtractor::new(SpikeThresholds::new(..)).extract(records)`.
pub fn extract(records: &[Record], confirmed_threshold: u64, deaths_threshold: u64) -> Vec<Event> {
    EventExtractor::new(SpikeThresholds::new(confirmed_threshold, deaths_threshold))
        .extract(records)
}
