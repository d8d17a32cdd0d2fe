//! Timeline label placement.
//!
//! Assigns every event a position on the display axis so adjacent labels keep
//! a minimum distance apart.

use case_events::{axis_day, Event, PositionedEvent};
use serde::{Deserialize, Serialize};

/// How positions are assigned along the axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    /// Positions are axis days, pushed forward to keep the minimum spacing
    #[default]
    DateAxis,
    /// Positions are ranks, earliest event at the top (`n - 1` down to `0`)
    Stacked,
}

/// Lays out events according to a mode and spacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineLayout {
    mode: LayoutMode,
    min_spacing_days: u32,
}

impl Default for TimelineLayout {
    fn default() -> Self {
        Self::new(LayoutMode::DateAxis, 10)
    }
}

impl TimelineLayout {
    /// Creates a new layout.
    pub fn new(mode: LayoutMode, min_spacing_days: u32) -> Self {
        Self {
            mode,
            min_spacing_days,
        }
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn min_spacing_days(&self) -> u32 {
        self.min_spacing_days
    }

    /// Positions `events`, which must already be sorted by date.
    pub fn apply(&self, events: &[Event]) -> Vec<PositionedEvent> {
        match self.mode {
            LayoutMode::DateAxis => layout(events, self.min_spacing_days),
            LayoutMode::Stacked => layout_stacked(events),
        }
    }
}

/// Places events on the date axis with greedy forward pushes.
///
/// Each event starts at its own date. When it would land closer than
/// `min_spacing_days` to the previously placed event, it is moved to exactly
/// `min_spacing_days` after it. Positions only ever move forward, so a dense
/// cluster drifts later than its true dates.
///
/// `events` must be sorted ascending by date.
pub fn layout(events: &[Event], min_spacing_days: u32) -> Vec<PositionedEvent> {
    let spacing = i64::from(min_spacing_days);
    let mut previous: Option<i64> = None;

    events
        .iter()
        .map(|event| {
            let natural = axis_day(event.date);
            let position = match previous {
                Some(prev) if natural - prev < spacing => {
                    tracing::debug!(
                        date = %event.date,
                        pushed_by = prev + spacing - natural,
                        "pushed label to keep spacing"
                    );
                    prev + spacing
                }
                _ => natural,
            };
            previous = Some(position);
            PositionedEvent::new(event.clone(), position)
        })
        .collect()
}

/// Places events as a top-to-bottom list.
///
/// Event `i` of `n` gets position `n - i - 1`, so the first event is drawn
/// highest on a vertical axis. Dates only decide the order.
pub fn layout_stacked(events: &[Event]) -> Vec<PositionedEvent> {
    let n = events.len() as i64;
    events
        .iter()
        .enumerate()
        .map(|(i, event)| PositionedEvent::new(event.clone(), n - i as i64 - 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn jan(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 1, d).unwrap()
    }

    fn events_on(dates: &[NaiveDate]) -> Vec<Event> {
        dates
            .iter()
            .enumerate()
            .map(|(i, &d)| Event::milestone(d, format!("event {}", i)))
            .collect()
    }

    fn positions(placed: &[PositionedEvent]) -> Vec<i64> {
        placed.iter().map(|p| p.position).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(layout(&[], 5).is_empty());
        assert!(layout_stacked(&[]).is_empty());
    }

    #[test]
    fn test_cascading_push() {
        let events = events_on(&[jan(1), jan(2), jan(10)]);
        let placed = layout(&events, 5);

        let dates: Vec<NaiveDate> = placed.iter().filter_map(|p| p.position_date()).collect();
        assert_eq!(dates, vec![jan(1), jan(6), jan(11)]);
    }

    #[test]
    fn test_spaced_events_stay_put() {
        let events = events_on(&[jan(1), jan(6), jan(20)]);
        let placed = layout(&events, 5);

        let expected: Vec<i64> = events.iter().map(|e| axis_day(e.date)).collect();
        assert_eq!(positions(&placed), expected);
    }

    #[test]
    fn test_gap_equal_to_spacing_is_not_pushed() {
        let events = events_on(&[jan(1), jan(11)]);
        let placed = layout(&events, 10);

        assert_eq!(placed[1].position_date(), Some(jan(11)));
    }

    #[test]
    fn test_same_day_events_are_separated() {
        let events = events_on(&[jan(3), jan(3), jan(3)]);
        let placed = layout(&events, 2);

        assert_eq!(
            placed.iter().filter_map(|p| p.position_date()).collect::<Vec<_>>(),
            vec![jan(3), jan(5), jan(7)]
        );
    }

    #[test]
    fn test_zero_spacing_keeps_natural_positions() {
        let events = events_on(&[jan(1), jan(1), jan(2)]);
        let placed = layout(&events, 0);

        let expected: Vec<i64> = events.iter().map(|e| axis_day(e.date)).collect();
        assert_eq!(positions(&placed), expected);
    }

    #[test]
    fn test_preserves_events_and_order() {
        let events = events_on(&[jan(1), jan(2), jan(3), jan(30)]);
        let placed = layout(&events, 7);

        assert_eq!(placed.len(), events.len());
        for (p, e) in placed.iter().zip(&events) {
            assert_eq!(&p.event, e);
            assert!(p.position >= axis_day(e.date), "positions never move backward");
        }
    }

    #[test]
    fn test_relayout_is_idempotent() {
        let events = events_on(&[jan(1), jan(2), jan(4), jan(10), jan(11)]);
        let first = layout(&events, 5);

        let moved: Vec<Event> = first
            .iter()
            .map(|p| Event::milestone(p.position_date().unwrap(), p.event.label.clone()))
            .collect();
        let second = layout(&moved, 5);

        assert_eq!(positions(&first), positions(&second));
    }

    #[test]
    fn test_stacked_positions_count_down() {
        let events = events_on(&[jan(1), jan(15), jan(20), jan(31)]);
        let placed = layout_stacked(&events);

        assert_eq!(positions(&placed), vec![3, 2, 1, 0]);
        assert_eq!(placed[0].event.label, "event 0");
    }

    #[test]
    fn test_timeline_layout_dispatches_on_mode() {
        let events = events_on(&[jan(1), jan(2)]);

        let date_axis = TimelineLayout::new(LayoutMode::DateAxis, 5).apply(&events);
        assert_eq!(date_axis[1].position - date_axis[0].position, 5);

        let stacked = TimelineLayout::new(LayoutMode::Stacked, 5).apply(&events);
        assert_eq!(positions(&stacked), vec![1, 0]);
    }

    #[test]
    fn test_layout_mode_serialization() {
        assert_eq!(serde_json::to_string(&LayoutMode::DateAxis).unwrap(), r#""date_axis""#);
        assert_eq!(serde_json::to_string(&LayoutMode::Stacked).unwrap(), r#""stacked""#);
    }
}
