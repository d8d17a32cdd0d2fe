//! Curated milestone events.

use case_events::Event;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A milestone entry as written in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub date: NaiveDate,
    pub label: String,
}

impl Milestone {
    pub fn new(date: NaiveDate, label: impl Into<String>) -> Self {
        Self {
            date,
            label: label.into(),
        }
    }

    /// Converts the entry into a manual timeline event.
    pub fn to_event(&self) -> Event {
        Event::milestone(self.date, self.label.clone())
    }
}

/// The built-in milestone list for the India dataset.
pub fn default_milestones() -> Vec<Milestone> {
    [
        ((2020, 1, 30), "First COVID-19 Case in India"),
        ((2020, 3, 24), "National Lockdown Starts"),
        ((2021, 1, 16), "Vaccination Begins"),
        ((2022, 4, 1), "Relaxation of Restrictions"),
    ]
    .into_iter()
    .filter_map(|((y, m, d), label)| {
        NaiveDate::from_ymd_opt(y, m, d).map(|date| Milestone::new(date, label))
    })
    .collect()
}

/// Converts milestone entries into manual events, in entry order.
pub fn milestone_events(milestones: &[Milestone]) -> Vec<Event> {
    milestones.iter().map(Milestone::to_event).collect()
}
