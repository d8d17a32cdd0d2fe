//! Key-event detection and timeline layout.
//!
//! The timeline sits between a record source and a rendering surface. It
//! flags case-count spikes, merges them with curated milestones, and places
//! every label on a display axis without overlap.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────┐  records   ┌───────────┐  events   ┌────────┐  markers
//! │  source  │ ─────────▶ │ extractor │ ────────▶ │ layout │ ─────────▶
//! └──────────┘            └───────────┘           └────────┘
//! ```
//!
//! # Modules
//!
//! - [`extractor`]: Spike rule over a date-ordered series
//! - [`layout`]: Greedy forward-push and stacked label placement
//! - [`milestones`]: Curated manual events
//! - [`config`]: TOML configuration
//! - [`output`]: The document handed to renderers

pub mod config;
pub mod extractor;
pub mod layout;
pub mod milestones;
pub mod output;

// Re-export extractor types
pub use extractor::{extract, EventExtractor, SpikeThresholds};

// Re-export layout types
pub use layout::{layout, layout_stacked, LayoutMode, TimelineLayout};

// Re-export milestone types
pub use milestones::{default_milestones, milestone_events, Milestone};

// Re-export config types
pub use config::{
    default_config_toml, ConfigError, GeneralConfig, LayoutConfig, SourceConfig, TimelineConfig,
    TomlSerializeError,
};

// Re-export output types
pub use output::{write_json, OutputError, OutputReader, OutputWriter, TimelineOutput};

use std::path::Path;

use case_events::{Event, Record};

/// Errors that can occur in timeline operations.
#[derive(Debug)]
pub enum TimelineError {
    /// Error loading configuration
    Config(ConfigError),
    /// Error writing or reading output
    Output(OutputError),
}

impl std::fmt::Display for TimelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimelineError::Config(e) => write!(f, "Config error: {}", e),
            TimelineError::Output(e) => write!(f, "Output error: {}", e),
        }
    }
}

impl std::error::Error for TimelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TimelineError::Config(e) => Some(e),
            TimelineError::Output(e) => Some(e),
        }
    }
}

impl From<ConfigError> for TimelineError {
    fn from(e: ConfigError) -> Self {
        TimelineError::Config(e)
    }
}

impl From<OutputError> for TimelineError {
    fn from(e: OutputError) -> Self {
        TimelineError::Output(e)
    }
}

/// Builds positioned timelines from case series.
///
/// Holds no state between calls: every [`Timeline::build`] works only on its
/// arguments and the configuration, so one instance can serve many threads.
#[derive(Debug, Clone)]
pub struct Timeline {
    config: TimelineConfig,
    extractor: EventExtractor,
    layout: TimelineLayout,
    milestones: Vec<Event>,
}

impl Timeline {
    /// Creates a new Timeline with the given configuration.
    pub fn new(config: TimelineConfig) -> Self {
        let extractor = EventExtractor::new(config.thresholds);
        let layout = config.layout.to_layout();
        let milestones = milestone_events(&config.milestones);

        Self {
            config,
            extractor,
            layout,
            milestones,
        }
    }

    /// Creates a Timeline from a configuration file.
    pub fn from_config_file(path: &Path) -> Result<Self, TimelineError> {
        let config = TimelineConfig::from_file(path)?;
        Ok(Self::new(config))
    }

    /// Creates a Timeline with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(TimelineConfig::default())
    }

    /// Returns the configuration.
    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    /// Collects the events for a series, sorted by date.
    ///
    /// Spike events come from `records` in their given order; milestones are
    /// appended and the combined list is stable-sorted, so on a shared date a
    /// spike precedes a milestone.
    pub fn collect_events(&self, records: &[Record]) -> Vec<Event> {
        let mut events = Vec::new();

        if self.config.general.include_spikes {
            events.extend(self.extractor.extract(records));
        }
        if self.config.general.include_milestones {
            events.extend(self.milestones.iter().cloned());
        }

        events.sort_by_key(|e| e.date);
        events
    }

    /// Builds the full timeline document for one category.
    ///
    /// `records` must be the category's series sorted by date.
    pub fn build(&self, category: &str, records: &[Record]) -> TimelineOutput {
        let events = self.collect_events(records);
        let positioned = self.layout.apply(&events);

        tracing::info!(
            category,
            records = records.len(),
            events = positioned.len(),
            "built timeline"
        );

        TimelineOutput {
            category: category.to_string(),
            orientation: self.config.layout.orientation,
            layout_mode: self.layout.mode(),
            min_spacing_days: self.layout.min_spacing_days(),
            log_scale: self.config.layout.log_scale,
            series: records.to_vec(),
            events: positioned,
        }
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::with_defaults()
    }
}
