//! Configuration loading for the timeline.
//!
//! All timeline settings are loaded from a TOML configuration file.

use case_events::Orientation;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::extractor::SpikeThresholds;
use crate::layout::{LayoutMode, TimelineLayout};
use crate::milestones::{default_milestones, Milestone};

/// Complete timeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineConfig {
    /// Spike rule thresholds
    #[serde(default)]
    pub thresholds: SpikeThresholds,
    /// Label placement settings
    #[serde(default)]
    pub layout: LayoutConfig,
    /// Column names and date formats of the record source
    #[serde(default)]
    pub source: SourceConfig,
    /// Which event kinds end up on the timeline
    #[serde(default)]
    pub general: GeneralConfig,
    /// Curated milestones
    #[serde(default = "default_milestones")]
    pub milestones: Vec<Milestone>,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            thresholds: SpikeThresholds::default(),
            layout: LayoutConfig::default(),
            source: SourceConfig::default(),
            general: GeneralConfig::default(),
            milestones: default_milestones(),
        }
    }
}

impl TimelineConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::IoError)?;
        Self::from_str(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::TomlError)
    }

    /// Serializes the configuration as a TOML string.
    pub fn to_toml(&self) -> Result<String, TomlSerializeError> {
        toml::to_string_pretty(self).map_err(TomlSerializeError)
    }
}

/// Label placement configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Minimum distance between adjacent labels, in days
    pub min_spacing_days: u32,
    /// Date axis or stacked list
    pub mode: LayoutMode,
    /// Axis the timeline runs along
    pub orientation: Orientation,
    /// Hint for the renderer to plot case counts on a log scale
    pub log_scale: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_spacing_days: 10,
            mode: LayoutMode::DateAxis,
            orientation: Orientation::Horizontal,
            log_scale: false,
        }
    }
}

impl LayoutConfig {
    /// Builds the layout this section describes.
    pub fn to_layout(&self) -> TimelineLayout {
        TimelineLayout::new(self.mode, self.min_spacing_days)
    }
}

/// Record source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Column holding the row date
    pub date_column: String,
    /// Column holding the category (region) name
    pub category_column: String,
    /// Column holding cumulative confirmed cases
    pub confirmed_column: String,
    /// Column holding cumulative deaths
    pub deaths_column: String,
    /// `chrono` format strings tried in order
    pub date_formats: Vec<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            date_column: "Date".to_string(),
            category_column: "State/UnionTerritory".to_string(),
            confirmed_column: "Confirmed".to_string(),
            deaths_column: "Deaths".to_string(),
            date_formats: vec![
                "%Y-%m-%d".to_string(),
                "%d/%m/%y".to_string(),
                "%d/%m/%Y".to_string(),
            ],
        }
    }
}

/// General timeline settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Include spikes detected from case data
    pub include_spikes: bool,
    /// Include curated milestones
    pub include_milestones: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            include_spikes: true,
            include_milestones: true,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading config file
    IoError(std::io::Error),
    /// Error parsing TOML config
    TomlError(toml::de::Error),
}

/// Error that can occur during TOML serialization.
#[derive(Debug)]
pub struct TomlSerializeError(pub toml::ser::Error);

impl std::fmt::Display for TomlSerializeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TOML serialize error: {}", self.0)
    }
}

impl std::error::Error for TomlSerializeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::TomlError(e) => write!(f, "TOML parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError(e) => Some(e),
            ConfigError::TomlError(e) => Some(e),
        }
    }
}

/// Generates a default configuration file content.
pub fn default_config_toml() -> String {
    r#"# Timeline Configuration

[thresholds]
# A record is flagged when its day-over-day change is strictly greater
confirmed = 1000
deaths = 100

[layout]
min_spacing_days = 10
mode = "date_axis"          # or "stacked"
orientation = "horizontal"  # or "vertical"
log_scale = false

[source]
date_column = "Date"
category_column = "State/UnionTerritory"
confirmed_column = "Confirmed"
deaths_column = "Deaths"
date_formats = ["%Y-%m-%d", "%d/%m/%y", "%d/%m/%Y"]

[general]
include_spikes = true
include_milestones = true

[[milestones]]
date = "2020-01-30"
label = "First COVID-19 Case in India"

[[milestones]]
date = "2020-03-24"
label = "National Lockdown Starts"

[[milestones]]
date = "2021-01-16"
label = "Vaccination Begins"

[[milestones]]
date = "2022-04-01"
label = "Relaxation of Restrictions"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TimelineConfig::default();

        assert_eq!(config.thresholds.confirmed, 1000);
        assert_eq!(config.thresholds.deaths, 100);
        assert_eq!(config.layout.min_spacing_days, 10);
        assert_eq!(config.layout.mode, LayoutMode::DateAxis);
        assert!(config.general.include_spikes);
        assert_eq!(config.milestones.len(), 4);
    }

    #[test]
    fn test_source_config_default() {
        let source = SourceConfig::default();

        assert_eq!(source.category_column, "State/UnionTerritory");
        assert_eq!(source.date_formats[0], "%Y-%m-%d");
    }

    #[test]
    fn test_parse_config_from_toml() {
        let toml = r#"
            [thresholds]
            confirmed = 500
            deaths = 20

            [layout]
            min_spacing_days = 3
            mode = "stacked"
            orientation = "vertical"
        "#;

        let config = TimelineConfig::from_str(toml).unwrap();

        assert_eq!(config.thresholds, SpikeThresholds::new(500, 20));
        assert_eq!(config.layout.min_spacing_days, 3);
        assert_eq!(config.layout.mode, LayoutMode::Stacked);
        assert_eq!(config.layout.orientation, Orientation::Vertical);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let toml = r#"
            [thresholds]
            confirmed = 2500
        "#;

        let config = TimelineConfig::from_str(toml).unwrap();

        // Specified value
        assert_eq!(config.thresholds.confirmed, 2500);
        // Default values
        assert_eq!(config.thresholds.deaths, 100);
        assert_eq!(config.layout.min_spacing_days, 10);
        assert_eq!(config.source.date_column, "Date");
        assert_eq!(config.milestones.len(), 4);
    }

    #[test]
    fn test_milestones_replace_defaults() {
        let toml = r#"
            [[milestones]]
            date = "2020-05-18"
            label = "Lockdown 4.0"
        "#;

        let config = TimelineConfig::from_str(toml).unwrap();

        assert_eq!(config.milestones.len(), 1);
        assert_eq!(config.milestones[0].label, "Lockdown 4.0");
    }

    #[test]
    fn test_invalid_milestone_date_is_rejected() {
        let toml = r#"
            [[milestones]]
            date = "2020-02-30"
            label = "never happened"
        "#;

        assert!(matches!(
            TimelineConfig::from_str(toml),
            Err(ConfigError::TomlError(_))
        ));
    }

    #[test]
    fn test_config_to_toml() {
        let config = TimelineConfig::default();
        let toml = config.to_toml().unwrap();

        assert!(toml.contains("[thresholds]"));
        assert!(toml.contains("[layout]"));
        assert!(toml.contains("[[milestones]]"));
    }

    #[test]
    fn test_default_config_toml_parses() {
        let toml = default_config_toml();
        let config = TimelineConfig::from_str(&toml).unwrap();

        assert_eq!(config.thresholds, SpikeThresholds::default());
        assert_eq!(config.milestones, default_milestones());
        assert_eq!(config.source.date_formats, SourceConfig::default().date_formats);
    }

    #[test]
    fn test_missing_file() {
        let result = TimelineConfig::from_file(Path::new("/nonexistent/timeline.toml"));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }

    #[test]
    fn test_layout_config_to_layout() {
        let layout = LayoutConfig {
            min_spacing_days: 4,
            mode: LayoutMode::Stacked,
            ..LayoutConfig::default()
        };

        assert_eq!(layout.to_layout(), TimelineLayout::new(LayoutMode::Stacked, 4));
    }
}
