//! Timeline output types and persistence.
//!
//! [`TimelineOutput`] is the document handed to a rendering surface: the
//! plotted series plus every positioned marker.

use case_events::{Orientation, PositionedEvent, Record};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::layout::LayoutMode;

/// Everything a renderer needs to draw one category's timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineOutput {
    /// Category (region) the timeline was built for
    pub category: String,
    /// Axis the timeline runs along
    pub orientation: Orientation,
    /// How marker positions were assigned
    pub layout_mode: LayoutMode,
    /// Spacing enforced between adjacent markers, in days
    pub min_spacing_days: u32,
    /// Renderer hint for the case-count charts
    pub log_scale: bool,
    /// Case counts to plot, in date order
    pub series: Vec<Record>,
    /// Positioned markers, in date order
    pub events: Vec<PositionedEvent>,
}

impl TimelineOutput {
    /// Returns the (position, label) pairs to draw.
    pub fn markers(&self) -> Vec<(i64, &str)> {
        self.events.iter().map(PositionedEvent::marker).collect()
    }

    /// Number of markers that came from the spike rule.
    pub fn spike_count(&self) -> usize {
        self.events
            .iter()
            .filter(|p| p.event.source.is_spike())
            .count()
    }

    /// Serializes the output as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parses output from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Errors that can occur during output operations.
#[derive(Debug)]
pub enum OutputError {
    /// I/O error (file operations)
    Io(std::io::Error),
    /// JSON serialization error
    Json(serde_json::Error),
}

impl std::fmt::Display for OutputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputError::Io(e) => write!(f, "I/O error: {}", e),
            OutputError::Json(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for OutputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OutputError::Io(e) => Some(e),
            OutputError::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for OutputError {
    fn from(e: std::io::Error) -> Self {
        OutputError::Io(e)
    }
}

impl From<serde_json::Error> for OutputError {
    fn from(e: serde_json::Error) -> Self {
        OutputError::Json(e)
    }
}

/// Writes timeline documents to a file.
///
/// Parent directories are created on demand and the file is truncated, so
/// each write leaves exactly one document on disk.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    path: PathBuf,
}

impl OutputWriter {
    /// Creates a writer targeting `path`.
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Returns the target path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `output` as pretty JSON, replacing any previous content.
    pub fn write(&self, output: &TimelineOutput) -> Result<(), OutputError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut writer = BufWriter::new(File::create(&self.path)?);
        write_json(&mut writer, output)?;
        writer.flush()?;
        Ok(())
    }
}

/// Writes `output` as pretty JSON followed by a newline.
pub fn write_json<W: Write>(writer: &mut W, output: &TimelineOutput) -> Result<(), OutputError> {
    serde_json::to_writer_pretty(&mut *writer, output)?;
    writeln!(writer)?;
    Ok(())
}

/// Reads timeline documents written by [`OutputWriter`].
#[derive(Debug, Clone)]
pub struct OutputReader {
    path: PathBuf,
}

impl OutputReader {
    /// Creates a new output reader for the given file.
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Reads the document.
    pub fn read(&self) -> Result<TimelineOutput, OutputError> {
        let content = fs::read_to_string(&self.path)?;
        Ok(TimelineOutput::from_json(&content)?)
    }
}
