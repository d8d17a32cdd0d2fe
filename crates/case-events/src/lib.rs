//! Shared record and event types for the case timeline.
//!
//! This crate contains pure data structures with no detection or layout
//! logic. It is a dependency for all other crates in the workspace.

pub mod axis;
pub mod error;
pub mod event;
pub mod record;

#[cfg(feature = "test-fixtures")]
pub mod fixtures;

// Re-export axis types
pub use axis::{axis_day, date_from_axis_day, Orientation, EPOCH_DAYS_FROM_CE};

// Re-export error types
pub use error::InvalidInput;

// Re-export event types
pub use event::{spike_label, Event, EventSource, PositionedEvent};

// Re-export record types
pub use record::{CategoryRecord, Record};
