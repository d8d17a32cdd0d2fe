//! Command line front end for the case timeline.
//!
//! Loads case counts from CSV, narrows them to one category, and hands the
//! series to [`timeline::Timeline`]. The resulting document goes to stdout or
//! a file for a renderer to draw.

pub mod cli;
pub mod error;
pub mod logging;
pub mod source;

pub use cli::{run, Cli, Command, TimelineArgs};
pub use error::CliError;
pub use source::{categories, select, RecordSource};
