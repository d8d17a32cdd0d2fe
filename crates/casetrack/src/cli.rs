//! Command line arguments and command dispatch.

use std::io::Write;
use std::path::{Path, PathBuf};

use case_events::Orientation;
use clap::{Args, Parser, Subcommand};
use timeline::{
    default_config_toml, write_json, LayoutMode, OutputWriter, Timeline, TimelineConfig,
};

use crate::error::CliError;
use crate::source::{categories, select, RecordSource};

/// Case-count spike detection and timeline layout
#[derive(Parser, Debug)]
#[command(name = "casetrack")]
#[command(about = "Flags case-count spikes and lays out a key-event timeline")]
pub struct Cli {
    /// Log level when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the categories (regions) present in a CSV
    Categories {
        /// CSV file with case counts
        #[arg(long)]
        input: PathBuf,

        /// TOML config (for column names)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Build the timeline for one category
    Timeline(TimelineArgs),

    /// Print the default configuration
    DefaultConfig,
}

#[derive(Args, Debug, Default)]
pub struct TimelineArgs {
    /// CSV file with case counts
    #[arg(long)]
    pub input: PathBuf,

    /// Category (region) to build the timeline for
    #[arg(long)]
    pub category: String,

    /// TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the JSON document here instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Minimum spacing between adjacent labels, in days
    #[arg(long)]
    pub min_spacing_days: Option<u32>,

    /// Day-over-day confirmed change that flags a spike
    #[arg(long)]
    pub confirmed_threshold: Option<u64>,

    /// Day-over-day deaths change that flags a spike
    #[arg(long)]
    pub deaths_threshold: Option<u64>,

    /// Axis the timeline runs along (horizontal or vertical)
    #[arg(long)]
    pub orientation: Option<Orientation>,

    /// Stack events top to bottom instead of placing them on a date axis
    #[arg(long)]
    pub stacked: bool,

    /// Ask the renderer for log-scaled case charts
    #[arg(long)]
    pub log_scale: bool,

    /// Leave curated milestones off the timeline
    #[arg(long)]
    pub no_milestones: bool,

    /// Leave detected spikes off the timeline
    #[arg(long)]
    pub no_spikes: bool,
}

impl TimelineArgs {
    /// Applies command line overrides on top of a loaded config.
    pub fn apply_overrides(&self, config: &mut TimelineConfig) {
        if let Some(days) = self.min_spacing_days {
            config.layout.min_spacing_days = days;
        }
        if let Some(confirmed) = self.confirmed_threshold {
            config.thresholds.confirmed = confirmed;
        }
        if let Some(deaths) = self.deaths_threshold {
            config.thresholds.deaths = deaths;
        }
        if let Some(orientation) = self.orientation {
            config.layout.orientation = orientation;
        }
        if self.stacked {
            config.layout.mode = LayoutMode::Stacked;
        }
        if self.log_scale {
            config.layout.log_scale = true;
        }
        if self.no_milestones {
            config.general.include_milestones = false;
        }
        if self.no_spikes {
            config.general.include_spikes = false;
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<TimelineConfig, CliError> {
    match path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading config");
            Ok(TimelineConfig::from_file(path)?)
        }
        None => Ok(TimelineConfig::default()),
    }
}

/// Runs a command, writing its primary output to `out`.
pub fn run<W: Write>(cli: Cli, out: &mut W) -> Result<(), CliError> {
    match cli.command {
        Command::Categories { input, config } => {
            let config = load_config(config.as_deref())?;
            let rows = RecordSource::new(config.source).read_path(&input)?;
            for name in categories(&rows) {
                writeln!(out, "{}", name).map_err(write_error)?;
            }
            Ok(())
        }
        Command::Timeline(args) => run_timeline(&args, out),
        Command::DefaultConfig => {
            write!(out, "{}", default_config_toml()).map_err(write_error)?;
            Ok(())
        }
    }
}

fn run_timeline<W: Write>(args: &TimelineArgs, out: &mut W) -> Result<(), CliError> {
    let mut config = load_config(args.config.as_deref())?;
    args.apply_overrides(&mut config);

    let rows = RecordSource::new(config.source.clone()).read_path(&args.input)?;
    let records = select(&rows, &args.category);
    if records.is_empty() {
        return Err(CliError::UnknownCategory {
            category: args.category.clone(),
            available: categories(&rows),
        });
    }

    let output = Timeline::new(config).build(&args.category, &records);

    match &args.output {
        Some(path) => {
            OutputWriter::new(path).write(&output)?;
            tracing::info!(path = %path.display(), "wrote timeline");
        }
        None => write_json(out, &output)?,
    }
    Ok(())
}

fn write_error(e: std::io::Error) -> CliError {
    CliError::Output(e.into())
}
