//! casetrack
//!
//! Run with: cargo run -p casetrack -- <command>
//!
//! Examples:
//!   cargo run -p casetrack -- categories --input covid_19_india.csv
//!   cargo run -p casetrack -- timeline --input covid_19_india.csv --category Kerala
//!   cargo run -p casetrack -- default-config > timeline.toml

use clap::Parser;
use std::process::ExitCode;

use casetrack::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = casetrack::logging::init(&cli.log_level) {
        eprintln!("Warning: {}", e);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match casetrack::run(cli, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
