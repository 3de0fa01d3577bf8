//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Conference track scheduler.
///
/// Reads a talk list file and assigns every talk into parallel
/// conference tracks of morning session, lunch, afternoon session and
/// networking event.
#[derive(Debug, Parser)]
#[command(name = "cts", version, about, long_about = None)]
pub struct Cli {
    /// Path to the talk list file.
    pub input: PathBuf,

    /// Print the schedule as JSON instead of the human-readable agenda.
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
