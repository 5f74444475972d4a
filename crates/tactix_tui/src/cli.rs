//! Command-line options.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe in the terminal, against the computer or another person.
#[derive(Parser, Debug)]
#[command(name = "tactix")]
#[command(about = "Tic-tac-toe with a heuristic computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Milliseconds the computer pauses before replying
    #[arg(long, default_value_t = 700)]
    pub delay_ms: u64,

    /// Start in two-player mode instead of playing the computer
    #[arg(long)]
    pub two_player: bool,

    /// File that receives log output (the alternate screen hides stderr)
    #[arg(long, default_value = "tactix.log")]
    pub log_file: PathBuf,
}
