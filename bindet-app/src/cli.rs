use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "bindet",
    version,
    about = "Signal-detection analysis for the red/grey bin detection task"
)]
pub struct Args {
    /// JSON file with `analysis` and `session` sections.
    #[arg(long, global = true, env = "BINDET_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score every participant log of a data directory.
    Score {
        data_dir: Option<PathBuf>,
        /// Print the full report as JSON instead of a summary.
        #[arg(long, default_value_t = false)]
        json: bool,
        /// Also save the full report as JSON.
        #[arg(long)]
        output: Option<PathBuf>,
        /// Abort when a picture lacks signal or noise trials.
        #[arg(long, default_value_t = false)]
        strict: bool,
        /// Fixed clamp epsilon instead of 1/(2N).
        #[arg(long)]
        epsilon: Option<f64>,
        #[arg(long)]
        training_block: Option<String>,
    },
    /// Shuffle a stimulus folder into a session plan.
    Plan {
        stimulus_dir: Option<PathBuf>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        blocks: Option<usize>,
        /// Write the plan here instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}
