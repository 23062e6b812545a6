//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "anteplay",
    version,
    about = "Three-card poker, Ante/Play against the dealer"
)]
pub struct AnteplayCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play an interactive session against the dealer
    Play {
        /// Starting bankroll (defaults to the configured value)
        #[arg(long)]
        bankroll: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        /// Append every resolved round to this JSONL file
        #[arg(long)]
        history: Option<String>,
    },
    /// Deal one player hand and one dealer hand and show how they compare
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Classify three cards, e.g. `eval As Kd 10h`
    Eval {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Play rounds automatically with a fixed strategy
    Sim {
        #[arg(long)]
        rounds: u32,
        #[arg(long, default_value_t = 1)]
        ante: u32,
        #[arg(long)]
        bankroll: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        /// Strategy name (baseline, always)
        #[arg(long)]
        strategy: Option<String>,
        /// Write every resolved round to this JSONL file
        #[arg(long)]
        output: Option<String>,
    },
    /// Display current configuration settings
    Cfg,
}
