use crate::commands::{encode::EncodeArgs, stats::StatsArgs};

pub mod encode;
pub mod stats;

/// Subcommands for inflekt-cli
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Print vocabulary statistics for a corpus.
    Stats(StatsArgs),

    /// Encode a raw tag string against a corpus vocabulary.
    Encode(EncodeArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Stats(cmd) => cmd.run(),
            Commands::Encode(cmd) => cmd.run(),
        }
    }
}
