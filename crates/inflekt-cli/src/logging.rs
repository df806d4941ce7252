use stderrlog::{LogLevelNum, Timestamp};

/// Logging control arg group.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Suppress log output.
    #[clap(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v, -vv); info is shown by default.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl LogArgs {
    /// Initialize the process-wide stderr logger.
    pub fn init_logging(&self) -> Result<(), log::SetLoggerError> {
        let log_level = match 3 + self.verbose {
            4 => LogLevelNum::Debug,
            v if v > 4 => LogLevelNum::Trace,
            _ => LogLevelNum::Info,
        };

        stderrlog::new()
            .quiet(self.quiet)
            .verbosity(log_level)
            .timestamp(Timestamp::Off)
            .init()
    }
}
