//! msgpage command-line entry point

use clap::Parser;
use msgpage_cli::commands::Commands;

/// Split messages into numbered parts that fit a byte-limited channel
#[derive(Debug, Parser)]
#[command(name = "msgpage", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Suppress all log output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

impl Cli {
    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.init_logging();
    cli.command.execute()
}
