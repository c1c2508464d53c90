#![forbid(unsafe_code)]
//! String Calculator Command Line Interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use strcalc::commands::{
    execute_clear, execute_history, execute_prime, execute_sum, HistoryOptions, PrimeOptions,
    SumOptions,
};
use strcalc::config::DEFAULT_CONFIG_FILE;
use strcalc::Config;

#[derive(Parser)]
#[command(name = "strcalc")]
#[command(about = "Sum comma-delimited integers and keep the prime results")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Sum comma-delimited integers
    Sum {
        /// Input to sum (reads from stdin if not provided)
        #[arg(allow_hyphen_values = true)]
        input: Option<String>,

        /// Do not persist prime results
        #[arg(long)]
        no_store: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check whether a value is prime
    Prime {
        /// Value to check
        #[arg(allow_hyphen_values = true)]
        value: i64,
    },

    /// List persisted prime results
    History {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Show only the most recent N results
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Delete the result log
    Clear,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load_or_default(&cli.config)?;

    match cli.command {
        Commands::Sum { input, no_store, json } => {
            let options = SumOptions { input, no_store, json };
            execute_sum(options, &config)?;
        }
        Commands::Prime { value } => {
            execute_prime(PrimeOptions { value })?;
        }
        Commands::History { json, limit } => {
            let options = HistoryOptions { json, limit };
            execute_history(options, &config)?;
        }
        Commands::Clear => {
            execute_clear(&config)?;
        }
    }

    Ok(())
}
