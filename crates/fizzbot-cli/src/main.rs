//! fizzbot CLI — the user-facing command-line interface.

use std::num::NonZeroU32;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "fizzbot", version, about = "Client for the fizzbot quiz API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one interview session
    Play {
        /// Type each answer instead of solving automatically
        #[arg(long)]
        interactive: bool,

        /// Service origin (e.g. "https://api.noopschallenge.com")
        #[arg(long)]
        domain: Option<String>,

        /// Give up after this many rejected answers to one question
        #[arg(long)]
        max_attempts: Option<NonZeroU32>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Solve a numeric challenge offline
    Solve {
        /// Numbers to solve (comma-separated, e.g. "1,2,3")
        #[arg(long, allow_hyphen_values = true)]
        numbers: String,

        /// Rules as divisor=text pairs (comma-separated, e.g. "3=Fizz,5=Buzz")
        #[arg(long, default_value = "")]
        rules: String,
    },

    /// Create a starter config file
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("fizzbot=warn")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            interactive,
            domain,
            max_attempts,
            config,
        } => commands::play::execute(interactive, domain, max_attempts, config).await,
        Commands::Solve { numbers, rules } => commands::solve::execute(numbers, rules),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
