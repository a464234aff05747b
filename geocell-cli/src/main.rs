//! geocell CLI - encode coordinates to geohashes and back.
//!
//! Thin command-line surface over the `geocell` library. Encode and decode
//! write a log file under `~/.geocell/`; `--verbose` mirrors debug output
//! to stderr.

mod commands;
mod error;
mod runner;

use clap::{Parser, Subcommand};

use commands::config::ConfigCommands;
use commands::decode::DecodeArgs;
use commands::encode::EncodeArgs;

#[derive(Parser)]
#[command(name = "geocell")]
#[command(about = "Geohash encoder and decoder", long_about = None)]
#[command(version)]
struct Cli {
    /// Print debug logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a coordinate to a geohash
    ///
    /// The coordinate may be given as one argument ("57.64911, 10.40744",
    /// "57.64911,10.40744") or as two arguments (57.64911 10.40744).
    Encode {
        /// Latitude and longitude
        #[arg(required = true, num_args = 1..=2, allow_hyphen_values = true)]
        coordinate: Vec<String>,

        /// Geohash length (1-12). Overrides codec.precision; auto if neither is set
        #[arg(short, long)]
        precision: Option<usize>,
    },

    /// Decode a geohash to a coordinate
    Decode {
        /// Geohash (lowercase, 1-12 characters)
        hash: String,

        /// Also print the cell's south, west, north and east edges
        #[arg(short, long)]
        bounds: bool,
    },

    /// View and modify configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Encode {
            coordinate,
            precision,
        } => commands::encode::run(EncodeArgs {
            coordinate,
            precision,
            verbose: cli.verbose,
        }),
        Commands::Decode { hash, bounds } => commands::decode::run(DecodeArgs {
            hash,
            bounds,
            verbose: cli.verbose,
        }),
        Commands::Config(command) => commands::config::run(command),
    };

    if let Err(e) = result {
        e.exit();
    }
}

