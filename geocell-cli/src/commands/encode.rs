//! Encode command - coordinate to geohash.

use geocell::facade;
use tracing::info;

use super::common::{join_coordinate_args, resolve_precision};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the encode command.
pub struct EncodeArgs {
    pub coordinate: Vec<String>,
    pub precision: Option<usize>,
    pub verbose: bool,
}

/// Run the encode command.
pub fn run(args: EncodeArgs) -> Result<(), CliError> {
    let runner = CliRunner::new(args.verbose)?;
    runner.log_startup("encode");

    let text = join_coordinate_args(&args.coordinate);
    let precision = resolve_precision(args.precision, runner.config());

    let hash = facade::encode(text.as_str(), precision)?;
    info!(input = %text, ?precision, hash = %hash, "Encoded coordinate");

    println!("{}", hash);
    Ok(())
}
