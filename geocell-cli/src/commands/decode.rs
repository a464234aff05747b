//! Decode command - geohash to coordinate.

use geocell::codec::{decode_cell, Cell};
use geocell::hash::GeoHash;
use tracing::info;

use super::common::resolve_bounds;
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the decode command.
pub struct DecodeArgs {
    pub hash: String,
    pub bounds: bool,
    pub verbose: bool,
}

/// Run the decode command.
pub fn run(args: DecodeArgs) -> Result<(), CliError> {
    let runner = CliRunner::new(args.verbose)?;
    runner.log_startup("decode");

    let hash = GeoHash::new(args.hash.as_str()).map_err(geocell::CodecError::from)?;
    let cell = decode_cell(&hash);
    let coordinate = cell.representative();
    info!(hash = %hash, coordinate = %coordinate, "Decoded geohash");

    println!("{}", coordinate);
    if resolve_bounds(args.bounds, runner.config()) {
        print_bounds(&cell);
    }
    Ok(())
}

fn print_bounds(cell: &Cell) {
    println!("  south: {}", cell.south());
    println!("  west:  {}", cell.west());
    println!("  north: {}", cell.north());
    println!("  east:  {}", cell.east());
}
