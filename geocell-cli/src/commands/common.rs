//! Common utilities shared across CLI commands.

use geocell::config::ConfigFile;

/// Resolve the encode precision from CLI args and config.
///
/// `None` means auto-precision.
pub fn resolve_precision(cli_precision: Option<usize>, config: &ConfigFile) -> Option<usize> {
    // CLI takes precedence, then config
    cli_precision.or_else(|| config.codec.precision.fixed())
}

/// Resolve whether to print cell bounds from CLI args and config.
pub fn resolve_bounds(cli_bounds: bool, config: &ConfigFile) -> bool {
    cli_bounds || config.output.bounds
}

/// Join coordinate arguments into one text.
///
/// `geocell encode 57.6 10.4` arrives as two arguments; they are joined
/// with a space, which is one of the accepted separators.
pub fn join_coordinate_args(parts: &[String]) -> String {
    parts.join(" ")
}
