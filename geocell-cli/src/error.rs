//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;
use geocell::codec::CodecError;
use geocell::config::ConfigFileError;
use geocell::coord::CoordError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// Encoding or decoding failed
    Codec(CodecError),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::Codec(CodecError::Coordinate(CoordError::InvalidCoordinateText { .. })) => {
                eprintln!();
                eprintln!("Coordinates are accepted as:");
                eprintln!("  geocell encode \"57.64911, 10.40744\"");
                eprintln!("  geocell encode 57.64911,10.40744");
                eprintln!("  geocell encode 57.64911 10.40744");
            }
            CliError::Codec(CodecError::PrecisionUnattainable { .. }) => {
                eprintln!();
                eprintln!("Pass --precision N (1-12) to encode at a fixed length.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Codec(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Codec(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CodecError> for CliError {
    fn from(e: CodecError) -> Self {
        CliError::Codec(e)
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e.to_string())
    }
}
