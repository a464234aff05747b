//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::hash::{MAX_PRECISION, MIN_PRECISION};

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// Codec settings
    pub codec: CodecSettings,
    /// Output settings
    pub output: OutputSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Codec configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CodecSettings {
    /// Hash length used when none is given on the command line
    pub precision: PrecisionSetting,
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputSettings {
    /// Print cell edges alongside decoded coordinates
    pub bounds: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Log file path
    pub file: PathBuf,
}

/// How many characters to encode when the caller does not say.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrecisionSetting {
    /// Shortest hash that preserves the input's decimal places
    Auto,
    /// Always this many characters (1 to 12)
    Fixed(usize),
}

impl PrecisionSetting {
    /// The explicit precision, or `None` for auto.
    pub fn fixed(&self) -> Option<usize> {
        match self {
            PrecisionSetting::Auto => None,
            PrecisionSetting::Fixed(precision) => Some(*precision),
        }
    }
}

impl FromStr for PrecisionSetting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("auto") {
            return Ok(PrecisionSetting::Auto);
        }
        match s.parse::<usize>() {
            Ok(n) if (MIN_PRECISION..=MAX_PRECISION).contains(&n) => {
                Ok(PrecisionSetting::Fixed(n))
            }
            _ => Err(format!(
                "must be 'auto' or an integer from {} to {}",
                MIN_PRECISION, MAX_PRECISION
            )),
        }
    }
}

impl fmt::Display for PrecisionSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrecisionSetting::Auto => f.write_str("auto"),
            PrecisionSetting::Fixed(precision) => write!(f, "{}", precision),
        }
    }
}
