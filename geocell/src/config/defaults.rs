//! Default values and constants for all configuration settings.
//!
//! Contains all `DEFAULT_*` constants, path helpers,
//! and the `ConfigFile::default()` implementation.

use std::path::PathBuf;

use super::settings::*;

/// Name of the per-user configuration directory under `$HOME`.
pub const CONFIG_DIR_NAME: &str = ".geocell";

/// Name of the configuration file inside [`CONFIG_DIR_NAME`].
pub const CONFIG_FILE_NAME: &str = "config.ini";

/// Default log file name inside [`CONFIG_DIR_NAME`].
pub const DEFAULT_LOG_FILE_NAME: &str = "geocell.log";

/// Default encode precision.
pub const DEFAULT_PRECISION: PrecisionSetting = PrecisionSetting::Auto;

/// Default for printing cell bounds on decode.
pub const DEFAULT_OUTPUT_BOUNDS: bool = false;

/// Get the path to the config directory (~/.geocell).
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
}

/// Get the path to the config file (~/.geocell/config.ini).
pub fn config_file_path() -> PathBuf {
    config_directory().join(CONFIG_FILE_NAME)
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            codec: CodecSettings {
                precision: DEFAULT_PRECISION,
            },
            output: OutputSettings {
                bounds: DEFAULT_OUTPUT_BOUNDS,
            },
            logging: LoggingSettings {
                file: config_directory().join(DEFAULT_LOG_FILE_NAME),
            },
        }
    }
}
