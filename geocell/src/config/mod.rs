//! Configuration for the geocell tools.
//!
//! User settings live in `~/.geocell/config.ini`:
//!
//! ```ini
//! [codec]
//! precision = auto
//!
//! [output]
//! bounds = false
//!
//! [logging]
//! file = ~/.geocell/geocell.log
//! ```
//!
//! A missing file means defaults. Values can be read and changed by name
//! through [`ConfigKey`].

mod defaults;
mod file;
mod keys;
mod parser;
mod settings;
mod writer;

pub use defaults::{
    config_directory, config_file_path, CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_LOG_FILE_NAME,
    DEFAULT_OUTPUT_BOUNDS, DEFAULT_PRECISION,
};
pub use file::ConfigFileError;
pub use keys::{ConfigKey, ConfigKeyError};
pub use settings::{CodecSettings, ConfigFile, LoggingSettings, OutputSettings, PrecisionSetting};
