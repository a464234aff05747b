//! Configuration key access and validation.
//!
//! This module provides a type-safe interface for getting and setting
//! configuration values by key name, with validation via the Specification Pattern.

use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

use super::parser::{expand_tilde, parse_bool};
use super::settings::{ConfigFile, PrecisionSetting};

/// Errors that can occur when getting or setting configuration values.
#[derive(Debug, Error)]
pub enum ConfigKeyError {
    /// Unknown configuration key.
    #[error("Unknown configuration key '{0}'")]
    UnknownKey(String),

    /// Validation failed for the value.
    #[error("Invalid value for {key}: {reason}")]
    ValidationFailed { key: String, reason: String },
}

/// Supported configuration keys.
///
/// Each key maps to a specific field in [`ConfigFile`] and knows how to
/// get and set its value with proper validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    CodecPrecision,
    OutputBounds,
    LoggingFile,
}

impl FromStr for ConfigKey {
    type Err = ConfigKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "codec.precision" => Ok(ConfigKey::CodecPrecision),
            "output.bounds" => Ok(ConfigKey::OutputBounds),
            "logging.file" => Ok(ConfigKey::LoggingFile),
            _ => Err(ConfigKeyError::UnknownKey(s.to_string())),
        }
    }
}

impl ConfigKey {
    /// Get the canonical key name (e.g., "codec.precision").
    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::CodecPrecision => "codec.precision",
            ConfigKey::OutputBounds => "output.bounds",
            ConfigKey::LoggingFile => "logging.file",
        }
    }

    /// Get the section name (e.g., "codec").
    pub fn section(&self) -> &'static str {
        self.name().split('.').next().unwrap_or("")
    }

    /// Get the key name within the section (e.g., "precision").
    pub fn key_name(&self) -> &'static str {
        self.name().split('.').nth(1).unwrap_or(self.name())
    }

    /// Get the value from a config file as a string.
    pub fn get(&self, config: &ConfigFile) -> String {
        match self {
            ConfigKey::CodecPrecision => config.codec.precision.to_string(),
            ConfigKey::OutputBounds => config.output.bounds.to_string(),
            ConfigKey::LoggingFile => path_to_display(&config.logging.file),
        }
    }

    /// Set the value in a config file.
    ///
    /// Validates the value according to the key's specification before setting.
    pub fn set(&self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigKeyError> {
        self.validate(value)?;
        match self {
            ConfigKey::CodecPrecision => {
                if let Ok(precision) = value.parse::<PrecisionSetting>() {
                    config.codec.precision = precision;
                }
            }
            ConfigKey::OutputBounds => {
                if let Some(bounds) = parse_bool(value) {
                    config.output.bounds = bounds;
                }
            }
            ConfigKey::LoggingFile => {
                config.logging.file = expand_tilde(value.trim());
            }
        }
        Ok(())
    }

    /// Validate a value according to this key's specification.
    pub fn validate(&self, value: &str) -> Result<(), ConfigKeyError> {
        self.specification()
            .is_satisfied_by(value)
            .map_err(|reason| ConfigKeyError::ValidationFailed {
                key: self.name().to_string(),
                reason,
            })
    }

    /// Get the validation specification for this key.
    fn specification(&self) -> Box<dyn ValueSpecification> {
        match self {
            ConfigKey::CodecPrecision => Box::new(PrecisionSpec),
            ConfigKey::OutputBounds => Box::new(BooleanSpec),
            ConfigKey::LoggingFile => Box::new(PathSpec),
        }
    }

    /// Get all supported configuration keys.
    pub fn all() -> &'static [ConfigKey] {
        &[
            ConfigKey::CodecPrecision,
            ConfigKey::OutputBounds,
            ConfigKey::LoggingFile,
        ]
    }
}

// ============================================================================
// Value Specifications (Specification Pattern)
// ============================================================================

/// Trait for value validation specifications.
trait ValueSpecification {
    /// Check if the value satisfies this specification.
    /// Returns Ok(()) if valid, Err(reason) if invalid.
    fn is_satisfied_by(&self, value: &str) -> Result<(), String>;
}

/// Specification for `auto` or a hash length of 1 to 12.
struct PrecisionSpec;

impl ValueSpecification for PrecisionSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        value.parse::<PrecisionSetting>().map(|_| ())
    }
}

/// Specification for boolean values.
struct BooleanSpec;

impl ValueSpecification for BooleanSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        parse_bool(value)
            .map(|_| ())
            .ok_or_else(|| "must be true/false, yes/no, 1/0, or on/off".to_string())
    }
}

/// Specification for path values (non-empty).
struct PathSpec;

impl ValueSpecification for PathSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        if value.trim().is_empty() {
            Err("must be a valid path".to_string())
        } else {
            Ok(())
        }
    }
}

/// Convert path to display string, collapsing home dir to ~.
fn path_to_display(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}
