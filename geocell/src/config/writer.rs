//! INI serialization logic for converting `ConfigFile` → INI string.
//!
//! This module contains the `to_config_string()` function that produces
//! the commented INI representation written to `config.ini`.

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    format!(
        r#"[codec]
; Geohash length used when encode is run without --precision:
;   auto - shortest hash that keeps the input's decimal places (default)
;   1-12 - always produce this many characters
precision = {}

[output]
; Print the cell's south/west/north/east edges after decoding (default: false)
bounds = {}

[logging]
; Log file path (default: ~/.geocell/geocell.log)
file = {}
"#,
        config.codec.precision,
        config.output.bounds,
        config.logging.file.display(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PrecisionSetting;
    use ini::Ini;

    #[test]
    fn test_written_config_parses_back() {
        let mut config = ConfigFile::default();
        config.codec.precision = PrecisionSetting::Fixed(6);
        config.output.bounds = true;

        let content = to_config_string(&config);
        let ini = Ini::load_from_str(&content).unwrap();
        let parsed = super::super::parser::parse_ini(&ini).unwrap();

        assert_eq!(parsed, config);
    }

    #[test]
    fn test_written_config_has_comments() {
        let content = to_config_string(&ConfigFile::default());
        assert!(content.contains("; Geohash length"));
        assert!(content.contains("precision = auto"));
        assert!(content.contains("bounds = false"));
    }
}
