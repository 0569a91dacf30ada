//! INI serialization logic for converting `ConfigFile` → INI string.
//!
//! Produces the commented INI representation written to `config.ini`.

use super::file::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let log_file = config
        .logging
        .file
        .as_ref()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_default();

    format!(
        r#"[grid]
; Grid cell edge length in meters (default: 1000)
step_meters = {}
; Classify grid cells on all CPU cores (default: false)
; Output order is the same either way
parallel = {}

[logging]
; Optional log file. Leave empty to log to the console only.
; Example: file = ~/.polygrid/polygrid.log
file = {}
"#,
        config.grid.step_meters, config.grid.parallel, log_file,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_contains_sections() {
        let content = to_config_string(&ConfigFile::default());
        assert!(content.contains("[grid]"));
        assert!(content.contains("step_meters = 1000"));
        assert!(content.contains("parallel = false"));
        assert!(content.contains("[logging]"));
    }

    #[test]
    fn test_output_is_valid_ini() {
        let content = to_config_string(&ConfigFile::default());
        let ini = ini::Ini::load_from_str(&content).expect("writer output should parse");
        assert_eq!(
            ini.section(Some("grid")).and_then(|s| s.get("parallel")),
            Some("false")
        );
    }
}
