//! Configuration file support for licence-detector.
//!
//! Provides YAML-based configuration through `licence-detector.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use licence_detector::application::dto::OutputFormat;
use licence_detector::shared::Result;

pub const CONFIG_FILENAME: &str = "licence-detector.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub input: Option<PathBuf>,
    pub rules: Option<PathBuf>,
    pub overrides: Option<PathBuf>,
    pub include_indirect: Option<bool>,
    pub format: Option<String>,
    pub output: Option<PathBuf>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The configured report format, if any
    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.format
            .as_deref()
            .map(|f| f.parse::<OutputFormat>().map_err(anyhow::Error::msg))
            .transpose()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Err(e) = config.output_format() {
        bail!("Invalid config: {}", e);
    }

    for (field, value) in [
        ("input", &config.input),
        ("rules", &config.rules),
        ("overrides", &config.overrides),
        ("output", &config.output),
    ] {
        if value.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
            bail!(
                "Invalid config: {} must not be empty.\n\n\
                 💡 Hint: Remove the field to use the default, or give a path.",
                field
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
input: deps.json
rules: licence-rules.json
overrides: overrides.json
include_indirect: true
format: notice
output: NOTICE.txt
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.input, Some(PathBuf::from("deps.json")));
        assert_eq!(config.rules, Some(PathBuf::from("licence-rules.json")));
        assert_eq!(config.overrides, Some(PathBuf::from("overrides.json")));
        assert_eq!(config.include_indirect, Some(true));
        assert_eq!(config.output_format().unwrap(), Some(OutputFormat::Notice));
        assert_eq!(config.output, Some(PathBuf::from("NOTICE.txt")));
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(CONFIG_FILENAME);
        fs::write(
            &config_path,
            r#"
format: json
include_indirect: false
"#,
        )
        .unwrap();

        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_some());
        let config = config.unwrap();
        assert_eq!(config.format.as_deref(), Some("json"));
        assert_eq!(config.include_indirect, Some(false));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "invalid: yaml: [[[broken").unwrap();

        let result = load_config_from_path(&config_path);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_invalid_format_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "format: cyclonedx\n").unwrap();

        let result = load_config_from_path(&config_path);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Invalid config"));
        assert!(err.contains("cyclonedx"));
    }

    #[test]
    fn test_empty_path_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "rules: \"\"\n").unwrap();

        let result = load_config_from_path(&config_path);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("rules must not be empty"));
    }

    #[test]
    fn test_unknown_fields_warning() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
format: markdown
check_cve: true
exclude_packages:
  - golang.org/x/net
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("check_cve"));
        assert!(config.unknown_fields.contains_key("exclude_packages"));
    }

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert!(config.input.is_none());
        assert!(config.rules.is_none());
        assert!(config.overrides.is_none());
        assert!(config.include_indirect.is_none());
        assert_eq!(config.output_format().unwrap(), None);
        assert!(config.output.is_none());
    }
}
