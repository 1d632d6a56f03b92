use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use anyhow::{Context, Result};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Diagnostic logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default filter directive, used when RUST_LOG is unset
    #[serde(default = "default_level")]
    pub level: String,

    /// Where log lines go; stdout is reserved for program output by default
    #[serde(default)]
    pub output: LogOutput,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogOutput {
    /// Diagnostics share stdout with the program output
    Stdout,
    #[default]
    Stderr,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            output: LogOutput::default(),
        }
    }
}

// Default level for serde
fn default_level() -> String { "warn".to_string() }

impl Config {
    /// Load configuration from file, or use defaults if not found
    pub fn load() -> Result<Self> {
        // Try to load from config.yaml in current directory
        let config_path = Path::new("config.yaml");

        if config_path.exists() {
            Self::load_from(config_path)
        } else {
            // Use defaults if no config file exists
            Ok(Config::default())
        }
    }

    /// Load configuration from a specific file path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {:?}", path))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_config(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir()
            .join(format!("highorder_{}_{}.yaml", name, std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.output, LogOutput::Stderr);
    }

    #[test]
    fn test_load_from_overrides_level() {
        let path = temp_config("level", "logging:\n  level: debug\n  output: stdout\n");
        let config = Config::load_from(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.output, LogOutput::Stdout);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let path = temp_config("partial", "logging:\n  level: trace\n");
        let config = Config::load_from(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.logging.level, "trace");
        assert_eq!(config.logging.output, LogOutput::Stderr);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let path = temp_config("broken", "logging: [not, a, map\n");
        let result = Config::load_from(&path);
        fs::remove_file(&path).ok();

        let err = result.unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let path = std::env::temp_dir().join("highorder_does_not_exist.yaml");
        assert!(Config::load_from(&path).is_err());
    }
}
