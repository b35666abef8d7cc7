//! PGE File Library client configuration
//!
//! Loads client settings from a `key = value` text file (`filelib.txt`).
//! Lines starting with `#` and blank lines are ignored; unknown keys are
//! skipped and unparsable numbers keep their defaults.

use pgefile_core::{FileLibError, Result};
use std::fs;
use std::path::Path;

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "filelib.txt";

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Component identifier to activate (from "component" option)
    pub component: String,
    /// Number of blocks to append (from "blocks" option, default: 1)
    pub blocks: usize,
    /// Default tracing filter (from "loglevel" option)
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            component: "PGE.FileLib".into(),
            blocks: 1,
            log_level: "warn".into(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from a file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            FileLibError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Ok(Self::parse(&content))
    }

    /// Parse config file content
    pub fn parse(content: &str) -> Self {
        let mut config = Self::default();

        for line in content.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(eq_pos) = line.find('=') {
                let key = line[..eq_pos].trim();
                let value = line[eq_pos + 1..].trim();

                config.parse_option(key, value);
            }
        }

        config
    }

    fn parse_option(&mut self, key: &str, value: &str) {
        match key.to_ascii_lowercase().as_str() {
            "component" => {
                if !value.is_empty() {
                    self.component = value.into();
                }
            }
            "blocks" => {
                self.blocks = value.parse().unwrap_or(1);
            }
            "loglevel" => {
                if !value.is_empty() {
                    self.log_level = value.into();
                }
            }
            _ => {
                tracing::debug!("Unknown config option: {} = {}", key, value);
            }
        }
    }

    /// Log a configuration summary
    pub fn display(&self) {
        tracing::info!("Client configuration:");
        tracing::info!("  Component: {}", self.component);
        tracing::info!("  Blocks to add: {}", self.blocks);
        tracing::info!("  Log level: {}", self.log_level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.component, "PGE.FileLib");
        assert_eq!(config.blocks, 1);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_parse_simple_config() {
        let config_text = r#"
# client options
component = PGE.FileLib.1
blocks = 4
loglevel = debug
unknown = ignored
"#;
        let config = ClientConfig::parse(config_text);
        assert_eq!(config.component, "PGE.FileLib.1");
        assert_eq!(config.blocks, 4);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_bad_values_keep_defaults() {
        let config = ClientConfig::parse("blocks = lots\ncomponent =\n");
        assert_eq!(config.blocks, 1);
        assert_eq!(config.component, "PGE.FileLib");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "blocks = 0").unwrap();

        let config = ClientConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.blocks, 0);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("filelib.txt");

        assert!(matches!(
            ClientConfig::load_from_file(&path),
            Err(FileLibError::Config(_))
        ));
    }
}
