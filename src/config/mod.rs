//! Configuration loading and management

use crate::core::error::ConfigError;
use crate::orders::catalog::DATASET_SIZE;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Dataset options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Number of synthetic orders to generate.
    pub count: usize,

    /// Recompute relative date labels per request instead of serving the
    /// generation-time snapshot.
    pub recompute_date_labels: bool,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            count: DATASET_SIZE,
            recompute_date_labels: false,
        }
    }
}

/// Complete server configuration.
///
/// Every field has a default, so an empty YAML document is a valid
/// configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,

    /// Port to listen on.
    pub port: u16,

    /// Dataset options.
    pub dataset: DatasetConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            dataset: DatasetConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        // serde_yaml rejects a fully empty document for non-Option types.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Socket address string for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_dataset_contract() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
        assert_eq!(config.dataset.count, 137);
        assert!(!config.dataset.recompute_date_labels);
    }

    #[test]
    fn empty_document_is_a_valid_config() {
        let config = ServerConfig::from_yaml_str("").unwrap();
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn partial_document_fills_in_defaults() {
        let config = ServerConfig::from_yaml_str("port: 8080\ndataset:\n  count: 12\n").unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.dataset.count, 12);
        assert!(!config.dataset.recompute_date_labels);
    }

    #[test]
    fn malformed_document_is_an_error_not_a_panic() {
        let err = ServerConfig::from_yaml_str("port: [8080]").unwrap_err();
        assert!(err.to_string().contains("parse"));
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("opsboard.yaml");
        std::fs::write(&path, "host: 0.0.0.0\ndataset:\n  recompute_date_labels: true\n").unwrap();

        let config = ServerConfig::from_yaml_file(&path).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert!(config.dataset.recompute_date_labels);
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = ServerConfig::from_yaml_file("/definitely/not/here.yaml").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.yaml"));
    }
}
