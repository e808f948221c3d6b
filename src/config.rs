use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::constants::{CONFIG_DIR, CONFIG_FILE, DEFAULT_URL, LOG_FILE, REQUEST_TIMEOUT_SECS, SIMULATED_LATENCY_MS};
use crate::network::{HttpTransport, SimulatedTransport, Transport};

/// Which transport carries requests
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    #[default]
    Simulated,
    Http,
}

/// User settings, read from `~/.sendpad/config.yaml`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub transport: TransportKind,
    pub simulated_latency_ms: u64,
    pub request_timeout_secs: u64,
    pub default_url: String,
    pub log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            transport: TransportKind::Simulated,
            simulated_latency_ms: SIMULATED_LATENCY_MS,
            request_timeout_secs: REQUEST_TIMEOUT_SECS,
            default_url: String::from(DEFAULT_URL),
            log_file: String::from(LOG_FILE),
        }
    }
}

impl Config {
    /// Default location of the config file
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR)
            .join(CONFIG_FILE)
    }

    /// Load from the default location, falling back to defaults if absent
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load from `path`. A missing file yields defaults; a malformed one is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = serde_yaml::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    /// Write the config, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    pub fn build_transport(&self) -> Arc<dyn Transport> {
        match self.transport {
            TransportKind::Simulated => {
                Arc::new(SimulatedTransport::new(Duration::from_millis(self.simulated_latency_ms)))
            }
            TransportKind::Http => {
                Arc::new(HttpTransport::new(Duration::from_secs(self.request_timeout_secs)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.yaml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.simulated_latency_ms, 500);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "transport: http\nrequest_timeout_secs: 5\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.transport, TransportKind::Http);
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.default_url, DEFAULT_URL);
        assert_eq!(config.build_transport().name(), "http");
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "transport: [carrier pigeon\n").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");
        let config = Config {
            simulated_latency_ms: 50,
            default_url: "https://localhost:8080/health".to_string(),
            ..Config::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
        assert_eq!(config.build_transport().name(), "simulated");
    }
}
