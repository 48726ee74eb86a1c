use serde::{Deserialize, Serialize};

use super::dns::DnsConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::worker::WorkerConfig;

/// Main configuration structure for the batchdns worker.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// DNS lookup configuration (upstream, timeout, mode selector)
    #[serde(default)]
    pub dns: DnsConfig,

    /// Batch worker configuration
    #[serde(default)]
    pub worker: WorkerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults.
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. batchdns.toml in current directory
    /// 3. /etc/batchdns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("batchdns.toml").exists() {
            Self::from_file("batchdns.toml")?
        } else if std::path::Path::new("/etc/batchdns/config.toml").exists() {
            Self::from_file("/etc/batchdns/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(server) = overrides.upstream_server {
            self.dns.upstream_server = server;
        }
        if let Some(mode) = overrides.lookup_mode {
            self.dns.lookup_mode = mode;
        }
        if let Some(concurrency) = overrides.concurrency {
            self.worker.concurrency = concurrency;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate transport-level configuration. The lookup mode is
    /// deliberately not checked here: an unsupported mode is a job-level
    /// condition raised at dispatch.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dns.upstream_server.is_empty() {
            return Err(ConfigError::Validation(
                "No upstream server configured".to_string(),
            ));
        }

        if self.dns.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Lookup timeout cannot be 0".to_string(),
            ));
        }

        if self.worker.concurrency == 0 {
            return Err(ConfigError::Validation(
                "Worker concurrency cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub upstream_server: Option<String>,
    pub lookup_mode: Option<String>,
    pub concurrency: Option<usize>,
    pub log_level: Option<String>,
}
