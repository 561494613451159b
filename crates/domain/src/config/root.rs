use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::synthesis::{normalize_suffix, SynthesisConfig};

/// Main configuration structure for visibleip-dns
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listener configuration (bind addresses, port)
    #[serde(default)]
    pub server: ServerConfig,

    /// Address synthesis configuration
    #[serde(default)]
    pub synthesis: SynthesisConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. visibleip-dns.toml in current directory
    /// 3. /etc/visibleip-dns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.synthesis.suffix = normalize_suffix(&config.synthesis.suffix);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if !overrides.bind_addresses.is_empty() {
            self.server.bind_addresses = overrides.bind_addresses;
        }
        if let Some(suffix) = overrides.suffix {
            self.synthesis.suffix = suffix;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.server.bind_addresses.is_empty() {
            return Err(ConfigError::Validation(
                "No bind addresses configured".to_string(),
            ));
        }

        for addr in &self.server.bind_addresses {
            if addr.parse::<IpAddr>().is_err() {
                return Err(ConfigError::Validation(format!(
                    "Bind address '{}' is not an IP literal",
                    addr
                )));
            }
        }

        let suffix = normalize_suffix(&self.synthesis.suffix);
        let labels = suffix.strip_suffix('.').unwrap_or(&suffix);
        if labels.is_empty() {
            return Err(ConfigError::Validation(
                "Synthesis suffix cannot be empty".to_string(),
            ));
        }
        if labels.split('.').any(|label| label.is_empty()) {
            return Err(ConfigError::Validation(format!(
                "Synthesis suffix '{}' contains an empty label",
                suffix
            )));
        }

        Ok(())
    }

    /// Bind addresses parsed to IP literals; call after `validate`.
    pub fn bind_ips(&self) -> Vec<IpAddr> {
        self.server
            .bind_addresses
            .iter()
            .filter_map(|addr| addr.parse().ok())
            .collect()
    }

    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new("visibleip-dns.toml").exists() {
            Some("visibleip-dns.toml".to_string())
        } else if std::path::Path::new("/etc/visibleip-dns/config.toml").exists() {
            Some("/etc/visibleip-dns/config.toml".to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_addresses: Vec<String>,
    pub suffix: Option<String>,
    pub log_level: Option<String>,
}
