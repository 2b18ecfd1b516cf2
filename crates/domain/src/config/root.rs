use serde::{Deserialize, Serialize};

use super::comparison::ComparisonConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolver::ResolverConfig;

const LOCAL_CONFIG_PATH: &str = "dnsdiff.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/dnsdiff/config.toml";

/// Main configuration structure for dnsdiff
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Servers and hosts to compare
    #[serde(default)]
    pub comparison: ComparisonConfig,

    /// Resolution engine settings
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dnsdiff.toml in current directory
    /// 3. /etc/dnsdiff/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml_str(&contents)
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(server) = overrides.server_a {
            self.comparison.server_a = server;
        }
        if let Some(server) = overrides.server_b {
            self.comparison.server_b = server;
        }
        if let Some(path) = overrides.hosts_path {
            self.comparison.hosts_path = path;
        }
        if let Some(path) = overrides.out_path {
            self.comparison.out_path = path;
        }
        if let Some(parent) = overrides.parent {
            self.comparison.parent = Some(parent);
        }
        if let Some(timeout) = overrides.timeout_ms {
            self.resolver.timeout_ms = timeout;
        }
        if overrides.accept_recursive_answers {
            self.resolver.accept_recursive_answers = true;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.comparison.server_a.trim().is_empty() {
            return Err(ConfigError::Validation("invalid NS A".to_string()));
        }

        if self.comparison.server_b.trim().is_empty() {
            return Err(ConfigError::Validation("invalid NS B".to_string()));
        }

        if self.comparison.hosts_path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "No hosts file configured".to_string(),
            ));
        }

        if self.resolver.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Query timeout cannot be 0".to_string(),
            ));
        }

        if self.resolver.max_attempts == 0 {
            return Err(ConfigError::Validation(
                "max_attempts must be at least 1".to_string(),
            ));
        }

        if self.resolver.load_balance_probes == 0 {
            return Err(ConfigError::Validation(
                "load_balance_probes must be at least 1".to_string(),
            ));
        }

        if self.resolver.max_delegation_hops == 0 {
            return Err(ConfigError::Validation(
                "max_delegation_hops must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub server_a: Option<String>,
    pub server_b: Option<String>,
    pub hosts_path: Option<String>,
    pub out_path: Option<String>,
    pub parent: Option<String>,
    pub timeout_ms: Option<u64>,
    pub accept_recursive_answers: bool,
    pub log_level: Option<String>,
}
