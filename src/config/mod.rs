//! Configuration management module.
//!
//! Supports loading configuration from:
//! - TOML files (config/default.toml, config/{env}.toml)
//! - Environment variables with `IBANGEN_WORKER__<SECTION>__<KEY>` pattern

use std::net::IpAddr;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration.
    pub server: ServerConfig,

    /// Generator configuration.
    pub generator: GeneratorConfig,

    /// Observability configuration.
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// Load configuration from files and environment.
    ///
    /// Configuration is loaded in the following order (later sources override
    /// earlier):
    /// 1. `config/default.toml`
    /// 2. `config/{IBANGEN_ENV}.toml` (if `IBANGEN_ENV` is set)
    /// 3. Environment variables with `IBANGEN_WORKER__` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        // Determine environment
        let env = std::env::var("IBANGEN_ENV").unwrap_or_else(|_| "development".to_string());

        // Build configuration
        let config = Config::builder()
            // Load default configuration
            .add_source(File::with_name("config/default").required(false))
            // Load environment-specific configuration
            .add_source(File::with_name(&format!("config/{env}")).required(false))
            // Override with environment variables
            // IBANGEN_WORKER__SERVER__PORT=8080 -> server.port = 8080
            .add_source(
                Environment::with_prefix("IBANGEN_WORKER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        // Deserialize and validate
        let app_config: Self = config.try_deserialize()?;
        app_config.validate()?;

        Ok(app_config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message("server.port cannot be 0".to_string()));
        }
        if self.generator.max_batch_size == 0 {
            return Err(ConfigError::Message(
                "generator.max_batch_size cannot be 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: IpAddr,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> IpAddr {
    IpAddr::from([0, 0, 0, 0])
}

const fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: 8080,
        }
    }
}

/// Generator configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    /// Maximum identifiers per generation request.
    #[serde(default = "default_max_batch_size")]
    pub max_batch_size: u32,
}

const fn default_max_batch_size() -> u32 {
    1000
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_batch_size: 1000,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: "text" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Enable Prometheus metrics endpoint.
    #[serde(default = "default_metrics_enabled")]
    pub metrics_enabled: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

const fn default_metrics_enabled() -> bool {
    true
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
            metrics_enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.generator.max_batch_size, 1000);
        assert_eq!(config.observability.log_level, "info");
        assert!(config.observability.metrics_enabled);
    }

    #[test]
    fn test_validate_rejects_zero_port() {
        let config = AppConfig {
            server: ServerConfig {
                port: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_batch_size() {
        let config = AppConfig {
            generator: GeneratorConfig { max_batch_size: 0 },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
