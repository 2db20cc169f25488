//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Service identity.
    #[serde(default)]
    pub service: ServiceConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

/// Service identity reported by the health check.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Service name.
    #[serde(default = "default_service_name")]
    pub name: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: default_service_name(),
        }
    }
}

fn default_service_name() -> String {
    "microservice-conversion-calculs".to_string()
}

impl AppConfig {
    /// Loads configuration from config files and the environment.
    ///
    /// Later sources win: `config/default`, `config/{RUN_MODE}`, `TARIF__*` variables,
    /// then the bare `PORT` variable.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("TARIF").separator("__"))
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .build()?;

        config.try_deserialize()
    }

    /// Returns the `host:port` address to bind to.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_env(
        port: Option<&str>,
        prefixed_port: Option<&str>,
        name: Option<&str>,
        f: impl FnOnce(),
    ) {
        temp_env::with_vars(
            [
                ("RUN_MODE", Some("test")),
                ("PORT", port),
                ("TARIF__SERVER__HOST", None),
                ("TARIF__SERVER__PORT", prefixed_port),
                ("TARIF__SERVICE__NAME", name),
            ],
            f,
        );
    }

    #[test]
    fn test_defaults_without_sources() {
        with_env(None, None, None, || {
            let config = AppConfig::load().unwrap();
            assert_eq!(config.server.host, "0.0.0.0");
            assert_eq!(config.server.port, 3000);
            assert_eq!(config.service.name, "microservice-conversion-calculs");
            assert_eq!(config.bind_address(), "0.0.0.0:3000");
        });
    }

    #[test]
    fn test_prefixed_environment_overrides() {
        with_env(None, Some("9090"), Some("tarif-test"), || {
            let config = AppConfig::load().unwrap();
            assert_eq!(config.server.port, 9090);
            assert_eq!(config.service.name, "tarif-test");
        });
    }

    #[test]
    fn test_bare_port_wins_over_prefixed_port() {
        with_env(Some("4000"), Some("9090"), None, || {
            let config = AppConfig::load().unwrap();
            assert_eq!(config.server.port, 4000);
        });
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        with_env(Some("not-a-port"), None, None, || {
            assert!(AppConfig::load().is_err());
        });
    }
}
