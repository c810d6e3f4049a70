//! Configuration management using Figment
//!
//! Configuration is loaded from multiple sources with the following precedence (highest to lowest):
//! 1. Environment variables (prefix: `USER_SERVICE_`, nested keys split on `__`,
//!    e.g. `USER_SERVICE_SERVICE__PORT=9000`)
//! 2. Current working directory: ./config.toml
//! 3. XDG config directory: ~/.config/user-service/config.toml
//! 4. System directory: /etc/user-service/config.toml
//! 5. Default values
//!
//! With no sources present the service listens on `0.0.0.0:8080`.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::Result;

/// Application name used for config directories
pub const APP_NAME: &str = "user-service";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "USER_SERVICE_";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Service configuration
    pub service: ServiceConfig,

    /// Middleware configuration
    #[serde(default)]
    pub middleware: MiddlewareConfig,
}

/// Service-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service name
    pub name: String,

    /// Address to bind
    #[serde(default = "default_host")]
    pub host: IpAddr,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level or filter directive (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Environment (dev, staging, production)
    #[serde(default = "default_environment")]
    pub environment: String,
}

impl ServiceConfig {
    /// Socket address the server binds to
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Middleware configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MiddlewareConfig {
    /// Request body size limit in KB
    #[serde(default = "default_body_limit_kb")]
    pub body_limit_kb: usize,

    /// Enable panic recovery middleware
    #[serde(default = "default_true")]
    pub catch_panic: bool,

    /// Enable response compression
    #[serde(default = "default_true")]
    pub compression: bool,

    /// CORS mode (permissive, restrictive, disabled)
    #[serde(default = "default_cors_mode")]
    pub cors_mode: String,

    /// Generate and propagate `x-request-id` headers
    #[serde(default = "default_true")]
    pub request_id_enabled: bool,
}

impl MiddlewareConfig {
    /// Body limit in bytes
    pub fn body_limit_bytes(&self) -> usize {
        self.body_limit_kb * 1024
    }
}

impl Default for MiddlewareConfig {
    fn default() -> Self {
        Self {
            body_limit_kb: default_body_limit_kb(),
            catch_panic: true,
            compression: true,
            cors_mode: default_cors_mode(),
            request_id_enabled: true,
        }
    }
}

// Default value functions
fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_environment() -> String {
    "dev".to_string()
}

fn default_true() -> bool {
    true
}

fn default_body_limit_kb() -> usize {
    1024 // 1 MB
}

fn default_cors_mode() -> String {
    "permissive".to_string()
}

impl Config {
    /// Load configuration from all sources
    ///
    /// Searches for config files in this order (first found wins on conflicts):
    /// 1. Current working directory: ./config.toml
    /// 2. XDG config directory: ~/.config/user-service/config.toml
    /// 3. System directory: /etc/user-service/config.toml
    ///
    /// Environment variables (`USER_SERVICE_` prefix) override all file-based configs.
    pub fn load() -> Result<Self> {
        let config_paths = Self::find_config_paths();

        tracing::debug!("Searching for config files in order:");
        for path in &config_paths {
            tracing::debug!("  - {}", path.display());
        }

        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        // Merge in reverse order (lowest priority first) so higher priority files win
        for path in config_paths.iter().rev() {
            if path.exists() {
                tracing::info!("Loading configuration from: {}", path.display());
                figment = figment.merge(Toml::file(path));
            }
        }

        let config = figment.merge(Self::env_provider()).extract()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    ///
    /// This bypasses the search path. Environment variables still apply.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Self::env_provider())
            .extract()?;

        Ok(config)
    }

    fn env_provider() -> Env {
        Env::prefixed(ENV_PREFIX).split("__")
    }

    /// Candidate config file paths, highest priority first
    fn find_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("config.toml")];

        let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_NAME);
        if let Some(path) = xdg_dirs.find_config_file("config.toml") {
            paths.push(path);
        }

        paths.push(PathBuf::from("/etc").join(APP_NAME).join("config.toml"));

        paths
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                name: APP_NAME.to_string(),
                host: default_host(),
                port: default_port(),
                log_level: default_log_level(),
                timeout_secs: default_timeout(),
                environment: default_environment(),
            },
            middleware: MiddlewareConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.service.port, 8080);
        assert_eq!(config.service.log_level, "info");
        assert_eq!(
            config.service.socket_addr(),
            "0.0.0.0:8080".parse::<SocketAddr>().unwrap()
        );
        assert_eq!(config.middleware.body_limit_bytes(), 1024 * 1024);
        assert_eq!(config.middleware.cors_mode, "permissive");
    }

    #[test]
    fn test_load_from_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "service.toml",
                r#"
                [service]
                name = "users-test"
                port = 9090
                log_level = "debug"

                [middleware]
                compression = false
                "#,
            )?;

            let config = Config::load_from("service.toml").map_err(|e| e.to_string())?;
            assert_eq!(config.service.name, "users-test");
            assert_eq!(config.service.port, 9090);
            assert_eq!(config.service.log_level, "debug");
            assert_eq!(config.service.timeout_secs, 30);
            assert!(!config.middleware.compression);
            assert!(config.middleware.catch_panic);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("service.toml", "[service]\nport = 9090\n")?;
            jail.set_env("USER_SERVICE_SERVICE__PORT", "9191");
            jail.set_env("USER_SERVICE_MIDDLEWARE__CORS_MODE", "restrictive");

            let config = Config::load_from("service.toml").map_err(|e| e.to_string())?;
            assert_eq!(config.service.port, 9191);
            assert_eq!(config.middleware.cors_mode, "restrictive");
            Ok(())
        });
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        Jail::expect_with(|_jail| {
            let config = Config::load_from("absent.toml").map_err(|e| e.to_string())?;
            assert_eq!(config.service.port, 8080);
            assert_eq!(config.service.name, APP_NAME);
            Ok(())
        });
    }

    #[test]
    fn test_invalid_value_is_config_error() {
        Jail::expect_with(|jail| {
            jail.create_file("service.toml", "[service]\nport = \"not-a-port\"\n")?;

            let result = Config::load_from("service.toml");
            assert!(matches!(result, Err(crate::error::Error::Config(_))));
            Ok(())
        });
    }
}
