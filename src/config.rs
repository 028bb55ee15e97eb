//! Configuration loading and constants.
//!
//! Loads application configuration from a TOML file and defines constants for
//! the greeting bodies, default listen address, HTTP cache TTLs, logging, and
//! shutdown behavior. `AppConfig` is the root configuration struct; every
//! field has a default so the service runs with no config file at all.

use const_format::formatcp;
use serde::Deserialize;
use std::path::Path;

// =============================================================================
// Greeting Bodies
// =============================================================================

/// The full greeting, served by default. Line breaks and indentation are part
/// of the body and must be preserved exactly.
pub const GREETING_FULL: &str = "Hello, World! This is a Flask App Tier-3 Devops Project !
    This project demonstrates containerization, CI/CD, and cloud deployment, showcasing strong Tier 3 DevOps skills while using free resources.
    Github: https://github.com/muhammadharoon26/flask-app-tier3-devops-project.git
    Made By: muhammadharoon26.vercel.app";

/// The short greeting, the first line of the full body.
pub const GREETING_SHORT: &str = "Hello, World! This is a Flask App Tier-3 Devops Project !";

// =============================================================================
// HTTP Response Cache Control
// =============================================================================
// These constants control Cache-Control headers for upstream caches (Varnish,
// nginx, CDNs). All values are in seconds. The greeting never changes for the
// lifetime of a deployment, so it gets a long max-age with stale-if-error as
// thundering herd protection.

/// Greeting body - fixed for the lifetime of the process
pub const HTTP_CACHE_GREETING_MAX_AGE: u32 = 3600;
pub const HTTP_CACHE_GREETING_SWR: u32 = 60;

/// Stale-if-error duration - serve stale content during origin failures
pub const HTTP_CACHE_STALE_IF_ERROR: u32 = 300;

pub const CACHE_CONTROL_GREETING: &str = formatcp!(
    "public, max-age={}, stale-while-revalidate={}, stale-if-error={}",
    HTTP_CACHE_GREETING_MAX_AGE,
    HTTP_CACHE_GREETING_SWR,
    HTTP_CACHE_STALE_IF_ERROR
);

// =============================================================================
// Server Defaults
// =============================================================================

/// Default listen host (all interfaces, for container use)
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

/// Default listen port
pub const DEFAULT_HTTP_PORT: u16 = 5000;

/// Seconds to wait for in-flight connections during graceful shutdown
pub const SHUTDOWN_GRACE_SECS: u64 = 30;

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "greeter=debug,tower_http=debug";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Greeting selection
    #[serde(default)]
    pub greeting: GreetingConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HTTP_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }
}

/// Which greeting body the root route serves.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GreetingConfig {
    #[serde(default)]
    pub variant: GreetingVariant,
}

/// The two greeting bodies this service can serve. `Full` is the default;
/// `Short` keeps only the first line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GreetingVariant {
    #[default]
    Full,
    Short,
}

impl GreetingVariant {
    /// The response body served for this variant.
    pub fn body(self) -> &'static str {
        match self {
            GreetingVariant::Full => GREETING_FULL,
            GreetingVariant::Short => GREETING_SHORT,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default)]
    pub format: LogFormat,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to built-in defaults
    /// when the file does not exist. A file that exists but fails to read or
    /// parse is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_bind_all_interfaces_on_5000() {
        let config = AppConfig::default();
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.http.port, 5000);
        assert_eq!(config.greeting.variant, GreetingVariant::Full);
        assert_eq!(config.logging.format, LogFormat::Text);
    }

    #[test]
    fn empty_file_yields_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.http.port, 5000);
        assert_eq!(config.greeting.variant, GreetingVariant::Full);
    }

    #[test]
    fn full_config_parses() {
        let config: AppConfig = toml::from_str(
            r#"
            [http]
            host = "127.0.0.1"
            port = 8080

            [greeting]
            variant = "short"

            [logging]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.http.host, "127.0.0.1");
        assert_eq!(config.http.port, 8080);
        assert_eq!(config.greeting.variant, GreetingVariant::Short);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn unknown_variant_is_rejected() {
        let result: Result<AppConfig, _> = toml::from_str(
            r#"
            [greeting]
            variant = "medium"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn variant_selects_body() {
        assert_eq!(GreetingVariant::Full.body(), GREETING_FULL);
        assert_eq!(GreetingVariant::Short.body(), GREETING_SHORT);
        assert!(GREETING_FULL.starts_with(GREETING_SHORT));
    }

    #[test]
    fn load_or_default_without_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let config = AppConfig::load_or_default(&path).unwrap();
        assert_eq!(config.http.port, 5000);
    }

    #[test]
    fn load_reads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("greeter.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[http]\nhost = \"127.0.0.1\"\nport = 9000").unwrap();
        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.http.host, "127.0.0.1");
        assert_eq!(config.http.port, 9000);
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[http\nport = ").unwrap();
        match AppConfig::load(&path) {
            Err(ConfigError::Parse(_)) => {}
            other => panic!("expected parse error, got {:?}", other),
        }
    }
}
