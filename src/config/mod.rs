//! Configuration module for the fronter backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// PluralKit v1 API root.
pub const DEFAULT_API_BASE: &str = "https://api.pluralkit.me/v1";

const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// System shown on the home page.
pub const DEFAULT_SYSTEM: &str = "qvzbz";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Base URL of the PluralKit API
    pub api_base: String,
    /// System identifier used by the home routes
    pub default_system: String,
    /// Directory holding the page templates
    pub template_dir: PathBuf,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Timeout applied to each upstream request
    pub http_timeout: Duration,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let bind_addr = env::var("FRONTER_BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:5000".to_string())
            .parse()
            .expect("Invalid FRONTER_BIND_ADDR format");

        let api_base =
            env::var("FRONTER_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        let default_system =
            env::var("FRONTER_DEFAULT_SYSTEM").unwrap_or_else(|_| DEFAULT_SYSTEM.to_string());

        let template_dir = env::var("FRONTER_TEMPLATE_DIR")
            .unwrap_or_else(|_| "./templates".to_string())
            .into();

        let static_dir = env::var("FRONTER_STATIC_DIR")
            .unwrap_or_else(|_| "./static".to_string())
            .into();

        let http_timeout = env::var("FRONTER_HTTP_TIMEOUT_SECS")
            .map(|raw| parse_timeout(&raw))
            .unwrap_or(Some(DEFAULT_HTTP_TIMEOUT))
            .expect("Invalid FRONTER_HTTP_TIMEOUT_SECS value");

        let log_level = env::var("FRONTER_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            bind_addr,
            api_base,
            default_system,
            template_dir,
            static_dir,
            http_timeout,
            log_level,
        }
    }
}

/// Parse a positive whole number of seconds.
fn parse_timeout(raw: &str) -> Option<Duration> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("FRONTER_BIND_ADDR");
        env::remove_var("FRONTER_API_BASE");
        env::remove_var("FRONTER_DEFAULT_SYSTEM");
        env::remove_var("FRONTER_TEMPLATE_DIR");
        env::remove_var("FRONTER_STATIC_DIR");
        env::remove_var("FRONTER_HTTP_TIMEOUT_SECS");
        env::remove_var("FRONTER_LOG_LEVEL");

        let config = Config::from_env();

        assert_eq!(config.bind_addr.to_string(), "0.0.0.0:5000");
        assert_eq!(config.api_base, "https://api.pluralkit.me/v1");
        assert_eq!(config.default_system, "qvzbz");
        assert_eq!(config.template_dir, PathBuf::from("./templates"));
        assert_eq!(config.static_dir, PathBuf::from("./static"));
        assert_eq!(config.http_timeout, Duration::from_secs(10));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_timeout_parsing() {
        assert_eq!(parse_timeout("10"), Some(Duration::from_secs(10)));
        assert_eq!(parse_timeout(" 3 "), Some(Duration::from_secs(3)));
        assert_eq!(parse_timeout("0"), None);
        assert_eq!(parse_timeout("-1"), None);
        assert_eq!(parse_timeout("soon"), None);
    }
}
