//! Server configuration loaded from the environment (and `.env`, if present).

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::{bail, Context};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// Default tracing filter, used when `RUST_LOG` is unset
    pub log_level: String,
    /// Permissive CORS for the JSON API
    pub cors_allow_any: bool,
    pub site_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            log_level: "info".to_string(),
            cors_allow_any: false,
            site_name: "Warranty Pricing".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from process environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        // A missing .env file is fine
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup, falling back to
    /// defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = match lookup("HOST") {
            Some(raw) => raw
                .trim()
                .parse::<IpAddr>()
                .with_context(|| format!("HOST must be an IP address, got '{}'", raw))?,
            None => defaults.host,
        };

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a number between 0 and 65535, got '{}'", raw))?,
            None => defaults.port,
        };

        let log_level = lookup("LOG_LEVEL")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.log_level);

        let cors_allow_any = match lookup("CORS_ALLOW_ANY") {
            Some(raw) => parse_bool("CORS_ALLOW_ANY", &raw)?,
            None => defaults.cors_allow_any,
        };

        let site_name = lookup("SITE_NAME")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.site_name);

        Ok(Self {
            host,
            port,
            log_level,
            cors_allow_any,
            site_name,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_bool(key: &str, raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("{} must be true or false, got '{}'", key, other),
    }
}
