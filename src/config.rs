//! Service configuration from the environment

use std::net::SocketAddr;

use anyhow::Context;

use crate::share::Currency;

const DEFAULT_SHARE_BASE_URL: &str = "https://wa.me/";

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Currency used when a share request does not name one
    pub default_currency: Currency,
    /// Base of the share link, the message is appended as `?text=`
    pub share_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            default_currency: Currency::Try,
            share_base_url: DEFAULT_SHARE_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present)
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got '{}'", raw))?,
            None => defaults.port,
        };

        let default_currency = match lookup("DEFAULT_CURRENCY") {
            Some(raw) => raw.parse::<Currency>()?,
            None => defaults.default_currency,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            default_currency,
            share_base_url: lookup("SHARE_BASE_URL").unwrap_or(defaults.share_base_url),
        })
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid listen address {}:{}", self.host, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.default_currency, Currency::Try);
        assert_eq!(config.share_base_url, "https://wa.me/");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("DEFAULT_CURRENCY", "usd"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.default_currency, Currency::Usd);
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn test_invalid_values() {
        assert!(Config::from_lookup(lookup(&[("PORT", "http")])).is_err());
        assert!(Config::from_lookup(lookup(&[("DEFAULT_CURRENCY", "GBP")])).is_err());
    }
}
