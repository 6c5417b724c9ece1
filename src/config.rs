// src/config.rs
use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub session_ttl: Duration,
    pub purge_interval: Duration,
    pub admin_key: String,
    /// Base URL of the remote notification service. Unset means stub sink.
    pub notify_url: Option<String>,
    pub notify_delay: Duration,
    pub chat_seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            session_ttl: Duration::from_secs(1800),
            purge_interval: Duration::from_secs(60),
            admin_key: "change-me".to_string(),
            notify_url: None,
            notify_delay: Duration::from_millis(1000),
            chat_seed: None,
        }
    }
}

impl AppConfig {
    /// Reads `.env` (if present) and the `PROSPER_*` variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let bind_addr = match get("PROSPER_BIND_ADDR") {
            Some(v) => parse(&v, "PROSPER_BIND_ADDR")?,
            None => defaults.bind_addr,
        };
        let session_ttl = match get("PROSPER_SESSION_TTL_SECS") {
            Some(v) => Duration::from_secs(parse(&v, "PROSPER_SESSION_TTL_SECS")?),
            None => defaults.session_ttl,
        };
        let purge_interval = match get("PROSPER_PURGE_INTERVAL_SECS") {
            Some(v) => Duration::from_secs(parse(&v, "PROSPER_PURGE_INTERVAL_SECS")?),
            None => defaults.purge_interval,
        };
        let notify_delay = match get("PROSPER_NOTIFY_DELAY_MS") {
            Some(v) => Duration::from_millis(parse(&v, "PROSPER_NOTIFY_DELAY_MS")?),
            None => defaults.notify_delay,
        };
        let chat_seed = match get("PROSPER_CHAT_SEED") {
            Some(v) => Some(parse(&v, "PROSPER_CHAT_SEED")?),
            None => None,
        };

        Ok(Self {
            bind_addr,
            session_ttl,
            purge_interval,
            admin_key: get("PROSPER_ADMIN_KEY").unwrap_or(defaults.admin_key),
            notify_url: get("PROSPER_NOTIFY_URL"),
            notify_delay,
            chat_seed,
        })
    }
}

fn parse<T: std::str::FromStr>(value: &str, var: &'static str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        var,
        value: value.to_string(),
    })
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
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_env_gives_defaults() {
        let cfg = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.bind_addr.port(), 3000);
        assert_eq!(cfg.session_ttl, Duration::from_secs(1800));
        assert!(cfg.notify_url.is_none());
        assert!(cfg.chat_seed.is_none());
    }

    #[test]
    fn reads_overrides() {
        let cfg = AppConfig::from_lookup(lookup(&[
            ("PROSPER_BIND_ADDR", "127.0.0.1:8081"),
            ("PROSPER_NOTIFY_DELAY_MS", "0"),
            ("PROSPER_CHAT_SEED", "42"),
            ("PROSPER_NOTIFY_URL", "http://mailer.internal"),
            ("PROSPER_ADMIN_KEY", "s3cret"),
        ]))
        .unwrap();
        assert_eq!(cfg.bind_addr.port(), 8081);
        assert_eq!(cfg.notify_delay, Duration::ZERO);
        assert_eq!(cfg.chat_seed, Some(42));
        assert_eq!(cfg.notify_url.as_deref(), Some("http://mailer.internal"));
        assert_eq!(cfg.admin_key, "s3cret");
    }

    #[test]
    fn rejects_garbage() {
        let err = AppConfig::from_lookup(lookup(&[("PROSPER_SESSION_TTL_SECS", "soon")])).unwrap_err();
        assert!(err.to_string().contains("PROSPER_SESSION_TTL_SECS"));
    }
}
