use std::{env, time::Duration};
use tracing::warn;

const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Artificial latency added by the placeholder endpoints.
    pub mock_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            mock_delay: Duration::ZERO,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let port = parse_or("PORT", lookup("PORT"), defaults.port);
        let delay_ms = parse_or("APP_MOCK_DELAY_MS", lookup("APP_MOCK_DELAY_MS"), 0u64);

        Self {
            port,
            mock_delay: Duration::from_millis(delay_ms),
        }
    }
}

fn parse_or<T: std::str::FromStr + Copy>(key: &str, raw: Option<String>, default: T) -> T {
    match raw {
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            warn!("ignoring invalid {key}={value:?}");
            default
        }),
        None => default,
    }
}
