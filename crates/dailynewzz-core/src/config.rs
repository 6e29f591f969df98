//! Runtime configuration for DailyNewzz.
//!
//! Secrets and tunables come from the process environment. The binary loads
//! `.env` files into the environment before calling [`BotConfig::from_env`].
//!
//! # Environment Variables
//!
//! Required:
//! - `TELEGRAM_BOT_TOKEN`: chat platform token
//! - `NEWS_API_KEY`: key for the headlines endpoint
//!
//! Optional:
//! - `NEWS_API_URL`: endpoint (default: `https://newsapi.org/v2/top-headlines`)
//! - `NEWS_COUNTRY`: country code (default: `us`)
//! - `NEWS_TIMEOUT_SECS`: request timeout in seconds (default: 10)
//! - `DAILYNEWZZ_CONFIG_DIR`: where `.env` is looked up (default: `~/.dailynewzz`)

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

pub const TELEGRAM_TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";
pub const NEWS_API_KEY_ENV: &str = "NEWS_API_KEY";
pub const NEWS_API_URL_ENV: &str = "NEWS_API_URL";
pub const NEWS_COUNTRY_ENV: &str = "NEWS_COUNTRY";
pub const NEWS_TIMEOUT_ENV: &str = "NEWS_TIMEOUT_SECS";
pub const CONFIG_DIR_ENV: &str = "DAILYNEWZZ_CONFIG_DIR";

/// Default headlines endpoint.
pub const DEFAULT_NEWS_API_URL: &str = "https://newsapi.org/v2/top-headlines";

/// Default country code for headlines.
pub const DEFAULT_COUNTRY: &str = "us";

/// Default upstream request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const DEFAULT_CONFIG_DIR: &str = ".dailynewzz";

/// Get the config directory.
///
/// `DAILYNEWZZ_CONFIG_DIR` if set, else `~/.dailynewzz`, else `.dailynewzz`
/// in the current directory.
pub fn config_dir() -> PathBuf {
    std::env::var(CONFIG_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            dirs::home_dir()
                .map(|h| h.join(DEFAULT_CONFIG_DIR))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIR))
        })
}

/// Get the `.env` file inside the config directory.
pub fn env_file() -> PathBuf {
    config_dir().join(".env")
}

/// Validated startup configuration.
#[derive(Clone)]
pub struct BotConfig {
    pub telegram_token: String,
    pub news_api_key: String,
    pub news_api_url: Url,
    pub country: String,
    pub request_timeout: Duration,
}

impl fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotConfig")
            .field("telegram_token", &"<redacted>")
            .field("news_api_key", &"<redacted>")
            .field("news_api_url", &self.news_api_url.as_str())
            .field("country", &self.country)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl BotConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load using an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let telegram_token = get(TELEGRAM_TOKEN_ENV).ok_or(ConfigError::Missing(TELEGRAM_TOKEN_ENV))?;
        let news_api_key = get(NEWS_API_KEY_ENV).ok_or(ConfigError::Missing(NEWS_API_KEY_ENV))?;

        let raw_url = get(NEWS_API_URL_ENV).unwrap_or_else(|| DEFAULT_NEWS_API_URL.to_string());
        let news_api_url = Url::parse(&raw_url).map_err(|e| ConfigError::Invalid {
            name: NEWS_API_URL_ENV,
            reason: e.to_string(),
        })?;

        let country = get(NEWS_COUNTRY_ENV)
            .map(|c| c.to_lowercase())
            .unwrap_or_else(|| DEFAULT_COUNTRY.to_string());

        let timeout_secs = match get(NEWS_TIMEOUT_ENV) {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: NEWS_TIMEOUT_ENV,
                        reason: format!("expected a positive number of seconds, got '{}'", raw),
                    })
                }
            },
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            telegram_token,
            news_api_key,
            news_api_url,
            country,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_applied() {
        let config = BotConfig::from_lookup(lookup(&[
            (TELEGRAM_TOKEN_ENV, "tg-token"),
            (NEWS_API_KEY_ENV, "news-key"),
        ]))
        .unwrap();

        assert_eq!(config.telegram_token, "tg-token");
        assert_eq!(config.news_api_key, "news-key");
        assert_eq!(config.news_api_url.as_str(), DEFAULT_NEWS_API_URL);
        assert_eq!(config.country, "us");
        assert_eq!(config.request_timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_missing_token_is_fatal() {
        let err = BotConfig::from_lookup(lookup(&[(NEWS_API_KEY_ENV, "k")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing(TELEGRAM_TOKEN_ENV)));
    }

    #[test]
    fn test_missing_news_key_is_fatal() {
        let err = BotConfig::from_lookup(lookup(&[(TELEGRAM_TOKEN_ENV, "t")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing(NEWS_API_KEY_ENV)));
    }

    #[test]
    fn test_blank_value_counts_as_missing() {
        let err = BotConfig::from_lookup(lookup(&[
            (TELEGRAM_TOKEN_ENV, "t"),
            (NEWS_API_KEY_ENV, "   "),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Missing(NEWS_API_KEY_ENV)));
    }

    #[test]
    fn test_overrides() {
        let config = BotConfig::from_lookup(lookup(&[
            (TELEGRAM_TOKEN_ENV, "t"),
            (NEWS_API_KEY_ENV, "k"),
            (NEWS_API_URL_ENV, "http://127.0.0.1:9000/v2/top-headlines"),
            (NEWS_COUNTRY_ENV, "GB"),
            (NEWS_TIMEOUT_ENV, "3"),
        ]))
        .unwrap();

        assert_eq!(config.news_api_url.port(), Some(9000));
        assert_eq!(config.country, "gb");
        assert_eq!(config.request_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let bad_url = BotConfig::from_lookup(lookup(&[
            (TELEGRAM_TOKEN_ENV, "t"),
            (NEWS_API_KEY_ENV, "k"),
            (NEWS_API_URL_ENV, "not a url"),
        ]));
        assert!(matches!(bad_url, Err(ConfigError::Invalid { name: NEWS_API_URL_ENV, .. })));

        let bad_timeout = BotConfig::from_lookup(lookup(&[
            (TELEGRAM_TOKEN_ENV, "t"),
            (NEWS_API_KEY_ENV, "k"),
            (NEWS_TIMEOUT_ENV, "0"),
        ]));
        assert!(matches!(bad_timeout, Err(ConfigError::Invalid { name: NEWS_TIMEOUT_ENV, .. })));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = BotConfig::from_lookup(lookup(&[
            (TELEGRAM_TOKEN_ENV, "secret-token"),
            (NEWS_API_KEY_ENV, "secret-key"),
        ]))
        .unwrap();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("secret-token"));
        assert!(!rendered.contains("secret-key"));
    }

    #[test]
    fn test_env_file_name() {
        assert!(env_file().ends_with(".env"));
    }
}
