//! Runtime configuration.
//!
//! Values start from [`Config::default`] and are overridden from the environment, after an
//! optional `.env` file has been loaded. A missing catalog URL, bot token or chat id is not
//! fatal: the value stays empty, a warning is logged and the requests that need it fail
//! when they are made.

use crate::notifier::DEFAULT_TELEGRAM_API;
use std::time::Duration;
use tracing::warn;

pub const API_URL_VAR: &str = "STOREFRONT_API_URL";
pub const BOT_TOKEN_VAR: &str = "STOREFRONT_BOT_TOKEN";
pub const CHAT_ID_VAR: &str = "STOREFRONT_CHAT_ID";
pub const TELEGRAM_API_VAR: &str = "STOREFRONT_TELEGRAM_API";
pub const HTTP_TIMEOUT_VAR: &str = "STOREFRONT_HTTP_TIMEOUT_SECS";

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 15;

#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// Product listing endpoint.
    pub api_url: String,
    pub bot_token: String,
    /// Chat that receives every notification.
    pub chat_id: String,
    /// Bot API base, without the `/bot<token>` part.
    pub telegram_api: String,
    pub http_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            bot_token: String::new(),
            chat_id: String::new(),
            telegram_api: DEFAULT_TELEGRAM_API.to_string(),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Loads `.env` if present, then reads the process environment.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = read(API_URL_VAR) {
            config.api_url = v;
        }
        if let Some(v) = read(BOT_TOKEN_VAR) {
            config.bot_token = v;
        }
        if let Some(v) = read(CHAT_ID_VAR) {
            config.chat_id = v;
        }
        if let Some(v) = read(TELEGRAM_API_VAR) {
            config.telegram_api = v;
        }
        if let Some(v) = read(HTTP_TIMEOUT_VAR) {
            match v.trim().parse::<u64>() {
                Ok(0) => warn!(key = HTTP_TIMEOUT_VAR, "Ignoring zero timeout"),
                Ok(secs) => config.http_timeout = Duration::from_secs(secs),
                Err(e) => warn!(key = HTTP_TIMEOUT_VAR, value = %v, error = %e, "Ignoring invalid timeout"),
            }
        }

        for (key, value) in [
            (API_URL_VAR, &config.api_url),
            (BOT_TOKEN_VAR, &config.bot_token),
            (CHAT_ID_VAR, &config.chat_id),
        ] {
            if value.is_empty() {
                warn!(key, "Not configured, requests needing it will fail");
            }
        }

        config
    }
}

// Keeps the bot token out of logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_url", &self.api_url)
            .field("bot_token", &if self.bot_token.is_empty() { "" } else { "***" })
            .field("chat_id", &self.chat_id)
            .field("telegram_api", &self.telegram_api)
            .field("http_timeout", &self.http_timeout)
            .finish()
    }
}
