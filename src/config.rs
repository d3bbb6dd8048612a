// src/config.rs
use crate::application::settings::{
    CompatibilityMode, DEFAULT_RANKING_LIMIT, NewsSettings, WatchHistoryMode,
};
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    max_connections: u32,
    compatibility: CompatibilityMode,
    watch_history: WatchHistoryMode,
    ranking_limit: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://newsdesk.db?mode=rwc".into()
}

const fn default_max_connections() -> u32 {
    16
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => parse_positive("DATABASE_MAX_CONNECTIONS", &raw)?,
            None => default_max_connections(),
        };

        let compatibility = match lookup("NEWS_COMPAT_MODE") {
            Some(raw) => raw
                .parse()
                .map_err(|err| ConfigError::Invalid(format!("NEWS_COMPAT_MODE: {err}")))?,
            None => CompatibilityMode::default(),
        };

        let watch_history = match lookup("WATCH_HISTORY_MODE") {
            Some(raw) => raw
                .parse()
                .map_err(|err| ConfigError::Invalid(format!("WATCH_HISTORY_MODE: {err}")))?,
            None => WatchHistoryMode::default(),
        };

        let ranking_limit = match lookup("NEWS_RANKING_LIMIT") {
            Some(raw) => parse_positive("NEWS_RANKING_LIMIT", &raw)?,
            None => DEFAULT_RANKING_LIMIT,
        };

        Ok(Self {
            database_url,
            max_connections,
            compatibility,
            watch_history,
            ranking_limit,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub const fn max_connections(&self) -> u32 {
        self.max_connections
    }

    pub const fn news_settings(&self) -> NewsSettings {
        NewsSettings {
            compatibility: self.compatibility,
            watch_history: self.watch_history,
            ranking_limit: self.ranking_limit,
        }
    }
}

fn parse_positive(key: &str, raw: &str) -> Result<u32, ConfigError> {
    match raw.trim().parse::<u32>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ConfigError::Invalid(format!(
            "{key} must be a positive integer, got '{raw}'"
        ))),
    }
}
