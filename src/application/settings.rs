// src/application/settings.rs
use std::str::FromStr;

use crate::domain::errors::DomainError;

/// Selects between the historical listing arithmetic and the corrected one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompatibilityMode {
    /// Home page and key search report the page size as the page count,
    /// category filtering counts only the current page, and updates reject
    /// any existing title including the article's own.
    #[default]
    Legacy,
    /// Page counts come from store-side totals; updates may keep their own title.
    Corrected,
}

impl FromStr for CompatibilityMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "corrected" => Ok(Self::Corrected),
            other => Err(DomainError::Validation(format!(
                "unknown compatibility mode '{other}'"
            ))),
        }
    }
}

/// How repeated watches of the same article by the same actor are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WatchHistoryMode {
    /// One record per watch.
    #[default]
    Append,
    /// One record per (actor, article) pair, refreshed on every watch.
    Unique,
}

impl FromStr for WatchHistoryMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "append" => Ok(Self::Append),
            "unique" => Ok(Self::Unique),
            other => Err(DomainError::Validation(format!(
                "unknown watch history mode '{other}'"
            ))),
        }
    }
}

pub const DEFAULT_RANKING_LIMIT: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewsSettings {
    pub compatibility: CompatibilityMode,
    pub watch_history: WatchHistoryMode,
    pub ranking_limit: u32,
}

impl Default for NewsSettings {
    fn default() -> Self {
        Self {
            compatibility: CompatibilityMode::default(),
            watch_history: WatchHistoryMode::default(),
            ranking_limit: DEFAULT_RANKING_LIMIT,
        }
    }
}

impl NewsSettings {
    pub const fn is_legacy(&self) -> bool {
        matches!(self.compatibility, CompatibilityMode::Legacy)
    }
}
