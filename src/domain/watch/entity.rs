use crate::domain::article::ArticleId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// Natural key of a watch fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WatchKey {
    pub user_id: UserId,
    pub article_id: ArticleId,
}

impl WatchKey {
    pub const fn new(user_id: UserId, article_id: ArticleId) -> Self {
        Self {
            user_id,
            article_id,
        }
    }
}

/// "This actor has viewed this article."
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchRecord {
    pub key: WatchKey,
    pub watched_at: DateTime<Utc>,
}

impl WatchRecord {
    pub const fn new(key: WatchKey, watched_at: DateTime<Utc>) -> Self {
        Self { key, watched_at }
    }
}

/// A watch fact to store together with the view it counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchEntry {
    /// Always adds a record.
    Append(WatchRecord),
    /// Refreshes `watched_at` of the pair's record, inserting it when absent.
    Touch(WatchRecord),
}

impl WatchEntry {
    pub const fn record(&self) -> &WatchRecord {
        match self {
            Self::Append(record) | Self::Touch(record) => record,
        }
    }
}
