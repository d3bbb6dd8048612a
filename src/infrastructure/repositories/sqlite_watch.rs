use super::error::map_sqlx;
use crate::domain::article::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use crate::domain::watch::{WatchEntry, WatchKey, WatchRecord, WatchRecordRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqliteConnection, SqlitePool};
use std::sync::Arc;

/// Watch history in `user_news`. `news_id` has no foreign key, so history
/// outlives deleted articles.
#[derive(Clone)]
pub struct SqliteWatchRecordRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteWatchRecordRepository {
    pub const fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct WatchRow {
    user_id: i64,
    news_id: i64,
    watched_at: DateTime<Utc>,
}

impl TryFrom<WatchRow> for WatchRecord {
    type Error = DomainError;

    fn try_from(row: WatchRow) -> Result<Self, Self::Error> {
        let key = WatchKey::new(UserId::new(row.user_id)?, ArticleId::new(row.news_id)?);
        Ok(Self::new(key, row.watched_at))
    }
}

const INSERT_WATCH: &str = "INSERT INTO user_news (user_id, news_id, watched_at) VALUES (?, ?, ?)";

/// Writes `entry` on `conn`; the caller owns the surrounding transaction.
pub(super) async fn write_entry(conn: &mut SqliteConnection, entry: &WatchEntry) -> DomainResult<()> {
    let record = entry.record();
    let user_id = i64::from(record.key.user_id);
    let news_id = i64::from(record.key.article_id);

    if let WatchEntry::Touch(_) = entry {
        let touched = sqlx::query(
            "UPDATE user_news SET watched_at = ? WHERE user_id = ? AND news_id = ?",
        )
        .bind(record.watched_at)
        .bind(user_id)
        .bind(news_id)
        .execute(&mut *conn)
        .await
        .map_err(map_sqlx)?;

        if touched.rows_affected() > 0 {
            return Ok(());
        }
    }

    sqlx::query(INSERT_WATCH)
        .bind(user_id)
        .bind(news_id)
        .bind(record.watched_at)
        .execute(&mut *conn)
        .await
        .map_err(map_sqlx)?;
    Ok(())
}

#[async_trait]
impl WatchRecordRepository for SqliteWatchRecordRepository {
    async fn find_all(&self) -> DomainResult<Vec<WatchRecord>> {
        let rows = sqlx::query_as::<_, WatchRow>(
            "SELECT user_id, news_id, watched_at FROM user_news ORDER BY id",
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;
        rows.into_iter().map(WatchRecord::try_from).collect()
    }

    async fn find_by_user(&self, user_id: UserId) -> DomainResult<Vec<WatchRecord>> {
        let rows = sqlx::query_as::<_, WatchRow>(
            "SELECT user_id, news_id, watched_at FROM user_news WHERE user_id = ? ORDER BY id",
        )
        .bind(i64::from(user_id))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;
        rows.into_iter().map(WatchRecord::try_from).collect()
    }
}
