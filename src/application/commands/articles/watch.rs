// src/application/commands/articles/watch.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult, settings::WatchHistoryMode},
    domain::{
        article::ArticleId,
        errors::{DomainError, EntityKind},
        user::UserId,
        watch::{WatchEntry, WatchKey, WatchRecord},
    },
};

impl ArticleCommandService {
    /// Counts a view of `article_id` and, when `user_id` belongs to a known
    /// actor, records it in that actor's watch history. The view and the
    /// history record are stored together or not at all.
    #[tracing::instrument(skip(self))]
    pub async fn record_watch(&self, user_id: i64, article_id: i64) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::lookup(article_id)?;
        if !self.read_repo.exists_by_id(id).await? {
            return Err(DomainError::not_found(EntityKind::Article, article_id).into());
        }

        let updated = match self.known_user(user_id).await? {
            Some(user_id) => {
                let record = WatchRecord::new(WatchKey::new(user_id, id), self.clock.now());
                let entry = match self.settings.watch_history {
                    WatchHistoryMode::Append => WatchEntry::Append(record),
                    WatchHistoryMode::Unique => WatchEntry::Touch(record),
                };
                self.write_repo.record_watch(id, entry).await?
            }
            None => {
                tracing::debug!(user_id, "unknown actor, counting view without history");
                self.write_repo.increment_views(id).await?
            }
        };

        let article =
            updated.ok_or_else(|| DomainError::not_found(EntityKind::Article, article_id))?;
        Ok(article.into())
    }

    async fn known_user(&self, raw_id: i64) -> ApplicationResult<Option<UserId>> {
        let Ok(user_id) = UserId::new(raw_id) else {
            return Ok(None);
        };
        if self.user_repo.exists_by_id(user_id).await? {
            Ok(Some(user_id))
        } else {
            Ok(None)
        }
    }
}
