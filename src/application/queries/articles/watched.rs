use std::collections::HashSet;

use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult, settings::WatchHistoryMode},
    domain::{
        article::ArticleId,
        errors::{DomainError, EntityKind},
        user::UserId,
    },
};

impl ArticleQueryService {
    /// Articles in `user_id`'s watch history, in watch order.
    ///
    /// In append mode every record yields an entry, so repeat watches repeat
    /// the article; in unique mode each article is listed once. `article_id`
    /// only has to exist; it does not narrow the result. Records that point
    /// at deleted articles are skipped.
    #[tracing::instrument(skip(self))]
    pub async fn list_watched(&self, user_id: i64, article_id: i64) -> ApplicationResult<Vec<ArticleDto>> {
        let requested = ArticleId::lookup(article_id)?;
        if !self.read_repo.exists_by_id(requested).await? {
            return Err(DomainError::not_found(EntityKind::Article, article_id).into());
        }

        let records = match UserId::new(user_id) {
            Ok(user_id) => self.watch_repo.find_by_user(user_id).await?,
            Err(_) => Vec::new(),
        };

        let distinct = self.settings.watch_history == WatchHistoryMode::Unique;
        let mut seen = HashSet::new();
        let mut watched = Vec::new();
        for record in records {
            let id = record.key.article_id;
            if distinct && !seen.insert(id) {
                continue;
            }
            match self.read_repo.find_by_id(id).await? {
                Some(article) => watched.push(ArticleDto::from(article)),
                None => tracing::debug!(article_id = %id, "skipping watch record of deleted article"),
            }
        }

        if watched.is_empty() {
            return Err(DomainError::NoDataAvailable.into());
        }
        Ok(watched)
    }
}
