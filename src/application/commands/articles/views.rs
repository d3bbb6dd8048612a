use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::{
        article::ArticleId,
        errors::{DomainError, EntityKind},
    },
};

impl ArticleCommandService {
    /// Adds exactly one view. The increment happens inside the store, so
    /// concurrent calls never lose counts.
    #[tracing::instrument(skip(self))]
    pub async fn record_view(&self, id: i64) -> ApplicationResult<ArticleDto> {
        let article_id = ArticleId::lookup(id)?;
        let article = self
            .write_repo
            .increment_views(article_id)
            .await?
            .ok_or_else(|| DomainError::not_found(EntityKind::Article, id))?;
        Ok(article.into())
    }
}
