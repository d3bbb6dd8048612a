use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::{
        article::ArticleId,
        errors::{DomainError, EntityKind},
    },
};

impl ArticleQueryService {
    #[tracing::instrument(skip(self))]
    pub async fn get_article(&self, id: i64) -> ApplicationResult<ArticleDto> {
        let article_id = ArticleId::lookup(id)?;
        let article = self
            .read_repo
            .find_by_id(article_id)
            .await?
            .ok_or_else(|| DomainError::not_found(EntityKind::Article, id))?;
        Ok(article.into())
    }
}
