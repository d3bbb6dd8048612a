// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::DeleteConfirmationDto, error::ApplicationResult},
    domain::{
        article::ArticleId,
        errors::{DomainError, EntityKind},
    },
};

impl ArticleCommandService {
    /// Hard delete. Watch records that point at the article are kept.
    #[tracing::instrument(skip(self))]
    pub async fn delete_article(&self, id: i64) -> ApplicationResult<DeleteConfirmationDto> {
        let article_id = ArticleId::lookup(id)?;
        if !self.read_repo.exists_by_id(article_id).await? {
            return Err(DomainError::not_found(EntityKind::Article, id).into());
        }

        self.write_repo.delete(article_id).await?;
        tracing::info!(article_id = id, "article deleted");
        Ok(DeleteConfirmationDto::new(id))
    }
}
