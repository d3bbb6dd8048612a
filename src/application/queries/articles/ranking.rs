use super::ArticleQueryService;
use crate::application::{dto::ArticleDto, error::ApplicationResult};

impl ArticleQueryService {
    /// Most viewed first.
    ///
    /// Only an empty store is reported as missing data; an empty ranking is
    /// returned as is.
    #[tracing::instrument(skip(self))]
    pub async fn favorites(&self) -> ApplicationResult<Vec<ArticleDto>> {
        self.ensure_not_empty().await?;
        let records = self.read_repo.most_viewed(self.settings.ranking_limit).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    /// Least viewed first.
    #[tracing::instrument(skip(self))]
    pub async fn least_viewed(&self) -> ApplicationResult<Vec<ArticleDto>> {
        self.ensure_not_empty().await?;
        let records = self.read_repo.least_viewed(self.settings.ranking_limit).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
