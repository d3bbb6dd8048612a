use std::sync::Arc;

use crate::{
    application::{error::ApplicationResult, settings::NewsSettings},
    domain::{
        article::ArticleReadRepository,
        category::CategoryRepository,
        errors::DomainError,
        watch::WatchRecordRepository,
    },
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) watch_repo: Arc<dyn WatchRecordRepository>,
    pub(super) settings: NewsSettings,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        watch_repo: Arc<dyn WatchRecordRepository>,
        settings: NewsSettings,
    ) -> Self {
        Self {
            read_repo,
            category_repo,
            watch_repo,
            settings,
        }
    }

    /// Listing operations treat an empty store as an error rather than an empty result.
    pub(super) async fn ensure_not_empty(&self) -> ApplicationResult<()> {
        if self.read_repo.count().await? == 0 {
            tracing::debug!("article store is empty");
            return Err(DomainError::NoDataAvailable.into());
        }
        Ok(())
    }
}
