// src/application/queries/articles/list.rs
use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, PageDto},
        error::ApplicationResult,
    },
    domain::pagination::PageRequest,
};

impl ArticleQueryService {
    /// Newest modification first; `total_pages = ceil(count / size)`.
    #[tracing::instrument(skip(self))]
    pub async fn search_all(&self, page: u32, size: u32) -> ApplicationResult<PageDto<ArticleDto>> {
        let request = PageRequest::new(page, size)?;
        let total = self.read_repo.count().await?;
        let records = self.read_repo.list_page(request).await?;

        let items = records.into_iter().map(Into::into).collect();
        Ok(PageDto::new(items, page, request.total_pages(total)))
    }

    /// Every article in store order.
    #[tracing::instrument(skip(self))]
    pub async fn list_all(&self) -> ApplicationResult<Vec<ArticleDto>> {
        self.ensure_not_empty().await?;
        let records = self.read_repo.find_all().await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    /// Same ordering as [`Self::search_all`]. In legacy mode the page size is
    /// reported as the page count.
    #[tracing::instrument(skip(self))]
    pub async fn paginate_home_page(
        &self,
        page: u32,
        size: u32,
    ) -> ApplicationResult<PageDto<ArticleDto>> {
        let request = PageRequest::new(page, size)?;
        self.ensure_not_empty().await?;

        let records = self.read_repo.list_page(request).await?;
        let total_pages = if self.settings.is_legacy() {
            size
        } else {
            request.total_pages(self.read_repo.count().await?)
        };

        let items = records.into_iter().map(Into::into).collect();
        Ok(PageDto::new(items, page, total_pages))
    }

    /// Zero for an empty store, otherwise the store's own record count.
    #[tracing::instrument(skip(self))]
    pub async fn count_records(&self) -> ApplicationResult<u64> {
        if self.read_repo.count().await? == 0 {
            return Ok(0);
        }
        Ok(self.read_repo.count_records().await?)
    }
}
