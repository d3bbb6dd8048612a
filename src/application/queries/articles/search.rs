use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, PageDto},
        error::ApplicationResult,
    },
    domain::{article::SearchPattern, errors::DomainError, pagination::PageRequest},
};

impl ArticleQueryService {
    /// Case-insensitive substring search over the composite search field.
    /// A blank key is reported as missing data.
    #[tracing::instrument(skip(self))]
    pub async fn search_by_key(
        &self,
        page: u32,
        size: u32,
        key: &str,
    ) -> ApplicationResult<PageDto<ArticleDto>> {
        let pattern = SearchPattern::from_key(key).ok_or(DomainError::NoDataAvailable)?;
        let request = PageRequest::new(page, size)?;

        let records = self.read_repo.search_by_key(&pattern, request).await?;
        let total_pages = if self.settings.is_legacy() {
            size
        } else {
            request.total_pages(self.read_repo.count_by_key(&pattern).await?)
        };

        let items = records.into_iter().map(Into::into).collect();
        Ok(PageDto::new(items, page, total_pages))
    }
}
