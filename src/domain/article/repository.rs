use crate::domain::article::entity::{Article, CategoryFilter, NewArticle};
use crate::domain::article::value_objects::{ArticleId, ArticleTitle, SearchPattern};
use crate::domain::errors::DomainResult;
use crate::domain::pagination::{PageRequest, SortDirection};
use crate::domain::watch::WatchEntry;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    /// Persists every mutable field of `article`, keyed by its id.
    async fn update(&self, article: &Article) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
    /// Adds one view in a single store-side step. `None` when the id is unknown.
    async fn increment_views(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    /// Adds one view and writes `entry` as one unit of work. Nothing is
    /// written when the id is unknown, which yields `None`.
    async fn record_watch(
        &self,
        id: ArticleId,
        entry: WatchEntry,
    ) -> DomainResult<Option<Article>>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn exists_by_id(&self, id: ArticleId) -> DomainResult<bool>;
    /// Exact match. `except` leaves one article out of the comparison.
    async fn exists_by_title(
        &self,
        title: &ArticleTitle,
        except: Option<ArticleId>,
    ) -> DomainResult<bool>;
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    /// Every article in store order.
    async fn find_all(&self) -> DomainResult<Vec<Article>>;
    /// Newest modification first.
    async fn list_page(&self, page: PageRequest) -> DomainResult<Vec<Article>>;
    async fn count(&self) -> DomainResult<u64>;
    async fn most_viewed(&self, limit: u32) -> DomainResult<Vec<Article>>;
    async fn least_viewed(&self, limit: u32) -> DomainResult<Vec<Article>>;
    /// Ordered by creation time in `direction`.
    async fn filter_by_category(
        &self,
        filter: &CategoryFilter,
        page: PageRequest,
        direction: SortDirection,
    ) -> DomainResult<Vec<Article>>;
    async fn count_by_category(&self, filter: &CategoryFilter) -> DomainResult<u64>;
    async fn search_by_key(
        &self,
        pattern: &SearchPattern,
        page: PageRequest,
    ) -> DomainResult<Vec<Article>>;
    async fn count_by_key(&self, pattern: &SearchPattern) -> DomainResult<u64>;
    /// Store-defined count of countable records.
    async fn count_records(&self) -> DomainResult<u64>;
}
