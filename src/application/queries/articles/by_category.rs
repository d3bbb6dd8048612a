// src/application/queries/articles/by_category.rs
use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleSummaryDto, CategoryArticlesDto},
        error::ApplicationResult,
    },
    domain::{
        article::CategoryFilter,
        category::CategoryId,
        errors::{DomainError, EntityKind},
        pagination::{PageRequest, SortDirection},
    },
};

pub struct FilterByCategoryQuery {
    pub page: u32,
    pub size: u32,
    pub author: Option<String>,
    pub title: Option<String>,
    pub category_id: i64,
    /// `desc` (any case) sorts newest first; everything else sorts oldest first.
    pub sort: Option<String>,
}

impl ArticleQueryService {
    #[tracing::instrument(skip_all, fields(category_id = query.category_id, page = query.page, size = query.size))]
    pub async fn filter_by_category(
        &self,
        query: FilterByCategoryQuery,
    ) -> ApplicationResult<CategoryArticlesDto> {
        let FilterByCategoryQuery {
            page,
            size,
            author,
            title,
            category_id,
            sort,
        } = query;

        let id = CategoryId::lookup(category_id)?;
        let category = self
            .category_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(EntityKind::Category, category_id))?;

        let request = PageRequest::new(page, size)?;
        let direction = SortDirection::from_filter(sort.as_deref());
        let filter = CategoryFilter::new(id, author, title);

        let records = self
            .read_repo
            .filter_by_category(&filter, request, direction)
            .await?;

        let total = if self.settings.is_legacy() {
            records.len() as u64
        } else {
            self.read_repo.count_by_category(&filter).await?
        };

        Ok(CategoryArticlesDto {
            items: records.into_iter().map(ArticleSummaryDto::from).collect(),
            category: category.into(),
            total_pages: request.total_pages(total),
        })
    }
}
