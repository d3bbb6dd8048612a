use crate::domain::category::Category;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ArticleSummaryDto;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.into(),
            name: category.name,
        }
    }
}

/// Projected rows of one category plus the category itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryArticlesDto {
    pub items: Vec<ArticleSummaryDto>,
    pub category: CategoryDto,
    pub total_pages: u32,
}
