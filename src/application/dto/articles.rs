use crate::domain::article::{Article, ArticleContent, ArticleTitle};
use crate::domain::errors::DomainResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::CategoryDto;

pub const DELETE_SUCCESS_MESSAGE: &str = "deleted successfully";

/// Caller-supplied fields for create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleInput {
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail: String,
    pub category_id: i64,
}

impl ArticleInput {
    pub(crate) fn into_content(self) -> DomainResult<ArticleContent> {
        Ok(ArticleContent {
            title: ArticleTitle::new(self.title)?,
            content: self.content,
            author: self.author,
            description: self.description,
            thumbnail: self.thumbnail,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub description: String,
    pub thumbnail: String,
    pub views: u64,
    pub category: CategoryDto,
    pub created_by: String,
    pub last_modified_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        let ArticleContent {
            title,
            content,
            author,
            description,
            thumbnail,
        } = article.content;
        Self {
            id: article.id.into(),
            title: title.into(),
            content,
            author,
            description,
            thumbnail,
            views: article.views,
            category: article.category.into(),
            created_by: article.created_by.into(),
            last_modified_by: article.last_modified_by.into(),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

/// List-view projection. Category linkage and attribution stay out of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleSummaryDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub description: String,
    pub thumbnail: String,
    pub views: u64,
}

impl From<Article> for ArticleSummaryDto {
    fn from(article: Article) -> Self {
        let ArticleContent {
            title,
            content,
            author,
            description,
            thumbnail,
        } = article.content;
        Self {
            id: article.id.into(),
            title: title.into(),
            content,
            author,
            description,
            thumbnail,
            views: article.views,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DeleteConfirmationDto {
    pub id: i64,
    pub message: String,
}

impl DeleteConfirmationDto {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            message: DELETE_SUCCESS_MESSAGE.to_string(),
        }
    }
}
