// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleTitle};
use crate::domain::category::{Category, CategoryId};
use crate::domain::user::DisplayName;
use chrono::{DateTime, Utc};

/// Editable fields of an article, validated before they reach a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleContent {
    pub title: ArticleTitle,
    pub content: String,
    pub author: String,
    pub description: String,
    pub thumbnail: String,
}

impl ArticleContent {
    /// Title, description and author joined by spaces and upper-cased with
    /// Unicode case mapping. Stores keep this alongside the article so key
    /// search compares both sides folded the same way.
    pub fn search_text(&self) -> String {
        format!("{} {} {}", self.title.as_str(), self.description, self.author).to_uppercase()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub content: ArticleContent,
    pub views: u64,
    pub category: Category,
    pub created_by: DisplayName,
    pub last_modified_by: DisplayName,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn title(&self) -> &ArticleTitle {
        &self.content.title
    }

    /// Builds the replacement value for an update. Creator attribution,
    /// view count and creation time carry over from `self`.
    #[must_use]
    pub fn revise(
        &self,
        content: ArticleContent,
        category: Category,
        modified_by: DisplayName,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: self.id,
            content,
            views: self.views,
            category,
            created_by: self.created_by.clone(),
            last_modified_by: modified_by,
            created_at: self.created_at,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub content: ArticleContent,
    pub category_id: CategoryId,
    pub created_by: DisplayName,
    pub created_at: DateTime<Utc>,
}

impl NewArticle {
    pub fn new(
        content: ArticleContent,
        category_id: CategoryId,
        created_by: DisplayName,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            content,
            category_id,
            created_by,
            created_at,
        }
    }

    /// Creator and last modifier start out identical.
    pub fn last_modified_by(&self) -> &DisplayName {
        &self.created_by
    }
}

/// Optional substring filters applied within a single category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    pub category_id: CategoryId,
    pub author: Option<String>,
    pub title: Option<String>,
}

impl CategoryFilter {
    pub fn new(category_id: CategoryId, author: Option<String>, title: Option<String>) -> Self {
        Self {
            category_id,
            author: author.filter(|value| !value.is_empty()),
            title: title.filter(|value| !value.is_empty()),
        }
    }

    pub fn matches(&self, article: &Article) -> bool {
        article.category.id == self.category_id
            && self
                .author
                .as_deref()
                .is_none_or(|author| article.content.author.contains(author))
            && self
                .title
                .as_deref()
                .is_none_or(|title| article.content.title.as_str().contains(title))
    }
}
