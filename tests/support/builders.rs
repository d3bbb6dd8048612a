// tests/support/builders.rs
use newsdesk_core::application::dto::ArticleInput;

use super::helpers::WORLD;

pub struct ArticleInputBuilder {
    title: String,
    content: String,
    author: String,
    description: String,
    thumbnail: String,
    category_id: i64,
}

impl ArticleInputBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: "Body text".into(),
            author: "Staff Writer".into(),
            description: "Summary".into(),
            thumbnail: "thumb.jpg".into(),
            category_id: WORLD,
        }
    }

    pub fn category(mut self, category_id: i64) -> Self {
        self.category_id = category_id;
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn build(self) -> ArticleInput {
        ArticleInput {
            title: self.title,
            content: self.content,
            author: self.author,
            description: self.description,
            thumbnail: self.thumbnail,
            category_id: self.category_id,
        }
    }
}

pub fn input(title: &str) -> ArticleInput {
    ArticleInputBuilder::new(title).build()
}
