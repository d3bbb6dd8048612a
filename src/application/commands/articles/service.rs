// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::ApplicationResult,
        ports::{identity::IdentityResolver, time::Clock},
        settings::NewsSettings,
    },
    domain::{
        article::{Article, ArticleId, ArticleReadRepository, ArticleTitle, ArticleWriteRepository},
        category::{Category, CategoryId, CategoryRepository},
        errors::{DomainError, EntityKind},
        user::UserRepository,
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) identity: Arc<dyn IdentityResolver>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) settings: NewsSettings,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        user_repo: Arc<dyn UserRepository>,
        identity: Arc<dyn IdentityResolver>,
        clock: Arc<dyn Clock>,
        settings: NewsSettings,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            category_repo,
            user_repo,
            identity,
            clock,
            settings,
        }
    }

    pub(super) async fn find_article(&self, id: ArticleId) -> ApplicationResult<Article> {
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(EntityKind::Article, id.into()).into())
    }

    pub(super) async fn find_category(&self, raw_id: i64) -> ApplicationResult<Category> {
        let id = CategoryId::lookup(raw_id)?;
        self.category_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(EntityKind::Category, raw_id).into())
    }

    pub(super) async fn ensure_title_available(
        &self,
        title: &ArticleTitle,
        except: Option<ArticleId>,
    ) -> ApplicationResult<()> {
        if self.read_repo.exists_by_title(title, except).await? {
            tracing::debug!(title = %title, "title already taken");
            return Err(DomainError::duplicate_name(title.as_str()).into());
        }
        Ok(())
    }
}
