// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::articles::ArticleCommandService,
        ports::{identity::IdentityResolver, time::Clock},
        queries::articles::ArticleQueryService,
        settings::NewsSettings,
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        category::CategoryRepository,
        user::UserRepository,
        watch::WatchRecordRepository,
    },
};

/// Store handles the news services are built from.
pub struct NewsRepositories {
    pub article_write: Arc<dyn ArticleWriteRepository>,
    pub article_read: Arc<dyn ArticleReadRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub users: Arc<dyn UserRepository>,
    pub watches: Arc<dyn WatchRecordRepository>,
}

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    settings: NewsSettings,
}

impl ApplicationServices {
    pub fn new(
        repos: NewsRepositories,
        identity: Arc<dyn IdentityResolver>,
        clock: Arc<dyn Clock>,
        settings: NewsSettings,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&repos.article_write),
            Arc::clone(&repos.article_read),
            Arc::clone(&repos.categories),
            Arc::clone(&repos.users),
            identity,
            clock,
            settings,
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&repos.article_read),
            Arc::clone(&repos.categories),
            Arc::clone(&repos.watches),
            settings,
        ));

        Self {
            article_commands,
            article_queries,
            settings,
        }
    }

    pub const fn settings(&self) -> &NewsSettings {
        &self.settings
    }
}
