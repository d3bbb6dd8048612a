// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, ArticleInput, Credential},
        error::ApplicationResult,
    },
    domain::article::NewArticle,
};

impl ArticleCommandService {
    /// Creates an article attributed to the actor behind `credential`.
    ///
    /// The title must not exist yet and the category must exist. Creator and
    /// last-modifier attribution both start as the actor's display name and
    /// the view count starts at zero.
    #[tracing::instrument(skip_all, fields(title = %input.title, category_id = input.category_id))]
    pub async fn create_article(
        &self,
        credential: &Credential,
        input: ArticleInput,
    ) -> ApplicationResult<ArticleDto> {
        let category_id = input.category_id;
        let content = input.into_content()?;

        self.ensure_title_available(&content.title, None).await?;
        let category = self.find_category(category_id).await?;
        let actor = self.identity.resolve(credential).await?;

        let new_article = NewArticle::new(
            content,
            category.id,
            actor.display_name,
            self.clock.now(),
        );

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(article_id = %created.id, created_by = %created.created_by, "article created");
        Ok(created.into())
    }
}
