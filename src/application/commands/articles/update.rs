use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, ArticleInput, Credential},
        error::ApplicationResult,
    },
    domain::article::ArticleId,
};

impl ArticleCommandService {
    /// Replaces every mutable field of article `id`.
    ///
    /// Creator attribution is carried over; last-modifier attribution becomes
    /// the resolved actor. In legacy mode the article's own current title also
    /// counts as taken.
    #[tracing::instrument(skip_all, fields(article_id = id, title = %input.title))]
    pub async fn update_article(
        &self,
        id: i64,
        credential: &Credential,
        input: ArticleInput,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::lookup(id)?;
        let existing = self.find_article(id).await?;

        let category_id = input.category_id;
        let content = input.into_content()?;

        let except = if self.settings.is_legacy() { None } else { Some(id) };
        self.ensure_title_available(&content.title, except).await?;
        let category = self.find_category(category_id).await?;
        let actor = self.identity.resolve(credential).await?;

        let revised = existing.revise(content, category, actor.display_name, self.clock.now());
        let updated = self.write_repo.update(&revised).await?;
        tracing::info!(
            article_id = %updated.id,
            last_modified_by = %updated.last_modified_by,
            "article updated"
        );
        Ok(updated.into())
    }
}
