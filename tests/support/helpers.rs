// tests/support/helpers.rs
use super::mocks::{InMemoryStore, SteppingClock, StubIdentityResolver};
use newsdesk_core::application::{
    commands::articles::ArticleCommandService,
    dto::Credential,
    queries::articles::ArticleQueryService,
    services::{ApplicationServices, NewsRepositories},
    settings::NewsSettings,
};
use newsdesk_core::domain::article::ArticleWriteRepository;
use newsdesk_core::domain::user::{DisplayName, User, UserId, Username};
use std::sync::Arc;

pub const EDITOR_TOKEN: &str = "editor-token";
pub const REPORTER_TOKEN: &str = "reporter-token";
pub const EDITOR_ID: i64 = 1;
pub const REPORTER_ID: i64 = 2;
pub const WORLD: i64 = 5;
pub const SPORT: i64 = 6;

pub fn user(id: i64, username: &str, display_name: &str) -> User {
    User {
        id: UserId::new(id).unwrap(),
        username: Username::new(username).unwrap(),
        display_name: DisplayName::new(display_name).unwrap(),
    }
}

pub struct TestContext {
    pub store: Arc<InMemoryStore>,
    pub services: ApplicationServices,
}

impl TestContext {
    pub fn commands(&self) -> &ArticleCommandService {
        &self.services.article_commands
    }

    pub fn queries(&self) -> &ArticleQueryService {
        &self.services.article_queries
    }
}

pub fn editor_credential() -> Credential {
    Credential::from_header(&format!("Bearer {EDITOR_TOKEN}"))
}

pub fn reporter_credential() -> Credential {
    Credential::new(REPORTER_TOKEN)
}

/// Two categories (5 World, 6 Sport), two users with tokens, legacy settings.
pub fn context() -> TestContext {
    context_with(NewsSettings::default())
}

pub fn context_with(settings: NewsSettings) -> TestContext {
    context_with_writer(settings, |store| store as Arc<dyn ArticleWriteRepository>)
}

/// Like [`context_with`], but article writes go through whatever `writer`
/// builds around the seeded store.
pub fn context_with_writer<F>(settings: NewsSettings, writer: F) -> TestContext
where
    F: FnOnce(Arc<InMemoryStore>) -> Arc<dyn ArticleWriteRepository>,
{
    let store = Arc::new(InMemoryStore::default());
    store.add_category(WORLD, "World");
    store.add_category(SPORT, "Sport");

    let editor = user(EDITOR_ID, "editor", "Editor One");
    let reporter = user(REPORTER_ID, "reporter", "Reporter Two");
    store.add_user(editor.clone());
    store.add_user(reporter.clone());

    let identity = Arc::new(StubIdentityResolver::default());
    identity.grant(EDITOR_TOKEN, editor);
    identity.grant(REPORTER_TOKEN, reporter);

    let repos = NewsRepositories {
        article_write: writer(store.clone()),
        article_read: store.clone(),
        categories: store.clone(),
        users: store.clone(),
        watches: store.clone(),
    };

    let services = ApplicationServices::new(
        repos,
        identity,
        Arc::new(SteppingClock::default()),
        settings,
    );

    TestContext { store, services }
}
