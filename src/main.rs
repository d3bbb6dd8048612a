use anyhow::Result;
use newsdesk_core::application::{
    ports::{identity::IdentityResolver, time::Clock},
    services::{ApplicationServices, NewsRepositories},
};
use newsdesk_core::config::AppConfig;
use newsdesk_core::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository},
    category::CategoryRepository,
    user::UserRepository,
    watch::WatchRecordRepository,
};
use newsdesk_core::infrastructure::{
    database,
    repositories::{
        SqliteArticleReadRepository, SqliteArticleWriteRepository, SqliteCategoryRepository,
        SqliteUserRepository, SqliteWatchRecordRepository,
    },
    security::identity::TrustedUsernameResolver,
    time::SystemClock,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

/// Migrates the configured database and logs a catalogue report.
async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.max_connections()).await?;
    database::run_migrations(&pool).await?;
    let pool = Arc::new(pool);

    let user_repo: Arc<dyn UserRepository> = Arc::new(SqliteUserRepository::new(Arc::clone(&pool)));
    let repos = NewsRepositories {
        article_write: Arc::new(SqliteArticleWriteRepository::new(Arc::clone(&pool)))
            as Arc<dyn ArticleWriteRepository>,
        article_read: Arc::new(SqliteArticleReadRepository::new(Arc::clone(&pool)))
            as Arc<dyn ArticleReadRepository>,
        categories: Arc::new(SqliteCategoryRepository::new(Arc::clone(&pool)))
            as Arc<dyn CategoryRepository>,
        users: Arc::clone(&user_repo),
        watches: Arc::new(SqliteWatchRecordRepository::new(Arc::clone(&pool)))
            as Arc<dyn WatchRecordRepository>,
    };

    let identity: Arc<dyn IdentityResolver> = Arc::new(TrustedUsernameResolver::new(user_repo));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = ApplicationServices::new(repos, identity, clock, config.news_settings());
    tracing::info!(settings = ?services.settings(), "news services ready");

    let queries = &services.article_queries;
    let records = queries.count_records().await?;
    tracing::info!(records, "catalogue size");

    if records > 0 {
        for article in queries.favorites().await? {
            tracing::info!(id = article.id, views = article.views, title = %article.title, "favorite");
        }
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
