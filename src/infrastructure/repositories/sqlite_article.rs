// src/infrastructure/repositories/sqlite_article.rs
use super::error::{is_foreign_key_violation, is_unique_violation, map_sqlx, to_i64, to_u64};
use super::sqlite_watch::write_entry;
use crate::domain::article::{
    Article, ArticleContent, ArticleId, ArticleReadRepository, ArticleTitle,
    ArticleWriteRepository, CategoryFilter, NewArticle, SearchPattern,
};
use crate::domain::category::{Category, CategoryId};
use crate::domain::errors::{DomainError, DomainResult, EntityKind};
use crate::domain::pagination::{PageRequest, SortDirection};
use crate::domain::user::DisplayName;
use crate::domain::watch::WatchEntry;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Executor, FromRow, QueryBuilder, Sqlite, SqliteConnection, SqlitePool};
use std::sync::Arc;

macro_rules! select_article {
    () => {
        "SELECT n.id, n.title, n.content, n.author, n.description, n.thumbnail, n.views, \
         n.category_id, c.name AS category_name, n.created_by, n.last_modified_by, \
         n.created_at, n.updated_at \
         FROM news n JOIN categories c ON c.id = n.category_id"
    };
}

#[derive(Clone)]
pub struct SqliteArticleWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleWriteRepository {
    pub const fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteArticleReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleReadRepository {
    pub const fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    content: String,
    author: String,
    description: String,
    thumbnail: String,
    views: i64,
    category_id: i64,
    category_name: String,
    created_by: String,
    last_modified_by: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ArticleId::new(row.id)?,
            content: ArticleContent {
                title: ArticleTitle::new(row.title)?,
                content: row.content,
                author: row.author,
                description: row.description,
                thumbnail: row.thumbnail,
            },
            views: to_u64(row.views, "view count")?,
            category: Category {
                id: CategoryId::new(row.category_id)?,
                name: row.category_name,
            },
            created_by: DisplayName::new(row.created_by)?,
            last_modified_by: DisplayName::new(row.last_modified_by)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn into_articles(rows: Vec<ArticleRow>) -> DomainResult<Vec<Article>> {
    rows.into_iter().map(Article::try_from).collect()
}

async fn fetch_article<'e, E>(executor: E, id: i64) -> DomainResult<Option<Article>>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, ArticleRow>(concat!(select_article!(), " WHERE n.id = ?"))
        .bind(id)
        .fetch_optional(executor)
        .await
        .map_err(map_sqlx)?
        .map(Article::try_from)
        .transpose()
}

/// Translates constraint failures of an article write into domain failures.
fn map_write_error(err: sqlx::Error, title: &ArticleTitle, category_id: CategoryId) -> DomainError {
    if is_unique_violation(&err) {
        DomainError::duplicate_name(title.as_str())
    } else if is_foreign_key_violation(&err) {
        DomainError::not_found(EntityKind::Category, category_id.into())
    } else {
        map_sqlx(err)
    }
}

#[async_trait]
impl ArticleWriteRepository for SqliteArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            content,
            category_id,
            created_by,
            created_at,
        } = article;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO news (title, content, author, description, thumbnail, views, category_id, search_text, created_by, last_modified_by, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, 0, ?, ?, ?, ?, ?, ?)
             RETURNING id",
        )
        .bind(content.title.as_str())
        .bind(&content.content)
        .bind(&content.author)
        .bind(&content.description)
        .bind(&content.thumbnail)
        .bind(i64::from(category_id))
        .bind(content.search_text())
        .bind(created_by.as_str())
        .bind(created_by.as_str())
        .bind(created_at)
        .bind(created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| map_write_error(err, &content.title, category_id))?;

        let created = fetch_article(&mut *tx, id)
            .await?
            .ok_or_else(|| DomainError::Persistence("inserted article vanished".into()))?;
        tx.commit().await.map_err(map_sqlx)?;
        Ok(created)
    }

    async fn update(&self, article: &Article) -> DomainResult<Article> {
        let id = i64::from(article.id);
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        // views and created_by are left to the store
        let result = sqlx::query(
            "UPDATE news SET title = ?, content = ?, author = ?, description = ?, thumbnail = ?,
                 category_id = ?, search_text = ?, last_modified_by = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(article.content.title.as_str())
        .bind(&article.content.content)
        .bind(&article.content.author)
        .bind(&article.content.description)
        .bind(&article.content.thumbnail)
        .bind(i64::from(article.category.id))
        .bind(article.content.search_text())
        .bind(article.last_modified_by.as_str())
        .bind(article.updated_at)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|err| map_write_error(err, &article.content.title, article.category.id))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(EntityKind::Article, id));
        }

        let updated = fetch_article(&mut *tx, id)
            .await?
            .ok_or_else(|| DomainError::not_found(EntityKind::Article, id))?;
        tx.commit().await.map_err(map_sqlx)?;
        Ok(updated)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM news WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(EntityKind::Article, id.into()));
        }
        Ok(())
    }

    async fn increment_views(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        if !bump_views(&mut tx, id).await? {
            return Ok(None);
        }

        let article = fetch_article(&mut *tx, id.into()).await?;
        tx.commit().await.map_err(map_sqlx)?;
        Ok(article)
    }

    async fn record_watch(
        &self,
        id: ArticleId,
        entry: WatchEntry,
    ) -> DomainResult<Option<Article>> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        // an early return drops `tx`, rolling back, so a vanished article leaves no history
        if !bump_views(&mut tx, id).await? {
            return Ok(None);
        }
        write_entry(&mut tx, &entry).await?;

        let article = fetch_article(&mut *tx, id.into()).await?;
        tx.commit().await.map_err(map_sqlx)?;
        Ok(article)
    }
}

/// `false` when no row has `id`.
async fn bump_views(conn: &mut SqliteConnection, id: ArticleId) -> DomainResult<bool> {
    let result = sqlx::query("UPDATE news SET views = views + 1 WHERE id = ?")
        .bind(i64::from(id))
        .execute(&mut *conn)
        .await
        .map_err(map_sqlx)?;
    Ok(result.rows_affected() > 0)
}

impl SqliteArticleReadRepository {
    fn push_category_filter(builder: &mut QueryBuilder<'_, Sqlite>, filter: &CategoryFilter) {
        builder.push(" WHERE n.category_id = ");
        builder.push_bind(i64::from(filter.category_id));

        if let Some(author) = &filter.author {
            builder.push(" AND instr(n.author, ");
            builder.push_bind(author.clone());
            builder.push(") > 0");
        }

        if let Some(title) = &filter.title {
            builder.push(" AND instr(n.title, ");
            builder.push_bind(title.clone());
            builder.push(") > 0");
        }
    }

    /// Both sides are upper-cased in Rust; `instr` compares them byte for byte.
    fn push_key_match(builder: &mut QueryBuilder<'_, Sqlite>, pattern: &SearchPattern) {
        builder.push(" WHERE instr(n.search_text, ");
        builder.push_bind(pattern.as_str().to_string());
        builder.push(") > 0");
    }

    fn push_window(builder: &mut QueryBuilder<'_, Sqlite>, page: PageRequest) -> DomainResult<()> {
        builder.push(" LIMIT ");
        builder.push_bind(to_i64(page.limit(), "page size")?);
        builder.push(" OFFSET ");
        builder.push_bind(to_i64(page.offset(), "page offset")?);
        Ok(())
    }

    async fn fetch_ranked(&self, order: &str, limit: u32) -> DomainResult<Vec<Article>> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(select_article!());
        builder.push(" ORDER BY ");
        builder.push(order);
        builder.push(" LIMIT ");
        builder.push_bind(i64::from(limit));

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        into_articles(rows)
    }
}

#[async_trait]
impl ArticleReadRepository for SqliteArticleReadRepository {
    async fn exists_by_id(&self, id: ArticleId) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM news WHERE id = ?)")
            .bind(i64::from(id))
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn exists_by_title(
        &self,
        title: &ArticleTitle,
        except: Option<ArticleId>,
    ) -> DomainResult<bool> {
        let except = except.map(i64::from);
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM news WHERE title = ? AND (? IS NULL OR id <> ?))",
        )
        .bind(title.as_str())
        .bind(except)
        .bind(except)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        fetch_article(&*self.pool, id.into()).await
    }

    async fn find_all(&self) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(concat!(select_article!(), " ORDER BY n.id"))
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        into_articles(rows)
    }

    async fn list_page(&self, page: PageRequest) -> DomainResult<Vec<Article>> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(select_article!());
        builder.push(" ORDER BY n.updated_at DESC, n.id DESC");
        Self::push_window(&mut builder, page)?;

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        into_articles(rows)
    }

    async fn count(&self) -> DomainResult<u64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM news")
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        to_u64(count, "count")
    }

    async fn most_viewed(&self, limit: u32) -> DomainResult<Vec<Article>> {
        self.fetch_ranked("n.views DESC, n.id ASC", limit).await
    }

    async fn least_viewed(&self, limit: u32) -> DomainResult<Vec<Article>> {
        self.fetch_ranked("n.views ASC, n.id ASC", limit).await
    }

    async fn filter_by_category(
        &self,
        filter: &CategoryFilter,
        page: PageRequest,
        direction: SortDirection,
    ) -> DomainResult<Vec<Article>> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(select_article!());
        Self::push_category_filter(&mut builder, filter);
        builder.push(" ORDER BY n.created_at ");
        builder.push(direction.as_sql());
        builder.push(", n.id ");
        builder.push(direction.as_sql());
        Self::push_window(&mut builder, page)?;

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        into_articles(rows)
    }

    async fn count_by_category(&self, filter: &CategoryFilter) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT COUNT(1) FROM news n");
        Self::push_category_filter(&mut builder, filter);

        let count = builder
            .build_query_scalar::<i64>()
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        to_u64(count, "count")
    }

    async fn search_by_key(
        &self,
        pattern: &SearchPattern,
        page: PageRequest,
    ) -> DomainResult<Vec<Article>> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(select_article!());
        Self::push_key_match(&mut builder, pattern);
        builder.push(" ORDER BY n.id");
        Self::push_window(&mut builder, page)?;

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        into_articles(rows)
    }

    async fn count_by_key(&self, pattern: &SearchPattern) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT COUNT(1) FROM news n");
        Self::push_key_match(&mut builder, pattern);

        let count = builder
            .build_query_scalar::<i64>()
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        to_u64(count, "count")
    }

    async fn count_records(&self) -> DomainResult<u64> {
        // articles whose category row is still present
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(1) FROM news n JOIN categories c ON c.id = n.category_id",
        )
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;
        to_u64(count, "count")
    }
}
