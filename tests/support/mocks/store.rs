// tests/support/mocks/store.rs
use async_trait::async_trait;
use newsdesk_core::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleTitle, ArticleWriteRepository,
    CategoryFilter, NewArticle, SearchPattern,
};
use newsdesk_core::domain::category::{Category, CategoryId, CategoryRepository};
use newsdesk_core::domain::errors::{DomainError, DomainResult, EntityKind};
use newsdesk_core::domain::pagination::{PageRequest, SortDirection};
use newsdesk_core::domain::user::{User, UserId, UserRepository, Username};
use newsdesk_core::domain::watch::{WatchEntry, WatchRecord, WatchRecordRepository};
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

#[derive(Default)]
struct State {
    articles: BTreeMap<i64, Article>,
    next_article_id: i64,
    categories: HashMap<i64, Category>,
    users: HashMap<i64, User>,
    watches: Vec<WatchRecord>,
}

/// One in-memory backing store implementing every repository trait.
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

fn window(mut articles: Vec<Article>, page: PageRequest) -> Vec<Article> {
    let offset = usize::try_from(page.offset()).unwrap();
    let limit = usize::try_from(page.limit()).unwrap();
    if offset >= articles.len() {
        return Vec::new();
    }
    articles.drain(offset..).take(limit).collect()
}

fn matches_key(article: &Article, pattern: &SearchPattern) -> bool {
    pattern.matches(&article.content.search_text())
}

impl InMemoryStore {
    pub fn add_category(&self, id: i64, name: &str) -> Category {
        let category = Category {
            id: CategoryId::new(id).unwrap(),
            name: name.to_string(),
        };
        self.state
            .lock()
            .unwrap()
            .categories
            .insert(id, category.clone());
        category
    }

    pub fn add_user(&self, user: User) {
        self.state
            .lock()
            .unwrap()
            .users
            .insert(user.id.into(), user);
    }

    pub fn watch_records(&self) -> Vec<WatchRecord> {
        self.state.lock().unwrap().watches.clone()
    }

    pub fn article(&self, id: i64) -> Option<Article> {
        self.state.lock().unwrap().articles.get(&id).cloned()
    }

    /// Removes an article without going through the services.
    pub fn remove_article(&self, id: i64) {
        self.state.lock().unwrap().articles.remove(&id);
    }

    fn snapshot(&self) -> Vec<Article> {
        self.state.lock().unwrap().articles.values().cloned().collect()
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();
        let category = state
            .categories
            .get(&i64::from(article.category_id))
            .cloned()
            .ok_or_else(|| DomainError::not_found(EntityKind::Category, article.category_id.into()))?;

        state.next_article_id += 1;
        let id = state.next_article_id;
        let created = Article {
            id: ArticleId::new(id)?,
            last_modified_by: article.last_modified_by().clone(),
            content: article.content,
            views: 0,
            category,
            created_by: article.created_by,
            created_at: article.created_at,
            updated_at: article.created_at,
        };
        state.articles.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, article: &Article) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();
        let id = i64::from(article.id);
        let stored = state
            .articles
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found(EntityKind::Article, id))?;
        let views = stored.views;
        let created_by = stored.created_by.clone();
        *stored = Article {
            views,
            created_by,
            ..article.clone()
        };
        Ok(stored.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        state
            .articles
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found(EntityKind::Article, id.into()))
    }

    async fn increment_views(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let mut state = self.state.lock().unwrap();
        Ok(state.articles.get_mut(&i64::from(id)).map(|article| {
            article.views += 1;
            article.clone()
        }))
    }

    async fn record_watch(
        &self,
        id: ArticleId,
        entry: WatchEntry,
    ) -> DomainResult<Option<Article>> {
        let mut state = self.state.lock().unwrap();
        let Some(article) = state.articles.get_mut(&i64::from(id)) else {
            return Ok(None);
        };
        article.views += 1;
        let updated = article.clone();

        match entry {
            WatchEntry::Append(record) => state.watches.push(record),
            WatchEntry::Touch(record) => {
                match state
                    .watches
                    .iter_mut()
                    .find(|existing| existing.key == record.key)
                {
                    Some(existing) => existing.watched_at = record.watched_at,
                    None => state.watches.push(record),
                }
            }
        }
        Ok(Some(updated))
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryStore {
    async fn exists_by_id(&self, id: ArticleId) -> DomainResult<bool> {
        Ok(self.state.lock().unwrap().articles.contains_key(&i64::from(id)))
    }

    async fn exists_by_title(
        &self,
        title: &ArticleTitle,
        except: Option<ArticleId>,
    ) -> DomainResult<bool> {
        Ok(self
            .snapshot()
            .iter()
            .any(|article| article.title() == title && Some(article.id) != except))
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.article(id.into()))
    }

    async fn find_all(&self) -> DomainResult<Vec<Article>> {
        Ok(self.snapshot())
    }

    async fn list_page(&self, page: PageRequest) -> DomainResult<Vec<Article>> {
        let mut articles = self.snapshot();
        articles.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(b.id.cmp(&a.id)));
        Ok(window(articles, page))
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(self.state.lock().unwrap().articles.len() as u64)
    }

    async fn most_viewed(&self, limit: u32) -> DomainResult<Vec<Article>> {
        let mut articles = self.snapshot();
        articles.sort_by(|a, b| b.views.cmp(&a.views).then(a.id.cmp(&b.id)));
        articles.truncate(limit as usize);
        Ok(articles)
    }

    async fn least_viewed(&self, limit: u32) -> DomainResult<Vec<Article>> {
        let mut articles = self.snapshot();
        articles.sort_by(|a, b| a.views.cmp(&b.views).then(a.id.cmp(&b.id)));
        articles.truncate(limit as usize);
        Ok(articles)
    }

    async fn filter_by_category(
        &self,
        filter: &CategoryFilter,
        page: PageRequest,
        direction: SortDirection,
    ) -> DomainResult<Vec<Article>> {
        let mut articles: Vec<Article> = self
            .snapshot()
            .into_iter()
            .filter(|article| filter.matches(article))
            .collect();
        articles.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        if direction == SortDirection::Descending {
            articles.reverse();
        }
        Ok(window(articles, page))
    }

    async fn count_by_category(&self, filter: &CategoryFilter) -> DomainResult<u64> {
        Ok(self
            .snapshot()
            .iter()
            .filter(|article| filter.matches(article))
            .count() as u64)
    }

    async fn search_by_key(
        &self,
        pattern: &SearchPattern,
        page: PageRequest,
    ) -> DomainResult<Vec<Article>> {
        let articles = self
            .snapshot()
            .into_iter()
            .filter(|article| matches_key(article, pattern))
            .collect();
        Ok(window(articles, page))
    }

    async fn count_by_key(&self, pattern: &SearchPattern) -> DomainResult<u64> {
        Ok(self
            .snapshot()
            .iter()
            .filter(|article| matches_key(article, pattern))
            .count() as u64)
    }

    async fn count_records(&self) -> DomainResult<u64> {
        Ok(self.state.lock().unwrap().articles.len() as u64)
    }
}

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn exists_by_id(&self, id: CategoryId) -> DomainResult<bool> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .categories
            .contains_key(&i64::from(id)))
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .categories
            .get(&i64::from(id))
            .cloned())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn exists_by_id(&self, id: UserId) -> DomainResult<bool> {
        Ok(self.state.lock().unwrap().users.contains_key(&i64::from(id)))
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.state.lock().unwrap().users.get(&i64::from(id)).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .users
            .values()
            .find(|user| &user.username == username)
            .cloned())
    }
}

#[async_trait]
impl WatchRecordRepository for InMemoryStore {
    async fn find_all(&self) -> DomainResult<Vec<WatchRecord>> {
        Ok(self.watch_records())
    }

    async fn find_by_user(&self, user_id: UserId) -> DomainResult<Vec<WatchRecord>> {
        Ok(self
            .watch_records()
            .into_iter()
            .filter(|record| record.key.user_id == user_id)
            .collect())
    }
}
