// src/infrastructure/repositories/sqlite_user.rs
use super::error::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{DisplayName, User, UserId, UserRepository, Username};
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUserRepository {
    pub const fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    username: String,
    display_name: String,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: UserId::new(row.id)?,
            username: Username::new(row.username)?,
            display_name: DisplayName::new(row.display_name)?,
        })
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn exists_by_id(&self, id: UserId) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE id = ?)")
            .bind(i64::from(id))
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        sqlx::query_as::<_, UserRow>("SELECT id, username, display_name FROM users WHERE id = ?")
            .bind(i64::from(id))
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?
            .map(User::try_from)
            .transpose()
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        sqlx::query_as::<_, UserRow>(
            "SELECT id, username, display_name FROM users WHERE username = ?",
        )
        .bind(username.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?
        .map(User::try_from)
        .transpose()
    }
}
