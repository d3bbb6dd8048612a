// src/domain/errors.rs
use std::fmt;
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Entity names surfaced in `NotFound` failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Article,
    Category,
    User,
}

impl EntityKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Article => "News",
            Self::Category => "Category",
            Self::User => "User",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity} not found with id {id}")]
    NotFound { entity: EntityKind, id: i64 },
    #[error("name already exists: {0}")]
    DuplicateName(String),
    #[error("no data available")]
    NoDataAvailable,
    #[error("validation error: {0}")]
    Validation(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    pub const fn not_found(entity: EntityKind, id: i64) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn duplicate_name(title: impl Into<String>) -> Self {
        Self::DuplicateName(title.into())
    }
}
