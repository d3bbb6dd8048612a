use crate::domain::category::entity::{Category, CategoryId};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Read-only view of the category store; category CRUD lives elsewhere.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn exists_by_id(&self, id: CategoryId) -> DomainResult<bool>;

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;
}
