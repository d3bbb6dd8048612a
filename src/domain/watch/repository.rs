use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use crate::domain::watch::entity::WatchRecord;
use async_trait::async_trait;

/// Read side of the watch history. Records are written through
/// [`ArticleWriteRepository::record_watch`](crate::domain::article::ArticleWriteRepository::record_watch).
#[async_trait]
pub trait WatchRecordRepository: Send + Sync {
    async fn find_all(&self) -> DomainResult<Vec<WatchRecord>>;
    /// Records of one actor, oldest first.
    async fn find_by_user(&self, user_id: UserId) -> DomainResult<Vec<WatchRecord>>;
}
