// src/application/ports/identity.rs
use crate::application::{
    ApplicationResult,
    dto::{AuthenticatedActor, Credential},
};
use async_trait::async_trait;

/// Resolves the acting user from a credential that was already authenticated upstream.
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    async fn resolve(&self, credential: &Credential) -> ApplicationResult<AuthenticatedActor>;
}
