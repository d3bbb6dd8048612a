// src/infrastructure/security/identity.rs
use crate::application::{
    dto::{AuthenticatedActor, Credential},
    error::{ApplicationError, ApplicationResult},
    ports::identity::IdentityResolver,
};
use crate::domain::user::{UserRepository, Username};
use async_trait::async_trait;
use std::sync::Arc;

/// Resolves credentials issued by an upstream gateway that has already
/// verified the token and forwards the subject's username as the credential.
#[derive(Clone)]
pub struct TrustedUsernameResolver {
    users: Arc<dyn UserRepository>,
}

impl TrustedUsernameResolver {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl IdentityResolver for TrustedUsernameResolver {
    async fn resolve(&self, credential: &Credential) -> ApplicationResult<AuthenticatedActor> {
        let username = Username::new(credential.as_str())
            .map_err(|_| ApplicationError::unauthorized("missing credential"))?;
        let user = self
            .users
            .find_by_username(&username)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("unknown user"))?;
        Ok(user.into())
    }
}
