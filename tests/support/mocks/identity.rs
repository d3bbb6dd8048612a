// tests/support/mocks/identity.rs
use async_trait::async_trait;
use newsdesk_core::application::{
    dto::{AuthenticatedActor, Credential},
    error::{ApplicationError, ApplicationResult},
    ports::identity::IdentityResolver,
};
use newsdesk_core::domain::user::User;
use std::collections::HashMap;
use std::sync::Mutex;

/// Maps raw tokens to users; any other token is rejected as unauthorized.
#[derive(Default)]
pub struct StubIdentityResolver {
    tokens: Mutex<HashMap<String, User>>,
}

impl StubIdentityResolver {
    pub fn grant(&self, token: &str, user: User) {
        self.tokens.lock().unwrap().insert(token.to_string(), user);
    }
}

#[async_trait]
impl IdentityResolver for StubIdentityResolver {
    async fn resolve(&self, credential: &Credential) -> ApplicationResult<AuthenticatedActor> {
        self.tokens
            .lock()
            .unwrap()
            .get(credential.as_str())
            .cloned()
            .map(AuthenticatedActor::from)
            .ok_or_else(|| ApplicationError::unauthorized("invalid token"))
    }
}
