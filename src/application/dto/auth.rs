use crate::domain::user::{DisplayName, User, UserId, Username};

const BEARER_PREFIX: &str = "Bearer ";

/// Opaque token presented by a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Accepts a raw `Authorization` header value, with or without the `Bearer ` scheme.
    pub fn from_header(value: &str) -> Self {
        let token = value.strip_prefix(BEARER_PREFIX).unwrap_or(value);
        Self(token.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The identity performing an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    pub id: UserId,
    pub username: Username,
    pub display_name: DisplayName,
}

impl From<User> for AuthenticatedActor {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            display_name: user.display_name,
        }
    }
}
