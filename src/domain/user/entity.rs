// src/domain/user/entity.rs
use crate::domain::user::value_objects::{DisplayName, UserId, Username};

/// An actor known to the user directory. Owned outside this crate; read-only here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub display_name: DisplayName,
}
