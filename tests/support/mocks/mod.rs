// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod identity;
pub mod store;
pub mod time;

pub use identity::StubIdentityResolver;
pub use store::InMemoryStore;
pub use time::{SteppingClock, fixed_now};
