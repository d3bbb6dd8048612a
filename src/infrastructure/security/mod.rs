// src/infrastructure/security/mod.rs
pub mod identity;
