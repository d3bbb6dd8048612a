// src/domain/category/mod.rs
pub mod entity;
pub mod repository;

pub use entity::{Category, CategoryId};
pub use repository::CategoryRepository;
