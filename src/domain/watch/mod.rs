// src/domain/watch/mod.rs
pub mod entity;
pub mod repository;

pub use entity::{WatchEntry, WatchKey, WatchRecord};
pub use repository::WatchRecordRepository;
