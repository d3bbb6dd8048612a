// src/application/commands/articles/mod.rs
mod create;
mod delete;
mod service;
mod update;
mod views;
mod watch;

pub use service::ArticleCommandService;
