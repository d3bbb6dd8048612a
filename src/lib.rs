//! News-content core: article lifecycle, paginated and filtered listings,
//! key search, view counters and per-user watch history.
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
