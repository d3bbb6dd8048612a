pub mod article;
pub mod category;
pub mod errors;
pub mod pagination;
pub mod user;
pub mod watch;
