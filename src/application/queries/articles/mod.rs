mod by_category;
mod get_by_id;
mod list;
mod ranking;
mod search;
mod service;
mod watched;

pub use by_category::FilterByCategoryQuery;
pub use service::ArticleQueryService;
