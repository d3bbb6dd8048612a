pub mod articles;
pub mod auth;
pub mod categories;
pub mod pagination;

pub use articles::{ArticleDto, ArticleInput, ArticleSummaryDto, DeleteConfirmationDto};
pub use auth::{AuthenticatedActor, Credential};
pub use categories::{CategoryArticlesDto, CategoryDto};
pub use pagination::PageDto;
