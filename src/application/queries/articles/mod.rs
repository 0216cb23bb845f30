mod admin;
mod get_by_id;
mod get_by_slug;
mod list;
mod service;

pub use admin::ListAdminArticlesQuery;
pub use get_by_id::GetArticleByIdQuery;
pub use get_by_slug::GetArticleBySlugQuery;
pub use list::{ListArticlesInCategoryQuery, ListPublishedArticlesQuery};
pub use service::ArticleQueryService;
