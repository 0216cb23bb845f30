pub mod entity;
pub mod repository;
pub mod scopes;
pub mod services;
pub mod value_objects;

pub use entity::{Article, ArticleUpdate, NewArticle};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{
    ArticleDescription, ArticleId, ArticleSlug, ArticleStatus, ArticleTitle, Thumbnail,
};
