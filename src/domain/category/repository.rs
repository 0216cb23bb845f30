use crate::domain::article::value_objects::ArticleId;
use crate::domain::category::entity::{Category, CategoryUpdate, NewCategory};
use crate::domain::category::value_objects::{CategoryId, CategorySlug};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CategoryWriteRepository: Send + Sync {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category>;
    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category>;
    /// Children of the deleted category are detached, not deleted.
    async fn delete(&self, id: CategoryId) -> DomainResult<()>;
}

/// Every listing returns categories in `Category::default_order`.
#[async_trait]
pub trait CategoryReadRepository: Send + Sync {
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;
    async fn find_by_slug(&self, slug: &CategorySlug) -> DomainResult<Option<Category>>;
    async fn list(&self) -> DomainResult<Vec<Category>>;
    async fn list_active(&self) -> DomainResult<Vec<Category>>;
    async fn list_children(&self, parent_id: CategoryId) -> DomainResult<Vec<Category>>;
    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<Category>>;
}
