use super::CategoryQueryService;
use crate::{
    application::{
        dto::CategoryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::category::{CategorySlug, scopes},
};

pub struct ListChildCategoriesQuery {
    pub slug: String,
    pub active_only: bool,
}

impl CategoryQueryService {
    pub async fn list_child_categories(
        &self,
        query: ListChildCategoriesQuery,
    ) -> ApplicationResult<Vec<CategoryDto>> {
        let slug = CategorySlug::new(query.slug)?;
        let parent = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        let children = self.read_repo.list_children(parent.id).await?;
        let children = if query.active_only {
            scopes::active(&children).into_iter().cloned().collect()
        } else {
            children
        };
        Ok(children.into_iter().map(Into::into).collect())
    }
}
