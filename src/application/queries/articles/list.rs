use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::category::CategorySlug,
};

pub struct ListPublishedArticlesQuery;

pub struct ListArticlesInCategoryQuery {
    pub category_slug: String,
}

impl ArticleQueryService {
    /// Published articles, newest first.
    pub async fn list_published_articles(
        &self,
        _query: ListPublishedArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let records = self.read_repo.list_published().await?;
        self.to_dtos(records).await
    }

    /// Published articles of an active category. Inactive categories are
    /// reported as missing.
    pub async fn list_articles_in_category(
        &self,
        query: ListArticlesInCategoryQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let slug = CategorySlug::new(query.category_slug)?;
        let category = self
            .category_repo
            .find_by_slug(&slug)
            .await?
            .filter(|c| c.is_active())
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        let records = self
            .read_repo
            .list_published_in_category(category.id)
            .await?;
        self.to_dtos(records).await
    }
}
