use super::ArticleQueryService;
use crate::application::{dto::ArticleWithCategories, error::ApplicationResult};

/// Every article regardless of status, for the administration screens.
pub struct ListAdminArticlesQuery;

impl ArticleQueryService {
    pub async fn list_admin_articles(
        &self,
        _query: ListAdminArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleWithCategories>> {
        let articles = self.read_repo.list().await?;
        let mut listing = Vec::with_capacity(articles.len());
        for article in articles {
            let categories = self.category_repo.list_by_article(article.id).await?;
            listing.push(ArticleWithCategories {
                article,
                categories,
            });
        }
        Ok(listing)
    }
}
