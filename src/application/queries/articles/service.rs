use std::sync::Arc;

use crate::{
    application::{dto::ArticleDto, error::ApplicationResult, ports::calendar::CalendarFormatter},
    domain::{article::{Article, ArticleReadRepository}, category::CategoryReadRepository},
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryReadRepository>,
    pub(super) calendar: Arc<dyn CalendarFormatter>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        category_repo: Arc<dyn CategoryReadRepository>,
        calendar: Arc<dyn CalendarFormatter>,
    ) -> Self {
        Self {
            read_repo,
            category_repo,
            calendar,
        }
    }

    pub(super) async fn to_dto(&self, article: Article) -> ApplicationResult<ArticleDto> {
        let categories = self.category_repo.list_by_article(article.id).await?;
        let jpublish = self.calendar.format(article.publish);
        Ok(ArticleDto::from_parts(article, &categories, jpublish))
    }

    pub(super) async fn to_dtos(&self, articles: Vec<Article>) -> ApplicationResult<Vec<ArticleDto>> {
        let mut items = Vec::with_capacity(articles.len());
        for article in articles {
            items.push(self.to_dto(article).await?);
        }
        Ok(items)
    }
}
