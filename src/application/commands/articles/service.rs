// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository, services::ArticleSlugService},
        category::{CategoryId, CategoryReadRepository},
        user::{UserId, UserRepository},
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryReadRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) slug_service: Arc<ArticleSlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        category_repo: Arc<dyn CategoryReadRepository>,
        user_repo: Arc<dyn UserRepository>,
        slug_service: Arc<ArticleSlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            category_repo,
            user_repo,
            slug_service,
            clock,
        }
    }

    pub(super) async fn resolve_author(&self, author_id: Option<i64>) -> ApplicationResult<Option<UserId>> {
        let Some(raw) = author_id else {
            return Ok(None);
        };
        let id = UserId::new(raw)?;
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("author {raw} not found")))?;
        Ok(Some(id))
    }

    pub(super) async fn resolve_categories(&self, ids: &[i64]) -> ApplicationResult<Vec<CategoryId>> {
        let mut resolved = Vec::with_capacity(ids.len());
        for raw in ids {
            let id = CategoryId::new(*raw)?;
            self.category_repo
                .find_by_id(id)
                .await?
                .ok_or_else(|| ApplicationError::not_found(format!("category {raw} not found")))?;
            resolved.push(id);
        }
        Ok(resolved)
    }
}
