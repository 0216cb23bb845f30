// src/domain/article/services.rs
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::ports::util::SlugGenerator;
use crate::domain::article::repository::ArticleReadRepository;
use crate::domain::article::value_objects::{ArticleSlug, ArticleTitle};
use crate::domain::errors::DomainResult;
use crate::domain::text::unique_slug;

/// Domain service responsible for producing unique slugs for articles.
pub struct ArticleSlugService {
    read_repo: Arc<dyn ArticleReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl ArticleSlugService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        generator: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    pub async fn generate_unique_slug(
        &self,
        title: &ArticleTitle,
        now: DateTime<Utc>,
    ) -> DomainResult<ArticleSlug> {
        let read_repo = &self.read_repo;
        let slug = unique_slug(
            self.generator.slugify(title.as_str()),
            "article",
            now,
            move |candidate| async move {
                let slug = ArticleSlug::new(candidate)?;
                Ok(read_repo.find_by_slug(&slug).await?.is_some())
            },
        )
        .await?;
        ArticleSlug::new(slug)
    }
}
