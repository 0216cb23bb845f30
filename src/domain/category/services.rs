// src/domain/category/services.rs
use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::ports::util::SlugGenerator;
use crate::domain::category::repository::CategoryReadRepository;
use crate::domain::category::value_objects::{CategoryId, CategorySlug, CategoryTitle};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::text::unique_slug;

/// Guards the parent links of the category forest.
pub struct CategoryTreeService {
    read_repo: Arc<dyn CategoryReadRepository>,
}

impl CategoryTreeService {
    pub fn new(read_repo: Arc<dyn CategoryReadRepository>) -> Self {
        Self { read_repo }
    }

    /// Checks that `parent_id` may become the parent of `child_id`.
    ///
    /// `child_id` is `None` for a category that does not exist yet, in which
    /// case only the existence of the parent is verified. Otherwise the
    /// ancestors of the proposed parent are walked up to a root; meeting the
    /// child on the way means the link would close a cycle.
    pub async fn ensure_valid_parent(
        &self,
        child_id: Option<CategoryId>,
        parent_id: CategoryId,
    ) -> DomainResult<()> {
        if child_id == Some(parent_id) {
            return Err(DomainError::Validation(
                "category cannot be its own parent".into(),
            ));
        }

        let parent = self
            .read_repo
            .find_by_id(parent_id)
            .await?
            .ok_or_else(|| DomainError::NotFound("parent category not found".into()))?;

        let Some(child_id) = child_id else {
            return Ok(());
        };

        let mut visited = HashSet::from([parent.id]);
        let mut next = parent.parent_id;
        while let Some(ancestor_id) = next {
            if ancestor_id == child_id {
                return Err(DomainError::Validation(format!(
                    "category {parent_id} is a descendant of category {child_id}"
                )));
            }
            if !visited.insert(ancestor_id) {
                return Err(DomainError::Validation(format!(
                    "category tree already contains a cycle at {ancestor_id}"
                )));
            }
            next = match self.read_repo.find_by_id(ancestor_id).await? {
                Some(ancestor) => ancestor.parent_id,
                None => None,
            };
        }

        Ok(())
    }
}

/// Produces unique slugs for categories created without one.
pub struct CategorySlugService {
    read_repo: Arc<dyn CategoryReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl CategorySlugService {
    pub fn new(
        read_repo: Arc<dyn CategoryReadRepository>,
        generator: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    pub async fn generate_unique_slug(
        &self,
        title: &CategoryTitle,
        now: DateTime<Utc>,
    ) -> DomainResult<CategorySlug> {
        let read_repo = &self.read_repo;
        let slug = unique_slug(
            self.generator.slugify(title.as_str()),
            "category",
            now,
            move |candidate| async move {
                let slug = CategorySlug::new(candidate)?;
                Ok(read_repo.find_by_slug(&slug).await?.is_some())
            },
        )
        .await?;
        CategorySlug::new(slug)
    }
}
