use super::CategoryCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::category::{Category, CategoryId, CategorySlug, CategoryTitle, NewCategory},
};

pub struct CreateCategoryCommand {
    pub parent_id: Option<i64>,
    pub title: String,
    pub slug: Option<String>,
    pub status: bool,
    pub position: i32,
}

impl CreateCategoryCommand {
    /// An active root category.
    pub fn new(title: impl Into<String>, position: i32) -> Self {
        Self {
            parent_id: None,
            title: title.into(),
            slug: None,
            status: true,
            position,
        }
    }

    pub fn with_parent(mut self, parent_id: i64) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn with_status(mut self, status: bool) -> Self {
        self.status = status;
        self
    }
}

impl CategoryCommandService {
    pub async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<Category> {
        let title = CategoryTitle::new(command.title)?;
        let parent_id = command.parent_id.map(CategoryId::new).transpose()?;
        if let Some(parent_id) = parent_id {
            self.tree.ensure_valid_parent(None, parent_id).await?;
        }

        let slug = match command.slug {
            Some(slug) => CategorySlug::new(slug)?,
            None => {
                self.slug_service
                    .generate_unique_slug(&title, self.clock.now())
                    .await?
            }
        };

        let created = self
            .write_repo
            .insert(NewCategory {
                parent_id,
                title,
                slug,
                status: command.status,
                position: command.position,
            })
            .await?;

        tracing::info!(
            category_id = created.id.0,
            parent_id = ?created.parent_id.map(|p| p.0),
            slug = %created.slug,
            "category created"
        );
        Ok(created)
    }
}
