use super::CategoryCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::category::{Category, CategoryId, CategorySlug, CategoryTitle, CategoryUpdate},
};

/// Partial update; `parent_id: Some(None)` detaches the category to the root.
#[derive(Default)]
pub struct UpdateCategoryCommand {
    pub id: i64,
    pub parent_id: Option<Option<i64>>,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub status: Option<bool>,
    pub position: Option<i32>,
}

impl CategoryCommandService {
    pub async fn update_category(
        &self,
        command: UpdateCategoryCommand,
    ) -> ApplicationResult<Category> {
        let id = CategoryId::new(command.id)?;
        let current = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        let mut update = CategoryUpdate::new(id);

        if let Some(parent) = command.parent_id {
            let parent = parent.map(CategoryId::new).transpose()?;
            if let Some(parent_id) = parent {
                self.tree.ensure_valid_parent(Some(id), parent_id).await?;
            }
            update = update.with_parent(parent);
        }
        if let Some(title) = command.title {
            update = update.with_title(CategoryTitle::new(title)?);
        }
        if let Some(slug) = command.slug {
            update = update.with_slug(CategorySlug::new(slug)?);
        }
        if let Some(status) = command.status {
            update = update.with_status(status);
        }
        if let Some(position) = command.position {
            update = update.with_position(position);
        }

        if update.is_empty() {
            return Ok(current);
        }

        let updated = self.write_repo.update(update).await?;
        tracing::info!(category_id = updated.id.0, "category updated");
        Ok(updated)
    }
}
