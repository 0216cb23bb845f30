use super::CategoryCommandService;
use crate::{application::error::ApplicationResult, domain::category::CategoryId};

pub struct DeleteCategoryCommand {
    pub id: i64,
}

impl CategoryCommandService {
    /// Child categories survive as roots; article links to the category are
    /// dropped.
    pub async fn delete_category(&self, command: DeleteCategoryCommand) -> ApplicationResult<()> {
        let id = CategoryId::new(command.id)?;
        self.write_repo.delete(id).await?;
        tracing::info!(category_id = id.0, "category deleted");
        Ok(())
    }
}
