use super::CategoryQueryService;
use crate::application::{dto::CategoryDto, error::ApplicationResult};

pub struct ListActiveCategoriesQuery;

pub struct ListCategoriesQuery;

impl CategoryQueryService {
    pub async fn list_active_categories(
        &self,
        _query: ListActiveCategoriesQuery,
    ) -> ApplicationResult<Vec<CategoryDto>> {
        let records = self.read_repo.list_active().await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    /// All categories including hidden ones.
    pub async fn list_categories(
        &self,
        _query: ListCategoriesQuery,
    ) -> ApplicationResult<Vec<CategoryDto>> {
        let records = self.read_repo.list().await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
