use crate::domain::category::Category;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub id: i64,
    #[serde(default)]
    pub parent_id: Option<i64>,
    pub title: String,
    pub slug: String,
    pub status: bool,
    pub position: i32,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.into(),
            parent_id: category.parent_id.map(Into::into),
            title: category.title.into(),
            slug: category.slug.into(),
            status: category.status,
            position: category.position,
        }
    }
}
