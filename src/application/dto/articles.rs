use crate::domain::article::Article;
use crate::domain::category::{Category, scopes};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// `d` for drafts, `p` for published articles.
    pub status: String,
    pub status_label: String,
    #[serde(default)]
    pub author_id: Option<i64>,
    pub category_ids: Vec<i64>,
    /// Titles of the active categories, joined for display.
    pub categories: String,
    #[serde(with = "serde_time")]
    pub publish: DateTime<Utc>,
    /// `publish` rendered in the Jalali calendar.
    pub jpublish: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl ArticleDto {
    pub fn from_parts(article: Article, categories: &[Category], jpublish: String) -> Self {
        Self {
            id: article.id.into(),
            status: article.status.code().to_string(),
            status_label: article.status.label().to_string(),
            title: article.title.into(),
            slug: article.slug.into(),
            description: article.description.into(),
            thumbnail: article.thumbnail.map(Into::into),
            author_id: article.author_id.map(Into::into),
            category_ids: article.category_ids.into_iter().map(Into::into).collect(),
            categories: scopes::category_to_str(categories),
            publish: article.publish,
            jpublish,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

/// An article together with its categories in default order, active or not.
#[derive(Debug, Clone)]
pub struct ArticleWithCategories {
    pub article: Article,
    pub categories: Vec<Category>,
}
