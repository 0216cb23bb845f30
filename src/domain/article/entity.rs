// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleDescription, ArticleId, ArticleSlug, ArticleStatus, ArticleTitle, Thumbnail,
};
use crate::domain::category::CategoryId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub author_id: Option<UserId>,
    pub category_ids: Vec<CategoryId>,
    pub description: ArticleDescription,
    pub thumbnail: Option<Thumbnail>,
    /// Intended or actual publication time, independent of `created_at`.
    pub publish: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub status: ArticleStatus,
}

impl Article {
    pub fn is_published(&self) -> bool {
        self.status.is_published()
    }
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.title, f)
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub author_id: Option<UserId>,
    pub category_ids: Vec<CategoryId>,
    pub description: ArticleDescription,
    pub thumbnail: Option<Thumbnail>,
    pub publish: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub status: ArticleStatus,
}

impl NewArticle {
    /// A draft with no author, categories or thumbnail, published "now".
    pub fn new(
        title: ArticleTitle,
        slug: ArticleSlug,
        description: ArticleDescription,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            title,
            slug,
            author_id: None,
            category_ids: Vec::new(),
            description,
            thumbnail: None,
            publish: created_at,
            created_at,
            updated_at: created_at,
            status: ArticleStatus::Draft,
        }
    }

    pub fn with_author(mut self, author_id: Option<UserId>) -> Self {
        self.author_id = author_id;
        self
    }

    pub fn with_categories(mut self, category_ids: Vec<CategoryId>) -> Self {
        self.category_ids = dedup_ids(category_ids);
        self
    }

    pub fn with_thumbnail(mut self, thumbnail: Option<Thumbnail>) -> Self {
        self.thumbnail = thumbnail;
        self
    }

    pub fn with_publish(mut self, publish: DateTime<Utc>) -> Self {
        self.publish = publish;
        self
    }

    pub fn with_status(mut self, status: ArticleStatus) -> Self {
        self.status = status;
        self
    }
}

#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub slug: Option<ArticleSlug>,
    pub author_id: Option<Option<UserId>>,
    pub category_ids: Option<Vec<CategoryId>>,
    pub description: Option<ArticleDescription>,
    pub thumbnail: Option<Option<Thumbnail>>,
    pub publish: Option<DateTime<Utc>>,
    pub status: Option<ArticleStatus>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            author_id: None,
            category_ids: None,
            description: None,
            thumbnail: None,
            publish: None,
            status: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_slug(mut self, slug: ArticleSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_author(mut self, author_id: Option<UserId>) -> Self {
        self.author_id = Some(author_id);
        self
    }

    pub fn with_categories(mut self, category_ids: Vec<CategoryId>) -> Self {
        self.category_ids = Some(dedup_ids(category_ids));
        self
    }

    pub fn with_description(mut self, description: ArticleDescription) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_thumbnail(mut self, thumbnail: Option<Thumbnail>) -> Self {
        self.thumbnail = Some(thumbnail);
        self
    }

    pub fn with_publish(mut self, publish: DateTime<Utc>) -> Self {
        self.publish = Some(publish);
        self
    }

    pub fn with_status(mut self, status: ArticleStatus) -> Self {
        self.status = Some(status);
        self
    }
}

fn dedup_ids(mut ids: Vec<CategoryId>) -> Vec<CategoryId> {
    ids.sort();
    ids.dedup();
    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn draft() -> NewArticle {
        NewArticle::new(
            ArticleTitle::new("title").unwrap(),
            ArticleSlug::new("title").unwrap(),
            ArticleDescription::new("body").unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        )
    }

    #[test]
    fn publish_defaults_to_creation_time() {
        let article = draft();
        assert_eq!(article.publish, article.created_at);
        assert_eq!(article.updated_at, article.created_at);
        assert_eq!(article.status, ArticleStatus::Draft);
        assert!(article.author_id.is_none());
    }

    #[test]
    fn explicit_publish_is_independent_of_creation() {
        let article = draft();
        let later = article.created_at + Duration::days(3);
        let article = article.with_publish(later);
        assert_eq!(article.publish, later);
        assert_ne!(article.publish, article.created_at);
    }

    #[test]
    fn category_links_are_deduplicated() {
        let ids = vec![
            CategoryId::new(3).unwrap(),
            CategoryId::new(1).unwrap(),
            CategoryId::new(3).unwrap(),
        ];
        let article = draft().with_categories(ids);
        assert_eq!(
            article.category_ids,
            vec![CategoryId::new(1).unwrap(), CategoryId::new(3).unwrap()]
        );
    }
}
