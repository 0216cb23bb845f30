// src/domain/category/entity.rs
use crate::domain::category::value_objects::{CategoryId, CategorySlug, CategoryTitle};
use std::cmp::Ordering;
use std::fmt;

/// A node of the category forest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub parent_id: Option<CategoryId>,
    pub title: CategoryTitle,
    pub slug: CategorySlug,
    /// Visibility flag; inactive categories are hidden from readers.
    pub status: bool,
    pub position: i32,
}

impl Category {
    pub fn is_active(&self) -> bool {
        self.status
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Default listing order: `(parent_id, position)` ascending, roots first,
    /// id as the final tie-breaker.
    pub fn default_order(a: &Category, b: &Category) -> Ordering {
        a.parent_id
            .cmp(&b.parent_id)
            .then(a.position.cmp(&b.position))
            .then(a.id.cmp(&b.id))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.title, f)
    }
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub parent_id: Option<CategoryId>,
    pub title: CategoryTitle,
    pub slug: CategorySlug,
    pub status: bool,
    pub position: i32,
}

#[derive(Debug, Clone)]
pub struct CategoryUpdate {
    pub id: CategoryId,
    pub parent_id: Option<Option<CategoryId>>,
    pub title: Option<CategoryTitle>,
    pub slug: Option<CategorySlug>,
    pub status: Option<bool>,
    pub position: Option<i32>,
}

impl CategoryUpdate {
    pub fn new(id: CategoryId) -> Self {
        Self {
            id,
            parent_id: None,
            title: None,
            slug: None,
            status: None,
            position: None,
        }
    }

    pub fn with_parent(mut self, parent_id: Option<CategoryId>) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn with_title(mut self, title: CategoryTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_slug(mut self, slug: CategorySlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_status(mut self, status: bool) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_position(mut self, position: i32) -> Self {
        self.position = Some(position);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.parent_id.is_none()
            && self.title.is_none()
            && self.slug.is_none()
            && self.status.is_none()
            && self.position.is_none()
    }
}
