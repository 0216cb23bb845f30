// src/presentation/admin.rs
//! Column helpers for the article administration list.
use std::sync::{Arc, LazyLock};

use minijinja::{Environment, context};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::{dto::ArticleWithCategories, ports::calendar::CalendarFormatter};
use crate::domain::article::Article;
use crate::domain::category::{Category, scopes};
use crate::domain::errors::{DomainError, DomainResult};

/// Where the admin lands after saving an article. Every article maps to the
/// same account home route; there is no per-article detail page.
pub const ACCOUNT_HOME_ROUTE: &str = "/account/";

/// Column headings shown above the rendered values.
pub const THUMBNAIL_LABEL: &str = "تصویر";
pub const PUBLISH_LABEL: &str = "زمان انتشار";
pub const CATEGORY_LABEL: &str = "دسته بندی";

// The `.html` suffix turns on minijinja's HTML auto-escaping for the url.
const THUMBNAIL_TEMPLATE: &str = "thumbnail_tag.html";
const THUMBNAIL_SOURCE: &str =
    "<img width=100px height=65px style='border-radius: 5px' src='{{ url }}'>";

static TEMPLATES: LazyLock<Environment<'static>> = LazyLock::new(|| {
    let mut env = Environment::new();
    if let Err(err) = env.add_template(THUMBNAIL_TEMPLATE, THUMBNAIL_SOURCE) {
        tracing::warn!(error = %err, template = THUMBNAIL_TEMPLATE, "failed to load template");
    }
    env
});

pub fn article_absolute_url(_article: &Article) -> &'static str {
    ACCOUNT_HOME_ROUTE
}

/// A column heading of the admin list, keyed by the row field it labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AdminColumn {
    pub field: String,
    pub label: String,
}

impl AdminColumn {
    fn new(field: &str, label: &str) -> Self {
        Self {
            field: field.to_string(),
            label: label.to_string(),
        }
    }
}

/// Headings plus one row per article.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ArticleAdminList {
    pub columns: Vec<AdminColumn>,
    pub rows: Vec<ArticleAdminRow>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ArticleAdminRow {
    pub id: i64,
    pub title: String,
    pub thumbnail_tag: String,
    pub slug: String,
    pub author_id: Option<i64>,
    pub jpublish: String,
    pub categories: String,
    pub status: String,
    pub url: String,
}

pub struct ArticleAdmin {
    media_url: String,
    calendar: Arc<dyn CalendarFormatter>,
}

impl ArticleAdmin {
    pub fn new(media_url: impl Into<String>, calendar: Arc<dyn CalendarFormatter>) -> Self {
        Self {
            media_url: media_url.into(),
            calendar,
        }
    }

    /// Fixed-size rounded preview of the article image.
    ///
    /// Fails when the article has no stored image, mirroring a lookup of a
    /// missing file.
    pub fn thumbnail_tag(&self, article: &Article) -> DomainResult<String> {
        let thumbnail = article
            .thumbnail
            .as_ref()
            .ok_or_else(|| DomainError::NotFound("article has no thumbnail".into()))?;
        TEMPLATES
            .get_template(THUMBNAIL_TEMPLATE)
            .and_then(|template| template.render(context! { url => thumbnail.url(&self.media_url) }))
            .map_err(|err| DomainError::Persistence(format!("failed to render thumbnail: {err}")))
    }

    pub fn jpublish(&self, article: &Article) -> String {
        self.calendar.format(article.publish)
    }

    pub fn category_to_str(&self, categories: &[Category]) -> String {
        scopes::category_to_str(categories)
    }

    pub fn row(&self, entry: &ArticleWithCategories) -> DomainResult<ArticleAdminRow> {
        let article = &entry.article;
        Ok(ArticleAdminRow {
            id: article.id.into(),
            title: article.title.to_string(),
            thumbnail_tag: self.thumbnail_tag(article)?,
            slug: article.slug.to_string(),
            author_id: article.author_id.map(Into::into),
            jpublish: self.jpublish(article),
            categories: self.category_to_str(&entry.categories),
            status: article.status.label().to_string(),
            url: article_absolute_url(article).to_string(),
        })
    }

    pub fn rows(&self, entries: &[ArticleWithCategories]) -> DomainResult<Vec<ArticleAdminRow>> {
        entries.iter().map(|entry| self.row(entry)).collect()
    }

    /// Headings for the columns that carry a Persian label.
    pub fn columns(&self) -> Vec<AdminColumn> {
        vec![
            AdminColumn::new("thumbnail_tag", THUMBNAIL_LABEL),
            AdminColumn::new("jpublish", PUBLISH_LABEL),
            AdminColumn::new("categories", CATEGORY_LABEL),
        ]
    }

    pub fn list(&self, entries: &[ArticleWithCategories]) -> DomainResult<ArticleAdminList> {
        Ok(ArticleAdminList {
            columns: self.columns(),
            rows: self.rows(entries)?,
        })
    }
}
