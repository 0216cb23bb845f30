// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::article::{
        Article, ArticleDescription, ArticleSlug, ArticleStatus, ArticleTitle, NewArticle,
        Thumbnail,
    },
};
use chrono::{DateTime, Utc};

pub struct CreateArticleCommand {
    pub title: String,
    /// Generated from the title when absent.
    pub slug: Option<String>,
    pub description: String,
    pub thumbnail: Option<String>,
    pub author_id: Option<i64>,
    pub category_ids: Vec<i64>,
    pub status: ArticleStatus,
    /// Defaults to the creation time.
    pub publish: Option<DateTime<Utc>>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    slug: Option<String>,
    description: Option<String>,
    thumbnail: Option<String>,
    author_id: Option<i64>,
    category_ids: Vec<i64>,
    status: ArticleStatus,
    publish: Option<DateTime<Utc>>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    pub fn author(mut self, author_id: i64) -> Self {
        self.author_id = Some(author_id);
        self
    }

    pub fn category(mut self, category_id: i64) -> Self {
        self.category_ids.push(category_id);
        self
    }

    pub fn status(mut self, status: ArticleStatus) -> Self {
        self.status = status;
        self
    }

    pub fn publish(mut self, publish: DateTime<Utc>) -> Self {
        self.publish = Some(publish);
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            slug: self.slug,
            description: self.description.ok_or("description is required")?,
            thumbnail: self.thumbnail,
            author_id: self.author_id,
            category_ids: self.category_ids,
            status: self.status,
            publish: self.publish,
        })
    }
}

impl ArticleCommandService {
    pub async fn create_article(&self, command: CreateArticleCommand) -> ApplicationResult<Article> {
        let title = ArticleTitle::new(command.title)?;
        let description = ArticleDescription::new(command.description)?;
        let thumbnail = command.thumbnail.map(Thumbnail::uploaded).transpose()?;
        let author_id = self.resolve_author(command.author_id).await?;
        let category_ids = self.resolve_categories(&command.category_ids).await?;
        let now = self.clock.now();

        let slug = match command.slug {
            Some(slug) => ArticleSlug::new(slug)?,
            None => self.slug_service.generate_unique_slug(&title, now).await?,
        };

        let mut new_article = NewArticle::new(title, slug, description, now)
            .with_author(author_id)
            .with_categories(category_ids)
            .with_thumbnail(thumbnail)
            .with_status(command.status);
        if let Some(publish) = command.publish {
            new_article = new_article.with_publish(publish);
        }

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(
            article_id = created.id.0,
            slug = %created.slug,
            status = %created.status,
            "article created"
        );
        Ok(created)
    }
}
