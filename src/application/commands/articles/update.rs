use super::ArticleCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::{
        Article, ArticleDescription, ArticleId, ArticleSlug, ArticleStatus, ArticleTitle,
        ArticleUpdate, Thumbnail,
    },
};
use chrono::{DateTime, Utc};

/// Partial update; `None` leaves a field untouched. For the nullable links,
/// `Some(None)` clears them.
#[derive(Default)]
pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<Option<String>>,
    pub author_id: Option<Option<i64>>,
    pub category_ids: Option<Vec<i64>>,
    pub status: Option<ArticleStatus>,
    pub publish: Option<DateTime<Utc>>,
}

impl ArticleCommandService {
    pub async fn update_article(&self, command: UpdateArticleCommand) -> ApplicationResult<Article> {
        let id = ArticleId::new(command.id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let mut update = ArticleUpdate::new(id, self.clock.now());

        if let Some(title) = command.title {
            update = update.with_title(ArticleTitle::new(title)?);
        }
        if let Some(slug) = command.slug {
            update = update.with_slug(ArticleSlug::new(slug)?);
        }
        if let Some(description) = command.description {
            update = update.with_description(ArticleDescription::new(description)?);
        }
        if let Some(thumbnail) = command.thumbnail {
            update = update.with_thumbnail(thumbnail.map(Thumbnail::uploaded).transpose()?);
        }
        if let Some(author_id) = command.author_id {
            update = update.with_author(self.resolve_author(author_id).await?);
        }
        if let Some(category_ids) = command.category_ids {
            update = update.with_categories(self.resolve_categories(&category_ids).await?);
        }
        if let Some(status) = command.status {
            update = update.with_status(status);
        }
        if let Some(publish) = command.publish {
            update = update.with_publish(publish);
        }

        let updated = self.write_repo.update(update).await?;
        tracing::info!(article_id = updated.id.0, "article updated");
        Ok(updated)
    }
}
