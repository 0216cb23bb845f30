// src/infrastructure/repositories/sqlite_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleDescription, ArticleId, ArticleReadRepository, ArticleSlug, ArticleTitle,
    ArticleUpdate, ArticleWriteRepository, NewArticle, Thumbnail,
};
use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqliteConnection, SqlitePool};

const ARTICLE_SELECT: &str = "SELECT a.id, a.title, a.slug, a.author_id, a.description, a.thumbnail, \
     a.publish, a.created, a.updated, a.status, \
     (SELECT GROUP_CONCAT(ac.category_id) FROM article_categories ac WHERE ac.article_id = a.id) AS category_ids \
     FROM articles a";

// Timestamps are stored as RFC 3339 text whose fraction width varies, so
// comparisons go through julianday() instead of plain string order.
const ARTICLE_ORDER: &str = " ORDER BY julianday(a.publish) DESC, a.id DESC";

#[derive(Clone)]
pub struct SqliteArticleWriteRepository {
    pool: SqlitePool,
}

impl SqliteArticleWriteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteArticleReadRepository {
    pool: SqlitePool,
}

impl SqliteArticleReadRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    slug: String,
    author_id: Option<i64>,
    description: String,
    thumbnail: Option<String>,
    publish: DateTime<Utc>,
    created: DateTime<Utc>,
    updated: DateTime<Utc>,
    status: String,
    category_ids: Option<String>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        let mut category_ids = row
            .category_ids
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.trim()
                    .parse::<i64>()
                    .map_err(|e| DomainError::Persistence(format!("bad category link: {e}")))
                    .and_then(CategoryId::new)
            })
            .collect::<Result<Vec<_>, _>>()?;
        category_ids.sort();

        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            slug: ArticleSlug::new(row.slug)?,
            author_id: row.author_id.map(UserId::new).transpose()?,
            category_ids,
            description: ArticleDescription::new(row.description)?,
            thumbnail: row
                .thumbnail
                .filter(|path| !path.is_empty())
                .map(Thumbnail::new)
                .transpose()?,
            publish: row.publish,
            created_at: row.created,
            updated_at: row.updated,
            status: row.status.parse()?,
        })
    }
}

async fn fetch_one_by_id(conn: &mut SqliteConnection, id: i64) -> DomainResult<Article> {
    let row = sqlx::query_as::<_, ArticleRow>(&format!("{ARTICLE_SELECT} WHERE a.id = ?"))
        .bind(id)
        .fetch_one(conn)
        .await
        .map_err(map_sqlx)?;
    Article::try_from(row)
}

async fn replace_category_links(
    conn: &mut SqliteConnection,
    article_id: i64,
    category_ids: &[CategoryId],
) -> DomainResult<()> {
    sqlx::query("DELETE FROM article_categories WHERE article_id = ?")
        .bind(article_id)
        .execute(&mut *conn)
        .await
        .map_err(map_sqlx)?;

    for category_id in category_ids {
        sqlx::query("INSERT INTO article_categories (article_id, category_id) VALUES (?, ?)")
            .bind(article_id)
            .bind(i64::from(*category_id))
            .execute(&mut *conn)
            .await
            .map_err(map_sqlx)?;
    }
    Ok(())
}

fn into_articles(rows: Vec<ArticleRow>) -> DomainResult<Vec<Article>> {
    rows.into_iter().map(Article::try_from).collect()
}

#[async_trait]
impl ArticleWriteRepository for SqliteArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            slug,
            author_id,
            category_ids,
            description,
            thumbnail,
            publish,
            created_at,
            updated_at,
            status,
        } = article;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO articles (title, slug, author_id, description, thumbnail, publish, created, updated, status)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING id",
        )
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(author_id.map(i64::from))
        .bind(description.as_str())
        .bind(thumbnail.as_ref().map(Thumbnail::as_str))
        .bind(publish)
        .bind(created_at)
        .bind(updated_at)
        .bind(status.code())
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        replace_category_links(&mut tx, id, &category_ids).await?;
        let created = fetch_one_by_id(&mut tx, id).await?;
        tx.commit().await.map_err(map_sqlx)?;

        Ok(created)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            title,
            slug,
            author_id,
            category_ids,
            description,
            thumbnail,
            publish,
            status,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE articles SET updated = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            let title_str: String = title.into();
            builder.push(", title = ");
            builder.push_bind(title_str);
        }

        if let Some(slug) = slug {
            let slug_str: String = slug.into();
            builder.push(", slug = ");
            builder.push_bind(slug_str);
        }

        if let Some(author_id) = author_id {
            builder.push(", author_id = ");
            builder.push_bind(author_id.map(i64::from));
        }

        if let Some(description) = description {
            let description_str: String = description.into();
            builder.push(", description = ");
            builder.push_bind(description_str);
        }

        if let Some(thumbnail) = thumbnail {
            builder.push(", thumbnail = ");
            builder.push_bind(thumbnail.map(String::from));
        }

        if let Some(publish) = publish {
            builder.push(", publish = ");
            builder.push_bind(publish);
        }

        if let Some(status) = status {
            builder.push(", status = ");
            builder.push_bind(status.code());
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let result = builder
            .build()
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }

        if let Some(category_ids) = category_ids {
            replace_category_links(&mut tx, i64::from(id), &category_ids).await?;
        }

        let updated = fetch_one_by_id(&mut tx, i64::from(id)).await?;
        tx.commit().await.map_err(map_sqlx)?;

        Ok(updated)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for SqliteArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!("{ARTICLE_SELECT} WHERE a.id = ?"))
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!("{ARTICLE_SELECT} WHERE a.slug = ?"))
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!("{ARTICLE_SELECT}{ARTICLE_ORDER}"))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        into_articles(rows)
    }

    async fn list_published(&self) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "{ARTICLE_SELECT} WHERE a.status = 'p'{ARTICLE_ORDER}"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        into_articles(rows)
    }

    async fn list_published_in_category(
        &self,
        category_id: CategoryId,
    ) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "{ARTICLE_SELECT} WHERE a.status = 'p' AND EXISTS (\
                SELECT 1 FROM article_categories link \
                WHERE link.article_id = a.id AND link.category_id = ?\
             ){ARTICLE_ORDER}"
        ))
        .bind(i64::from(category_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        into_articles(rows)
    }
}
