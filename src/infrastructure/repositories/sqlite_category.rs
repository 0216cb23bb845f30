// src/infrastructure/repositories/sqlite_category.rs
use super::map_sqlx;
use crate::domain::article::ArticleId;
use crate::domain::category::{
    Category, CategoryId, CategoryReadRepository, CategorySlug, CategoryTitle, CategoryUpdate,
    CategoryWriteRepository, NewCategory,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};

const CATEGORY_COLUMNS: &str = "c.id, c.parent_id, c.title, c.slug, c.status, c.position";

// NULL parents sort first in SQLite, which keeps roots ahead of their children.
const CATEGORY_ORDER: &str = " ORDER BY c.parent_id ASC, c.position ASC, c.id ASC";

#[derive(Clone)]
pub struct SqliteCategoryWriteRepository {
    pool: SqlitePool,
}

impl SqliteCategoryWriteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn exists(&self, id: CategoryId) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM categories WHERE id = ?)")
            .bind(i64::from(id))
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }
}

#[derive(Clone)]
pub struct SqliteCategoryReadRepository {
    pool: SqlitePool,
}

impl SqliteCategoryReadRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn fetch_where(&self, condition: &str, bind: Option<i64>) -> DomainResult<Vec<Category>> {
        let sql = format!("SELECT {CATEGORY_COLUMNS} FROM categories c{condition}{CATEGORY_ORDER}");
        let mut query = sqlx::query_as::<_, CategoryRow>(&sql);
        if let Some(value) = bind {
            query = query.bind(value);
        }
        let rows = query.fetch_all(&self.pool).await.map_err(map_sqlx)?;

        rows.into_iter().map(Category::try_from).collect()
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: i64,
    parent_id: Option<i64>,
    title: String,
    slug: String,
    status: bool,
    position: i32,
}

impl TryFrom<CategoryRow> for Category {
    type Error = DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Category {
            id: CategoryId::new(row.id)?,
            parent_id: row.parent_id.map(CategoryId::new).transpose()?,
            title: CategoryTitle::new(row.title)?,
            slug: CategorySlug::new(row.slug)?,
            status: row.status,
            position: row.position,
        })
    }
}

#[async_trait]
impl CategoryWriteRepository for SqliteCategoryWriteRepository {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let NewCategory {
            parent_id,
            title,
            slug,
            status,
            position,
        } = category;

        let row = sqlx::query_as::<_, CategoryRow>(
            "INSERT INTO categories (parent_id, title, slug, status, position)
             VALUES (?, ?, ?, ?, ?)
             RETURNING id, parent_id, title, slug, status, position",
        )
        .bind(parent_id.map(i64::from))
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(status)
        .bind(position)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Category::try_from(row)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        if update.is_empty() {
            let row = sqlx::query_as::<_, CategoryRow>(
                "SELECT id, parent_id, title, slug, status, position FROM categories WHERE id = ?",
            )
            .bind(i64::from(update.id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("category not found".into()))?;
            return Category::try_from(row);
        }

        let CategoryUpdate {
            id,
            parent_id,
            title,
            slug,
            status,
            position,
        } = update;
        let new_parent = parent_id.flatten();

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE categories SET ");
        {
            let mut fields = builder.separated(", ");
            if let Some(parent_id) = parent_id {
                fields.push("parent_id = ");
                fields.push_bind_unseparated(parent_id.map(i64::from));
            }
            if let Some(title) = title {
                fields.push("title = ");
                fields.push_bind_unseparated(String::from(title));
            }
            if let Some(slug) = slug {
                fields.push("slug = ");
                fields.push_bind_unseparated(String::from(slug));
            }
            if let Some(status) = status {
                fields.push("status = ");
                fields.push_bind_unseparated(status);
            }
            if let Some(position) = position {
                fields.push("position = ");
                fields.push_bind_unseparated(position);
            }
        }
        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        // The ancestor walk runs inside the UPDATE itself, so a parent link
        // committed concurrently by another writer is still seen.
        if let Some(parent) = new_parent {
            builder.push(
                " AND NOT EXISTS (WITH RECURSIVE ancestors(id, parent_id) AS (\
                 SELECT id, parent_id FROM categories WHERE id = ",
            );
            builder.push_bind(i64::from(parent));
            builder.push(
                " UNION SELECT c.id, c.parent_id FROM categories c \
                 JOIN ancestors a ON c.id = a.parent_id) \
                 SELECT 1 FROM ancestors WHERE ancestors.id = ",
            );
            builder.push_bind(i64::from(id));
            builder.push(")");
        }
        builder.push(" RETURNING id, parent_id, title, slug, status, position");

        let row = builder
            .build_query_as::<CategoryRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if let Some(row) = row {
            return Category::try_from(row);
        }
        match new_parent {
            Some(parent) if self.exists(id).await? => Err(DomainError::Validation(format!(
                "category {parent} cannot become the parent of its ancestor {id}"
            ))),
            _ => Err(DomainError::NotFound("category not found".into())),
        }
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("category not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl CategoryReadRepository for SqliteCategoryReadRepository {
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories c WHERE c.id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &CategorySlug) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories c WHERE c.slug = ?"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        self.fetch_where("", None).await
    }

    async fn list_active(&self) -> DomainResult<Vec<Category>> {
        self.fetch_where(" WHERE c.status = 1", None).await
    }

    async fn list_children(&self, parent_id: CategoryId) -> DomainResult<Vec<Category>> {
        self.fetch_where(" WHERE c.parent_id = ?", Some(i64::from(parent_id)))
            .await
    }

    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<Category>> {
        self.fetch_where(
            " JOIN article_categories link ON link.category_id = c.id WHERE link.article_id = ?",
            Some(i64::from(article_id)),
        )
        .await
    }
}
