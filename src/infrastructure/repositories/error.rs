// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;
use sqlx::error::ErrorKind;

const UNIQUE_ARTICLE_SLUG: &str = "articles.slug";
const UNIQUE_CATEGORY_SLUG: &str = "categories.slug";
const UNIQUE_USER_USERNAME: &str = "users.username";

/// Translates SQLite failures into domain errors. SQLite does not report
/// constraint names, so unique violations are told apart by the column named
/// in the message.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            let message = db_err.message();
            match db_err.kind() {
                ErrorKind::UniqueViolation => {
                    if message.contains(UNIQUE_ARTICLE_SLUG) || message.contains(UNIQUE_CATEGORY_SLUG)
                    {
                        DomainError::Conflict("slug already exists".into())
                    } else if message.contains(UNIQUE_USER_USERNAME) {
                        DomainError::Conflict("username already exists".into())
                    } else {
                        DomainError::Conflict("unique constraint violated".into())
                    }
                }
                ErrorKind::ForeignKeyViolation => {
                    DomainError::NotFound("referenced record not found".into())
                }
                ErrorKind::CheckViolation | ErrorKind::NotNullViolation => {
                    DomainError::Validation(format!("constraint violated: {message}"))
                }
                _ => DomainError::Persistence(message.to_string()),
            }
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("record not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}
