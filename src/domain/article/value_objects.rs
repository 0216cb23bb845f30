use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::text::{ensure_slug, ensure_title};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleId(pub i64);

impl ArticleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "article id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        ensure_title(&value)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleTitle> for String {
    fn from(value: ArticleTitle) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleSlug(String);

impl ArticleSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        ensure_slug(&value)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleSlug> for String {
    fn from(value: ArticleSlug) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDescription(String);

impl ArticleDescription {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("description cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<ArticleDescription> for String {
    fn from(value: ArticleDescription) -> Self {
        value.0
    }
}

/// Relative path of an uploaded image below the media root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail(String);

impl Thumbnail {
    pub const UPLOAD_DIR: &'static str = "images";

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("thumbnail path cannot be empty".into()));
        }
        if value.split('/').any(|part| part.is_empty() || part == "..") {
            return Err(DomainError::Validation(
                "thumbnail path must be relative to the media root".into(),
            ));
        }
        Ok(Self(value))
    }

    /// Path for an incoming image, placed under the upload directory unless
    /// it already names a file there.
    pub fn uploaded(file_name: impl Into<String>) -> DomainResult<Self> {
        let file_name = file_name.into();
        if file_name.starts_with(&format!("{}/", Self::UPLOAD_DIR)) {
            Self::new(file_name)
        } else {
            Self::new(format!("{}/{}", Self::UPLOAD_DIR, file_name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Public URL of the image below `media_url`.
    pub fn url(&self, media_url: &str) -> String {
        if media_url.ends_with('/') {
            format!("{media_url}{}", self.0)
        } else {
            format!("{media_url}/{}", self.0)
        }
    }
}

impl From<Thumbnail> for String {
    fn from(value: Thumbnail) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ArticleStatus {
    #[default]
    Draft,
    Published,
}

impl ArticleStatus {
    /// Single-character code stored in the `status` column.
    pub fn code(&self) -> &'static str {
        match self {
            ArticleStatus::Draft => "d",
            ArticleStatus::Published => "p",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ArticleStatus::Draft => "پیش نویس",
            ArticleStatus::Published => "منتشر شده",
        }
    }

    pub fn is_published(&self) -> bool {
        matches!(self, ArticleStatus::Published)
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ArticleStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "d" => Ok(ArticleStatus::Draft),
            "p" => Ok(ArticleStatus::Published),
            other => Err(DomainError::Validation(format!(
                "unknown article status '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_parse_back() {
        assert_eq!("p".parse::<ArticleStatus>().unwrap(), ArticleStatus::Published);
        assert_eq!("d".parse::<ArticleStatus>().unwrap(), ArticleStatus::Draft);
        assert!("x".parse::<ArticleStatus>().is_err());
        assert_eq!(ArticleStatus::Published.label(), "منتشر شده");
    }

    #[test]
    fn thumbnail_rejects_absolute_and_parent_paths() {
        assert!(Thumbnail::new("/etc/passwd").is_err());
        assert!(Thumbnail::new("images/../secret.png").is_err());
        assert!(Thumbnail::new("").is_err());
        assert!(Thumbnail::uploaded("/etc/passwd").is_err());
    }

    #[test]
    fn thumbnail_url_joins_media_root() {
        let thumb = Thumbnail::uploaded("cover.jpg").unwrap();
        assert_eq!(thumb.as_str(), "images/cover.jpg");
        assert_eq!(Thumbnail::uploaded("images/cover.jpg").unwrap(), thumb);
        assert!(Thumbnail::uploaded("../cover.jpg").is_err());
        assert_eq!(thumb.url("/media/"), "/media/images/cover.jpg");
        assert_eq!(
            thumb.url("https://cdn.example.com/media"),
            "https://cdn.example.com/media/images/cover.jpg"
        );
    }

    #[test]
    fn description_cannot_be_blank() {
        assert!(ArticleDescription::new(" \n").is_err());
        assert!(ArticleDescription::new("متن").is_ok());
    }
}
