// src/domain/text.rs
//! Field rules shared by the category and article value objects.
use chrono::{DateTime, Utc};

use crate::domain::errors::{DomainError, DomainResult};

pub(crate) const TITLE_MAX_CHARS: usize = 200;
pub(crate) const SLUG_MAX_CHARS: usize = 100;

pub(crate) fn ensure_title(value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation("title cannot be empty".into()));
    }
    if value.chars().count() > TITLE_MAX_CHARS {
        return Err(DomainError::Validation(format!(
            "title must be at most {TITLE_MAX_CHARS} characters"
        )));
    }
    Ok(())
}

/// Slugs are ASCII letters, digits, hyphens and underscores only.
pub(crate) fn ensure_slug(value: &str) -> DomainResult<()> {
    if value.is_empty() {
        return Err(DomainError::Validation("slug cannot be empty".into()));
    }
    if value.len() > SLUG_MAX_CHARS {
        return Err(DomainError::Validation(format!(
            "slug must be at most {SLUG_MAX_CHARS} characters"
        )));
    }
    if let Some(bad) = value
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(DomainError::Validation(format!(
            "slug contains invalid character '{bad}'"
        )));
    }
    Ok(())
}

/// Picks the first free slug for `slugified`. The base is cut short enough
/// for a numeric suffix; an empty base becomes `{fallback_prefix}-{unix}`.
/// Taken candidates get `-1`, `-2`, … appended.
pub(crate) async fn unique_slug<F, Fut>(
    mut slugified: String,
    fallback_prefix: &str,
    now: DateTime<Utc>,
    mut is_taken: F,
) -> DomainResult<String>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = DomainResult<bool>>,
{
    slugified.truncate(SLUG_MAX_CHARS - 10);
    let base = slugified.trim_end_matches('-');
    let base = if base.is_empty() {
        format!("{fallback_prefix}-{}", now.timestamp())
    } else {
        base.to_string()
    };

    let mut candidate = base.clone();
    let mut counter = 1u64;
    while is_taken(candidate.clone()).await? {
        candidate = format!("{base}-{counter}");
        counter += 1;
    }
    Ok(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap()
    }

    #[test]
    fn title_rejects_blank_and_overlong() {
        assert!(ensure_title("   ").is_err());
        assert!(ensure_title(&"ب".repeat(200)).is_ok());
        assert!(ensure_title(&"ب".repeat(201)).is_err());
    }

    #[test]
    fn slug_accepts_url_safe_ascii_only() {
        assert!(ensure_slug("rust-tips_2024").is_ok());
        assert!(ensure_slug("").is_err());
        assert!(ensure_slug("has space").is_err());
        assert!(ensure_slug("مقاله").is_err());
        assert!(ensure_slug(&"a".repeat(101)).is_err());
    }

    #[tokio::test]
    async fn unique_slug_skips_taken_candidates() {
        let taken = ["rust", "rust-1"];
        let slug = unique_slug("rust".into(), "article", at(), |candidate| async move {
            Ok(taken.contains(&candidate.as_str()))
        })
        .await
        .unwrap();
        assert_eq!(slug, "rust-2");
    }

    #[tokio::test]
    async fn unique_slug_falls_back_and_trims() {
        let free = |_: String| async { Ok(false) };
        let slug = unique_slug(String::new(), "category", at(), free).await.unwrap();
        assert_eq!(slug, format!("category-{}", at().timestamp()));

        let long = format!("{}-tail", "a".repeat(SLUG_MAX_CHARS - 11));
        let slug = unique_slug(long, "article", at(), free).await.unwrap();
        assert_eq!(slug, "a".repeat(SLUG_MAX_CHARS - 11));
    }
}
