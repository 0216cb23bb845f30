// src/domain/article/scopes.rs
use crate::domain::article::entity::Article;
use std::cmp::Ordering;

/// Articles with the published status, in input order.
pub fn published<'a, I>(articles: I) -> Vec<&'a Article>
where
    I: IntoIterator<Item = &'a Article>,
{
    articles.into_iter().filter(|a| a.is_published()).collect()
}

/// Default listing order: newest `publish` first, then highest id.
pub fn default_order(a: &Article, b: &Article) -> Ordering {
    b.publish.cmp(&a.publish).then(b.id.cmp(&a.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::value_objects::{
        ArticleDescription, ArticleId, ArticleSlug, ArticleStatus, ArticleTitle,
    };
    use chrono::{Duration, TimeZone, Utc};

    fn article(id: i64, status: ArticleStatus, days: i64) -> Article {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        Article {
            id: ArticleId::new(id).unwrap(),
            title: ArticleTitle::new(format!("article {id}")).unwrap(),
            slug: ArticleSlug::new(format!("article-{id}")).unwrap(),
            author_id: None,
            category_ids: vec![],
            description: ArticleDescription::new("body").unwrap(),
            thumbnail: None,
            publish: base + Duration::days(days),
            created_at: base,
            updated_at: base,
            status,
        }
    }

    #[test]
    fn published_keeps_only_published_status() {
        let all = vec![
            article(1, ArticleStatus::Published, 0),
            article(2, ArticleStatus::Draft, 1),
            article(3, ArticleStatus::Published, 2),
        ];
        let ids: Vec<i64> = published(&all).iter().map(|a| a.id.0).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn published_of_drafts_only_is_empty() {
        let all = vec![article(1, ArticleStatus::Draft, 0)];
        assert!(published(&all).is_empty());
    }

    #[test]
    fn default_order_is_newest_first() {
        let mut all = vec![
            article(1, ArticleStatus::Published, 0),
            article(2, ArticleStatus::Published, 5),
            article(3, ArticleStatus::Published, 5),
            article(4, ArticleStatus::Published, 2),
        ];
        all.sort_by(default_order);
        let ids: Vec<i64> = all.iter().map(|a| a.id.0).collect();
        assert_eq!(ids, vec![3, 2, 4, 1]);
    }
}
