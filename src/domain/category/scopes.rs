// src/domain/category/scopes.rs
//! Named filters over category collections.
use crate::domain::category::entity::Category;

/// Separator used when category titles are joined for display.
pub const TITLE_SEPARATOR: &str = "، ";

/// Categories whose visibility flag is set, in input order.
pub fn active<'a, I>(categories: I) -> Vec<&'a Category>
where
    I: IntoIterator<Item = &'a Category>,
{
    categories.into_iter().filter(|c| c.is_active()).collect()
}

/// Titles of the active categories joined with the Persian comma.
pub fn category_to_str(categories: &[Category]) -> String {
    active(categories)
        .into_iter()
        .map(|c| c.title.as_str())
        .collect::<Vec<_>>()
        .join(TITLE_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::value_objects::{CategoryId, CategorySlug, CategoryTitle};

    fn category(id: i64, title: &str, status: bool) -> Category {
        Category {
            id: CategoryId::new(id).unwrap(),
            parent_id: None,
            title: CategoryTitle::new(title).unwrap(),
            slug: CategorySlug::new(format!("c-{id}")).unwrap(),
            status,
            position: id as i32,
        }
    }

    #[test]
    fn active_keeps_exactly_visible_categories() {
        let all = vec![
            category(1, "Tech", true),
            category(2, "News", false),
            category(3, "Life", true),
        ];
        let ids: Vec<i64> = active(&all).iter().map(|c| c.id.0).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn active_of_empty_collection_is_empty() {
        assert!(active(&[]).is_empty());
    }

    #[test]
    fn category_to_str_skips_inactive() {
        let all = vec![category(1, "Tech", true), category(2, "News", false)];
        assert_eq!(category_to_str(&all), "Tech");
    }

    #[test]
    fn category_to_str_joins_with_persian_comma() {
        let all = vec![category(1, "برنامه‌نویسی", true), category(2, "اخبار", true)];
        assert_eq!(category_to_str(&all), "برنامه‌نویسی، اخبار");
    }

    #[test]
    fn category_to_str_without_active_categories_is_empty() {
        let all = vec![category(1, "News", false)];
        assert_eq!(category_to_str(&all), "");
        assert_eq!(category_to_str(&[]), "");
    }
}
