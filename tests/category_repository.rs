// tests/category_repository.rs
use blogcore::application::commands::categories::{
    CreateCategoryCommand, DeleteCategoryCommand, UpdateCategoryCommand,
};
use blogcore::domain::category::{CategoryReadRepository, scopes};

mod support;
use support::{create_category, root_category, test_context};

fn slugs(categories: &[blogcore::domain::category::Category]) -> Vec<&str> {
    categories.iter().map(|c| c.slug.as_str()).collect()
}

/// Roots come first, then children grouped by parent, each group by position.
#[tokio::test]
async fn list_orders_by_parent_then_position() {
    let ctx = test_context().await;
    let news = root_category(&ctx, "News", "news", 2).await;
    let tech = root_category(&ctx, "Tech", "tech", 1).await;
    create_category(
        &ctx,
        CreateCategoryCommand::new("Rust", 0)
            .with_parent(tech.id.0)
            .with_slug("rust"),
    )
    .await;
    create_category(
        &ctx,
        CreateCategoryCommand::new("World", 5)
            .with_parent(news.id.0)
            .with_slug("world"),
    )
    .await;
    create_category(
        &ctx,
        CreateCategoryCommand::new("Politics", 1)
            .with_parent(news.id.0)
            .with_slug("politics"),
    )
    .await;

    let listed = ctx.category_reader().list().await.unwrap();
    assert_eq!(slugs(&listed), ["tech", "news", "politics", "world", "rust"]);
}

#[tokio::test]
async fn list_active_skips_hidden_categories() {
    let ctx = test_context().await;
    root_category(&ctx, "Tech", "tech", 1).await;
    create_category(
        &ctx,
        CreateCategoryCommand::new("Archive", 0)
            .with_slug("archive")
            .with_status(false),
    )
    .await;
    root_category(&ctx, "News", "news", 2).await;

    let reader = ctx.category_reader();
    let active = reader.list_active().await.unwrap();
    assert_eq!(slugs(&active), ["tech", "news"]);

    let all = reader.list().await.unwrap();
    let filtered: Vec<&str> = scopes::active(&all)
        .into_iter()
        .map(|c| c.slug.as_str())
        .collect();
    assert_eq!(filtered, slugs(&active));
}

#[tokio::test]
async fn deleting_a_parent_orphans_its_children() {
    let ctx = test_context().await;
    let news = root_category(&ctx, "News", "news", 1).await;
    let world = create_category(
        &ctx,
        CreateCategoryCommand::new("World", 0)
            .with_parent(news.id.0)
            .with_slug("world"),
    )
    .await;

    ctx.services
        .category_commands
        .delete_category(DeleteCategoryCommand { id: news.id.0 })
        .await
        .unwrap();

    let reader = ctx.category_reader();
    assert!(reader.find_by_id(news.id).await.unwrap().is_none());
    let survivor = reader.find_by_id(world.id).await.unwrap().unwrap();
    assert_eq!(survivor.parent_id, None);
    assert!(survivor.is_root());
}

#[tokio::test]
async fn children_follow_position_order() {
    let ctx = test_context().await;
    let news = root_category(&ctx, "News", "news", 1).await;
    for (title, slug, position) in [("World", "world", 3), ("Local", "local", 1)] {
        create_category(
            &ctx,
            CreateCategoryCommand::new(title, position)
                .with_parent(news.id.0)
                .with_slug(slug),
        )
        .await;
    }

    let children = ctx.category_reader().list_children(news.id).await.unwrap();
    assert_eq!(slugs(&children), ["local", "world"]);
}

#[tokio::test]
async fn moving_a_category_changes_its_group() {
    let ctx = test_context().await;
    let news = root_category(&ctx, "News", "news", 1).await;
    let tech = root_category(&ctx, "Tech", "tech", 2).await;

    let moved = ctx
        .services
        .category_commands
        .update_category(UpdateCategoryCommand {
            id: tech.id.0,
            parent_id: Some(Some(news.id.0)),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(moved.parent_id, Some(news.id));

    let listed = ctx.category_reader().list().await.unwrap();
    assert_eq!(slugs(&listed), ["news", "tech"]);
    assert!(!listed[1].is_root());
}

#[tokio::test]
async fn child_query_can_hide_inactive_children() {
    use blogcore::application::queries::categories::{
        ListCategoriesQuery, ListChildCategoriesQuery,
    };

    let ctx = test_context().await;
    let news = root_category(&ctx, "News", "news", 1).await;
    create_category(
        &ctx,
        CreateCategoryCommand::new("World", 1)
            .with_parent(news.id.0)
            .with_slug("world"),
    )
    .await;
    create_category(
        &ctx,
        CreateCategoryCommand::new("Gossip", 2)
            .with_parent(news.id.0)
            .with_slug("gossip")
            .with_status(false),
    )
    .await;

    let queries = &ctx.services.category_queries;
    let visible = queries
        .list_child_categories(ListChildCategoriesQuery {
            slug: "news".into(),
            active_only: true,
        })
        .await
        .unwrap();
    let every = queries
        .list_child_categories(ListChildCategoriesQuery {
            slug: "news".into(),
            active_only: false,
        })
        .await
        .unwrap();
    let all = queries.list_categories(ListCategoriesQuery).await.unwrap();

    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].slug, "world");
    assert_eq!(every.len(), 2);
    assert_eq!(all.len(), 3);
    assert_eq!(all[1].parent_id, Some(news.id.0));
}
