// tests/support/builders.rs
use super::helpers::TestContext;
use blogcore::application::commands::{
    articles::{CreateArticleCommand, CreateArticleCommandBuilder},
    categories::CreateCategoryCommand,
    users::RegisterUserCommand,
};
use blogcore::domain::article::{Article, ArticleStatus};
use blogcore::domain::category::Category;

/// A published article with a body, ready for further tweaks.
pub fn article(title: &str, slug: &str) -> CreateArticleCommandBuilder {
    CreateArticleCommand::builder()
        .title(title)
        .slug(slug)
        .description(format!("body of {title}"))
        .status(ArticleStatus::Published)
}

pub async fn create_article(ctx: &TestContext, builder: CreateArticleCommandBuilder) -> Article {
    let command = builder.build().expect("complete article command");
    ctx.services
        .article_commands
        .create_article(command)
        .await
        .expect("create article")
}

pub async fn create_category(ctx: &TestContext, command: CreateCategoryCommand) -> Category {
    ctx.services
        .category_commands
        .create_category(command)
        .await
        .expect("create category")
}

pub async fn root_category(ctx: &TestContext, title: &str, slug: &str, position: i32) -> Category {
    create_category(ctx, CreateCategoryCommand::new(title, position).with_slug(slug)).await
}

pub async fn register_user(ctx: &TestContext, username: &str) -> i64 {
    ctx.services
        .user_commands
        .register(RegisterUserCommand {
            username: username.into(),
        })
        .await
        .expect("register user")
        .id
}
