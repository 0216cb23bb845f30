// tests/user_commands.rs
use blogcore::application::commands::users::{DeleteUserCommand, RegisterUserCommand};
use blogcore::application::error::ApplicationError;
use blogcore::domain::errors::DomainError;

mod support;
use support::{register_user, test_context};

#[tokio::test]
async fn usernames_are_unique() {
    let ctx = test_context().await;
    register_user(&ctx, "sara").await;

    let err = ctx
        .services
        .user_commands
        .register(RegisterUserCommand {
            username: "sara".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Domain(DomainError::Conflict(_))));
}

#[tokio::test]
async fn short_usernames_are_rejected() {
    let ctx = test_context().await;
    let err = ctx
        .services
        .user_commands
        .register(RegisterUserCommand {
            username: "ab".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Domain(DomainError::Validation(_))));
}

#[tokio::test]
async fn deleting_twice_reports_missing_user() {
    let ctx = test_context().await;
    let id = register_user(&ctx, "sara").await;
    let users = &ctx.services.user_commands;

    users.delete_user(DeleteUserCommand { id }).await.unwrap();
    let err = users.delete_user(DeleteUserCommand { id }).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Domain(DomainError::NotFound(_))));
}
