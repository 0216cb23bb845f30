// tests/support/helpers.rs
use super::mocks::FixedClock;
use axum::body;
use axum::http::StatusCode;
use blogcore::application::ports::{calendar::CalendarFormatter, time::Clock};
use blogcore::application::services::{ApplicationServices, Repositories};
use blogcore::infrastructure::{
    calendar::JalaliCalendarFormatter,
    database,
    repositories::{
        SqliteArticleReadRepository, SqliteArticleWriteRepository, SqliteCategoryReadRepository,
        SqliteCategoryWriteRepository, SqliteUserRepository,
    },
    util::DefaultSlugGenerator,
};
use blogcore::presentation::{
    admin::ArticleAdmin,
    http::{routes::build_router, state::HttpState},
};
use serde_json::Value;
use sqlx::SqlitePool;
use std::sync::Arc;

pub const TEST_MEDIA_URL: &str = "/media/";

/// A migrated in-memory database with the full service graph on top.
pub struct TestContext {
    pub pool: SqlitePool,
    pub services: Arc<ApplicationServices>,
    pub clock: Arc<FixedClock>,
}

impl TestContext {
    pub fn router(&self) -> axum::Router {
        let admin = Arc::new(ArticleAdmin::new(TEST_MEDIA_URL, self.services.calendar()));
        build_router(HttpState {
            services: Arc::clone(&self.services),
            admin,
        })
    }

    pub fn category_reader(&self) -> SqliteCategoryReadRepository {
        SqliteCategoryReadRepository::new(self.pool.clone())
    }

    pub fn category_writer(&self) -> SqliteCategoryWriteRepository {
        SqliteCategoryWriteRepository::new(self.pool.clone())
    }

    pub fn article_reader(&self) -> SqliteArticleReadRepository {
        SqliteArticleReadRepository::new(self.pool.clone())
    }
}

pub async fn migrated_pool() -> SqlitePool {
    let pool = database::init_memory_pool()
        .await
        .expect("open in-memory sqlite");
    database::run_migrations(&pool)
        .await
        .expect("apply migrations");
    pool
}

pub async fn test_context() -> TestContext {
    test_context_with_calendar(Arc::new(JalaliCalendarFormatter::tehran())).await
}

pub async fn test_context_with_calendar(calendar: Arc<dyn CalendarFormatter>) -> TestContext {
    let pool = migrated_pool().await;
    let clock = Arc::new(FixedClock::default());

    let repos = Repositories {
        users: Arc::new(SqliteUserRepository::new(pool.clone())),
        article_write: Arc::new(SqliteArticleWriteRepository::new(pool.clone())),
        article_read: Arc::new(SqliteArticleReadRepository::new(pool.clone())),
        category_write: Arc::new(SqliteCategoryWriteRepository::new(pool.clone())),
        category_read: Arc::new(SqliteCategoryReadRepository::new(pool.clone())),
    };
    let services = Arc::new(ApplicationServices::new(
        repos,
        calendar,
        Arc::clone(&clock) as Arc<dyn Clock>,
        Arc::new(DefaultSlugGenerator),
    ));

    TestContext {
        pool,
        services,
        clock,
    }
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    serde_json::from_slice(&body_bytes).expect("expected valid json body")
}

/// Assert that a response is an error body with the expected status and reason.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field");
}
