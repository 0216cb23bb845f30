// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            articles::ArticleCommandService, categories::CategoryCommandService,
            users::UserCommandService,
        },
        ports::{calendar::CalendarFormatter, time::Clock, util::SlugGenerator},
        queries::{articles::ArticleQueryService, categories::CategoryQueryService},
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository, services::ArticleSlugService},
        category::{
            CategoryReadRepository, CategoryWriteRepository,
            services::{CategorySlugService, CategoryTreeService},
        },
        user::UserRepository,
    },
};

/// Repository handles the services are assembled from.
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub article_write: Arc<dyn ArticleWriteRepository>,
    pub article_read: Arc<dyn ArticleReadRepository>,
    pub category_write: Arc<dyn CategoryWriteRepository>,
    pub category_read: Arc<dyn CategoryReadRepository>,
}

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub category_commands: Arc<CategoryCommandService>,
    pub category_queries: Arc<CategoryQueryService>,
    calendar: Arc<dyn CalendarFormatter>,
}

impl ApplicationServices {
    pub fn new(
        repos: Repositories,
        calendar: Arc<dyn CalendarFormatter>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(Arc::clone(&repos.users)));

        let article_slugs = Arc::new(ArticleSlugService::new(
            Arc::clone(&repos.article_read),
            Arc::clone(&slugger),
        ));
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&repos.article_write),
            Arc::clone(&repos.article_read),
            Arc::clone(&repos.category_read),
            Arc::clone(&repos.users),
            article_slugs,
            Arc::clone(&clock),
        ));
        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&repos.article_read),
            Arc::clone(&repos.category_read),
            Arc::clone(&calendar),
        ));

        let tree = Arc::new(CategoryTreeService::new(Arc::clone(&repos.category_read)));
        let category_slugs = Arc::new(CategorySlugService::new(
            Arc::clone(&repos.category_read),
            Arc::clone(&slugger),
        ));
        let category_commands = Arc::new(CategoryCommandService::new(
            Arc::clone(&repos.category_write),
            Arc::clone(&repos.category_read),
            tree,
            category_slugs,
            Arc::clone(&clock),
        ));
        let category_queries = Arc::new(CategoryQueryService::new(Arc::clone(
            &repos.category_read,
        )));

        Self {
            user_commands,
            article_commands,
            article_queries,
            category_commands,
            category_queries,
            calendar,
        }
    }

    pub fn calendar(&self) -> Arc<dyn CalendarFormatter> {
        Arc::clone(&self.calendar)
    }
}
