use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::category::{
        CategoryReadRepository, CategoryWriteRepository,
        services::{CategorySlugService, CategoryTreeService},
    },
};

pub struct CategoryCommandService {
    pub(super) write_repo: Arc<dyn CategoryWriteRepository>,
    pub(super) read_repo: Arc<dyn CategoryReadRepository>,
    pub(super) tree: Arc<CategoryTreeService>,
    pub(super) slug_service: Arc<CategorySlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CategoryCommandService {
    pub fn new(
        write_repo: Arc<dyn CategoryWriteRepository>,
        read_repo: Arc<dyn CategoryReadRepository>,
        tree: Arc<CategoryTreeService>,
        slug_service: Arc<CategorySlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            tree,
            slug_service,
            clock,
        }
    }
}
