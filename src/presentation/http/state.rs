// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use crate::presentation::admin::ArticleAdmin;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub admin: Arc<ArticleAdmin>,
}
