// src/presentation/http/openapi.rs
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::get_article_by_slug,
        crate::presentation::http::controllers::categories::list_categories,
        crate::presentation::http::controllers::categories::list_category_articles,
        crate::presentation::http::controllers::admin::list_admin_articles,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::application::dto::ArticleDto,
            crate::application::dto::CategoryDto,
            crate::presentation::admin::AdminColumn,
            crate::presentation::admin::ArticleAdminRow,
            crate::presentation::admin::ArticleAdminList
        )
    ),
    tags(
        (name = "Articles", description = "Published article endpoints"),
        (name = "Categories", description = "Category tree endpoints"),
        (name = "Admin", description = "Administration list columns"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Blogcore API",
        description = "Read API for a Persian blog",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    Router::new().route("/api-docs/openapi.json", get(serve_openapi))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for expected in [
            "/health",
            "/api/v1/articles",
            "/api/v1/articles/{slug}",
            "/api/v1/categories",
            "/api/v1/categories/{slug}/articles",
            "/api/v1/admin/articles",
        ] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
    }
}
