// src/presentation/http/controllers/admin.rs
use crate::application::queries::articles::ListAdminArticlesQuery;
use crate::presentation::admin::ArticleAdminList;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

/// Rendered admin columns for every article, drafts included. An article
/// without a stored thumbnail fails the whole listing.
#[utoipa::path(
    get,
    path = "/api/v1/admin/articles",
    responses(
        (status = 200, description = "Column headings and rows, newest first.", body = ArticleAdminList),
        (status = 404, description = "An article has no thumbnail.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn list_admin_articles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<ArticleAdminList>> {
    let listing = state
        .services
        .article_queries
        .list_admin_articles(ListAdminArticlesQuery)
        .await
        .into_http()?;

    state
        .admin
        .list(&listing)
        .map_err(|err| HttpError::from_error(err.into()))
        .map(Json)
}
