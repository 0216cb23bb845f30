// src/presentation/http/controllers/categories.rs
use crate::application::{
    dto::{ArticleDto, CategoryDto},
    queries::{articles::ListArticlesInCategoryQuery, categories::ListActiveCategoriesQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

#[utoipa::path(
    get,
    path = "/api/v1/categories",
    responses(
        (status = 200, description = "Visible categories in tree order.", body = [CategoryDto])
    ),
    tag = "Categories"
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<CategoryDto>>> {
    state
        .services
        .category_queries
        .list_active_categories(ListActiveCategoriesQuery)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/categories/{slug}/articles",
    params(("slug" = String, Path, description = "Category slug")),
    responses(
        (status = 200, description = "Published articles filed under the category.", body = [ArticleDto]),
        (status = 404, description = "Unknown or hidden category.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn list_category_articles(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_articles_in_category(ListArticlesInCategoryQuery {
            category_slug: slug,
        })
        .await
        .into_http()
        .map(Json)
}
