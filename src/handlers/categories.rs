use axum::response::Json;
use common::{catalog, CategoryInfo};

/// List the built-in categories with their chart colours
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "categories",
    responses(
        (status = 200, description = "Category catalog", body = [CategoryInfo])
    )
)]
pub async fn get_categories() -> Json<Vec<CategoryInfo>> {
    Json(catalog())
}
