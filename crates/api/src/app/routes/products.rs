use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use showroom_core::ProductId;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route(
            "/products",
            get(list_products).post(create_product).put(update_product),
        )
        .route("/products/:id", get(get_product).delete(delete_product))
}

/// `GET /products` and `GET /products?search=...`.
pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::ListProductsQuery>,
) -> axum::response::Response {
    match query.search {
        None => (StatusCode::OK, Json(services.products.list_products())).into_response(),
        Some(needle) => match services.products.search_by_description(&needle) {
            Ok(hits) => (StatusCode::OK, Json(hits)).into_response(),
            Err(e) => errors::domain_error_to_response(e),
        },
    }
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(res) => return res,
    };
    match services.products.get_by_id(id) {
        Ok(product) => (StatusCode::OK, Json(product)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    body: Bytes,
) -> axum::response::Response {
    let result = dto::parse_candidate(&body).and_then(|c| services.products.create(c));
    match result {
        Ok(outcome) => errors::outcome_status(outcome).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    body: Bytes,
) -> axum::response::Response {
    let result = dto::parse_candidate(&body).and_then(|c| services.products.update(c));
    match result {
        Ok(outcome) => errors::outcome_status(outcome).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// Always 200 with the remaining products, even when `id` was unknown.
pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(res) => return res,
    };
    (StatusCode::OK, Json(services.products.delete(id))).into_response()
}

fn parse_id(raw: &str) -> Result<ProductId, axum::response::Response> {
    raw.parse()
        .map_err(|_| errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid product id"))
}
