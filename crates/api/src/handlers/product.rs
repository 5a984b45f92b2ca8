//! Handlers for the `/products` resource.
//!
//! Request bodies and path ids are checked by the [`ValidatedJson`] and
//! [`IdPath`] extractors before any of these functions run.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use catalog_core::pagination::resolve_page;
use catalog_db::models::product::{CreateProduct, UpdateProduct};

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, ValidatedJson};
use crate::query::PaginationParams;
use crate::response::ProductList;
use crate::services::ProductService;
use crate::state::AppState;

/// GET /products?limit=&offset=
///
/// List products, most recently created first. `limit` defaults to 20 and
/// is capped at 100; negative values are rejected.
pub async fn list_products(
    State(state): State<AppState>,
    params: Result<Query<PaginationParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let page = resolve_page(params.limit, params.offset)?;

    let (products, total) = ProductService::list(&state.pool, page).await?;

    Ok(Json(ProductList { products, total }))
}

/// POST /products
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> AppResult<impl IntoResponse> {
    let product = ProductService::create(&state.pool, input).await?;

    tracing::info!(
        product_id = %product.id,
        sku = %product.sku,
        "Product created",
    );

    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    IdPath(product_id): IdPath,
) -> AppResult<impl IntoResponse> {
    let product = ProductService::get(&state.pool, product_id).await?;

    Ok(Json(product))
}

/// PUT /products/{id}
///
/// Partially update a product; omitted fields are left unchanged.
pub async fn update_product(
    State(state): State<AppState>,
    IdPath(product_id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateProduct>,
) -> AppResult<impl IntoResponse> {
    let product = ProductService::update(&state.pool, product_id, &input).await?;

    tracing::info!(product_id = %product_id, "Product updated");

    Ok(Json(product))
}

/// DELETE /products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    IdPath(product_id): IdPath,
) -> AppResult<impl IntoResponse> {
    ProductService::delete(&state.pool, product_id).await?;

    tracing::info!(product_id = %product_id, "Product deleted");

    Ok(StatusCode::NO_CONTENT)
}
