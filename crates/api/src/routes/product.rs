//! Route definitions for the product catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::product;
use crate::state::AppState;

/// Product routes mounted at `/products`.
///
/// ```text
/// GET    /        -> list_products
/// POST   /        -> create_product
/// GET    /{id}    -> get_product
/// PUT    /{id}    -> update_product
/// DELETE /{id}    -> delete_product
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(product::list_products).post(product::create_product),
        )
        .route(
            "/{id}",
            get(product::get_product)
                .put(product::update_product)
                .delete(product::delete_product),
        )
}
