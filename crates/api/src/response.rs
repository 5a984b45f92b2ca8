//! Response body types shared by handlers.

use catalog_db::models::product::Product;
use serde::{Deserialize, Serialize};

/// Body of `GET /products`: one page plus the size of the whole catalog.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProductList {
    pub products: Vec<Product>,
    pub total: i64,
}
