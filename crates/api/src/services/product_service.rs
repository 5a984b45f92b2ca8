//! Product application logic.
//!
//! Assigns identity and creation time on create and turns repository
//! absence (`None` / `false`) into `CoreError::NotFound`. Everything else
//! is delegation to [`ProductRepo`].

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use catalog_core::error::CoreError;
use catalog_core::pagination::Page;
use catalog_core::product::{DEFAULT_STOCK_QUANTITY, PRODUCT_ENTITY};
use catalog_core::types::DbId;
use catalog_db::models::product::{CreateProduct, NewProduct, Product, UpdateProduct};
use catalog_db::repositories::ProductRepo;

use crate::error::AppResult;

pub struct ProductService;

impl ProductService {
    /// Create a product with a fresh id and the current time.
    pub async fn create(pool: &PgPool, input: CreateProduct) -> AppResult<Product> {
        let record = NewProduct {
            id: Uuid::new_v4(),
            sku: input.sku,
            name: input.name,
            description: input.description,
            price: input.price,
            stock_quantity: input.stock_quantity.unwrap_or(DEFAULT_STOCK_QUANTITY),
            created_at: Utc::now(),
        };

        Ok(ProductRepo::create(pool, &record).await?)
    }

    pub async fn get(pool: &PgPool, id: DbId) -> AppResult<Product> {
        ProductRepo::find_by_id(pool, id)
            .await?
            .ok_or_else(|| not_found(id).into())
    }

    pub async fn list(pool: &PgPool, page: Page) -> AppResult<(Vec<Product>, i64)> {
        Ok(ProductRepo::list(pool, page.limit, page.offset).await?)
    }

    /// Apply a partial update in one statement and return the stored row.
    ///
    /// Fields absent from `input` keep their current value.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateProduct) -> AppResult<Product> {
        ProductRepo::update(pool, id, input)
            .await?
            .ok_or_else(|| not_found(id).into())
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> AppResult<()> {
        if !ProductRepo::delete(pool, id).await? {
            return Err(not_found(id).into());
        }
        Ok(())
    }
}

fn not_found(id: DbId) -> CoreError {
    CoreError::NotFound {
        entity: PRODUCT_ENTITY,
        id,
    }
}
