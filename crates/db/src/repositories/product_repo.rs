//! Repository for the `products` table.

use sqlx::PgPool;
use catalog_core::types::DbId;

use crate::models::product::{NewProduct, Product, UpdateProduct};

/// Column list for `products` queries.
const COLUMNS: &str = "\
    id, sku, name, description, price, stock_quantity, \
    created_at, updated_at";

/// Provides CRUD operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product, returning the stored row.
    ///
    /// A duplicate SKU fails with a unique violation on `uq_products_sku`.
    pub async fn create(pool: &PgPool, input: &NewProduct) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products \
                 (id, sku, name, description, price, stock_quantity, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(input.id)
            .bind(&input.sku)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(input.stock_quantity)
            .bind(input.created_at)
            .fetch_one(pool)
            .await
    }

    /// Find a product by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Total number of products, independent of any page.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
            .fetch_one(pool)
            .await
    }

    /// List one page of products, most recently created first, together
    /// with the total row count.
    ///
    /// `limit` and `offset` are bound as given; callers bound them first.
    pub async fn list(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Product>, i64), sqlx::Error> {
        let total = Self::count(pool).await?;

        let query = format!(
            "SELECT {COLUMNS} FROM products \
             ORDER BY created_at DESC, id DESC \
             LIMIT $1 OFFSET $2"
        );
        let items = sqlx::query_as::<_, Product>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?;

        tracing::debug!(limit, offset, returned = items.len(), total, "Listed products");

        Ok((items, total))
    }

    /// Partially update a product in a single statement.
    ///
    /// Uses `COALESCE` so only provided fields change. `sku` and
    /// `created_at` are never written; `updated_at` is stamped.
    /// Returns `None` if no product with the given ID exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateProduct,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET \
                 name = COALESCE($2, name), \
                 description = COALESCE($3, description), \
                 price = COALESCE($4, price), \
                 stock_quantity = COALESCE($5, stock_quantity), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(&dto.name)
            .bind(&dto.description)
            .bind(dto.price)
            .bind(dto.stock_quantity)
            .fetch_optional(pool)
            .await
    }

    /// Delete a product by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
