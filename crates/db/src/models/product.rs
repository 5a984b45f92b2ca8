//! Product model and DTOs.

use catalog_core::product::{
    validate_not_blank, MAX_DESCRIPTION_LEN, MAX_NAME_LEN, MAX_SKU_LEN,
};
use catalog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

// ---------------------------------------------------------------------------
// Entity struct (database row)
// ---------------------------------------------------------------------------

/// A row from the `products` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Product {
    pub id: DbId,
    pub sku: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock_quantity: i32,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}

/// A fully populated product ready for insertion.
///
/// The id and creation time are chosen by the application, not the database.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub id: DbId,
    pub sku: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock_quantity: i32,
    pub created_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for `POST /products`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateProduct {
    #[validate(
        length(min = 1, max = MAX_SKU_LEN),
        custom(function = "validate_not_blank")
    )]
    pub sku: String,
    #[validate(
        length(min = 1, max = MAX_NAME_LEN),
        custom(function = "validate_not_blank")
    )]
    pub name: String,
    #[validate(length(max = MAX_DESCRIPTION_LEN))]
    pub description: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 0))]
    pub stock_quantity: Option<i32>,
}

/// DTO for `PUT /products/{id}`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateProduct {
    #[validate(
        length(min = 1, max = MAX_NAME_LEN),
        custom(function = "validate_not_blank")
    )]
    pub name: Option<String>,
    #[validate(length(max = MAX_DESCRIPTION_LEN))]
    pub description: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    #[validate(range(min = 0))]
    pub stock_quantity: Option<i32>,
}
