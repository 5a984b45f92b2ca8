//! Order header and line item row models. Schema only.

use serde::Serialize;
use sqlx::FromRow;
use catalog_core::types::{DbId, Timestamp};

/// Status assigned to an order row when none is given.
pub const DEFAULT_ORDER_STATUS: &str = "pending";

/// A row from the `orders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Order {
    pub id: DbId,
    pub customer_id: DbId,
    pub order_date: Timestamp,
    pub status: String,
    pub total_amount: f64,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}

/// A row from the `order_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OrderItem {
    pub id: DbId,
    pub order_id: DbId,
    pub product_id: DbId,
    pub quantity: i32,
    pub unit_price: f64,
    pub subtotal: f64,
}
