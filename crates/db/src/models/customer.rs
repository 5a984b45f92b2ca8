//! Customer row model. Present in the schema for future order handling;
//! no repository reads or writes it yet.

use serde::Serialize;
use sqlx::FromRow;
use catalog_core::types::{DbId, Timestamp};

/// A row from the `customers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Customer {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub created_at: Timestamp,
}
