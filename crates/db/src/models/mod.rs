//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - For actively managed entities, `Deserialize` request DTOs for creates
//!   and patches, validated at the HTTP boundary

pub mod customer;
pub mod order;
pub mod product;
