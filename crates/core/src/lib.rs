//! Domain types and pure rules for the product catalog.
//!
//! Nothing in this crate performs I/O; it is shared by the database and
//! HTTP layers.

pub mod error;
pub mod pagination;
pub mod product;
pub mod types;
