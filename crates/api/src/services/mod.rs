//! Application logic between HTTP handlers and repositories.

pub mod product_service;

pub use product_service::ProductService;
