//! Product field rules.
//!
//! The limits here are the declared API contract; request DTOs reference
//! them from their `#[validate(...)]` attributes so the boundary rejects a
//! payload before any business logic runs.

use std::borrow::Cow;

use validator::ValidationError;

/// Maximum length (in characters) of a SKU.
pub const MAX_SKU_LEN: u64 = 64;

/// Maximum length (in characters) of a product name.
pub const MAX_NAME_LEN: u64 = 255;

/// Maximum length (in characters) of a product description.
pub const MAX_DESCRIPTION_LEN: u64 = 4000;

/// Stock level assigned when a create request omits `stock_quantity`.
pub const DEFAULT_STOCK_QUANTITY: i32 = 0;

/// Entity name used in `NotFound` errors.
pub const PRODUCT_ENTITY: &str = "Product";

/// Reject strings that are empty once surrounding whitespace is removed.
///
/// `length(min = 1)` alone lets `"   "` through.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some(Cow::Borrowed("must not be blank"));
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_regular_text() {
        assert!(validate_not_blank("Widget").is_ok());
        assert!(validate_not_blank("  padded  ").is_ok());
    }

    #[test]
    fn rejects_empty_and_whitespace() {
        assert!(validate_not_blank("").is_err());
        let err = validate_not_blank(" \t\n").unwrap_err();
        assert_eq!(err.code, "blank");
        assert_eq!(err.message.as_deref(), Some("must not be blank"));
    }
}
