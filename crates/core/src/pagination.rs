//! Offset/limit pagination rules shared by list endpoints.
//!
//! Callers pass the raw query values; [`resolve_page`] rejects values that
//! can never be valid and clamps the page size to [`MAX_LIST_LIMIT`].

use crate::error::CoreError;

/// Default number of items per page when `limit` is omitted.
pub const DEFAULT_LIST_LIMIT: i64 = 20;

/// Maximum number of items per page.
pub const MAX_LIST_LIMIT: i64 = 100;

/// A resolved, bounded page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: i64,
    pub offset: i64,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIST_LIMIT,
            offset: 0,
        }
    }
}

/// Clamp a user-provided limit to `[1, max]`, using `default` when absent.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Validate raw `limit` / `offset` query values and build a [`Page`].
///
/// Negative values and a zero limit are rejected; a limit above
/// [`MAX_LIST_LIMIT`] is clamped rather than rejected.
pub fn resolve_page(limit: Option<i64>, offset: Option<i64>) -> Result<Page, CoreError> {
    if let Some(l) = limit {
        if l < 1 {
            return Err(CoreError::Validation(format!(
                "limit must be at least 1, got {l}"
            )));
        }
    }

    let offset = offset.unwrap_or(0);
    if offset < 0 {
        return Err(CoreError::Validation(format!(
            "offset must not be negative, got {offset}"
        )));
    }

    Ok(Page {
        limit: clamp_limit(limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT),
        offset,
    })
}
