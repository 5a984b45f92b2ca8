use crate::types::DbId;

/// Domain failures raised below the HTTP layer.
///
/// Store errors are not wrapped here; they travel as `sqlx::Error` and are
/// classified by the API crate.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// A request value outside the accepted range (for example paging).
    #[error("Validation failed: {0}")]
    Validation(String),
}
