use crate::types::DbId;

/// Failure taxonomy at the persistence boundary.
///
/// Reads never surface these past the gateway (they degrade to the fallback
/// snapshot instead); writes always do, so the presentation layer can
/// pattern-match on the variant.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Caller input violates a precondition; never reaches the store.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Zero rows affected by a targeted write: the entity is absent, or it
    /// exists but is not in a state eligible for the requested transition.
    /// The two causes are deliberately not distinguished.
    #[error("{entity} with id {id} not found or not in an eligible state")]
    NotFoundOrConflict { entity: &'static str, id: DbId },

    /// The store rejected our credentials or identity.
    #[error("Identity failure: {hint}")]
    Identity { hint: String },

    /// Any other classified store fault.
    #[error("Store failure ({category}): {message}")]
    Store { category: String, message: String },
}
