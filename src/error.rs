use thiserror::Error;

/// Failures of the lead add/edit/delete flow that a caller may want to tell apart.
///
/// These travel inside `anyhow::Error`; use `err.downcast_ref::<LeadError>()` to match on them.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LeadError {
    /// A form field is empty, unparseable or out of range.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The location provider could not supply a position.
    #[error("Location not available: {0}")]
    LocationUnavailable(String),

    /// A lead with the same name or location already exists.
    #[error("Duplicate lead: a lead with the same name or location exists ({0})")]
    Duplicate(String),

    /// No lead with the given id.
    #[error("No lead with id {0}")]
    NotFound(String),

    /// Stored records carry the same id twice.
    #[error("Duplicate lead id in store: {0}")]
    DuplicateId(String),
}
