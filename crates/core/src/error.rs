/// Domain-level error for the request lifecycle engine.
///
/// Validation and ownership failures are detected before any mutation and
/// abort the operation entirely. The HTTP layer maps each variant to a
/// status code and stable error code.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced category, request, submitter, or parasha does not exist.
    /// The key is an id for most entities, an email for submitters.
    #[error("{entity} '{key}' not found")]
    NotFound { entity: &'static str, key: String },

    /// A required field is missing or blank, or a paired-category companion
    /// field is absent.
    #[error("Missing information: {0}")]
    EmptyInformation(String),

    /// The caller's email does not match the record's owner email.
    #[error("Permission denied: {0}")]
    Permission(String),

    /// Catch-all surfaced generically to the caller without internals.
    #[error("Internal error: {0}")]
    Internal(String),
}
