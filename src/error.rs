//! Error types for credential name construction.
//!
//! Credential names are assembled from caller-supplied segments. The only
//! failures are a segment supplied as null and a segment that was never
//! supplied at all.

/// Errors raised while assembling a credential name.
///
/// Field names are reported in their camelCase wire form so that messages
/// line up with the JSON keys callers send.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialNameError {
    /// A segment value was supplied as null
    #[error("{field} must not be null")]
    InvalidArgument { field: &'static str },

    /// A segment was never supplied before the name was built
    #[error("{field} must be set before building a credential name")]
    MissingSegment { field: &'static str },
}

impl CredentialNameError {
    /// The name of the segment that caused the error.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidArgument { field } | Self::MissingSegment { field } => field,
        }
    }
}

/// Result type for credential name operations.
pub type CredentialNameResult<T> = Result<T, CredentialNameError>;
