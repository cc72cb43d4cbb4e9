//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Only raised at the boundary (parsing tags, loading configuration). The
/// transition engine itself treats every inapplicable input as a no-op.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A tag did not name a known variant of a closed vocabulary.
    #[error("unknown {kind}: {value}")]
    UnknownTag { kind: &'static str, value: String },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn unknown_tag(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownTag {
            kind,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tag_message_names_kind_and_value() {
        let err = DomainError::unknown_tag("event", "refund_issued");
        assert_eq!(err.to_string(), "unknown event: refund_issued");
    }
}
