//! Error types shared by every store-facing crate.

use thiserror::Error;

/// The single failure condition of the read layer and procedure relay.
///
/// Connectivity problems, failed statements, and rows that cannot be shaped
/// into a typed record all collapse into this one variant. Callers never branch
/// on the cause; the reason is kept for logs only.
#[derive(Error, Debug)]
#[error("store unavailable: {reason}")]
pub struct StoreError {
    reason: String,
}

impl StoreError {
    /// Wraps any displayable cause.
    pub fn unavailable(cause: impl std::fmt::Display) -> Self {
        Self {
            reason: cause.to_string(),
        }
    }

    /// Returns the logged reason.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl From<UnknownVariant> for StoreError {
    fn from(err: UnknownVariant) -> Self {
        Self::unavailable(err)
    }
}

/// A database string that does not name any variant of a domain enum.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariant {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        let err = StoreError::unavailable("connection refused");
        assert_eq!(err.to_string(), "store unavailable: connection refused");
        assert_eq!(err.reason(), "connection refused");
    }

    #[test]
    fn test_unknown_variant_converts() {
        let err: StoreError = UnknownVariant::new("position", "QB").into();
        assert!(err.reason().contains("unknown position 'QB'"));
    }
}
