//! Store error handling
//!
//! Validation failures reject a mutation and leave the store unchanged.
//! A missing link is not an error for the store itself (operations return
//! `false`); `LinkNotFound` exists for callers that need to report it.

use thiserror::Error;

/// Errors returned by store validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Field name outside the closed set for this entity
    #[error("Unknown {entity} field: '{name}'")]
    UnknownField { entity: &'static str, name: String },

    /// Value is not a `#rgb` or `#rrggbb` color
    #[error("Invalid color '{value}'. Use hex format (e.g. #FFE566).")]
    InvalidColor { value: String },

    /// Reorder sequence is not a permutation of the store's ids
    #[error("Reorder rejected: {reason}")]
    ReorderMismatch { reason: String },

    /// Field value could not be interpreted
    #[error("Invalid value for {field}: '{value}'")]
    InvalidValue { field: &'static str, value: String },

    /// No link with the given id
    #[error("Link with ID '{id}' not found")]
    LinkNotFound { id: String },
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::UnknownField {
            entity: "link",
            name: "colour".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown link field: 'colour'");

        let err = StoreError::InvalidColor {
            value: "bad".to_string(),
        };
        assert!(err.to_string().contains("bad"));
        assert!(err.to_string().contains("hex"));
    }
}
