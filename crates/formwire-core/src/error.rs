//! Error types for form controllers
//!
//! Provides error handling for:
//! - Edits addressed to fields the form does not declare
//! - Edits whose value does not fit the field's control
//! - Records that cannot be loaded into a form

/// Form controller error
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// Field is not part of the form
    #[error("unknown field: '{0}'")]
    UnknownField(String),

    /// Edit does not fit the field's control
    #[error("field '{field}' expects {expected}")]
    TypeMismatch {
        /// Field name
        field: String,
        /// Kind of edit the control accepts
        expected: &'static str,
    },

    /// Field has no editable control
    #[error("field '{field}' cannot be edited: {reason}")]
    Unsupported {
        /// Field name
        field: String,
        /// Diagnostic from the compiler
        reason: String,
    },

    /// Record to load is not a JSON object
    #[error("record must be a JSON object")]
    NotAnObject,
}

impl FormError {
    /// Create type mismatch error
    #[inline]
    pub fn type_mismatch(field: impl Into<String>, expected: &'static str) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected,
        }
    }
}

/// Result type alias for form operations
pub type FormResult<T> = Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_field_display() {
        let err = FormError::UnknownField("venue".to_string());
        assert_eq!(err.to_string(), "unknown field: 'venue'");
    }

    #[test]
    fn type_mismatch_display() {
        let err = FormError::type_mismatch("paid", "a toggle");
        assert_eq!(err.to_string(), "field 'paid' expects a toggle");
    }
}
