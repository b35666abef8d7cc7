//! Core error types for the PGE File Library client

use crate::ValueKind;

#[derive(thiserror::Error, Debug)]
pub enum FileLibError {
    /// The component could not be found, instantiated or validated.
    #[error("Activation error ({component}): {reason}")]
    Activation { component: String, reason: String },

    /// The backing resource of a document, collection or block is gone.
    #[error("State error: {0}")]
    State(String),

    #[error("Type mismatch on {member}: expected {expected}, found {found}")]
    TypeMismatch {
        member: String,
        expected: ValueKind,
        found: ValueKind,
    },

    /// An integer does not fit the member's 32-bit storage.
    #[error("Value {value} out of range for {member}")]
    OutOfRange { member: String, value: i64 },

    #[error("Unknown member: {0}")]
    UnknownMember(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FileLibError {
    pub fn activation(component: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Activation {
            component: component.into(),
            reason: reason.into(),
        }
    }

    pub fn is_activation(&self) -> bool {
        matches!(self, Self::Activation { .. })
    }

    pub fn is_state(&self) -> bool {
        matches!(self, Self::State(_))
    }
}

pub type Result<T> = std::result::Result<T, FileLibError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_message_keeps_reason_verbatim() {
        let err = FileLibError::activation("PGE.Missing", "component is not registered");
        assert!(err.is_activation());
        assert_eq!(
            err.to_string(),
            "Activation error (PGE.Missing): component is not registered"
        );
    }

    #[test]
    fn test_type_mismatch_message() {
        let err = FileLibError::TypeMismatch {
            member: "X".into(),
            expected: ValueKind::Integer,
            found: ValueKind::Text,
        };
        assert_eq!(
            err.to_string(),
            "Type mismatch on X: expected integer, found text"
        );
    }
}
