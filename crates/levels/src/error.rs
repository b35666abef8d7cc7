//! Error types for the levels crate

use pgefile_core::{DocumentId, FileLibError};

/// Level-specific error types
#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    /// The owning component instance was released
    #[error("component instance {0} has been released")]
    ComponentReleased(String),

    /// The document was destroyed or never existed in this instance
    #[error("{0} has been destroyed")]
    DocumentDestroyed(DocumentId),

    /// Block position outside the collection
    #[error("block index {index} out of range (count {count})")]
    InvalidIndex { index: usize, count: usize },

    /// Block member name not exposed by the component
    #[error("block has no member named '{0}'")]
    UnknownMember(String),
}

impl From<LevelError> for FileLibError {
    fn from(err: LevelError) -> Self {
        match err {
            LevelError::UnknownMember(name) => FileLibError::UnknownMember(name),
            other => FileLibError::State(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifetime_errors_map_to_state() {
        let err: FileLibError = LevelError::DocumentDestroyed(DocumentId::new(3)).into();
        assert!(err.is_state());
        assert_eq!(err.to_string(), "State error: document#3 has been destroyed");

        let err: FileLibError = LevelError::InvalidIndex { index: 4, count: 1 }.into();
        assert!(err.is_state());
    }

    #[test]
    fn test_unknown_member_keeps_its_kind() {
        let err: FileLibError = LevelError::UnknownMember("Colour".into()).into();
        assert!(matches!(err, FileLibError::UnknownMember(ref n) if n == "Colour"));
    }
}
