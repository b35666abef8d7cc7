//! Core type definitions

use crate::{FileLibError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical component identifier (e.g. "PGE.FileLib")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComponentId(String);

impl ComponentId {
    /// Build an identifier, rejecting empty or whitespace-only names
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(FileLibError::activation(
                id,
                "component identifier must not be empty",
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn get(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for ComponentId {
    type Error = FileLibError;

    fn try_from(id: &str) -> Result<Self> {
        Self::new(id)
    }
}

/// Activated component instance ID (32-bit unsigned)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl InstanceId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl From<u32> for InstanceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl TryFrom<u64> for InstanceId {
    type Error = std::num::TryFromIntError;

    fn try_from(id: u64) -> std::result::Result<Self, Self::Error> {
        u32::try_from(id).map(Self)
    }
}

/// Level document ID, unique within one component instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DocumentId(pub u32);

impl DocumentId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl From<u32> for DocumentId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl TryFrom<u64> for DocumentId {
    type Error = std::num::TryFromIntError;

    fn try_from(id: u64) -> std::result::Result<Self, Self::Error> {
        u32::try_from(id).map(Self)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "document#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_id_trims() {
        let id = ComponentId::new("  PGE.FileLib ").unwrap();
        assert_eq!(id.get(), "PGE.FileLib");
        assert_eq!(id.to_string(), "PGE.FileLib");
    }

    #[test]
    fn test_empty_component_id_is_activation_error() {
        let err = ComponentId::new("   ").unwrap_err();
        assert!(err.is_activation());
        assert!(ComponentId::try_from("").is_err());
    }

    #[test]
    fn test_document_id_display() {
        assert_eq!(DocumentId::new(7).to_string(), "document#7");
    }
}
