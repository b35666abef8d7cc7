//! Level data structure
//!
//! Represents a single in-memory level document.

use crate::block::LevelBlock;
use crate::error::LevelError;
use crate::Result;
use serde::{Deserialize, Serialize};

/// A single level document
///
/// Only the parts of a level that the object model exposes are kept here:
/// header properties and the ordered block list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelData {
    /// Level title
    pub name: String,

    /// Number of stars collectable in this level
    pub stars: i64,

    /// Blocks in insertion order
    pub blocks: Vec<LevelBlock>,
}

impl LevelData {
    /// Create a new empty level
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a default block and return its position
    pub fn add_block(&mut self) -> usize {
        self.blocks.push(LevelBlock::default());
        self.blocks.len() - 1
    }

    /// Get the number of blocks in this level
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Get a block by position
    pub fn block(&self, index: usize) -> Result<&LevelBlock> {
        let count = self.blocks.len();
        self.blocks
            .get(index)
            .ok_or_else(|| LevelError::InvalidIndex { index, count }.into())
    }

    /// Get a mutable block by position
    pub fn block_mut(&mut self, index: usize) -> Result<&mut LevelBlock> {
        let count = self.blocks.len();
        self.blocks
            .get_mut(index)
            .ok_or_else(|| LevelError::InvalidIndex { index, count }.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_creation() {
        let level = LevelData::new();
        assert!(level.name.is_empty());
        assert_eq!(level.stars, 0);
        assert_eq!(level.block_count(), 0);
    }

    #[test]
    fn test_level_blocks() {
        let mut level = LevelData::new();

        assert_eq!(level.add_block(), 0);
        assert_eq!(level.add_block(), 1);
        assert_eq!(level.block_count(), 2);

        level.block_mut(1).unwrap().x = 64;
        assert_eq!(level.block(1).unwrap().x, 64);
        assert_eq!(level.block(0).unwrap().x, 0);
    }

    #[test]
    fn test_level_block_out_of_range() {
        let level = LevelData::new();
        let err = level.block(0).unwrap_err();
        assert!(err.is_state());
    }
}
