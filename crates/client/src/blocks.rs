//! Block collection and block proxies

use pgefile_core::{DocumentId, FileLibError, PropertyValue, Result};
use pgefile_levels::{LevelBlock, LevelComponent};
use std::fmt;
use std::sync::Arc;

/// Ordered block collection of one level document
///
/// A view onto data owned by the component; cloning the view does not copy
/// any blocks.
#[derive(Clone)]
pub struct BlockCollection {
    doc: DocumentId,
    component: Arc<dyn LevelComponent>,
}

impl BlockCollection {
    pub(crate) fn new(doc: DocumentId, component: Arc<dyn LevelComponent>) -> Self {
        Self { doc, component }
    }

    /// Append a new default block at the end of the collection
    ///
    /// # Errors
    /// `FileLibError::State` if the document or its handle is gone.
    pub fn add(&self) -> Result<Block> {
        let index = self.component.add_block(self.doc)?;
        Ok(self.block_at(index))
    }

    /// Number of blocks in the collection
    pub fn count(&self) -> Result<usize> {
        self.component.block_count(self.doc)
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.count()? == 0)
    }

    /// Block at a 0-based position
    pub fn get(&self, index: usize) -> Result<Block> {
        let count = self.count()?;
        if index >= count {
            return Err(FileLibError::State(format!(
                "block index {} out of range (count {})",
                index, count
            )));
        }
        Ok(self.block_at(index))
    }

    /// Blocks in insertion order
    ///
    /// The count is read once up front; blocks appended while iterating are
    /// not visited.
    pub fn iter(&self) -> Result<impl Iterator<Item = Block> + '_> {
        let count = self.count()?;
        Ok((0..count).map(move |index| self.block_at(index)))
    }

    fn block_at(&self, index: usize) -> Block {
        Block {
            doc: self.doc,
            index,
            component: Arc::clone(&self.component),
        }
    }
}

impl fmt::Debug for BlockCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockCollection")
            .field("doc", &self.doc)
            .finish()
    }
}

/// A block addressed by its document and position
#[derive(Clone)]
pub struct Block {
    doc: DocumentId,
    index: usize,
    component: Arc<dyn LevelComponent>,
}

impl Block {
    /// Position within the collection
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn document(&self) -> DocumentId {
        self.doc
    }

    /// Typed copy of the block's fields
    pub fn snapshot(&self) -> Result<LevelBlock> {
        self.component.block(self.doc, self.index)
    }

    /// Read a member by name (e.g. "X", "LayerName")
    pub fn get(&self, member: &str) -> Result<PropertyValue> {
        self.snapshot()?.get(member)
    }

    /// Write a member by name
    ///
    /// # Errors
    /// `UnknownMember` for a name the block does not expose, `TypeMismatch`
    /// if the value kind differs from the member kind.
    pub fn set(&self, member: &str, value: impl Into<PropertyValue>) -> Result<()> {
        let value = value.into();
        self.component
            .update_block(self.doc, self.index, &mut |block: &mut LevelBlock| {
                block.set(member, value.clone())
            })
    }

    /// Apply a typed edit
    pub fn update(&self, edit: impl FnOnce(&mut LevelBlock)) -> Result<()> {
        let mut edit = Some(edit);
        self.component
            .update_block(self.doc, self.index, &mut |block: &mut LevelBlock| {
                if let Some(edit) = edit.take() {
                    edit(block);
                }
                Ok(())
            })
    }
}

impl fmt::Debug for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Block")
            .field("doc", &self.doc)
            .field("index", &self.index)
            .finish()
    }
}
