//! The level component boundary
//!
//! `LevelComponent` is the statically declared surface a client talks to.
//! `FileLibComponent` is the in-process `PGE.FileLib` implementation.

use crate::block::LevelBlock;
use crate::error::LevelError;
use crate::level::LevelData;
use crate::store::{DocumentStore, StoreStats};
use crate::Result;
use parking_lot::RwLock;
use pgefile_core::{DocumentId, InstanceId};
use tracing::{debug, info};

/// Members advertised by `FileLibComponent`
pub const FILELIB_MEMBERS: &[&str] = &[
    "CreateNewLevelData",
    "LevelName",
    "Stars",
    "Blocks",
    "Blocks.Add",
    "Blocks.Count",
    "Blocks.Item",
];

/// Level component surface
///
/// Every document operation names its document explicitly; the component
/// owns the data. Implementations must fail with a state error once
/// released or once the document is destroyed.
pub trait LevelComponent: Send + Sync {
    /// Instance identity, for diagnostics
    fn instance(&self) -> InstanceId;

    /// Member names this component exposes
    fn members(&self) -> &[&'static str];

    /// Create a new empty level document
    fn create_level_data(&self) -> Result<DocumentId>;

    /// Destroy a document's data. Destroying twice is a no-op.
    fn destroy_level_data(&self, doc: DocumentId);

    fn level_name(&self, doc: DocumentId) -> Result<String>;

    fn set_level_name(&self, doc: DocumentId, name: String) -> Result<()>;

    fn stars(&self, doc: DocumentId) -> Result<i64>;

    fn set_stars(&self, doc: DocumentId, stars: i64) -> Result<()>;

    /// Append a default block, returning its position
    fn add_block(&self, doc: DocumentId) -> Result<usize>;

    fn block_count(&self, doc: DocumentId) -> Result<usize>;

    /// Copy of the block at `index`
    fn block(&self, doc: DocumentId, index: usize) -> Result<LevelBlock>;

    /// Apply `edit` to the block at `index`
    fn update_block(
        &self,
        doc: DocumentId,
        index: usize,
        edit: &mut dyn FnMut(&mut LevelBlock) -> Result<()>,
    ) -> Result<()>;

    /// Release the instance and invalidate every document it owns
    fn release(&self);

    fn is_released(&self) -> bool;
}

/// Component lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentState {
    /// Activated and serving calls
    Active,
    /// Released; all calls fail
    Released,
}

/// In-process `PGE.FileLib` component
pub struct FileLibComponent {
    instance: InstanceId,
    state: RwLock<ComponentState>,
    documents: DocumentStore,
}

impl FileLibComponent {
    pub fn new(instance: InstanceId) -> Self {
        Self {
            instance,
            state: RwLock::new(ComponentState::Active),
            documents: DocumentStore::new(),
        }
    }

    /// Get the component state
    pub fn get_state(&self) -> ComponentState {
        *self.state.read()
    }

    /// Get document store statistics
    pub fn stats(&self) -> StoreStats {
        self.documents.stats()
    }

    fn ensure_active(&self) -> Result<()> {
        match self.get_state() {
            ComponentState::Active => Ok(()),
            ComponentState::Released => {
                Err(LevelError::ComponentReleased(self.instance.get().to_string()).into())
            }
        }
    }
}

impl LevelComponent for FileLibComponent {
    fn instance(&self) -> InstanceId {
        self.instance
    }

    fn members(&self) -> &[&'static str] {
        FILELIB_MEMBERS
    }

    fn create_level_data(&self) -> Result<DocumentId> {
        self.ensure_active()?;
        let doc = self.documents.create();
        debug!("Instance {} created {}", self.instance.get(), doc);
        Ok(doc)
    }

    fn destroy_level_data(&self, doc: DocumentId) {
        if self.documents.remove(doc).is_some() {
            debug!("Instance {} destroyed {}", self.instance.get(), doc);
        }
    }

    fn level_name(&self, doc: DocumentId) -> Result<String> {
        self.ensure_active()?;
        self.documents.with(doc, |level| level.name.clone())
    }

    fn set_level_name(&self, doc: DocumentId, name: String) -> Result<()> {
        self.ensure_active()?;
        self.documents.with_mut(doc, |level| level.name = name)
    }

    fn stars(&self, doc: DocumentId) -> Result<i64> {
        self.ensure_active()?;
        self.documents.with(doc, |level| level.stars)
    }

    fn set_stars(&self, doc: DocumentId, stars: i64) -> Result<()> {
        self.ensure_active()?;
        self.documents.with_mut(doc, |level| level.stars = stars)
    }

    fn add_block(&self, doc: DocumentId) -> Result<usize> {
        self.ensure_active()?;
        let index = self.documents.with_mut(doc, |level| level.add_block())?;
        debug!("Added block {} to {}", index, doc);
        Ok(index)
    }

    fn block_count(&self, doc: DocumentId) -> Result<usize> {
        self.ensure_active()?;
        self.documents.with(doc, |level| level.block_count())
    }

    fn block(&self, doc: DocumentId, index: usize) -> Result<LevelBlock> {
        self.ensure_active()?;
        self.documents
            .with(doc, |level| level.block(index).cloned())?
    }

    fn update_block(
        &self,
        doc: DocumentId,
        index: usize,
        edit: &mut dyn FnMut(&mut LevelBlock) -> Result<()>,
    ) -> Result<()> {
        self.ensure_active()?;
        // The edit runs with no store guard held so it may read the document
        let mut edited = self.block(doc, index)?;
        edit(&mut edited)?;
        self.ensure_active()?;
        self.documents.with_mut(doc, |level: &mut LevelData| -> Result<()> {
            *level.block_mut(index)? = edited;
            Ok(())
        })?
    }

    fn release(&self) {
        let mut state = self.state.write();
        if *state == ComponentState::Released {
            return;
        }
        *state = ComponentState::Released;
        let stats = self.documents.stats();
        self.documents.clear();
        info!(
            "Released component instance {} ({} of {} documents still live, {} blocks invalidated)",
            self.instance.get(),
            stats.live_documents,
            stats.created_documents,
            stats.total_blocks
        );
    }

    fn is_released(&self) -> bool {
        self.get_state() == ComponentState::Released
    }
}
