//! Level document

use crate::blocks::BlockCollection;
use pgefile_core::{DocumentId, Result};
use pgefile_levels::LevelComponent;
use std::fmt;
use std::sync::Arc;

/// One in-memory level
///
/// Owns exactly one block collection, reachable through `blocks()`. The
/// document's data is destroyed when the document is dropped.
pub struct LevelDocument {
    id: DocumentId,
    component: Arc<dyn LevelComponent>,
}

impl LevelDocument {
    pub(crate) fn new(id: DocumentId, component: Arc<dyn LevelComponent>) -> Self {
        Self { id, component }
    }

    pub fn id(&self) -> DocumentId {
        self.id
    }

    /// The document's block collection
    pub fn blocks(&self) -> BlockCollection {
        BlockCollection::new(self.id, Arc::clone(&self.component))
    }

    /// Level title
    pub fn level_name(&self) -> Result<String> {
        self.component.level_name(self.id)
    }

    pub fn set_level_name(&self, name: impl Into<String>) -> Result<()> {
        self.component.set_level_name(self.id, name.into())
    }

    /// Number of stars collectable in the level
    pub fn stars(&self) -> Result<i64> {
        self.component.stars(self.id)
    }

    pub fn set_stars(&self, stars: i64) -> Result<()> {
        self.component.set_stars(self.id, stars)
    }

    /// Destroy the document now
    pub fn destroy(self) {
        drop(self);
    }
}

impl fmt::Debug for LevelDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LevelDocument")
            .field("id", &self.id)
            .field("instance", &self.component.instance())
            .finish()
    }
}

impl Drop for LevelDocument {
    fn drop(&mut self) {
        self.component.destroy_level_data(self.id);
    }
}

#[cfg(test)]
mod tests {
    use crate::ComponentFactory;

    #[test]
    fn test_header_properties() {
        let handle = ComponentFactory::with_defaults().create("PGE.FileLib").unwrap();
        let level = handle.create_new_level_data().unwrap();

        assert_eq!(level.level_name().unwrap(), "");
        assert_eq!(level.stars().unwrap(), 0);

        level.set_level_name("Yoshi's Island 2").unwrap();
        level.set_stars(3).unwrap();

        assert_eq!(level.level_name().unwrap(), "Yoshi's Island 2");
        assert_eq!(level.stars().unwrap(), 3);
    }

    #[test]
    fn test_destroy_invalidates_retained_collection() {
        let handle = ComponentFactory::with_defaults().create("PGE.FileLib").unwrap();
        let level = handle.create_new_level_data().unwrap();
        let blocks = level.blocks();
        let block = blocks.add().unwrap();

        level.destroy();

        assert!(blocks.count().unwrap_err().is_state());
        assert!(blocks.add().unwrap_err().is_state());
        assert!(block.snapshot().unwrap_err().is_state());
        // The handle itself stays usable
        assert!(handle.create_new_level_data().is_ok());
    }

    #[test]
    fn test_collection_is_shared_view() {
        let handle = ComponentFactory::with_defaults().create("PGE.FileLib").unwrap();
        let level = handle.create_new_level_data().unwrap();

        level.blocks().add().unwrap();
        level.blocks().add().unwrap();

        assert_eq!(level.blocks().count().unwrap(), 2);
    }
}
