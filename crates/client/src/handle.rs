//! Handle to an activated component instance

use crate::document::LevelDocument;
use pgefile_core::{ComponentId, FileLibError, Result};
use pgefile_levels::LevelComponent;
use std::fmt;
use std::sync::Arc;

/// Owned handle to one activated component instance
///
/// The instance is released when the handle is dropped, or earlier through
/// `release`. Releasing invalidates every document created through it.
pub struct ComponentHandle {
    id: ComponentId,
    component: Arc<dyn LevelComponent>,
}

impl ComponentHandle {
    pub(crate) fn new(id: ComponentId, component: Arc<dyn LevelComponent>) -> Self {
        Self { id, component }
    }

    /// Identifier the handle was activated with
    pub fn component_id(&self) -> &ComponentId {
        &self.id
    }

    /// Create a new, empty level document
    ///
    /// Each call yields an independent document.
    ///
    /// # Errors
    /// `FileLibError::Activation` if the handle has been released.
    pub fn create_new_level_data(&self) -> Result<LevelDocument> {
        if self.component.is_released() {
            return Err(FileLibError::activation(
                self.id.get(),
                "component handle has been released",
            ));
        }
        let doc = self.component.create_level_data()?;
        Ok(LevelDocument::new(doc, Arc::clone(&self.component)))
    }

    /// Release the instance now. Releasing twice is a no-op.
    pub fn release(&self) {
        self.component.release();
    }

    pub fn is_released(&self) -> bool {
        self.component.is_released()
    }
}

impl fmt::Debug for ComponentHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentHandle")
            .field("id", &self.id)
            .field("instance", &self.component.instance())
            .field("released", &self.component.is_released())
            .finish()
    }
}

impl Drop for ComponentHandle {
    fn drop(&mut self) {
        self.component.release();
    }
}
