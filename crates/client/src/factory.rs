//! Component factory
//!
//! Entry point of the object model: activates a component by identifier and
//! hands back an owned handle.

use crate::contract::validate_members;
use crate::handle::ComponentHandle;
use crate::registry::ComponentRegistry;
use pgefile_core::{ComponentId, Result};
use std::sync::Arc;
use tracing::{info, warn};

/// Component factory
pub struct ComponentFactory {
    /// Registry the factory resolves identifiers against
    registry: Arc<ComponentRegistry>,
}

impl ComponentFactory {
    /// Create a factory over an existing registry
    pub fn new(registry: Arc<ComponentRegistry>) -> Self {
        Self { registry }
    }

    /// Create a factory over a registry holding the bundled components
    pub fn with_defaults() -> Self {
        Self::new(Arc::new(ComponentRegistry::with_defaults()))
    }

    /// Get the registry
    pub fn registry(&self) -> &Arc<ComponentRegistry> {
        &self.registry
    }

    /// Activate a fresh component instance
    ///
    /// # Arguments
    /// * `component_id` - Logical identifier, e.g. "PGE.FileLib"
    ///
    /// # Errors
    /// `FileLibError::Activation` if the identifier is empty or unknown, the
    /// activator fails, or the component lacks a required member. A
    /// component that fails validation is released before returning.
    pub fn create(&self, component_id: &str) -> Result<ComponentHandle> {
        let id = ComponentId::new(component_id)?;
        let component = self.registry.activate(&id)?;

        if let Err(err) = validate_members(&id, component.as_ref()) {
            warn!("Rejecting component '{}': {}", id, err);
            component.release();
            return Err(err);
        }

        info!("Activated component '{}' (instance {})", id, component.instance().get());
        Ok(ComponentHandle::new(id, component))
    }
}

impl Default for ComponentFactory {
    fn default() -> Self {
        Self::with_defaults()
    }
}
