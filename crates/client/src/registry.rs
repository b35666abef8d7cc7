//! Component registry
//!
//! Maps logical component identifiers to activators. The registry is an
//! explicit value handed to the factory, never process-wide state.

use dashmap::DashMap;
use pgefile_core::{ComponentId, FileLibError, IdGenerator, InstanceId, Result};
use pgefile_levels::{FileLibComponent, LevelComponent};
use std::sync::Arc;
use tracing::debug;

/// Identifier of the bundled level component
pub const FILELIB_COMPONENT_ID: &str = "PGE.FileLib";

/// Versioned alias of the bundled level component
const FILELIB_VERSIONED_ID: &str = "PGE.FileLib.1";

/// Builds a fresh component instance
pub type Activator =
    Arc<dyn Fn(InstanceId) -> Result<Arc<dyn LevelComponent>> + Send + Sync>;

/// Registry of activatable components
///
/// Identifiers are matched case-insensitively.
pub struct ComponentRegistry {
    /// Activators indexed by lowercased identifier
    activators: DashMap<String, Activator>,

    /// Instance ID source
    instances: IdGenerator<InstanceId>,
}

impl ComponentRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            activators: DashMap::new(),
            instances: IdGenerator::new(),
        }
    }

    /// Create a registry with `PGE.FileLib` (and `PGE.FileLib.1`) registered
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        for id in [FILELIB_COMPONENT_ID, FILELIB_VERSIONED_ID] {
            registry.register(id, |instance| {
                Ok(Arc::new(FileLibComponent::new(instance)) as Arc<dyn LevelComponent>)
            });
        }
        registry
    }

    /// Register (or replace) an activator
    pub fn register<F>(&self, id: &str, activator: F)
    where
        F: Fn(InstanceId) -> Result<Arc<dyn LevelComponent>> + Send + Sync + 'static,
    {
        debug!("Registering component '{}'", id);
        self.activators.insert(Self::key(id), Arc::new(activator));
    }

    /// Remove an activator. Returns true if it was registered.
    pub fn unregister(&self, id: &str) -> bool {
        self.activators.remove(&Self::key(id)).is_some()
    }

    /// Check whether an identifier is registered
    pub fn is_registered(&self, id: &str) -> bool {
        self.activators.contains_key(&Self::key(id))
    }

    /// Activate a fresh instance of a registered component
    ///
    /// Every call builds a new instance; nothing is pooled or shared.
    /// Failures from the activator are surfaced as activation errors with
    /// their message kept verbatim.
    pub fn activate(&self, id: &ComponentId) -> Result<Arc<dyn LevelComponent>> {
        // Clone the activator out so no map guard is held while it runs
        let activator = self
            .activators
            .get(&Self::key(id.get()))
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| FileLibError::activation(id.get(), "component is not registered"))?;

        let instance = self.instances.get_available_id();
        match activator(instance) {
            Ok(component) => Ok(component),
            Err(err @ FileLibError::Activation { .. }) => Err(err),
            Err(err) => Err(FileLibError::activation(id.get(), err.to_string())),
        }
    }

    fn key(id: &str) -> String {
        id.trim().to_ascii_lowercase()
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::new()
    }
}
