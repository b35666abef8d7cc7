//! Member contract checked once at activation

use pgefile_core::{ComponentId, FileLibError, Result};
use pgefile_levels::LevelComponent;

/// Members a component must expose for the client object model to work
pub const REQUIRED_MEMBERS: &[&str] = &[
    "CreateNewLevelData",
    "Blocks",
    "Blocks.Add",
    "Blocks.Count",
];

/// Fail with an activation error naming every required member the
/// component does not expose.
pub fn validate_members(id: &ComponentId, component: &dyn LevelComponent) -> Result<()> {
    let exposed = component.members();
    let missing: Vec<&str> = REQUIRED_MEMBERS
        .iter()
        .copied()
        .filter(|member| !exposed.contains(member))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(FileLibError::activation(
            id.get(),
            format!("component does not expose required members: {}", missing.join(", ")),
        ))
    }
}
