//! Level block entity
//!
//! A block is a solid or semi-solid tile placed in a level section. The
//! fields mirror the block record of the PGE level format.

use crate::error::LevelError;
use crate::Result;
use pgefile_core::{PropertyValue, ValueKind};
use serde::{Deserialize, Serialize};

/// Layer every new block is placed on
pub const DEFAULT_LAYER: &str = "Default";

/// Member names exposed by a block and the kind of value each one holds
pub const BLOCK_MEMBERS: &[(&str, ValueKind)] = &[
    ("X", ValueKind::Integer),
    ("Y", ValueKind::Integer),
    ("Width", ValueKind::Integer),
    ("Height", ValueKind::Integer),
    ("ID", ValueKind::Integer),
    ("NPCID", ValueKind::Integer),
    ("Invisible", ValueKind::Bool),
    ("Slippery", ValueKind::Bool),
    ("LayerName", ValueKind::Text),
    ("EventDestroyedName", ValueKind::Text),
    ("EventHitName", ValueKind::Text),
    ("EventNoMoreObjectInLayerName", ValueKind::Text),
];

/// A block placed in a level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelBlock {
    /// X position (pixels)
    pub x: i32,

    /// Y position (pixels)
    pub y: i32,

    /// Width (pixels)
    pub width: i32,

    /// Height (pixels)
    pub height: i32,

    /// Block type ID
    pub id: i32,

    /// NPC contained in the block (0 = none)
    pub npc_id: i32,

    /// Hidden until hit
    pub invisible: bool,

    /// Slippery surface
    pub slippery: bool,

    /// Layer name
    pub layer: String,

    /// Event triggered when the block is destroyed
    pub event_destroyed: String,

    /// Event triggered when the block is hit
    pub event_hit: String,

    /// Event triggered when the block's layer becomes empty
    pub event_layer_empty: String,
}

impl Default for LevelBlock {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            width: 0,
            height: 0,
            id: 0,
            npc_id: 0,
            invisible: false,
            slippery: false,
            layer: DEFAULT_LAYER.to_string(),
            event_destroyed: String::new(),
            event_hit: String::new(),
            event_layer_empty: String::new(),
        }
    }
}

impl LevelBlock {
    /// Kind of value held by `member`, if the block exposes it
    pub fn member_kind(member: &str) -> Option<ValueKind> {
        BLOCK_MEMBERS
            .iter()
            .find(|(name, _)| *name == member)
            .map(|(_, kind)| *kind)
    }

    /// Read a member by name
    pub fn get(&self, member: &str) -> Result<PropertyValue> {
        let value: PropertyValue = match member {
            "X" => self.x.into(),
            "Y" => self.y.into(),
            "Width" => self.width.into(),
            "Height" => self.height.into(),
            "ID" => self.id.into(),
            "NPCID" => self.npc_id.into(),
            "Invisible" => self.invisible.into(),
            "Slippery" => self.slippery.into(),
            "LayerName" => self.layer.clone().into(),
            "EventDestroyedName" => self.event_destroyed.clone().into(),
            "EventHitName" => self.event_hit.clone().into(),
            "EventNoMoreObjectInLayerName" => self.event_layer_empty.clone().into(),
            _ => return Err(LevelError::UnknownMember(member.to_string()).into()),
        };
        Ok(value)
    }

    /// Write a member by name
    ///
    /// The value kind must match the member kind exactly; nothing is coerced.
    /// Integer members hold 32 bits and reject wider values.
    pub fn set(&mut self, member: &str, value: PropertyValue) -> Result<()> {
        match member {
            "X" => self.x = value.as_i32(member)?,
            "Y" => self.y = value.as_i32(member)?,
            "Width" => self.width = value.as_i32(member)?,
            "Height" => self.height = value.as_i32(member)?,
            "ID" => self.id = value.as_i32(member)?,
            "NPCID" => self.npc_id = value.as_i32(member)?,
            "Invisible" => self.invisible = value.as_bool(member)?,
            "Slippery" => self.slippery = value.as_bool(member)?,
            "LayerName" => self.layer = value.into_text(member)?,
            "EventDestroyedName" => self.event_destroyed = value.into_text(member)?,
            "EventHitName" => self.event_hit = value.into_text(member)?,
            "EventNoMoreObjectInLayerName" => self.event_layer_empty = value.into_text(member)?,
            _ => return Err(LevelError::UnknownMember(member.to_string()).into()),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pgefile_core::FileLibError;

    #[test]
    fn test_block_defaults() {
        let block = LevelBlock::default();
        assert_eq!(block.layer, "Default");
        assert_eq!(block.x, 0);
        assert_eq!(block.npc_id, 0);
        assert!(!block.invisible);
        assert!(block.event_hit.is_empty());
    }

    #[test]
    fn test_member_table_matches_accessors() {
        let block = LevelBlock::default();
        for (name, kind) in BLOCK_MEMBERS {
            let value = block.get(name).unwrap();
            assert_eq!(value.kind(), *kind, "member {}", name);
            assert_eq!(LevelBlock::member_kind(name), Some(*kind));
        }
        assert_eq!(LevelBlock::member_kind("Colour"), None);
    }

    #[test]
    fn test_set_by_name() {
        let mut block = LevelBlock::default();
        block.set("X", 128.into()).unwrap();
        block.set("Slippery", true.into()).unwrap();
        block.set("LayerName", "Spin Blocks".into()).unwrap();

        assert_eq!(block.x, 128);
        assert!(block.slippery);
        assert_eq!(block.get("LayerName").unwrap(), PropertyValue::from("Spin Blocks"));
    }

    #[test]
    fn test_set_wrong_kind_leaves_block_untouched() {
        let mut block = LevelBlock::default();
        let err = block.set("Width", "32".into()).unwrap_err();
        assert!(matches!(err, FileLibError::TypeMismatch { .. }));
        assert_eq!(block, LevelBlock::default());
    }

    #[test]
    fn test_integer_members_are_32_bit() {
        let mut block = LevelBlock::default();
        block.set("X", PropertyValue::Integer(i32::MIN as i64)).unwrap();
        assert_eq!(block.x, i32::MIN);

        let err = block.set("X", PropertyValue::Integer(1 << 40)).unwrap_err();
        assert!(matches!(err, FileLibError::OutOfRange { value, .. } if value == 1 << 40));
        assert_eq!(block.x, i32::MIN);
    }

    #[test]
    fn test_unknown_member() {
        let mut block = LevelBlock::default();
        assert!(matches!(
            block.get("Colour").unwrap_err(),
            FileLibError::UnknownMember(_)
        ));
        assert!(matches!(
            block.set("Colour", 1.into()).unwrap_err(),
            FileLibError::UnknownMember(_)
        ));
    }
}
