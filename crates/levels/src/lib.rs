//! # PGE File Library Levels
//!
//! In-process implementation of the `PGE.FileLib` level component.
//!
//! ## Features
//! - Level data documents with a name, a star count and a block list
//! - Blocks with the typed fields of the SMBX/PGE level block
//! - Name-based block member access with type checking
//! - Per-instance document store with forced invalidation on release
//!
//! ## Ownership
//!
//! A component instance owns the data of every document it creates. Once the
//! instance is released, or a document destroyed, every further operation on
//! that data fails with a state error instead of touching stale memory.

pub mod error;
pub mod block;
pub mod level;
pub mod store;
pub mod component;

pub use error::LevelError;
pub use block::{LevelBlock, BLOCK_MEMBERS, DEFAULT_LAYER};
pub use level::LevelData;
pub use store::{DocumentStore, StoreStats};
pub use component::{ComponentState, FileLibComponent, LevelComponent, FILELIB_MEMBERS};

/// Result type for level operations
pub type Result<T> = pgefile_core::Result<T>;
