//! # PGE File Library Client
//!
//! Typed object model over a level component.
//!
//! ## Usage
//!
//! ```rust
//! use pgefile_client::ComponentFactory;
//!
//! let factory = ComponentFactory::with_defaults();
//! let handle = factory.create("PGE.FileLib")?;
//! let level = handle.create_new_level_data()?;
//! level.blocks().add()?;
//!
//! assert_eq!(level.blocks().count()?, 1);
//! # Ok::<(), pgefile_core::FileLibError>(())
//! ```
//!
//! ## Ownership
//!
//! `ComponentHandle` owns the activated instance and releases it on drop.
//! `LevelDocument` destroys its data on drop. Collections and blocks are
//! cheap proxies; once their document or handle is gone every call on them
//! fails with `FileLibError::State`.

mod blocks;
mod contract;
mod document;
mod factory;
mod handle;
mod registry;

pub use blocks::{Block, BlockCollection};
pub use contract::{validate_members, REQUIRED_MEMBERS};
pub use document::LevelDocument;
pub use factory::ComponentFactory;
pub use handle::ComponentHandle;
pub use registry::{Activator, ComponentRegistry, FILELIB_COMPONENT_ID};
