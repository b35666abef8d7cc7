//! PGE File Library Core - Shared error taxonomy, identifiers and property values

mod error;
mod types;
mod idgen;
mod value;

pub use error::*;
pub use types::*;
pub use idgen::*;
pub use value::*;
