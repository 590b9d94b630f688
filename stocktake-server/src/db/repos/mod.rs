//! Repository implementations for database access
//!
//! Each repository method follows the same pattern:
//! - Opens its own connection from the [`Store`](super::Store)
//! - Binds every caller-supplied value as a parameter
//! - Closes the connection before returning

pub mod items;
pub mod reference;

pub use items::ItemRepo;
pub use reference::{ReferenceRepo, ReferenceTable};
