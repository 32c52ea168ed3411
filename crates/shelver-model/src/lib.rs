//! Core data model for the shelver batch renamer.
//!
//! Defines the tri-state [`Field`] cell value, the [`Record`] describing one
//! file to copy, the [`HierarchyKey`] used to detect naming collisions, the
//! bounded [`ExtraIdCounter`] that disambiguates them, and the fixed
//! extension-to-[`MediaType`] lookup.

pub mod error;
pub mod extra_id;
pub mod field;
pub mod media;
pub mod record;

pub use error::NameError;
pub use extra_id::ExtraIdCounter;
pub use field::Field;
pub use media::MediaType;
pub use record::{Hierarchy, HierarchyKey, Record, SuffixRecord};
