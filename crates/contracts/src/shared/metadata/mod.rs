//! Metadata types for describing aggregates and their fields
//!
//! This module provides compile-time metadata for the entities edited in the UI.
//! All types use 'static lifetimes for zero-cost access to compile-time constants.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::domain::a001_product::metadata::{ENTITY_METADATA, FIELDS};
//!
//! println!("Entity: {}", ENTITY_METADATA.ui.element_name);
//!
//! for field in FIELDS {
//!     println!("{}: {}", field.name, field.ui.label);
//! }
//! ```

mod types;
mod validation;

pub use types::{EntityMetadataInfo, EntityUiMetadata, FieldMetadata, FieldUiMetadata};
pub use validation::ValidationRules;
