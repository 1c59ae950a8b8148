//! Canopy species catalog.
//!
//! A fixed registry of tree species built once at startup. Lookups by name
//! return [`canopy_types::CanopyError`] with a not-found code instead of
//! silently yielding nothing.

mod catalog;
mod registry;

pub use catalog::{Catalog, SpeciesDescriptor};
