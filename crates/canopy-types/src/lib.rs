//! Shared types for the Canopy sequestration estimator.
//!
//! This crate defines the selection model, view modes, species categories,
//! survival bands and the structured error type used across all crates.

mod error;
mod selection;
mod species;

pub use error::{CanopyError, ErrorCategory, ErrorCode};
pub use selection::{validate_selections, Selection, MAX_QUANTITY};
pub use species::{Category, SurvivalBand, ViewMode};

/// Result type used throughout the Canopy workspace.
pub type Result<T> = std::result::Result<T, CanopyError>;

/// Analysis window used by the dashboard when none is given.
pub const DEFAULT_HORIZON_YEARS: u32 = 20;
