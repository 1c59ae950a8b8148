//! Canopy dashboard state.
//!
//! [`Dashboard`] is the single state container behind the UI: the selection
//! set, the search term, the category filter and the view mode. It changes
//! only through its update actions and hands the estimator owned snapshots.

mod dashboard;
mod selection_set;

pub use dashboard::{Dashboard, Impact};
pub use selection_set::{SelectionSet, QUICK_STEPS};
