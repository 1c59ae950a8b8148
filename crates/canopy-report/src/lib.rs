//! Canopy report export.
//!
//! Builds a human-readable CO₂ sequestration summary from the estimator's
//! totals and the catalog's descriptive fields. The structured [`Report`]
//! serializes to JSON; [`Report::render_text`] produces the printable form.

mod fingerprint;
mod report;

pub use fingerprint::selection_fingerprint;
pub use report::{Report, ReportEntry};
