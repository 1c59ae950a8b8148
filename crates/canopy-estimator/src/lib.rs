//! Canopy sequestration estimator.
//!
//! Turns a set of species selections into CO₂ figures using a logistic
//! biomass-growth curve:
//!
//! ```text
//! maxBiomass = biomassPerTree * quantity
//! growth(y)  = maxBiomass / (1 + exp(-k * (y - midpointYear)))
//! rate(y)    = growth(y) * carbonFraction * co2PerCarbonRatio * survivalRate
//! ```
//!
//! Every entry point is a pure function of its inputs. Selections with a
//! quantity of zero never appear in any output.

pub mod chart;
pub mod model;
pub mod series;

pub use chart::{bar_data, color_for, survival_bars, BarDatum, SurvivalBar, PALETTE};
pub use model::GrowthModel;
pub use series::{compute_time_series, compute_totals, Totals, YearlyDataPoint};
