//! Chart-ready series derived from selections: total bars with palette
//! colors and survival-rate bars with bands.

use canopy_types::{validate_selections, Result, Selection, SurvivalBand};
use serde::{Deserialize, Serialize};

use crate::model::{round_kg, GrowthModel};
use crate::series::check_inputs;

/// Categorical palette, assigned to species by position.
pub const PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Palette color for the species at `index`, wrapping around.
pub fn color_for(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// One bar of the per-species total chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarDatum {
    pub name: String,
    pub total: i64,
    pub fill: String,
}

/// One bar of the survival chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurvivalBar {
    pub name: String,
    pub percent: f64,
    pub band: SurvivalBand,
    pub color: String,
}

impl GrowthModel {
    /// Horizon totals as bars, in selection order.
    pub fn bar_data(&self, selections: &[Selection], horizon_years: u32) -> Result<Vec<BarDatum>> {
        check_inputs(self, selections, horizon_years)?;
        selections
            .iter()
            .filter(|s| s.is_active())
            .enumerate()
            .map(|(i, s)| -> Result<BarDatum> {
                Ok(BarDatum {
                    name: s.name.clone(),
                    total: round_kg(self.total(s, horizon_years), &s.name)?,
                    fill: color_for(i).to_string(),
                })
            })
            .collect()
    }
}

/// [`GrowthModel::bar_data`] with the default model.
pub fn bar_data(selections: &[Selection], horizon_years: u32) -> Result<Vec<BarDatum>> {
    GrowthModel::default().bar_data(selections, horizon_years)
}

/// Survival percentages with their bands, in selection order.
pub fn survival_bars(selections: &[Selection]) -> Result<Vec<SurvivalBar>> {
    validate_selections(selections)?;
    Ok(selections
        .iter()
        .filter(|s| s.is_active())
        .map(|s| {
            let percent = s.survival_percent();
            let band = SurvivalBand::from_percent(percent);
            SurvivalBar {
                name: s.name.clone(),
                percent,
                band,
                color: band.color().to_string(),
            }
        })
        .collect())
}
