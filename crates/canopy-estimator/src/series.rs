//! Yearly time series and horizon totals.

use std::collections::BTreeMap;

use canopy_types::{validate_selections, CanopyError, Result, Selection, ViewMode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{round_kg, GrowthModel};

/// CO₂ values for one year, keyed by species name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyDataPoint {
    /// 1-based year.
    pub year: u32,
    /// Whole kilograms of CO₂ per species.
    pub values: BTreeMap<String, i64>,
}

/// Horizon totals per species and in aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub horizon_years: u32,
    /// Closed-form total per species (kg).
    pub per_species: BTreeMap<String, i64>,
    pub total_trees: u64,
    /// Sum of per-species totals (kg).
    pub total_co2: i64,
    /// Arithmetic mean of survival fractions; `0.0` for an empty set.
    pub avg_survival_rate: f64,
    pub species_count: usize,
}

pub(crate) fn check_inputs(
    model: &GrowthModel,
    selections: &[Selection],
    horizon_years: u32,
) -> Result<()> {
    if horizon_years == 0 {
        return Err(CanopyError::non_positive_horizon(0));
    }
    model.validate()?;
    validate_selections(selections)
}

impl GrowthModel {
    /// Per-year CO₂ records for years `1..=horizon_years`.
    pub fn time_series(
        &self,
        selections: &[Selection],
        horizon_years: u32,
        mode: ViewMode,
    ) -> Result<Vec<YearlyDataPoint>> {
        check_inputs(self, selections, horizon_years)?;
        let active: Vec<&Selection> = selections.iter().filter(|s| s.is_active()).collect();

        let series = (1..=horizon_years)
            .map(|year| -> Result<YearlyDataPoint> {
                let values = active
                    .iter()
                    .map(|s| -> Result<(String, i64)> {
                        let kg = round_kg(self.value_at(s, year, mode), &s.name)?;
                        Ok((s.name.clone(), kg))
                    })
                    .collect::<Result<BTreeMap<_, _>>>()?;
                Ok(YearlyDataPoint { year, values })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            species = active.len(),
            horizon_years,
            %mode,
            "computed time series"
        );
        Ok(series)
    }

    /// Closed-form totals over `horizon_years`.
    pub fn totals(&self, selections: &[Selection], horizon_years: u32) -> Result<Totals> {
        check_inputs(self, selections, horizon_years)?;

        let mut per_species = BTreeMap::new();
        let mut total_trees = 0u64;
        let mut total_co2 = 0i64;
        let mut survival_sum = 0.0;

        for s in selections.iter().filter(|s| s.is_active()) {
            let total = round_kg(self.total(s, horizon_years), &s.name)?;
            per_species.insert(s.name.clone(), total);
            total_trees = total_trees.saturating_add(s.quantity.unsigned_abs());
            total_co2 = total_co2
                .checked_add(total)
                .ok_or_else(|| CanopyError::estimate_out_of_range("total_co2"))?;
            survival_sum += s.survival_rate;
        }

        let species_count = per_species.len();
        let avg_survival_rate = if species_count == 0 {
            0.0
        } else {
            survival_sum / species_count as f64
        };

        debug!(species_count, total_trees, total_co2, horizon_years, "computed totals");
        Ok(Totals {
            horizon_years,
            per_species,
            total_trees,
            total_co2,
            avg_survival_rate,
            species_count,
        })
    }
}

/// [`GrowthModel::time_series`] with the default model.
pub fn compute_time_series(
    selections: &[Selection],
    horizon_years: u32,
    mode: ViewMode,
) -> Result<Vec<YearlyDataPoint>> {
    GrowthModel::default().time_series(selections, horizon_years, mode)
}

/// [`GrowthModel::totals`] with the default model.
pub fn compute_totals(selections: &[Selection], horizon_years: u32) -> Result<Totals> {
    GrowthModel::default().totals(selections, horizon_years)
}
