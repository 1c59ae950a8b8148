//! Growth model parameters and the per-year rate curve.

use canopy_types::{CanopyError, ErrorCode, Result, Selection, ViewMode};
use serde::{Deserialize, Serialize};

/// Parameters of the logistic growth model.
///
/// Units: biomass in kg per tree, years for the midpoint. Missing fields
/// take their defaults when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthModel {
    /// Biomass of one mature tree (kg).
    pub biomass_per_tree: f64,
    /// Logistic steepness.
    pub k: f64,
    /// Year at which growth reaches half of saturation.
    pub midpoint_year: f64,
    /// Fraction of dry biomass that is carbon.
    pub carbon_fraction: f64,
    /// Carbon to CO₂ mass conversion (44/12).
    pub co2_per_carbon_ratio: f64,
    /// Multiplier in the cumulative proxy `rate(y) * y * damping`.
    pub cumulative_damping: f64,
}

impl Default for GrowthModel {
    fn default() -> Self {
        Self {
            biomass_per_tree: 150.0,
            k: 0.3,
            midpoint_year: 10.0,
            carbon_fraction: 0.5,
            co2_per_carbon_ratio: 3.67,
            cumulative_damping: 0.8,
        }
    }
}

impl GrowthModel {
    /// Reject non-finite or negative parameters.
    pub fn validate(&self) -> Result<()> {
        let params = [
            ("biomass_per_tree", self.biomass_per_tree),
            ("k", self.k),
            ("midpoint_year", self.midpoint_year),
            ("carbon_fraction", self.carbon_fraction),
            ("co2_per_carbon_ratio", self.co2_per_carbon_ratio),
            ("cumulative_damping", self.cumulative_damping),
        ];
        for (name, value) in params {
            if !value.is_finite() || value < 0.0 {
                return Err(CanopyError::new(
                    ErrorCode::INVALID_MODEL_PARAMETER,
                    format!("model parameter '{name}' must be finite and non-negative, got {value}"),
                )
                .with_subject(name));
            }
        }
        Ok(())
    }

    /// kg of CO₂ per kg of surviving biomass.
    fn co2_factor(&self, survival_rate: f64) -> f64 {
        self.carbon_fraction * self.co2_per_carbon_ratio * survival_rate
    }

    /// Unrounded CO₂ rate (kg) for `selection` at `year`.
    pub fn annual_rate(&self, selection: &Selection, year: u32) -> f64 {
        let max_biomass = self.biomass_per_tree * selection.quantity as f64;
        let growth =
            max_biomass / (1.0 + (-self.k * (f64::from(year) - self.midpoint_year)).exp());
        growth * self.co2_factor(selection.survival_rate)
    }

    /// Unrounded chart value for `year` under `mode`.
    pub fn value_at(&self, selection: &Selection, year: u32, mode: ViewMode) -> f64 {
        let rate = self.annual_rate(selection, year);
        match mode {
            ViewMode::Annual => rate,
            ViewMode::Cumulative => rate * f64::from(year) * self.cumulative_damping,
        }
    }

    /// Closed-form total assuming saturation over the whole horizon.
    pub fn total(&self, selection: &Selection, horizon_years: u32) -> f64 {
        selection.quantity as f64
            * self.biomass_per_tree
            * f64::from(horizon_years)
            * self.co2_factor(selection.survival_rate)
    }

    /// Rate once growth has saturated. `rate(m - d) + rate(m + d)` equals
    /// this for any offset `d` around the midpoint `m`.
    pub fn saturated_rate(&self, selection: &Selection) -> f64 {
        self.biomass_per_tree * selection.quantity as f64 * self.co2_factor(selection.survival_rate)
    }
}

/// Round a non-negative mass to whole kilograms, halves going up.
///
/// Values that do not fit in an `i64` are an error for `species`.
pub(crate) fn round_kg(value: f64, species: &str) -> Result<i64> {
    let rounded = value.round();
    // i64::MAX is not representable; its f64 neighbour is 2^63.
    if !rounded.is_finite() || rounded >= i64::MAX as f64 || rounded < i64::MIN as f64 {
        return Err(CanopyError::estimate_out_of_range(species));
    }
    Ok(rounded as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let m = GrowthModel::default();
        assert_eq!(m.biomass_per_tree, 150.0);
        assert_eq!(m.k, 0.3);
        assert_eq!(m.midpoint_year, 10.0);
        assert_eq!(m.carbon_fraction, 0.5);
        assert_eq!(m.co2_per_carbon_ratio, 3.67);
        assert_eq!(m.cumulative_damping, 0.8);
        assert!(m.validate().is_ok());
    }

    #[test]
    fn test_rate_at_midpoint_is_half_saturation() {
        let m = GrowthModel::default();
        let neem = Selection::new("Neem", 3, 0.92);
        let rate = m.annual_rate(&neem, 10);
        assert!((rate - 379.845).abs() < 1e-9);
        assert!((rate * 2.0 - m.saturated_rate(&neem)).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_parameter_rejected() {
        let m = GrowthModel {
            k: f64::NAN,
            ..GrowthModel::default()
        };
        let err = m.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_MODEL_PARAMETER);
        assert_eq!(err.subject.as_deref(), Some("k"));

        let m = GrowthModel {
            biomass_per_tree: -1.0,
            ..GrowthModel::default()
        };
        assert!(m.validate().is_err());
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let m: GrowthModel = serde_json::from_str(r#"{"biomass_per_tree": 200.0}"#).unwrap();
        assert_eq!(m.biomass_per_tree, 200.0);
        assert_eq!(m.k, 0.3);
    }

    #[test]
    fn test_round_kg_halves_up() {
        assert_eq!(round_kg(2.5, "Neem").unwrap(), 3);
        assert_eq!(round_kg(2.4999, "Neem").unwrap(), 2);
        assert_eq!(round_kg(0.0, "Neem").unwrap(), 0);
    }

    #[test]
    fn test_round_kg_rejects_unrepresentable() {
        for value in [1e19, i64::MAX as f64, f64::INFINITY, f64::NAN] {
            let err = round_kg(value, "Teak").unwrap_err();
            assert_eq!(err.code, ErrorCode::ESTIMATE_OUT_OF_RANGE);
            assert_eq!(err.subject.as_deref(), Some("Teak"));
        }
        assert_eq!(round_kg(9.0e18, "Teak").unwrap(), 9_000_000_000_000_000_000);
    }
}
