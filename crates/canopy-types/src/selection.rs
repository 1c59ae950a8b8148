use crate::error::{CanopyError, ErrorCode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Largest number of trees accepted for one species.
pub const MAX_QUANTITY: i64 = 1_000_000_000;

/// One chosen species with how many trees are planted.
///
/// `quantity` is signed so that values coming from a host (JSON, JavaScript)
/// can be rejected with a validation error instead of failing to decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub name: String,
    pub quantity: i64,
    /// Expected fraction of planted trees that survive, in `[0, 1]`.
    #[serde(alias = "survivalRate")]
    pub survival_rate: f64,
}

impl Selection {
    pub fn new(name: impl Into<String>, quantity: u32, survival_rate: f64) -> Self {
        Self {
            name: name.into(),
            quantity: i64::from(quantity),
            survival_rate,
        }
    }

    /// Build a selection from a survival percentage in `[0, 100]`.
    pub fn with_survival_percent(name: impl Into<String>, quantity: u32, percent: f64) -> Self {
        Self::new(name, quantity, percent / 100.0)
    }

    /// Whether the selection contributes to any computation.
    pub fn is_active(&self) -> bool {
        self.quantity > 0
    }

    /// Survival rate expressed as a percentage.
    pub fn survival_percent(&self) -> f64 {
        self.survival_rate * 100.0
    }

    /// Check the field ranges of a single selection.
    pub fn validate(&self) -> Result<(), CanopyError> {
        if self.name.trim().is_empty() {
            return Err(CanopyError::new(
                ErrorCode::EMPTY_SPECIES_NAME,
                "species name must not be empty",
            ));
        }
        if self.quantity < 0 {
            return Err(CanopyError::new(
                ErrorCode::NEGATIVE_QUANTITY,
                format!(
                    "quantity for '{}' must be non-negative, got {}",
                    self.name, self.quantity
                ),
            )
            .with_subject(&self.name));
        }
        if self.quantity > MAX_QUANTITY {
            return Err(CanopyError::new(
                ErrorCode::QUANTITY_TOO_LARGE,
                format!(
                    "quantity for '{}' must be at most {MAX_QUANTITY}, got {}",
                    self.name, self.quantity
                ),
            )
            .with_subject(&self.name));
        }
        if !self.survival_rate.is_finite() || !(0.0..=1.0).contains(&self.survival_rate) {
            return Err(CanopyError::new(
                ErrorCode::SURVIVAL_OUT_OF_RANGE,
                format!(
                    "survival rate for '{}' must be a fraction in [0, 1], got {}",
                    self.name, self.survival_rate
                ),
            )
            .with_subject(&self.name));
        }
        Ok(())
    }
}

/// Validate a whole selection set: every entry in range and names unique.
pub fn validate_selections(selections: &[Selection]) -> Result<(), CanopyError> {
    let mut seen = BTreeSet::new();
    for selection in selections {
        selection.validate()?;
        if !seen.insert(selection.name.as_str()) {
            return Err(CanopyError::new(
                ErrorCode::DUPLICATE_SPECIES,
                format!("species '{}' appears more than once", selection.name),
            )
            .with_subject(&selection.name));
        }
    }
    Ok(())
}
