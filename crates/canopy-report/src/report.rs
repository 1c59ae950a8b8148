use std::fmt;

use canopy_catalog::Catalog;
use canopy_estimator::{color_for, GrowthModel};
use canopy_types::{Category, Result, Selection};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::fingerprint::selection_fingerprint;

/// One species section of the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub name: String,
    pub category: Category,
    pub description: String,
    pub emoji: String,
    pub color: String,
    pub quantity: i64,
    pub survival_percent: f64,
    /// Estimated CO₂ captured over the horizon (kg).
    pub total_co2: i64,
}

/// Sequestration summary for a selection snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub title: String,
    pub horizon_years: u32,
    pub entries: Vec<ReportEntry>,
    pub total_trees: u64,
    pub total_co2: i64,
    pub species_count: usize,
    pub avg_survival_percent: f64,
    /// SHA-256 of the selection snapshot, for cache keys and dedup.
    pub fingerprint: String,
}

impl Report {
    pub const DEFAULT_TITLE: &'static str = "CO₂ Sequestration Analysis Report";

    /// Build a report for `selections`.
    ///
    /// Every selected species must exist in `catalog`; its descriptive
    /// fields are copied into the entry.
    pub fn build(
        catalog: &Catalog,
        selections: &[Selection],
        horizon_years: u32,
        model: &GrowthModel,
    ) -> Result<Self> {
        let totals = model.totals(selections, horizon_years)?;

        let mut entries = Vec::with_capacity(totals.species_count);
        for (i, selection) in selections.iter().filter(|s| s.is_active()).enumerate() {
            let species = catalog.get(&selection.name)?;
            entries.push(ReportEntry {
                name: species.name.clone(),
                category: species.category,
                description: species.description.clone(),
                emoji: species.emoji.clone(),
                color: color_for(i).to_string(),
                quantity: selection.quantity,
                survival_percent: selection.survival_percent(),
                total_co2: totals.per_species[&selection.name],
            });
        }

        let report = Self {
            title: Self::DEFAULT_TITLE.to_string(),
            horizon_years,
            entries,
            total_trees: totals.total_trees,
            total_co2: totals.total_co2,
            species_count: totals.species_count,
            avg_survival_percent: totals.avg_survival_rate * 100.0,
            fingerprint: selection_fingerprint(selections)?,
        };
        debug!(
            species = report.species_count,
            fingerprint = %report.fingerprint,
            "built report"
        );
        Ok(report)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Plain-text rendering suitable for printing. Same as `to_string()`.
    pub fn render_text(&self) -> String {
        self.to_string()
    }
}

/// Whole percent, halves going up.
fn whole_percent(percent: f64) -> f64 {
    percent.round()
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(self.title.chars().count()))?;
        writeln!(f)?;
        writeln!(f, "Selected Species Analysis")?;
        writeln!(f, "-------------------------")?;

        if self.entries.is_empty() {
            writeln!(f)?;
            writeln!(f, "No species selected.")?;
        }
        for entry in &self.entries {
            writeln!(f)?;
            writeln!(f, "{} {} ({})", entry.emoji, entry.name, entry.category)?;
            writeln!(f, "  {}", entry.description)?;
            writeln!(f, "  Quantity: {} trees", entry.quantity)?;
            writeln!(f, "  Survival Rate: {:.0}%", whole_percent(entry.survival_percent))?;
            writeln!(
                f,
                "  Est. Total CO₂ Captured: {} kg over {} years",
                entry.total_co2, self.horizon_years
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Total Species: {}", self.species_count)?;
        writeln!(f, "Total Trees: {}", self.total_trees)?;
        writeln!(
            f,
            "Total CO₂ Sequestration: {} kg over {} years",
            self.total_co2, self.horizon_years
        )?;
        writeln!(
            f,
            "Average Survival Rate: {:.0}%",
            whole_percent(self.avg_survival_percent)
        )?;
        writeln!(f, "Fingerprint: {}", self.fingerprint)
    }
}
