//! Dashboard — state container with explicit update actions.

use std::collections::BTreeMap;

use canopy_catalog::{Catalog, SpeciesDescriptor};
use canopy_estimator::{BarDatum, GrowthModel, SurvivalBar, Totals, YearlyDataPoint};
use canopy_types::{
    CanopyError, Category, ErrorCode, Result, Selection, ViewMode, MAX_QUANTITY,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::selection_set::SelectionSet;

/// Headline counts shown above the selection list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Impact {
    pub total_species: usize,
    pub total_trees: u64,
}

/// UI state: selections, search, category filter and view mode.
#[derive(Debug, Clone)]
pub struct Dashboard {
    catalog: Catalog,
    model: GrowthModel,
    selections: SelectionSet,
    search_term: String,
    category: Option<Category>,
    view_mode: ViewMode,
}

impl Dashboard {
    /// Create an empty dashboard over `catalog` with the default model.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_model(catalog, GrowthModel::default())
    }

    /// Create with a custom growth model.
    pub fn with_model(catalog: Catalog, model: GrowthModel) -> Self {
        Self {
            catalog,
            model,
            selections: SelectionSet::new(),
            search_term: String::new(),
            category: None,
            view_mode: ViewMode::default(),
        }
    }

    /// Build a dashboard from externally supplied name → quantity pairs.
    ///
    /// Names missing from the catalog and non-positive quantities are
    /// dropped. Fails when nothing valid remains.
    pub fn from_quantities(catalog: Catalog, quantities: &BTreeMap<String, i64>) -> Result<Self> {
        let mut dashboard = Self::new(catalog);
        for (name, &quantity) in quantities {
            if dashboard.catalog.contains(name) {
                dashboard.set_quantity(name, quantity)?;
            } else {
                debug!(species = %name, "dropping unknown species");
            }
        }
        if dashboard.selections.is_empty() {
            return Err(CanopyError::new(
                ErrorCode::NO_VALID_SPECIES,
                "no valid tree species found in selection",
            ));
        }
        Ok(dashboard)
    }

    // ══════════════════════════════════════════════════════════════════════
    // Selection actions
    // ══════════════════════════════════════════════════════════════════════

    /// Select one tree of `name`, or one more if already selected.
    pub fn add_species(&mut self, name: &str) -> Result<i64> {
        self.adjust_quantity(name, 1)
    }

    /// Change a quantity by a signed delta, flooring at zero.
    ///
    /// A species that is not selected starts from zero; reaching zero
    /// removes it.
    pub fn adjust_quantity(&mut self, name: &str, delta: i64) -> Result<i64> {
        let current = self.selections.quantity(name);
        let next = current.saturating_add(delta).max(0);
        self.set_quantity(name, next)
    }

    /// Set an absolute quantity; zero or less removes the species.
    ///
    /// Quantities above [`MAX_QUANTITY`] are rejected and leave the
    /// selection unchanged.
    pub fn set_quantity(&mut self, name: &str, quantity: i64) -> Result<i64> {
        let survival_rate = self.catalog.get(name)?.survival_rate;
        if quantity > MAX_QUANTITY {
            return Err(CanopyError::new(
                ErrorCode::QUANTITY_TOO_LARGE,
                format!("quantity for '{name}' must be at most {MAX_QUANTITY}, got {quantity}"),
            )
            .with_subject(name));
        }
        let stored = self.selections.put(name, quantity, survival_rate);
        debug!(species = name, requested = quantity, stored, "set quantity");
        Ok(stored)
    }

    /// Drop a species from the selection. Returns `true` if it was selected.
    pub fn remove(&mut self, name: &str) -> bool {
        self.selections.remove(name)
    }

    pub fn clear(&mut self) {
        self.selections.clear();
    }

    pub fn selections(&self) -> &SelectionSet {
        &self.selections
    }

    /// Owned snapshot of the selection set.
    pub fn snapshot(&self) -> Vec<Selection> {
        self.selections.snapshot()
    }

    pub fn impact(&self) -> Impact {
        Impact {
            total_species: self.selections.len(),
            total_trees: self.selections.total_trees(),
        }
    }

    // ══════════════════════════════════════════════════════════════════════
    // Browse state
    // ══════════════════════════════════════════════════════════════════════

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        self.category = category;
    }

    /// Set the category from a filter value such as `"all"` or `"Palm Trees"`.
    pub fn set_category_filter(&mut self, value: &str) -> Result<()> {
        self.category = Category::parse_filter(value)?;
        Ok(())
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Catalog entries matching the current search term and category.
    pub fn visible_species(&self) -> Vec<&SpeciesDescriptor> {
        self.catalog.search(&self.search_term, self.category)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn model(&self) -> &GrowthModel {
        &self.model
    }

    // ══════════════════════════════════════════════════════════════════════
    // Derived figures
    // ══════════════════════════════════════════════════════════════════════

    /// Chart series for the current view mode.
    pub fn time_series(&self, horizon_years: u32) -> Result<Vec<YearlyDataPoint>> {
        self.model
            .time_series(&self.snapshot(), horizon_years, self.view_mode)
    }

    pub fn totals(&self, horizon_years: u32) -> Result<Totals> {
        self.model.totals(&self.snapshot(), horizon_years)
    }

    pub fn bar_data(&self, horizon_years: u32) -> Result<Vec<BarDatum>> {
        self.model.bar_data(&self.snapshot(), horizon_years)
    }

    pub fn survival_bars(&self) -> Result<Vec<SurvivalBar>> {
        canopy_estimator::survival_bars(&self.snapshot())
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}
