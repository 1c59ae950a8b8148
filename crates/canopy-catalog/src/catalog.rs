//! Catalog lookup, search and species-list resolution.

use std::collections::HashMap;

use canopy_types::{CanopyError, Category, ErrorCode, Result, Selection};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Static description of one species.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesDescriptor {
    pub name: String,
    pub category: Category,
    pub description: String,
    pub emoji: String,
    /// Default survival fraction in `[0, 1]`.
    pub survival_rate: f64,
}

impl SpeciesDescriptor {
    /// Check the name and survival rate.
    pub fn validate(&self) -> Result<()> {
        Selection::new(self.name.clone(), 0, self.survival_rate).validate()
    }
}

/// Registry mapping species name → descriptor, in catalog order.
#[derive(Debug, Clone)]
pub struct Catalog {
    species: Vec<SpeciesDescriptor>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// The built-in catalog of 34 species.
    pub fn builtin() -> Self {
        let mut catalog = Self::empty();
        crate::registry::register_builtin(&mut catalog);
        catalog
    }

    /// An empty catalog, filled with [`Catalog::insert`].
    pub fn empty() -> Self {
        Self {
            species: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Add or replace a species.
    ///
    /// Rejects descriptors whose survival rate is outside `[0, 1]`.
    pub fn insert(&mut self, descriptor: SpeciesDescriptor) -> Result<()> {
        descriptor.validate()?;
        self.upsert(descriptor);
        Ok(())
    }

    /// Add or replace without validation. Callers check the descriptor.
    pub(crate) fn upsert(&mut self, descriptor: SpeciesDescriptor) {
        match self.index.get(&descriptor.name) {
            Some(&i) => self.species[i] = descriptor,
            None => {
                self.index
                    .insert(descriptor.name.clone(), self.species.len());
                self.species.push(descriptor);
            }
        }
    }

    /// Look up a species by exact name.
    pub fn get(&self, name: &str) -> Result<&SpeciesDescriptor> {
        self.index
            .get(name)
            .map(|&i| &self.species[i])
            .ok_or_else(|| CanopyError::unknown_species(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    /// Iterate over all species in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &SpeciesDescriptor> {
        self.species.iter()
    }

    /// Species names in catalog order.
    pub fn names(&self) -> Vec<&str> {
        self.species.iter().map(|s| s.name.as_str()).collect()
    }

    /// Categories in filter display order.
    pub fn categories(&self) -> &'static [Category] {
        &Category::ALL
    }

    /// Case-insensitive substring search on name, optionally restricted to
    /// one category.
    pub fn search(&self, term: &str, category: Option<Category>) -> Vec<&SpeciesDescriptor> {
        let needle = term.trim().to_lowercase();
        let hits: Vec<&SpeciesDescriptor> = self
            .species
            .iter()
            .filter(|s| s.name.to_lowercase().contains(&needle))
            .filter(|s| category.map_or(true, |c| s.category == c))
            .collect();
        debug!(term, ?category, hits = hits.len(), "catalog search");
        hits
    }

    /// Resolve a comma-separated species list, dropping unknown names.
    ///
    /// Fails when nothing in the list is a catalog species.
    pub fn resolve_list(&self, list: &str) -> Result<Vec<&SpeciesDescriptor>> {
        let mut resolved: Vec<&SpeciesDescriptor> = Vec::new();
        for name in list.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            match self.get(name) {
                Ok(s) if !resolved.iter().any(|r| r.name == s.name) => resolved.push(s),
                Ok(_) => {}
                Err(_) => debug!(species = name, "dropping unknown species from list"),
            }
        }
        if resolved.is_empty() {
            return Err(CanopyError::new(
                ErrorCode::NO_VALID_SPECIES,
                "no valid species found",
            ));
        }
        Ok(resolved)
    }

    /// Build a selection for `name` carrying the catalog's survival rate.
    pub fn selection(&self, name: &str, quantity: u32) -> Result<Selection> {
        let species = self.get(name)?;
        Ok(Selection::new(
            species.name.clone(),
            quantity,
            species.survival_rate,
        ))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
