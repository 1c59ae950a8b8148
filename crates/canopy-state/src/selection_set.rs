//! Ordered selection set keyed by species name.

use canopy_types::Selection;

/// Stepper increments offered next to each selected species.
pub const QUICK_STEPS: [i64; 5] = [1, 10, 50, 100, 1000];

/// Selected species in the order they were first added.
///
/// Entries always have a quantity above zero; writing a quantity of zero
/// or less removes the entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionSet {
    entries: Vec<Selection>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|s| s.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&Selection> {
        self.position(name).map(|i| &self.entries[i])
    }

    /// Current quantity, zero when the species is not selected.
    pub fn quantity(&self, name: &str) -> i64 {
        self.get(name).map_or(0, |s| s.quantity)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Write a quantity, keeping the entry's position if it already exists.
    ///
    /// Returns the stored quantity (zero when the entry was removed).
    pub fn put(&mut self, name: &str, quantity: i64, survival_rate: f64) -> i64 {
        match (self.position(name), quantity > 0) {
            (Some(i), true) => {
                self.entries[i].quantity = quantity;
                self.entries[i].survival_rate = survival_rate;
                quantity
            }
            (None, true) => {
                self.entries.push(Selection {
                    name: name.to_string(),
                    quantity,
                    survival_rate,
                });
                quantity
            }
            (Some(i), false) => {
                self.entries.remove(i);
                0
            }
            (None, false) => 0,
        }
    }

    /// Remove a species. Returns `true` if it was selected.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.position(name) {
            Some(i) => {
                self.entries.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Selection> {
        self.entries.iter()
    }

    pub fn total_trees(&self) -> u64 {
        self.entries
            .iter()
            .fold(0u64, |acc, s| acc.saturating_add(s.quantity.unsigned_abs()))
    }

    /// Owned copy of the current entries for the estimator.
    pub fn snapshot(&self) -> Vec<Selection> {
        self.entries.clone()
    }
}
