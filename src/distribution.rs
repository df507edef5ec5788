//! Probability mass over towers for one generation.
//!
//! Entries keep first-seen order, so iterating a distribution (and therefore
//! every floating-point sum over it) is deterministic across runs. The hash
//! index maps each tower to its slot and is only used to merge duplicates.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::state::Tower;

#[derive(Debug, Clone, Default)]
pub struct Distribution {
    entries: Vec<(Tower, f64)>,
    index: HashMap<Tower, usize>,
}

impl Distribution {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// All mass on a single tower (generation 0).
    pub fn singleton(tower: Tower) -> Self {
        let mut dist = Self::with_capacity(1);
        dist.add_mass(tower, 1.0);
        dist
    }

    /// Accumulate `mass` on `tower`. Returns `true` if the tower was not present yet.
    pub fn add_mass(&mut self, tower: Tower, mass: f64) -> bool {
        match self.index.entry(tower) {
            Entry::Occupied(slot) => {
                self.entries[*slot.get()].1 += mass;
                false
            }
            Entry::Vacant(slot) => {
                let key = slot.key().clone();
                slot.insert(self.entries.len());
                self.entries.push((key, mass));
                true
            }
        }
    }

    /// Mass held by `tower`, or `None` if it was never reached.
    pub fn mass_of(&self, tower: &Tower) -> Option<f64> {
        self.index.get(tower).map(|&i| self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Σ mass over all entries, summed in first-seen order.
    pub fn total_mass(&self) -> f64 {
        self.entries.iter().map(|(_, p)| p).sum()
    }

    /// (tower, mass) pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&Tower, f64)> + '_ {
        self.entries.iter().map(|(t, p)| (t, *p))
    }
}
