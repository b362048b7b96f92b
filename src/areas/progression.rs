//! World progression state: per-area kill counters, cleared areas, unlocked
//! class derivatives, and gold.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Everything about the campaign that is not the hero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldState {
    /// Trash enemies defeated per area. Only a full campaign reset zeroes these.
    pub enemies_defeated: BTreeMap<String, u32>,
    /// Areas whose mid-boss has fallen.
    pub areas_cleared: BTreeSet<String>,
    /// Class derivatives already unlocked this game.
    pub unlocked_classes: BTreeSet<String>,
    pub gold: u32,
}

impl WorldState {
    /// Creates a fresh world with a zeroed counter for every area.
    pub fn new<S: AsRef<str>>(areas: &[S], gold: u32) -> Self {
        Self {
            enemies_defeated: areas
                .iter()
                .map(|a| (a.as_ref().to_string(), 0))
                .collect(),
            areas_cleared: BTreeSet::new(),
            unlocked_classes: BTreeSet::new(),
            gold,
        }
    }

    /// Trash enemies defeated so far in an area.
    pub fn kills_in(&self, area: &str) -> u32 {
        self.enemies_defeated.get(area).copied().unwrap_or(0)
    }

    /// Records a trash kill. Returns the new count for the area.
    pub fn record_kill(&mut self, area: &str) -> u32 {
        let count = self.enemies_defeated.entry(area.to_string()).or_insert(0);
        *count += 1;
        *count
    }

    /// Whether the area's mid-boss should be next.
    pub fn quota_met(&self, area: &str, quota: u32) -> bool {
        self.kills_in(area) >= quota
    }

    pub fn is_cleared(&self, area: &str) -> bool {
        self.areas_cleared.contains(area)
    }

    /// Marks an area cleared. Returns false if it already was.
    pub fn mark_cleared(&mut self, area: &str) -> bool {
        self.areas_cleared.insert(area.to_string())
    }

    /// True once every area in the fixed list is cleared.
    pub fn all_cleared<S: AsRef<str>>(&self, areas: &[S]) -> bool {
        !areas.is_empty() && areas.iter().all(|a| self.is_cleared(a.as_ref()))
    }

    /// Areas from the fixed list that are still open, in list order.
    pub fn uncleared<'a, S: AsRef<str>>(&self, areas: &'a [S]) -> Vec<&'a str> {
        areas
            .iter()
            .map(|a| a.as_ref())
            .filter(|a| !self.is_cleared(a))
            .collect()
    }

    pub fn add_gold(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(amount);
    }

    /// Full campaign reset after the final boss: cleared areas forgotten and
    /// every counter back to zero. Gold and unlocked classes are kept.
    pub fn reset(&mut self) {
        self.areas_cleared.clear();
        for count in self.enemies_defeated.values_mut() {
            *count = 0;
        }
    }
}
