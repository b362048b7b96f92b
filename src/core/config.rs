//! Campaign configuration.

use super::constants::{STARTING_GOLD, TRASH_QUOTA};

/// Knobs for a campaign run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Trash enemies per area before the mid-boss appears
    pub trash_quota: u32,

    /// Gold the hero starts with
    pub starting_gold: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            trash_quota: TRASH_QUOTA,
            starting_gold: STARTING_GOLD,
        }
    }
}

impl GameConfig {
    /// Short areas for quick playthroughs and tests
    pub fn quick(trash_quota: u32) -> Self {
        Self {
            trash_quota,
            ..Default::default()
        }
    }
}
