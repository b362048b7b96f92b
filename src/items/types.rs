use serde::{Deserialize, Serialize};

/// A piece of gear from the shop catalog or the loot table.
///
/// Gear is consumed when bought or looted: its bonuses are added to the hero
/// and only the name is kept, in the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gear {
    pub name: String,
    pub hp_bonus: i32,
    pub damage_bonus: i32,
    pub cost: u32,
}

impl Gear {
    pub fn new(name: &str, hp_bonus: i32, damage_bonus: i32, cost: u32) -> Self {
        Self {
            name: name.to_string(),
            hp_bonus,
            damage_bonus,
            cost,
        }
    }

    /// Short stat summary for shop listings (e.g. "+15 HP +3 DMG").
    pub fn stat_summary(&self) -> String {
        let mut parts = Vec::new();
        if self.hp_bonus != 0 {
            parts.push(format!("{:+} HP", self.hp_bonus));
        }
        if self.damage_bonus != 0 {
            parts.push(format!("{:+} DMG", self.damage_bonus));
        }
        if parts.is_empty() {
            "no bonuses".to_string()
        } else {
            parts.join(" ")
        }
    }
}
