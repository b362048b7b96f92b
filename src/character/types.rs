use serde::{Deserialize, Serialize};

use crate::core::constants::{REVIVE_BASE_HEALTH, REVIVE_HEALTH_PER_LEVEL};

/// Flavour tag carried by skills and enemy attacks. It does not change how
/// damage is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageType {
    Physical,
    Fire,
    Frost,
    Lightning,
    Poison,
    Holy,
    Shadow,
    Nature,
}

impl DamageType {
    pub fn name(&self) -> &'static str {
        match self {
            DamageType::Physical => "Physical",
            DamageType::Fire => "Fire",
            DamageType::Frost => "Frost",
            DamageType::Lightning => "Lightning",
            DamageType::Poison => "Poison",
            DamageType::Holy => "Holy",
            DamageType::Shadow => "Shadow",
            DamageType::Nature => "Nature",
        }
    }
}

/// What a skill does when used in battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SkillEffect {
    /// Flat damage to one enemy.
    Attack { damage: i32 },
    /// Restores hero health; needs no target.
    Heal { amount: i32 },
    /// Has no combat effect yet. Using one still spends the turn.
    Buff,
    /// A companion strikes one enemy for twice the listed damage.
    Companion { damage: i32 },
    /// Hits one enemy once per use; nothing ticks afterwards.
    DamageOverTime { damage: i32 },
}

impl SkillEffect {
    pub fn kind_name(&self) -> &'static str {
        match self {
            SkillEffect::Attack { .. } => "Attack",
            SkillEffect::Heal { .. } => "Heal",
            SkillEffect::Buff => "Buff",
            SkillEffect::Companion { .. } => "Companion",
            SkillEffect::DamageOverTime { .. } => "Damage over Time",
        }
    }

    /// Whether resolving this effect needs an enemy target.
    pub fn needs_target(&self) -> bool {
        matches!(
            self,
            SkillEffect::Attack { .. }
                | SkillEffect::Companion { .. }
                | SkillEffect::DamageOverTime { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub effect: SkillEffect,
    pub damage_type: DamageType,
    pub description: String,
}

impl Skill {
    pub fn new(name: &str, effect: SkillEffect, damage_type: DamageType, description: &str) -> Self {
        Self {
            name: name.to_string(),
            effect,
            damage_type,
            description: description.to_string(),
        }
    }
}

/// The playable character. Lives for the whole process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub name: String,
    pub class_name: String,
    /// Uncapped. Zero or below means the hero has just been defeated.
    pub health: i32,
    pub base_damage: i32,
    /// Percent chance (0-100) that a basic attack crits.
    pub crit_chance: u32,
    /// Percent (0-100). Reserved: combat never consults it.
    pub dodge_chance: u32,
    pub level: u32,
    pub skills: Vec<Skill>,
    pub inventory: Vec<String>,
}

impl Hero {
    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    /// Health the hero is reset to after a defeat.
    pub fn revive_health(&self) -> i32 {
        REVIVE_BASE_HEALTH + self.level as i32 * REVIVE_HEALTH_PER_LEVEL
    }

    /// Resets health after a defeat. Returns the new health.
    pub fn revive(&mut self) -> i32 {
        self.health = self.revive_health();
        self.health
    }

    pub fn heal(&mut self, amount: i32) {
        self.health += amount;
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero() -> Hero {
        Hero {
            name: "Test".to_string(),
            class_name: "Warrior".to_string(),
            health: 40,
            base_damage: 10,
            crit_chance: 0,
            dodge_chance: 0,
            level: 4,
            skills: Vec::new(),
            inventory: Vec::new(),
        }
    }

    #[test]
    fn test_health_can_exceed_starting_value() {
        let mut h = hero();
        h.heal(500);
        assert_eq!(h.health, 540);
    }

    #[test]
    fn test_revive_formula() {
        let mut h = hero();
        h.take_damage(100);
        assert!(h.is_defeated());
        assert_eq!(h.revive(), 50 + 4 * 5);
        assert!(!h.is_defeated());
    }

    #[test]
    fn test_zero_health_counts_as_defeated() {
        let mut h = hero();
        h.take_damage(40);
        assert!(h.is_defeated());
    }

    #[test]
    fn test_needs_target() {
        assert!(SkillEffect::Attack { damage: 1 }.needs_target());
        assert!(SkillEffect::Companion { damage: 1 }.needs_target());
        assert!(SkillEffect::DamageOverTime { damage: 1 }.needs_target());
        assert!(!SkillEffect::Heal { amount: 1 }.needs_target());
        assert!(!SkillEffect::Buff.needs_target());
    }

    #[test]
    fn test_skill_effect_json_is_tagged() {
        let effect: SkillEffect =
            serde_json::from_str(r#"{"type":"Companion","damage":9}"#).unwrap();
        assert_eq!(effect, SkillEffect::Companion { damage: 9 });
    }
}
