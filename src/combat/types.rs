use serde::{Deserialize, Serialize};

use crate::character::DamageType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub name: String,
    pub max_health: i32,
    /// May dip below zero on the killing blow.
    pub health: i32,
    pub min_damage: i32,
    pub max_damage: i32,
    pub damage_type: DamageType,
}

impl Enemy {
    pub fn new(
        name: String,
        max_health: i32,
        min_damage: i32,
        max_damage: i32,
        damage_type: DamageType,
    ) -> Self {
        Self {
            name,
            health: max_health,
            max_health,
            min_damage,
            max_damage: max_damage.max(min_damage),
            damage_type,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
    }
}

/// One player action for a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleAction {
    BasicAttack,
    /// Index into the hero's skill list.
    UseSkill(usize),
    Heal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleStatus {
    Ongoing,
    Won,
    Lost,
}

/// What kind of fight this is. Decides rewards on victory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterKind {
    Trash,
    MidBoss,
    /// The boss lair. Victory resets the world instead of paying XP or gold.
    FinalBoss,
}

impl EncounterKind {
    pub fn grants_rewards(&self) -> bool {
        !matches!(self, EncounterKind::FinalBoss)
    }
}

/// A single thing that happened during a round.
///
/// The presentation layer prints `message()`; the engine never touches
/// display types directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleEvent {
    /// Hero landed a basic attack.
    HeroAttack {
        target: String,
        damage: i32,
        critical: bool,
    },
    /// Hero used a skill. `target` is None for self-targeted skills.
    SkillUsed {
        skill: String,
        target: Option<String>,
        damage: i32,
        healed: i32,
    },
    /// Hero used the Heal action.
    HeroHealed { amount: i32 },
    EnemyDefeated { name: String },
    EnemyAttack { enemy: String, damage: i32 },
}

impl BattleEvent {
    pub fn message(&self) -> String {
        match self {
            BattleEvent::HeroAttack {
                target,
                damage,
                critical: true,
            } => format!("Critical Hit! You strike {} for {} damage.", target, damage),
            BattleEvent::HeroAttack { target, damage, .. } => {
                format!("You strike {} for {} damage.", target, damage)
            }
            BattleEvent::SkillUsed {
                skill,
                target: Some(target),
                damage,
                ..
            } => format!("{} hits {} for {} damage.", skill, target, damage),
            BattleEvent::SkillUsed {
                skill, healed, ..
            } if *healed > 0 => format!("{} restores {} health.", skill, healed),
            BattleEvent::SkillUsed { skill, .. } => {
                format!("You use {}, but nothing seems to happen.", skill)
            }
            BattleEvent::HeroHealed { amount } => {
                format!("You catch your breath and recover {} health.", amount)
            }
            BattleEvent::EnemyDefeated { name } => format!("{} has been defeated!", name),
            BattleEvent::EnemyAttack { enemy, damage } => {
                format!("{} hits you for {} damage.", enemy, damage)
            }
        }
    }
}

/// Final accounting for a battle. `status` is `Ongoing` only when the
/// battle was abandoned unresolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleSummary {
    pub status: BattleStatus,
    pub rounds: u32,
    pub xp_gained: u32,
    pub gold_gained: u32,
    /// Set when the victory leveled the hero up.
    pub new_level: Option<u32>,
    /// Set when the defeat reset the hero's health.
    pub revived_health: Option<i32>,
}

impl BattleSummary {
    /// A battle abandoned before either side fell.
    pub fn unresolved(rounds: u32) -> Self {
        Self {
            status: BattleStatus::Ongoing,
            rounds,
            xp_gained: 0,
            gold_gained: 0,
            new_level: None,
            revived_health: None,
        }
    }

    pub fn won(&self) -> bool {
        self.status == BattleStatus::Won
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enemy_starts_at_full_health() {
        let enemy = Enemy::new("Rat".to_string(), 30, 2, 4, DamageType::Physical);
        assert_eq!(enemy.health, enemy.max_health);
        assert!(enemy.is_alive());
    }

    #[test]
    fn test_enemy_health_may_go_negative() {
        let mut enemy = Enemy::new("Rat".to_string(), 5, 1, 1, DamageType::Physical);
        enemy.take_damage(12);
        assert_eq!(enemy.health, -7);
        assert!(!enemy.is_alive());
    }

    #[test]
    fn test_enemy_max_damage_never_below_min() {
        let enemy = Enemy::new("Odd".to_string(), 5, 6, 2, DamageType::Physical);
        assert_eq!(enemy.max_damage, 6);
    }

    #[test]
    fn test_final_boss_grants_no_rewards() {
        assert!(EncounterKind::Trash.grants_rewards());
        assert!(EncounterKind::MidBoss.grants_rewards());
        assert!(!EncounterKind::FinalBoss.grants_rewards());
    }

    #[test]
    fn test_crit_message() {
        let event = BattleEvent::HeroAttack {
            target: "Goblin".to_string(),
            damage: 20,
            critical: true,
        };
        assert!(event.message().starts_with("Critical Hit!"));
    }
}
