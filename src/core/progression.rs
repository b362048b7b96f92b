//! Progression engine: leveling, gear, area-clear rewards and class unlocks.
//!
//! These functions mutate the hero and world in response to a finished
//! battle, a purchase, or an event. Rejected operations leave both untouched.

use log::{debug, info};

use crate::areas::WorldState;
use crate::character::{ClassUnlockRule, Hero};
use crate::core::constants::{
    AREA_CLEAR_DAMAGE, AREA_CLEAR_HEALTH_BASE, LEVEL_UP_DAMAGE, LEVEL_UP_HEALTH,
};
use crate::core::error::GameError;
use crate::items::Gear;

/// Levels the hero up once. Returns the new level.
///
/// Every call is exactly one level, whatever `amount` says: there is no
/// experience pool or threshold. The amount is only logged.
pub fn gain_experience(hero: &mut Hero, amount: u32) -> u32 {
    debug!("{} gains {} experience", hero.name, amount);
    hero.level += 1;
    hero.health += LEVEL_UP_HEALTH;
    hero.base_damage += LEVEL_UP_DAMAGE;
    info!("{} reached level {}", hero.name, hero.level);
    hero.level
}

/// Reward for defeating an area's mid-boss. Marks the area cleared.
/// Returns the health granted.
pub fn apply_area_clear_reward(hero: &mut Hero, world: &mut WorldState, area: &str) -> i32 {
    let health = AREA_CLEAR_HEALTH_BASE + hero.level as i32;
    hero.health += health;
    hero.base_damage += AREA_CLEAR_DAMAGE;
    world.mark_cleared(area);
    info!("Area cleared: {}", area);
    health
}

/// Buys a piece of gear. `gold == cost` is enough.
pub fn apply_gear_purchase(
    hero: &mut Hero,
    world: &mut WorldState,
    gear: &Gear,
) -> Result<(), GameError> {
    if world.gold < gear.cost {
        return Err(GameError::InsufficientFunds {
            item: gear.name.clone(),
            cost: gear.cost,
            gold: world.gold,
        });
    }
    world.gold -= gear.cost;
    equip_gear(hero, gear);
    debug!("{} bought {} for {} gold", hero.name, gear.name, gear.cost);
    Ok(())
}

/// Applies gear bonuses without charging for it (loot).
pub fn equip_gear(hero: &mut Hero, gear: &Gear) {
    hero.health += gear.hp_bonus;
    hero.base_damage += gear.damage_bonus;
    hero.inventory.push(gear.name.clone());
}

/// Tries to unlock a class derivative with a secret phrase.
///
/// A derivative can be unlocked once per game, and only from the class its
/// rule names. On success the hero's class is replaced and the rule's skill
/// is learned.
pub fn unlock_class_derivative<'a>(
    hero: &mut Hero,
    world: &mut WorldState,
    rules: &'a [ClassUnlockRule],
    phrase: &str,
) -> Result<&'a ClassUnlockRule, GameError> {
    let candidates: Vec<&ClassUnlockRule> =
        rules.iter().filter(|r| r.matches_phrase(phrase)).collect();

    if let Some(rule) = candidates
        .iter()
        .find(|r| world.unlocked_classes.contains(&r.to_class))
    {
        return Err(GameError::AlreadyUnlocked {
            class: rule.to_class.clone(),
        });
    }

    let rule = candidates
        .into_iter()
        .find(|r| r.from_class.eq_ignore_ascii_case(&hero.class_name))
        .ok_or_else(|| GameError::InvalidUnlockPhrase {
            class: hero.class_name.clone(),
        })?;

    world.unlocked_classes.insert(rule.to_class.clone());
    hero.class_name = rule.to_class.clone();
    hero.skills.push(rule.skill.clone());
    info!("{} became a {}", hero.name, rule.to_class);
    Ok(rule)
}
