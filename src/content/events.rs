//! Random side events on the road and in the tavern.
//!
//! Each roll draws one integer in `[0, 100)` and dispatches on half-open,
//! left-inclusive bands. The merchant's coin flip and the loot pick are the
//! only extra draws.

use log::debug;

use crate::areas::WorldState;
use crate::character::Hero;
use crate::core::constants::*;
use crate::core::progression::{equip_gear, gain_experience};
use crate::core::rng::RandomSource;
use crate::items::Gear;

/// What happened between two fights in an area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SideEvent {
    StashGold { gold: u32 },
    HealingHerb { healed: i32 },
    Trap { damage: i32 },
    /// Helped a merchant and was paid in gold and experience.
    MerchantRewarded { gold: u32, xp: u32, new_level: u32 },
    /// The merchant's caravan was already gone.
    MerchantGone,
    Nothing,
}

impl SideEvent {
    pub fn message(&self) -> String {
        match self {
            SideEvent::StashGold { gold } => {
                format!("You uncover a hidden stash containing {} gold!", gold)
            }
            SideEvent::HealingHerb { healed } => {
                format!("You find a healing herb and recover {} health.", healed)
            }
            SideEvent::Trap { damage } => {
                format!("A hidden trap springs! You take {} damage.", damage)
            }
            SideEvent::MerchantRewarded {
                gold, new_level, ..
            } => format!(
                "You escort a stranded merchant to safety. They pay you {} gold and you reach level {}.",
                gold, new_level
            ),
            SideEvent::MerchantGone => {
                "You hear of a stranded merchant, but by the time you arrive they are gone."
                    .to_string()
            }
            SideEvent::Nothing => "The path ahead is quiet.".to_string(),
        }
    }
}

/// What happened over a drink in the tavern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TavernEvent {
    GoldFound { gold: u32 },
    HealingSpring { healed: i32 },
    Loot { gear: Gear },
    PatronBump { damage: i32 },
    /// Loot band rolled with an empty loot table.
    Quiet,
}

impl TavernEvent {
    pub fn message(&self) -> String {
        match self {
            TavernEvent::GoldFound { gold } => {
                format!("You spot {} gold glinting under a table.", gold)
            }
            TavernEvent::HealingSpring { healed } => format!(
                "The barkeep pours you water from the healing spring. You recover {} health.",
                healed
            ),
            TavernEvent::Loot { gear } => format!(
                "A traveler leaves behind a {} ({}). It's yours now.",
                gear.name,
                gear.stat_summary()
            ),
            TavernEvent::PatronBump { damage } => format!(
                "A drunken patron barrels into you. You take {} damage.",
                damage
            ),
            TavernEvent::Quiet => "The tavern is quiet tonight.".to_string(),
        }
    }
}

/// Rolls a side event and applies it to the hero and world.
pub fn roll_side_event(
    hero: &mut Hero,
    world: &mut WorldState,
    rng: &mut impl RandomSource,
) -> SideEvent {
    let roll = rng.next_int(0, ROLL_RANGE);
    debug!("side event roll {}", roll);
    match roll {
        r if r < SIDE_STASH_BAND_END => {
            world.add_gold(STASH_GOLD);
            SideEvent::StashGold { gold: STASH_GOLD }
        }
        r if r < SIDE_HERB_BAND_END => {
            hero.heal(HERB_HEAL);
            SideEvent::HealingHerb { healed: HERB_HEAL }
        }
        r if r < SIDE_TRAP_BAND_END => {
            hero.take_damage(TRAP_DAMAGE);
            SideEvent::Trap {
                damage: TRAP_DAMAGE,
            }
        }
        r if r < SIDE_MERCHANT_BAND_END => {
            let success = rng.next_int(0, 2) == 0;
            debug!("merchant coin flip: success={}", success);
            if success {
                world.add_gold(MERCHANT_GOLD);
                let new_level = gain_experience(hero, MERCHANT_XP);
                SideEvent::MerchantRewarded {
                    gold: MERCHANT_GOLD,
                    xp: MERCHANT_XP,
                    new_level,
                }
            } else {
                SideEvent::MerchantGone
            }
        }
        _ => SideEvent::Nothing,
    }
}

/// Rolls a tavern event and applies it to the hero and world.
pub fn roll_tavern_event(
    hero: &mut Hero,
    world: &mut WorldState,
    loot: &[Gear],
    rng: &mut impl RandomSource,
) -> TavernEvent {
    let roll = rng.next_int(0, ROLL_RANGE);
    debug!("tavern event roll {}", roll);
    match roll {
        r if r < TAVERN_GOLD_BAND_END => {
            world.add_gold(TAVERN_GOLD);
            TavernEvent::GoldFound { gold: TAVERN_GOLD }
        }
        r if r < TAVERN_SPRING_BAND_END => {
            hero.heal(SPRING_HEAL);
            TavernEvent::HealingSpring {
                healed: SPRING_HEAL,
            }
        }
        r if r < TAVERN_LOOT_BAND_END => {
            let pick = rng.next_int(0, loot.len() as i32) as usize;
            debug!("loot roll {} of {}", pick, loot.len());
            match loot.get(pick) {
                Some(gear) => {
                    equip_gear(hero, gear);
                    TavernEvent::Loot { gear: gear.clone() }
                }
                None => TavernEvent::Quiet,
            }
        }
        _ => {
            hero.take_damage(PATRON_DAMAGE);
            TavernEvent::PatronBump {
                damage: PATRON_DAMAGE,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::ScriptedRolls;

    fn hero() -> Hero {
        Hero {
            name: "Aria".to_string(),
            class_name: "Rogue".to_string(),
            health: 100,
            base_damage: 10,
            crit_chance: 10,
            dodge_chance: 10,
            level: 1,
            skills: Vec::new(),
            inventory: Vec::new(),
        }
    }

    fn side(roll: i32) -> (SideEvent, Hero, WorldState, usize) {
        let mut h = hero();
        let mut world = WorldState::new(&["Woods"], 0);
        let mut rng = ScriptedRolls::new([roll, 0]);
        let event = roll_side_event(&mut h, &mut world, &mut rng);
        (event, h, world, rng.draws())
    }

    #[test]
    fn test_side_event_bands() {
        assert_eq!(side(0).0, SideEvent::StashGold { gold: STASH_GOLD });
        assert_eq!(side(19).0, SideEvent::StashGold { gold: STASH_GOLD });
        assert_eq!(side(20).0, SideEvent::HealingHerb { healed: HERB_HEAL });
        assert_eq!(side(34).0, SideEvent::HealingHerb { healed: HERB_HEAL });
        assert_eq!(side(35).0, SideEvent::Trap { damage: TRAP_DAMAGE });
        assert_eq!(side(49).0, SideEvent::Trap { damage: TRAP_DAMAGE });
        assert!(matches!(side(50).0, SideEvent::MerchantRewarded { .. }));
        assert!(matches!(side(69).0, SideEvent::MerchantRewarded { .. }));
        assert_eq!(side(70).0, SideEvent::Nothing);
        assert_eq!(side(99).0, SideEvent::Nothing);
    }

    #[test]
    fn test_side_event_draw_counts() {
        assert_eq!(side(10).3, 1);
        assert_eq!(side(25).3, 1);
        assert_eq!(side(40).3, 1);
        assert_eq!(side(60).3, 2);
        assert_eq!(side(80).3, 1);
    }

    #[test]
    fn test_side_event_effects() {
        let (_, _, world, _) = side(5);
        assert_eq!(world.gold, STASH_GOLD);

        let (_, h, _, _) = side(30);
        assert_eq!(h.health, 100 + HERB_HEAL);

        let (_, h, _, _) = side(45);
        assert_eq!(h.health, 100 - TRAP_DAMAGE);

        let (_, h, world, _) = side(55);
        assert_eq!(world.gold, MERCHANT_GOLD);
        assert_eq!(h.level, 2);
    }

    #[test]
    fn test_merchant_can_fail() {
        let mut h = hero();
        let mut world = WorldState::new(&["Woods"], 0);
        let mut rng = ScriptedRolls::new([60, 1]);
        let event = roll_side_event(&mut h, &mut world, &mut rng);
        assert_eq!(event, SideEvent::MerchantGone);
        assert_eq!(world.gold, 0);
        assert_eq!(h.level, 1);
    }

    #[test]
    fn test_tavern_event_bands() {
        let loot = vec![Gear::new("Rusty Dagger", 0, 1, 0), Gear::new("Cloak", 10, 0, 0)];
        let roll = |r: i32| {
            let mut h = hero();
            let mut world = WorldState::new(&["Woods"], 0);
            let mut rng = ScriptedRolls::new([r, 1]);
            let event = roll_tavern_event(&mut h, &mut world, &loot, &mut rng);
            (event, h, world, rng.draws())
        };

        let (event, _, world, draws) = roll(29);
        assert_eq!(event, TavernEvent::GoldFound { gold: TAVERN_GOLD });
        assert_eq!(world.gold, TAVERN_GOLD);
        assert_eq!(draws, 1);

        let (event, h, _, _) = roll(30);
        assert_eq!(event, TavernEvent::HealingSpring { healed: SPRING_HEAL });
        assert_eq!(h.health, 100 + SPRING_HEAL);

        let (event, h, _, draws) = roll(50);
        assert_eq!(
            event,
            TavernEvent::Loot {
                gear: Gear::new("Cloak", 10, 0, 0)
            }
        );
        assert_eq!(h.health, 110);
        assert_eq!(h.inventory, vec!["Cloak".to_string()]);
        assert_eq!(draws, 2);

        let (event, h, _, _) = roll(70);
        assert_eq!(event, TavernEvent::PatronBump { damage: PATRON_DAMAGE });
        assert_eq!(h.health, 100 - PATRON_DAMAGE);
    }

    #[test]
    fn test_tavern_loot_with_empty_table_is_quiet() {
        let mut h = hero();
        let mut world = WorldState::new(&["Woods"], 0);
        let mut rng = ScriptedRolls::new([60]);
        let event = roll_tavern_event(&mut h, &mut world, &[], &mut rng);
        assert_eq!(event, TavernEvent::Quiet);
        assert_eq!(h, hero());
    }
}
