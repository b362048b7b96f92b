//! Turn-based battle resolution.
//!
//! A [`Battle`] borrows the hero for its whole lifetime and owns the enemy
//! roster. Each call to [`Battle::take_turn`] resolves one round: the hero's
//! action, then a retaliation from every enemy still standing. Random draws
//! happen in a fixed order:
//!
//! 1. target pick, only when more than one enemy is alive and the action
//!    needs a target
//! 2. crit roll in `[0, 100)`, basic attacks only
//! 3. one damage roll in `[min, max]` per surviving enemy, in roster order
//!
//! [`Battle::conclude`] adds one more draw for the gold reward on victory.

use log::{debug, warn};

use super::types::{BattleAction, BattleEvent, BattleStatus, BattleSummary, EncounterKind, Enemy};
use crate::areas::WorldState;
use crate::character::{Hero, SkillEffect};
use crate::core::constants::{
    BATTLE_GOLD_MAX, BATTLE_GOLD_MIN, COMPANION_MULTIPLIER, CRIT_MULTIPLIER, HEAL_BASE,
    ROLL_RANGE, XP_PER_ENEMY,
};
use crate::core::error::GameError;
use crate::core::progression::gain_experience;
use crate::core::rng::RandomSource;
use crate::ui::{Frontend, Tone};

/// Basic attack damage for a given crit roll.
pub fn basic_attack_damage(base_damage: i32, crit_chance: u32, roll: i32) -> (i32, bool) {
    let critical = roll < crit_chance as i32;
    if critical {
        (base_damage * CRIT_MULTIPLIER, true)
    } else {
        (base_damage, false)
    }
}

/// Health restored by the Heal action.
pub fn heal_amount(level: u32) -> i32 {
    HEAL_BASE + level as i32
}

pub struct Battle<'h> {
    hero: &'h mut Hero,
    enemies: Vec<Enemy>,
    kind: EncounterKind,
    rounds: u32,
}

impl<'h> Battle<'h> {
    pub fn new(hero: &'h mut Hero, enemies: Vec<Enemy>, kind: EncounterKind) -> Self {
        Self {
            hero,
            enemies,
            kind,
            rounds: 0,
        }
    }

    pub fn hero(&self) -> &Hero {
        self.hero
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    /// Rounds resolved so far.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn status(&self) -> BattleStatus {
        if self.hero.is_defeated() {
            BattleStatus::Lost
        } else if self.enemies.iter().any(Enemy::is_alive) {
            BattleStatus::Ongoing
        } else {
            BattleStatus::Won
        }
    }

    /// Resolves one round.
    ///
    /// A skill action with no known skills (or a bad slot) is rejected before
    /// anything happens: no draw, no retaliation, no round counted.
    pub fn take_turn(
        &mut self,
        action: BattleAction,
        rng: &mut impl RandomSource,
    ) -> Result<Vec<BattleEvent>, GameError> {
        if self.status() != BattleStatus::Ongoing {
            return Err(GameError::BattleOver);
        }

        let mut events = Vec::new();
        match action {
            BattleAction::BasicAttack => {
                let target = self.pick_target(rng);
                let roll = rng.next_int(0, ROLL_RANGE);
                let (damage, critical) =
                    basic_attack_damage(self.hero.base_damage, self.hero.crit_chance, roll);
                debug!("crit roll {} vs {}%: critical={}", roll, self.hero.crit_chance, critical);
                let enemy = &mut self.enemies[target];
                enemy.take_damage(damage);
                events.push(BattleEvent::HeroAttack {
                    target: enemy.name.clone(),
                    damage,
                    critical,
                });
                self.push_if_defeated(target, &mut events);
            }
            BattleAction::UseSkill(slot) => {
                if self.hero.skills.is_empty() {
                    return Err(GameError::EmptySkillList);
                }
                let skill = self
                    .hero
                    .skills
                    .get(slot)
                    .cloned()
                    .ok_or(GameError::UnknownSkill(slot))?;
                if skill.effect.needs_target() {
                    let damage = match skill.effect {
                        SkillEffect::Companion { damage } => damage * COMPANION_MULTIPLIER,
                        SkillEffect::Attack { damage } | SkillEffect::DamageOverTime { damage } => {
                            damage
                        }
                        SkillEffect::Heal { .. } | SkillEffect::Buff => 0,
                    };
                    let target = self.pick_target(rng);
                    let enemy = &mut self.enemies[target];
                    enemy.take_damage(damage);
                    events.push(BattleEvent::SkillUsed {
                        skill: skill.name.clone(),
                        target: Some(enemy.name.clone()),
                        damage,
                        healed: 0,
                    });
                    self.push_if_defeated(target, &mut events);
                } else {
                    let healed = match skill.effect {
                        SkillEffect::Heal { amount } => {
                            self.hero.heal(amount);
                            amount
                        }
                        _ => 0,
                    };
                    events.push(BattleEvent::SkillUsed {
                        skill: skill.name.clone(),
                        target: None,
                        damage: 0,
                        healed,
                    });
                }
            }
            BattleAction::Heal => {
                let amount = heal_amount(self.hero.level);
                self.hero.heal(amount);
                events.push(BattleEvent::HeroHealed { amount });
            }
        }

        for enemy in self.enemies.iter().filter(|e| e.is_alive()) {
            let damage = rng.next_int(enemy.min_damage, enemy.max_damage + 1);
            self.hero.take_damage(damage);
            events.push(BattleEvent::EnemyAttack {
                enemy: enemy.name.clone(),
                damage,
            });
        }

        self.rounds += 1;
        Ok(events)
    }

    /// Settles a finished battle.
    ///
    /// Victory levels the hero and pays gold (unless this was the final
    /// boss). Defeat resets the hero's health and pays nothing. A battle that
    /// is still going is rejected and nothing is paid.
    pub fn conclude(
        self,
        world: &mut WorldState,
        rng: &mut impl RandomSource,
    ) -> Result<BattleSummary, GameError> {
        if self.status() == BattleStatus::Ongoing {
            return Err(GameError::BattleOngoing);
        }
        let rounds = self.rounds;
        if self.hero.is_defeated() {
            let health = self.hero.revive();
            debug!("{} was defeated and revived with {} health", self.hero.name, health);
            return Ok(BattleSummary {
                status: BattleStatus::Lost,
                rounds,
                xp_gained: 0,
                gold_gained: 0,
                new_level: None,
                revived_health: Some(health),
            });
        }

        if !self.kind.grants_rewards() {
            return Ok(BattleSummary {
                status: BattleStatus::Won,
                rounds,
                xp_gained: 0,
                gold_gained: 0,
                new_level: None,
                revived_health: None,
            });
        }

        let xp = self.enemies.len() as u32 * XP_PER_ENEMY;
        let level = gain_experience(self.hero, xp);
        let gold = rng.next_int(BATTLE_GOLD_MIN, BATTLE_GOLD_MAX + 1).max(0) as u32;
        world.add_gold(gold);
        Ok(BattleSummary {
            status: BattleStatus::Won,
            rounds,
            xp_gained: xp,
            gold_gained: gold,
            new_level: Some(level),
            revived_health: None,
        })
    }

    /// Index of the enemy to hit. Draws only when there is a real choice.
    fn pick_target(&self, rng: &mut impl RandomSource) -> usize {
        let alive: Vec<usize> = self
            .enemies
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_alive())
            .map(|(i, _)| i)
            .collect();
        match alive.as_slice() {
            [only] => *only,
            _ => {
                let pick = rng.next_int(0, alive.len() as i32) as usize;
                debug!("target roll {} of {}", pick, alive.len());
                alive[pick]
            }
        }
    }

    fn push_if_defeated(&self, index: usize, events: &mut Vec<BattleEvent>) {
        let enemy = &self.enemies[index];
        if !enemy.is_alive() {
            events.push(BattleEvent::EnemyDefeated {
                name: enemy.name.clone(),
            });
        }
    }

    fn status_line(&self) -> String {
        let foes: Vec<String> = self
            .enemies
            .iter()
            .filter(|e| e.is_alive())
            .map(|e| format!("{} [{}/{}]", e.name, e.health, e.max_health))
            .collect();
        format!(
            "{} [HP {}]  vs  {}",
            self.hero.name,
            self.hero.health,
            foes.join(", ")
        )
    }
}

/// Runs a battle to completion, asking the player for each action.
///
/// If the frontend's input closes mid-fight the battle is left unresolved:
/// the summary stays `Ongoing` and nothing is paid or revived.
pub fn run_battle(
    hero: &mut Hero,
    enemies: Vec<Enemy>,
    kind: EncounterKind,
    world: &mut WorldState,
    ui: &mut impl Frontend,
    rng: &mut impl RandomSource,
) -> BattleSummary {
    let mut battle = Battle::new(hero, enemies, kind);
    let actions = crate::ui::labels(&["Basic Attack", "Use Skill", "Heal"]);

    while battle.status() == BattleStatus::Ongoing {
        ui.say(&battle.status_line());
        let pick = ui.choose("Choose your action:", &actions);
        if ui.is_closed() {
            warn!("Input closed during battle after {} rounds", battle.rounds());
            break;
        }
        let action = match pick {
            0 => BattleAction::BasicAttack,
            1 => match choose_skill(battle.hero(), ui) {
                Some(action) => action,
                None => continue,
            },
            _ => BattleAction::Heal,
        };
        match battle.take_turn(action, rng) {
            Ok(events) => {
                for event in &events {
                    ui.line(event_tone(event), &event.message());
                }
            }
            Err(err) => ui.line(Tone::Bad, &err.to_string()),
        }
    }

    let rounds = battle.rounds();
    let summary = battle
        .conclude(world, rng)
        .unwrap_or_else(|_| BattleSummary::unresolved(rounds));
    report_summary(&summary, ui);
    summary
}

/// Skill picker. Returns None when the player backs out. An empty skill
/// list is passed through so the resolver can reject it.
fn choose_skill(hero: &Hero, ui: &mut impl Frontend) -> Option<BattleAction> {
    if hero.skills.is_empty() {
        return Some(BattleAction::UseSkill(0));
    }
    let mut options: Vec<String> = hero
        .skills
        .iter()
        .map(|s| format!("{} ({}) - {}", s.name, s.effect.kind_name(), s.description))
        .collect();
    options.push("Back".to_string());
    let pick = ui.choose("Choose a skill:", &options);
    (pick < hero.skills.len()).then_some(BattleAction::UseSkill(pick))
}

fn event_tone(event: &BattleEvent) -> Tone {
    match event {
        BattleEvent::HeroAttack { critical: true, .. } => Tone::Critical,
        BattleEvent::EnemyDefeated { .. } => Tone::Good,
        BattleEvent::EnemyAttack { .. } => Tone::Bad,
        _ => Tone::Plain,
    }
}

fn report_summary(summary: &BattleSummary, ui: &mut impl Frontend) {
    match summary.status {
        BattleStatus::Won => {
            ui.line(Tone::Good, "Victory!");
            if let Some(level) = summary.new_level {
                ui.line(
                    Tone::Good,
                    &format!("You gain {} experience and reach level {}.", summary.xp_gained, level),
                );
            }
            if summary.gold_gained > 0 {
                ui.line(Tone::Gold, &format!("You find {} gold.", summary.gold_gained));
            }
        }
        BattleStatus::Lost => {
            ui.line(Tone::Critical, "You have been defeated...");
            if let Some(health) = summary.revived_health {
                ui.line(
                    Tone::Plain,
                    &format!("You wake up bruised but alive with {} health.", health),
                );
            }
        }
        BattleStatus::Ongoing => ui.line(Tone::Plain, "The fight is left unfinished."),
    }
}
