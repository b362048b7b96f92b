//! The campaign state machine: town, expeditions, area clears and the lair.

use log::info;

use crate::areas::WorldState;
use crate::character::Hero;
use crate::combat::{run_battle, BattleStatus, BattleSummary, EncounterKind};
use crate::content::{
    generate_final_boss, generate_mid_boss, generate_trash_enemy, roll_side_event, ContentTables,
    SideEvent,
};
use crate::core::config::GameConfig;
use crate::core::constants::AREA_CLEAR_DAMAGE;
use crate::core::progression::apply_area_clear_reward;
use crate::core::rng::RandomSource;
use crate::core::tavern::visit_tavern;
use crate::ui::{labels, Frontend, Tone};

/// Where the campaign currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CampaignState {
    /// In town, choosing among uncleared areas.
    SelectingArea,
    InArea(String),
    /// The area's mid-boss just fell.
    AreaCleared(String),
    /// Every area is cleared and the lair is open.
    BossLairAvailable,
    /// The final boss just fell; the world resets on the next step.
    BossDefeated,
}

/// Whether the main loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpeditionOutcome {
    /// The mid-boss was beaten.
    Cleared,
    /// A battle or side event knocked the hero out.
    Defeated,
    /// The player walked back to town, or input ended mid-expedition.
    Retreated,
}

/// What happened during one trip into an area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpeditionReport {
    pub area: String,
    pub trash_encounters: u32,
    pub mid_boss_encounters: u32,
    pub side_events: Vec<SideEvent>,
    pub outcome: ExpeditionOutcome,
}

impl ExpeditionReport {
    fn new(area: &str) -> Self {
        Self {
            area: area.to_string(),
            trash_encounters: 0,
            mid_boss_encounters: 0,
            side_events: Vec::new(),
            outcome: ExpeditionOutcome::Retreated,
        }
    }
}

pub struct Campaign<R: RandomSource> {
    pub hero: Hero,
    pub world: WorldState,
    content: ContentTables,
    config: GameConfig,
    area_names: Vec<String>,
    rng: R,
    state: CampaignState,
}

impl<R: RandomSource> Campaign<R> {
    pub fn new(hero: Hero, content: ContentTables, config: GameConfig, rng: R) -> Self {
        let area_names = content.area_names();
        let world = WorldState::new(&area_names, config.starting_gold);
        info!(
            "New campaign for {} the {} across {} areas",
            hero.name,
            hero.class_name,
            area_names.len()
        );
        Self {
            hero,
            world,
            content,
            config,
            area_names,
            rng,
            state: CampaignState::SelectingArea,
        }
    }

    pub fn state(&self) -> &CampaignState {
        &self.state
    }

    pub fn content(&self) -> &ContentTables {
        &self.content
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Areas the player may still travel to, in content order.
    pub fn available_areas(&self) -> Vec<&str> {
        self.world.uncleared(&self.area_names)
    }

    pub fn boss_lair_available(&self) -> bool {
        self.world.all_cleared(&self.area_names)
    }

    /// Runs until the player quits.
    pub fn run(&mut self, ui: &mut impl Frontend) {
        ui.line(
            Tone::Title,
            &format!(
                "{} the {} sets out from town.",
                self.hero.name, self.hero.class_name
            ),
        );
        while self.step(ui) == Flow::Continue {}
        info!("Campaign ended at level {}", self.hero.level);
    }

    /// Advances the state machine by one transition. Quits once the
    /// frontend's input has closed.
    pub fn step(&mut self, ui: &mut impl Frontend) -> Flow {
        if ui.is_closed() {
            info!("Input closed, leaving the campaign");
            return Flow::Quit;
        }
        match self.state.clone() {
            CampaignState::SelectingArea | CampaignState::BossLairAvailable => {
                return self.town(ui);
            }
            CampaignState::InArea(area) => {
                let report = self.explore_area(&area, ui);
                self.state = match report.outcome {
                    ExpeditionOutcome::Cleared => CampaignState::AreaCleared(area),
                    _ => self.town_state(),
                };
            }
            CampaignState::AreaCleared(area) => {
                ui.line(Tone::Good, &format!("{} is safe once more.", area));
                self.state = self.town_state();
                if self.state == CampaignState::BossLairAvailable {
                    info!("All areas cleared, boss lair open");
                    ui.line(
                        Tone::Critical,
                        "With every area cleared, the path to the boss lair opens...",
                    );
                }
            }
            CampaignState::BossDefeated => {
                self.world.reset();
                self.state = CampaignState::SelectingArea;
                info!("World reset after final boss");
                ui.line(
                    Tone::Title,
                    "The land breathes again, but darkness stirs anew. Every area must be cleared once more.",
                );
            }
        }
        Flow::Continue
    }

    fn town_state(&self) -> CampaignState {
        if self.boss_lair_available() {
            CampaignState::BossLairAvailable
        } else {
            CampaignState::SelectingArea
        }
    }

    fn town(&mut self, ui: &mut impl Frontend) -> Flow {
        let areas: Vec<String> = self
            .available_areas()
            .into_iter()
            .map(str::to_string)
            .collect();
        let mut options: Vec<String> = areas
            .iter()
            .map(|area| {
                format!(
                    "Explore {} ({}/{} foes slain)",
                    area,
                    self.world.kills_in(area),
                    self.config.trash_quota
                )
            })
            .collect();
        options.extend(labels(&["Visit the tavern", "Review your hero"]));
        let lair = self.boss_lair_available();
        if lair {
            options.push("Enter the boss lair".to_string());
        }
        options.push("Quit".to_string());

        ui.line(
            Tone::Gold,
            &format!(
                "Level {} | HP {} | Gold {}",
                self.hero.level, self.hero.health, self.world.gold
            ),
        );
        let pick = ui.choose("Where will you go?", &options);
        if ui.is_closed() {
            return Flow::Quit;
        }
        if let Some(area) = areas.get(pick) {
            self.state = CampaignState::InArea(area.clone());
            return Flow::Continue;
        }
        match pick - areas.len() {
            0 => visit_tavern(
                &mut self.hero,
                &mut self.world,
                &self.content,
                ui,
                &mut self.rng,
            ),
            1 => self.review_hero(ui),
            2 if lair => {
                self.challenge_boss_lair(ui);
            }
            _ => {
                ui.say("Farewell, adventurer.");
                return Flow::Quit;
            }
        }
        Flow::Continue
    }

    /// One trip into `area`: trash fights with side events until the quota is
    /// met, then the mid-boss. The player may head back before any encounter.
    pub fn explore_area(&mut self, area: &str, ui: &mut impl Frontend) -> ExpeditionReport {
        info!("Entering {}", area);
        ui.line(Tone::Title, &format!("You enter {}.", area));
        let mut report = ExpeditionReport::new(area);
        let quota = self.config.trash_quota;

        loop {
            let boss_next = self.world.quota_met(area, quota);
            let (prompt, onward) = if boss_next {
                ("The area's guardian awaits.".to_string(), "Face the guardian")
            } else {
                (
                    format!("{}/{} foes slain. What now?", self.world.kills_in(area), quota),
                    "Press on",
                )
            };
            let pick = ui.choose(&prompt, &labels(&[onward, "Return to town"]));
            if ui.is_closed() {
                return report;
            }
            if pick == 1 {
                ui.say("You head back to town.");
                return report;
            }

            if boss_next {
                let boss = generate_mid_boss(&self.content, area, self.hero.level);
                ui.line(Tone::Critical, &format!("{} blocks your path!", boss.name));
                report.mid_boss_encounters += 1;
                let summary = run_battle(
                    &mut self.hero,
                    vec![boss],
                    EncounterKind::MidBoss,
                    &mut self.world,
                    ui,
                    &mut self.rng,
                );
                if summary.won() {
                    let health = apply_area_clear_reward(&mut self.hero, &mut self.world, area);
                    ui.line(
                        Tone::Good,
                        &format!(
                            "{} is cleared! You feel stronger: +{} health, +{} damage.",
                            area,
                            health,
                            AREA_CLEAR_DAMAGE
                        ),
                    );
                    report.outcome = ExpeditionOutcome::Cleared;
                } else {
                    report.outcome = unfinished_outcome(&summary);
                }
                return report;
            }

            let enemy = generate_trash_enemy(&self.content, area, self.hero.level, &mut self.rng);
            ui.line(Tone::Plain, &format!("A {} appears!", enemy.name));
            report.trash_encounters += 1;
            let summary = run_battle(
                &mut self.hero,
                vec![enemy],
                EncounterKind::Trash,
                &mut self.world,
                ui,
                &mut self.rng,
            );
            if !summary.won() {
                report.outcome = unfinished_outcome(&summary);
                return report;
            }
            self.world.record_kill(area);

            let event = roll_side_event(&mut self.hero, &mut self.world, &mut self.rng);
            let tone = match event {
                SideEvent::StashGold { .. } | SideEvent::MerchantRewarded { .. } => Tone::Gold,
                SideEvent::HealingHerb { .. } => Tone::Good,
                SideEvent::Trap { .. } => Tone::Bad,
                SideEvent::MerchantGone | SideEvent::Nothing => Tone::Plain,
            };
            ui.line(tone, &event.message());
            report.side_events.push(event);

            if self.hero.is_defeated() {
                let health = self.hero.revive();
                info!("{} fell to a side event in {}", self.hero.name, area);
                ui.line(
                    Tone::Critical,
                    &format!(
                        "You collapse and are dragged back to town, waking with {} health.",
                        health
                    ),
                );
                report.outcome = ExpeditionOutcome::Defeated;
                return report;
            }
        }
    }

    /// Fights the final boss. Returns None while the lair is sealed.
    pub fn challenge_boss_lair(&mut self, ui: &mut impl Frontend) -> Option<BattleSummary> {
        if !self.boss_lair_available() {
            ui.line(Tone::Bad, "The way to the boss lair is sealed.");
            return None;
        }
        let boss = generate_final_boss(&self.content);
        info!("Challenging {}", boss.name);
        ui.line(
            Tone::Critical,
            &format!("You descend into the lair. {} rises to meet you!", boss.name),
        );
        let summary = run_battle(
            &mut self.hero,
            vec![boss],
            EncounterKind::FinalBoss,
            &mut self.world,
            ui,
            &mut self.rng,
        );
        if summary.won() {
            ui.line(Tone::Title, "The final boss has been defeated!");
            self.state = CampaignState::BossDefeated;
        }
        Some(summary)
    }

    pub fn review_hero(&self, ui: &mut impl Frontend) {
        let hero = &self.hero;
        ui.line(
            Tone::Title,
            &format!("{} the {} (level {})", hero.name, hero.class_name, hero.level),
        );
        ui.say(&format!(
            "Health {} | Damage {} | Crit {}% | Dodge {}%",
            hero.health, hero.base_damage, hero.crit_chance, hero.dodge_chance
        ));
        ui.line(Tone::Gold, &format!("Gold {}", self.world.gold));
        for skill in &hero.skills {
            ui.say(&format!(
                "  {} [{} / {}] {}",
                skill.name,
                skill.effect.kind_name(),
                skill.damage_type.name(),
                skill.description
            ));
        }
        if !hero.inventory.is_empty() {
            ui.say(&format!("Inventory: {}", hero.inventory.join(", ")));
        }
        let cleared: Vec<&str> = self
            .area_names
            .iter()
            .map(String::as_str)
            .filter(|a| self.world.is_cleared(a))
            .collect();
        ui.say(&format!(
            "Areas cleared: {}/{}",
            cleared.len(),
            self.area_names.len()
        ));
    }
}

/// Outcome of an expedition whose last battle was not won.
fn unfinished_outcome(summary: &BattleSummary) -> ExpeditionOutcome {
    match summary.status {
        BattleStatus::Lost => ExpeditionOutcome::Defeated,
        _ => ExpeditionOutcome::Retreated,
    }
}
