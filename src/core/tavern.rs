//! The tavern between expeditions: shop, drinks and whispered secrets.

use crate::areas::WorldState;
use crate::character::Hero;
use crate::content::{roll_tavern_event, ContentTables, TavernEvent};
use crate::core::progression::{apply_gear_purchase, unlock_class_derivative};
use crate::core::rng::RandomSource;
use crate::ui::{labels, Frontend, Tone};

/// Runs the tavern menu until the player leaves.
pub fn visit_tavern(
    hero: &mut Hero,
    world: &mut WorldState,
    content: &ContentTables,
    ui: &mut impl Frontend,
    rng: &mut impl RandomSource,
) {
    let options = labels(&[
        "Browse the shop",
        "Share a drink with the locals",
        "Whisper to the barkeep",
        "Leave the tavern",
    ]);
    ui.line(Tone::Title, "You push open the door of the Rusty Flagon.");

    loop {
        ui.line(
            Tone::Gold,
            &format!("HP {} | Gold {}", hero.health, world.gold),
        );
        let pick = ui.choose("What will you do?", &options);
        if ui.is_closed() {
            return;
        }
        match pick {
            0 => browse_shop(hero, world, content, ui),
            1 => share_a_drink(hero, world, content, ui, rng),
            2 => whisper(hero, world, content, ui),
            _ => {
                ui.say("You step back out into the square.");
                return;
            }
        }
    }
}

fn browse_shop(
    hero: &mut Hero,
    world: &mut WorldState,
    content: &ContentTables,
    ui: &mut impl Frontend,
) {
    let mut options: Vec<String> = content
        .shop
        .iter()
        .map(|g| format!("{} ({}) - {} gold", g.name, g.stat_summary(), g.cost))
        .collect();
    options.push("Back".to_string());

    let pick = ui.choose("The shopkeeper shows you their wares:", &options);
    if ui.is_closed() {
        return;
    }
    let Some(gear) = content.shop.get(pick) else {
        return;
    };
    match apply_gear_purchase(hero, world, gear) {
        Ok(()) => ui.line(
            Tone::Good,
            &format!("You buy the {}. {} gold left.", gear.name, world.gold),
        ),
        Err(err) => ui.line(Tone::Bad, &err.to_string()),
    }
}

fn share_a_drink(
    hero: &mut Hero,
    world: &mut WorldState,
    content: &ContentTables,
    ui: &mut impl Frontend,
    rng: &mut impl RandomSource,
) {
    let event = roll_tavern_event(hero, world, &content.loot, rng);
    let tone = match event {
        TavernEvent::GoldFound { .. } => Tone::Gold,
        TavernEvent::HealingSpring { .. } | TavernEvent::Loot { .. } => Tone::Good,
        TavernEvent::PatronBump { .. } => Tone::Bad,
        TavernEvent::Quiet => Tone::Plain,
    };
    ui.line(tone, &event.message());
    if hero.is_defeated() {
        let health = hero.revive();
        ui.line(
            Tone::Bad,
            &format!("You are carried to a back room and come to with {} health.", health),
        );
    }
}

fn whisper(hero: &mut Hero, world: &mut WorldState, content: &ContentTables, ui: &mut impl Frontend) {
    let phrase = ui.read_text("You lean across the bar and whisper:");
    match unlock_class_derivative(hero, world, &content.unlock_rules, &phrase) {
        Ok(rule) => ui.line(
            Tone::Good,
            &format!(
                "The barkeep nods slowly. You are now a {} and have learned {}!",
                rule.to_class, rule.skill.name
            ),
        ),
        Err(err) => ui.line(Tone::Bad, &err.to_string()),
    }
}
