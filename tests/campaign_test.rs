//! Campaign integration tests
//!
//! Drives the state machine with scripted menu picks and scripted rolls:
//! quotas, area clears, the boss lair and the full world reset.

use delver::character::{create_hero, find_class};
use delver::content::{ContentTables, SideEvent};
use delver::core::{
    Campaign, CampaignState, ExpeditionOutcome, Flow, GameConfig, RngSource, ScriptedRolls,
};
use delver::ui::{ConsoleUi, ScriptedUi};
use std::io::Cursor;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// A Warrior strong enough to one-shot anything in the builtin content.
fn strong_campaign(config: GameConfig) -> Campaign<ScriptedRolls> {
    let content = ContentTables::builtin();
    let template = find_class(&content.classes, "Warrior").unwrap().clone();
    let mut hero = create_hero("Aria", &template);
    hero.base_damage = 1000;
    Campaign::new(hero, content, config, ScriptedRolls::default())
}

fn clear_everything<R: delver::core::RandomSource>(campaign: &mut Campaign<R>) {
    let areas = campaign.content().area_names();
    for area in &areas {
        campaign.world.mark_cleared(area);
    }
}

// ============================================================================
// Expeditions
// ============================================================================

#[test]
fn test_fifteen_trash_then_one_mid_boss() {
    let mut campaign = strong_campaign(GameConfig::default());
    let mut ui = ScriptedUi::default();
    let report = campaign.explore_area("Whispering Woods", &mut ui);

    assert_eq!(report.trash_encounters, 15);
    assert_eq!(report.mid_boss_encounters, 1);
    assert_eq!(report.side_events.len(), 15);
    assert_eq!(report.outcome, ExpeditionOutcome::Cleared);
    assert_eq!(campaign.world.kills_in("Whispering Woods"), 15);
    assert!(campaign.world.is_cleared("Whispering Woods"));
}

#[test]
fn test_kill_counter_survives_a_return_to_town() {
    let mut campaign = strong_campaign(GameConfig::quick(3));
    // Press on, basic attack, then head back
    let mut ui = ScriptedUi::new([1, 1, 2]);
    let report = campaign.explore_area("Sunken Crypt", &mut ui);
    assert_eq!(report.outcome, ExpeditionOutcome::Retreated);
    assert_eq!(report.trash_encounters, 1);
    assert_eq!(campaign.world.kills_in("Sunken Crypt"), 1);

    let mut ui = ScriptedUi::default();
    let report = campaign.explore_area("Sunken Crypt", &mut ui);
    assert_eq!(report.trash_encounters, 2);
    assert_eq!(report.mid_boss_encounters, 1);
    assert_eq!(report.outcome, ExpeditionOutcome::Cleared);
}

#[test]
fn test_defeat_ends_expedition_and_revives() {
    let content = ContentTables::builtin();
    let template = find_class(&content.classes, "Mage").unwrap().clone();
    let mut hero = create_hero("Aria", &template);
    hero.health = 1;
    hero.base_damage = 1;
    let mut campaign = Campaign::new(hero, content, GameConfig::default(), ScriptedRolls::default());

    let mut ui = ScriptedUi::default();
    let report = campaign.explore_area("Goblin Warrens", &mut ui);
    assert_eq!(report.outcome, ExpeditionOutcome::Defeated);
    assert_eq!(report.trash_encounters, 1);
    assert_eq!(campaign.world.kills_in("Goblin Warrens"), 0);
    assert_eq!(campaign.hero.health, campaign.hero.revive_health());
}

#[test]
fn test_side_event_follows_each_trash_win() {
    let content = ContentTables::builtin();
    let template = find_class(&content.classes, "Warrior").unwrap().clone();
    let mut hero = create_hero("Aria", &template);
    hero.base_damage = 1000;
    let start_health = hero.health;
    // Trash pick, crit roll, gold roll, side event roll (trap band)
    let rolls = ScriptedRolls::new([0, 99, 10, 40]);
    let mut campaign = Campaign::new(hero, content, GameConfig::quick(5), rolls);

    let mut ui = ScriptedUi::new([1, 1, 2]);
    let report = campaign.explore_area("Haunted Marsh", &mut ui);
    assert_eq!(report.side_events, vec![SideEvent::Trap { damage: 10 }]);
    // +10 from the level-up, -10 from the trap
    assert_eq!(campaign.hero.health, start_health);
    assert_eq!(campaign.rng().draws(), 4);
}

// ============================================================================
// State machine
// ============================================================================

#[test]
fn test_area_selection_only_offers_uncleared_areas() {
    let mut campaign = strong_campaign(GameConfig::quick(1));
    campaign.world.mark_cleared("Whispering Woods");
    let mut ui = ScriptedUi::default();
    campaign.step(&mut ui);
    assert_eq!(
        campaign.state(),
        &CampaignState::InArea("Sunken Crypt".to_string())
    );
    assert!(!ui.saw("Explore Whispering Woods"));
    assert!(!ui.saw("Enter the boss lair"));
}

#[test]
fn test_clearing_every_area_opens_the_lair() {
    let mut campaign = strong_campaign(GameConfig::quick(1));
    let mut ui = ScriptedUi::default();
    let mut steps = 0;
    while campaign.state() != &CampaignState::BossLairAvailable {
        assert_eq!(campaign.step(&mut ui), Flow::Continue);
        steps += 1;
        assert!(steps < 100, "campaign never opened the lair");
    }
    // Town, expedition and clear notice for each of the seven areas
    assert_eq!(steps, 21);
    assert!(campaign.available_areas().is_empty());
    assert!(campaign.boss_lair_available());
    assert!(ui.saw("the path to the boss lair opens"));
}

#[test]
fn test_lair_menu_entry_and_full_reset() {
    let mut campaign = strong_campaign(GameConfig::quick(1));
    campaign.world.record_kill("Frozen Peaks");
    campaign.world.unlocked_classes.insert("Templar".to_string());
    clear_everything(&mut campaign);
    let hero_before = campaign.hero.clone();
    let gold_before = campaign.world.gold;

    // Tavern, review, lair, quit
    let mut ui = ScriptedUi::new([3]);
    campaign.step(&mut ui);
    assert!(ui.saw("Enter the boss lair"));
    assert_eq!(campaign.state(), &CampaignState::BossDefeated);

    campaign.step(&mut ui);
    assert_eq!(campaign.state(), &CampaignState::SelectingArea);
    assert_eq!(campaign.available_areas().len(), 7);
    assert_eq!(campaign.world.kills_in("Frozen Peaks"), 0);
    assert!(!campaign.boss_lair_available());

    assert_eq!(campaign.hero, hero_before);
    assert_eq!(campaign.world.gold, gold_before);
    assert!(campaign.world.unlocked_classes.contains("Templar"));
}

#[test]
fn test_losing_to_the_final_boss_keeps_the_lair_open() {
    let content = ContentTables::builtin();
    let template = find_class(&content.classes, "Mage").unwrap().clone();
    let hero = create_hero("Aria", &template);
    let mut campaign = Campaign::new(hero, content, GameConfig::quick(1), ScriptedRolls::default());
    clear_everything(&mut campaign);

    let mut ui = ScriptedUi::default();
    let summary = campaign.challenge_boss_lair(&mut ui).unwrap();
    assert!(!summary.won());
    assert!(campaign.boss_lair_available());
    assert_eq!(campaign.state(), &CampaignState::SelectingArea);
}

#[test]
fn test_quit_ends_run() {
    let mut campaign = strong_campaign(GameConfig::quick(1));
    // Seven areas, tavern, review, quit
    let mut ui = ScriptedUi::new([10]);
    campaign.run(&mut ui);
    assert!(ui.saw("Farewell, adventurer."));
}

#[test]
fn test_campaign_on_empty_input_terminates() {
    let mut campaign = strong_campaign(GameConfig::quick(1));
    let mut ui = ConsoleUi::new(Cursor::new(Vec::new()), Vec::new()).plain();
    campaign.run(&mut ui);
    assert_eq!(campaign.state(), &CampaignState::SelectingArea);
    assert_eq!(campaign.world.gold, GameConfig::quick(1).starting_gold);
    let out = String::from_utf8(ui.into_output()).unwrap();
    assert!(out.contains("sets out from town"));
}

#[test]
fn test_input_closing_mid_expedition_retreats() {
    let mut campaign = strong_campaign(GameConfig::quick(3));
    let start_health = campaign.hero.health;
    // Press on, basic attack, then input ends at the next prompt
    let mut ui = ScriptedUi::new([1, 1]).closing();
    let report = campaign.explore_area("Sunken Crypt", &mut ui);
    assert_eq!(report.outcome, ExpeditionOutcome::Retreated);
    assert_eq!(report.trash_encounters, 1);
    assert_eq!(campaign.world.kills_in("Sunken Crypt"), 1);
    assert!(campaign.hero.health >= start_health);

    assert_eq!(campaign.step(&mut ui), Flow::Quit);
}

#[test]
fn test_input_closing_during_battle_is_not_a_defeat() {
    let content = ContentTables::builtin();
    let template = find_class(&content.classes, "Mage").unwrap().clone();
    let mut hero = create_hero("Aria", &template);
    hero.base_damage = 1;
    let mut campaign = Campaign::new(hero, content, GameConfig::quick(3), ScriptedRolls::default());
    let level = campaign.hero.level;

    // Press on, then input ends before the first action
    let mut ui = ScriptedUi::new([1]).closing();
    let report = campaign.explore_area("Goblin Warrens", &mut ui);
    assert_eq!(report.outcome, ExpeditionOutcome::Retreated);
    assert_eq!(report.trash_encounters, 1);
    assert_eq!(campaign.world.kills_in("Goblin Warrens"), 0);
    assert_eq!(campaign.hero.level, level);
    assert!(!ui.saw("You have been defeated"));
}

#[test]
fn test_seeded_campaigns_are_reproducible() {
    let play = |seed: u64| {
        let content = ContentTables::builtin();
        let template = find_class(&content.classes, "Ranger").unwrap().clone();
        let hero = create_hero("Aria", &template);
        let rng = RngSource(ChaCha8Rng::seed_from_u64(seed));
        let mut campaign = Campaign::new(hero, content, GameConfig::quick(4), rng);
        let mut ui = ScriptedUi::default();
        let report = campaign.explore_area("Whispering Woods", &mut ui);
        (report, campaign.hero.clone(), campaign.world.clone())
    };
    assert_eq!(play(7), play(7));
}
