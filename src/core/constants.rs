//! Balance constants shared by the combat resolver, content generator and
//! progression engine.
//!
//! All core balance numbers are defined here.
//! Change once, test everywhere.

// =============================================================================
// CAMPAIGN
// =============================================================================

/// Trash enemies that must fall in an area before its mid-boss appears.
pub const TRASH_QUOTA: u32 = 15;

/// Gold the hero starts the campaign with.
pub const STARTING_GOLD: u32 = 50;

// =============================================================================
// COMBAT
// =============================================================================

/// Percentile range for crit and event rolls: draws land in `[0, ROLL_RANGE)`.
pub const ROLL_RANGE: i32 = 100;

/// Basic attack multiplier on a critical hit.
pub const CRIT_MULTIPLIER: i32 = 2;

/// Companion skills hit for their damage times this.
pub const COMPANION_MULTIPLIER: i32 = 2;

/// The Heal action restores `HEAL_BASE + level` health.
pub const HEAL_BASE: i32 = 20;

/// Experience awarded per enemy in a won battle.
pub const XP_PER_ENEMY: u32 = 10;

/// Inclusive gold reward range for a won battle.
pub const BATTLE_GOLD_MIN: i32 = 10;
pub const BATTLE_GOLD_MAX: i32 = 30;

/// After a defeat health is reset to `REVIVE_BASE_HEALTH + level * REVIVE_HEALTH_PER_LEVEL`.
pub const REVIVE_BASE_HEALTH: i32 = 50;
pub const REVIVE_HEALTH_PER_LEVEL: i32 = 5;

// =============================================================================
// LEVELING & REWARDS
// =============================================================================

/// Health gained per level up.
pub const LEVEL_UP_HEALTH: i32 = 10;

/// Base damage gained per level up.
pub const LEVEL_UP_DAMAGE: i32 = 2;

/// Clearing an area grants `AREA_CLEAR_HEALTH_BASE + level` health.
pub const AREA_CLEAR_HEALTH_BASE: i32 = 25;

/// Base damage granted for clearing an area.
pub const AREA_CLEAR_DAMAGE: i32 = 4;

// =============================================================================
// ENEMY SCALING
// =============================================================================

/// Trash enemy health added per hero level.
pub const TRASH_HEALTH_PER_LEVEL: i32 = 4;

/// Trash enemy min/max damage added per hero level.
pub const TRASH_DAMAGE_PER_LEVEL: i32 = 1;

/// Mid-boss health added per hero level.
pub const MID_BOSS_HEALTH_PER_LEVEL: i32 = 12;

/// Mid-boss min/max damage added per hero level.
pub const MID_BOSS_DAMAGE_PER_LEVEL: i32 = 2;

// =============================================================================
// SIDE EVENTS (exclusive upper bounds of each band, rolls in [0, 100))
// =============================================================================

pub const SIDE_STASH_BAND_END: i32 = 20;
pub const SIDE_HERB_BAND_END: i32 = 35;
pub const SIDE_TRAP_BAND_END: i32 = 50;
pub const SIDE_MERCHANT_BAND_END: i32 = 70;

pub const STASH_GOLD: u32 = 15;
pub const HERB_HEAL: i32 = 15;
pub const TRAP_DAMAGE: i32 = 10;
pub const MERCHANT_GOLD: u32 = 40;
pub const MERCHANT_XP: u32 = 25;

// =============================================================================
// TAVERN EVENTS (exclusive upper bounds of each band, rolls in [0, 100))
// =============================================================================

pub const TAVERN_GOLD_BAND_END: i32 = 30;
pub const TAVERN_SPRING_BAND_END: i32 = 50;
pub const TAVERN_LOOT_BAND_END: i32 = 70;

pub const TAVERN_GOLD: u32 = 10;
pub const SPRING_HEAL: i32 = 20;
pub const PATRON_DAMAGE: i32 = 5;
