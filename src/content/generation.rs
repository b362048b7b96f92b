//! Enemy generation for trash encounters, mid-bosses and the boss lair.

use log::{debug, warn};

use super::data::ContentTables;
use crate::combat::Enemy;
use crate::core::constants::{
    MID_BOSS_DAMAGE_PER_LEVEL, MID_BOSS_HEALTH_PER_LEVEL, TRASH_DAMAGE_PER_LEVEL,
    TRASH_HEALTH_PER_LEVEL,
};
use crate::core::rng::RandomSource;

/// Picks one of the area's trash templates uniformly (one draw) and scales
/// it to the hero's level. Unknown areas use the fallback template and draw
/// nothing.
pub fn generate_trash_enemy(
    content: &ContentTables,
    area: &str,
    hero_level: u32,
    rng: &mut impl RandomSource,
) -> Enemy {
    let template = match content.area(area) {
        Some(area_content) if !area_content.trash.is_empty() => {
            let pick = rng.next_int(0, area_content.trash.len() as i32) as usize;
            debug!("trash roll {} in {}", pick, area);
            &area_content.trash[pick]
        }
        _ => {
            warn!("No trash templates for '{}', using fallback", area);
            &content.fallback_trash
        }
    };
    template.scaled(hero_level, TRASH_HEALTH_PER_LEVEL, TRASH_DAMAGE_PER_LEVEL)
}

/// The area's fixed mid-boss, scaled harder than trash.
pub fn generate_mid_boss(content: &ContentTables, area: &str, hero_level: u32) -> Enemy {
    let template = match content.area(area) {
        Some(area_content) => &area_content.mid_boss,
        None => {
            warn!("No mid-boss for '{}', using fallback", area);
            &content.fallback_mid_boss
        }
    };
    template.scaled(hero_level, MID_BOSS_HEALTH_PER_LEVEL, MID_BOSS_DAMAGE_PER_LEVEL)
}

/// The boss lair's master. Does not scale with level.
pub fn generate_final_boss(content: &ContentTables) -> Enemy {
    content.final_boss.unscaled()
}
