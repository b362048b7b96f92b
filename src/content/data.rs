//! Fixed content tables: areas, enemy templates, shop, loot, classes and
//! class-unlock rules.
//!
//! The built-in tables ship with the game. A JSON file with the same shape can
//! replace them at startup (`--content`); `--export-content` writes the
//! built-in set as a starting point.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::character::{ClassTemplate, ClassUnlockRule, DamageType, Skill, SkillEffect};
use crate::combat::Enemy;
use crate::core::error::ContentError;
use crate::items::Gear;

/// Unscaled enemy recipe. Level scaling is applied by the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyTemplate {
    pub name: String,
    pub health: i32,
    pub min_damage: i32,
    pub max_damage: i32,
    pub damage_type: DamageType,
}

impl EnemyTemplate {
    /// Builds an enemy with health and both damage bounds raised linearly by
    /// `level`.
    pub fn scaled(&self, level: u32, health_per_level: i32, damage_per_level: i32) -> Enemy {
        let level = level as i32;
        Enemy::new(
            self.name.clone(),
            self.health + level * health_per_level,
            self.min_damage + level * damage_per_level,
            self.max_damage + level * damage_per_level,
            self.damage_type,
        )
    }

    /// Builds the enemy exactly as written.
    pub fn unscaled(&self) -> Enemy {
        self.scaled(0, 0, 0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaContent {
    pub name: String,
    pub trash: Vec<EnemyTemplate>,
    pub mid_boss: EnemyTemplate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentTables {
    /// The fixed area list, in menu order.
    pub areas: Vec<AreaContent>,
    /// Trash template for areas not in the list.
    pub fallback_trash: EnemyTemplate,
    /// Mid-boss template for areas not in the list.
    pub fallback_mid_boss: EnemyTemplate,
    pub final_boss: EnemyTemplate,
    pub shop: Vec<Gear>,
    pub loot: Vec<Gear>,
    pub classes: Vec<ClassTemplate>,
    pub unlock_rules: Vec<ClassUnlockRule>,
}

impl Default for ContentTables {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ContentTables {
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let tables: ContentTables = serde_json::from_str(json)?;
        tables.validate()?;
        Ok(tables)
    }

    pub fn from_path(path: &Path) -> Result<Self, ContentError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json_pretty(&self) -> Result<String, ContentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Area names in menu order.
    pub fn area_names(&self) -> Vec<String> {
        self.areas.iter().map(|a| a.name.clone()).collect()
    }

    pub fn area(&self, name: &str) -> Option<&AreaContent> {
        self.areas.iter().find(|a| a.name == name)
    }

    /// Checks the invariants the engine relies on.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.areas.is_empty() {
            return Err(invalid("the area list is empty"));
        }
        let mut seen = HashSet::new();
        for area in &self.areas {
            if !seen.insert(area.name.as_str()) {
                return Err(invalid(format!("area '{}' is listed twice", area.name)));
            }
            if area.trash.is_empty() {
                return Err(invalid(format!("area '{}' has no trash enemies", area.name)));
            }
            for template in area.trash.iter().chain(std::iter::once(&area.mid_boss)) {
                validate_template(template)?;
            }
        }
        validate_template(&self.fallback_trash)?;
        validate_template(&self.fallback_mid_boss)?;
        validate_template(&self.final_boss)?;

        if self.loot.is_empty() {
            return Err(invalid("the loot table is empty"));
        }
        if self.classes.is_empty() {
            return Err(invalid("no playable classes"));
        }
        for rule in &self.unlock_rules {
            if rule.phrase.trim().is_empty() {
                return Err(invalid(format!(
                    "unlock rule for '{}' has an empty phrase",
                    rule.to_class
                )));
            }
        }
        Ok(())
    }

    pub fn builtin() -> Self {
        use DamageType::*;

        Self {
            areas: vec![
                area(
                    "Whispering Woods",
                    vec![
                        enemy("Timber Wolf", 22, 2, 5, Physical),
                        enemy("Thornback Boar", 26, 3, 5, Physical),
                        enemy("Will-o'-Wisp", 18, 2, 6, Nature),
                    ],
                    enemy("Elder Treant", 80, 6, 10, Nature),
                ),
                area(
                    "Sunken Crypt",
                    vec![
                        enemy("Restless Skeleton", 24, 3, 5, Physical),
                        enemy("Crypt Rat Swarm", 18, 2, 4, Poison),
                        enemy("Wailing Shade", 20, 3, 6, Shadow),
                    ],
                    enemy("Bone Warden", 90, 6, 11, Shadow),
                ),
                area(
                    "Goblin Warrens",
                    vec![
                        enemy("Goblin Cutthroat", 20, 3, 6, Physical),
                        enemy("Goblin Firestarter", 18, 4, 6, Fire),
                        enemy("Cave Troll Whelp", 30, 2, 5, Physical),
                    ],
                    enemy("Goblin Warchief", 95, 7, 11, Physical),
                ),
                area(
                    "Haunted Marsh",
                    vec![
                        enemy("Bog Lurker", 26, 3, 5, Poison),
                        enemy("Drowned Sailor", 24, 3, 6, Frost),
                        enemy("Marsh Hag", 20, 4, 7, Shadow),
                    ],
                    enemy("Mire Witch", 100, 7, 12, Poison),
                ),
                area(
                    "Frozen Peaks",
                    vec![
                        enemy("Frost Wolf", 26, 4, 6, Frost),
                        enemy("Ice Harpy", 22, 4, 7, Frost),
                        enemy("Snow Yeti", 34, 3, 6, Physical),
                    ],
                    enemy("Frost Giant", 120, 8, 13, Frost),
                ),
                area(
                    "Ashen Wastes",
                    vec![
                        enemy("Cinder Imp", 22, 4, 7, Fire),
                        enemy("Ash Ghoul", 28, 4, 6, Shadow),
                        enemy("Magma Crawler", 32, 4, 7, Fire),
                    ],
                    enemy("Infernal Drake", 130, 9, 14, Fire),
                ),
                area(
                    "Obsidian Spire",
                    vec![
                        enemy("Spire Sentinel", 34, 5, 7, Physical),
                        enemy("Void Acolyte", 26, 5, 8, Shadow),
                        enemy("Storm Elemental", 30, 4, 9, Lightning),
                    ],
                    enemy("Archmage Veyra", 140, 10, 15, Lightning),
                ),
            ],
            fallback_trash: enemy("Wandering Slime", 12, 1, 3, Physical),
            fallback_mid_boss: enemy("Area Warden", 70, 5, 9, Physical),
            final_boss: enemy("The Hollow King", 900, 20, 35, Shadow),
            shop: vec![
                Gear::new("Iron Sword", 0, 3, 40),
                Gear::new("Oak Shield", 15, 0, 35),
                Gear::new("Chainmail", 30, 0, 70),
                Gear::new("Steel Longsword", 0, 6, 90),
                Gear::new("Enchanted Amulet", 20, 2, 120),
                Gear::new("Dragonbone Axe", 0, 12, 200),
            ],
            loot: vec![
                Gear::new("Rusty Dagger", 0, 1, 0),
                Gear::new("Lucky Charm", 5, 1, 0),
                Gear::new("Traveler's Cloak", 10, 0, 0),
                Gear::new("Bandit's Blade", 0, 3, 0),
            ],
            classes: vec![
                class(
                    "Warrior",
                    (130, 12, 5, 5),
                    vec![
                        Skill::new(
                            "Shield Bash",
                            SkillEffect::Attack { damage: 18 },
                            Physical,
                            "Slams a shield into the enemy.",
                        ),
                        Skill::new(
                            "Second Wind",
                            SkillEffect::Heal { amount: 25 },
                            Physical,
                            "Grits teeth and keeps fighting.",
                        ),
                    ],
                ),
                class(
                    "Mage",
                    (85, 9, 8, 5),
                    vec![
                        Skill::new(
                            "Fireball",
                            SkillEffect::Attack { damage: 26 },
                            Fire,
                            "Hurls a ball of roaring flame.",
                        ),
                        Skill::new(
                            "Frost Lance",
                            SkillEffect::DamageOverTime { damage: 14 },
                            Frost,
                            "A shard of ice that bites deep.",
                        ),
                    ],
                ),
                class(
                    "Rogue",
                    (95, 11, 20, 15),
                    vec![
                        Skill::new(
                            "Backstab",
                            SkillEffect::Attack { damage: 22 },
                            Physical,
                            "A knife where it hurts most.",
                        ),
                        Skill::new(
                            "Poisoned Blade",
                            SkillEffect::DamageOverTime { damage: 12 },
                            Poison,
                            "A cut laced with nightshade.",
                        ),
                    ],
                ),
                class(
                    "Ranger",
                    (100, 10, 12, 10),
                    vec![
                        Skill::new(
                            "Loyal Wolf",
                            SkillEffect::Companion { damage: 10 },
                            Nature,
                            "Your wolf companion lunges at the enemy.",
                        ),
                        Skill::new(
                            "Volley",
                            SkillEffect::Attack { damage: 16 },
                            Physical,
                            "A rapid flurry of arrows.",
                        ),
                    ],
                ),
                class(
                    "Paladin",
                    (115, 11, 8, 5),
                    vec![
                        Skill::new(
                            "Smite",
                            SkillEffect::Attack { damage: 16 },
                            Holy,
                            "A hammer blow wreathed in light.",
                        ),
                        Skill::new(
                            "Lay on Hands",
                            SkillEffect::Heal { amount: 30 },
                            Holy,
                            "Mends wounds with a touch.",
                        ),
                    ],
                ),
            ],
            unlock_rules: vec![ClassUnlockRule {
                from_class: "Paladin".to_string(),
                phrase: "by the light eternal".to_string(),
                to_class: "Templar".to_string(),
                skill: Skill::new(
                    "Judgment",
                    SkillEffect::Attack { damage: 35 },
                    Holy,
                    "Calls down the verdict of heaven.",
                ),
            }],
        }
    }
}

fn invalid(message: impl Into<String>) -> ContentError {
    ContentError::Invalid(message.into())
}

fn validate_template(template: &EnemyTemplate) -> Result<(), ContentError> {
    if template.health <= 0 {
        return Err(invalid(format!("'{}' has no health", template.name)));
    }
    if template.min_damage < 0 || template.min_damage > template.max_damage {
        return Err(invalid(format!(
            "'{}' has a bad damage range {}..{}",
            template.name, template.min_damage, template.max_damage
        )));
    }
    Ok(())
}

fn enemy(name: &str, health: i32, min_damage: i32, max_damage: i32, damage_type: DamageType) -> EnemyTemplate {
    EnemyTemplate {
        name: name.to_string(),
        health,
        min_damage,
        max_damage,
        damage_type,
    }
}

fn area(name: &str, trash: Vec<EnemyTemplate>, mid_boss: EnemyTemplate) -> AreaContent {
    AreaContent {
        name: name.to_string(),
        trash,
        mid_boss,
    }
}

/// `(health, base_damage, crit_chance, dodge_chance)`
fn class(name: &str, stats: (i32, i32, u32, u32), skills: Vec<Skill>) -> ClassTemplate {
    let (health, base_damage, crit_chance, dodge_chance) = stats;
    ClassTemplate {
        name: name.to_string(),
        health,
        base_damage,
        crit_chance,
        dodge_chance,
        skills,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_are_valid() {
        let tables = ContentTables::builtin();
        assert!(tables.validate().is_ok());
        assert_eq!(tables.areas.len(), 7);
    }

    #[test]
    fn test_builtin_has_one_unlock_rule() {
        let tables = ContentTables::builtin();
        assert_eq!(tables.unlock_rules.len(), 1);
        assert_eq!(tables.unlock_rules[0].from_class, "Paladin");
        assert_eq!(tables.unlock_rules[0].to_class, "Templar");
    }

    #[test]
    fn test_json_round_trip_keeps_tables() {
        let tables = ContentTables::builtin();
        let json = tables.to_json_pretty().unwrap();
        assert_eq!(ContentTables::from_json(&json).unwrap(), tables);
    }

    #[test]
    fn test_validation_rejects_empty_trash_list() {
        let mut tables = ContentTables::builtin();
        tables.areas[2].trash.clear();
        let err = tables.validate().unwrap_err();
        assert!(err.to_string().contains("Goblin Warrens"));
    }

    #[test]
    fn test_validation_rejects_inverted_damage() {
        let mut tables = ContentTables::builtin();
        tables.final_boss.min_damage = 50;
        assert!(matches!(tables.validate(), Err(ContentError::Invalid(_))));
    }

    #[test]
    fn test_validation_rejects_duplicate_area() {
        let mut tables = ContentTables::builtin();
        let copy = tables.areas[0].clone();
        tables.areas.push(copy);
        assert!(tables.validate().is_err());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            ContentTables::from_json("{\"areas\": 3}"),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn test_scaled_template() {
        let template = enemy("Wolf", 20, 2, 5, DamageType::Physical);
        let wolf = template.scaled(3, 4, 1);
        assert_eq!(wolf.max_health, 32);
        assert_eq!(wolf.health, 32);
        assert_eq!((wolf.min_damage, wolf.max_damage), (5, 8));
        assert_eq!(template.unscaled().max_health, 20);
    }
}
