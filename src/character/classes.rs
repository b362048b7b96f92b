//! Class templates and the secret class-derivative rules.

use serde::{Deserialize, Serialize};

use super::types::{Hero, Skill};

/// Starting kit for a playable class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassTemplate {
    pub name: String,
    pub health: i32,
    pub base_damage: i32,
    pub crit_chance: u32,
    pub dodge_chance: u32,
    pub skills: Vec<Skill>,
}

/// `(from_class, phrase) -> (to_class, skill)`.
///
/// The phrase is compared after trimming and lowercasing both sides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassUnlockRule {
    pub from_class: String,
    pub phrase: String,
    pub to_class: String,
    pub skill: Skill,
}

impl ClassUnlockRule {
    pub fn matches_phrase(&self, phrase: &str) -> bool {
        normalize_phrase(&self.phrase) == normalize_phrase(phrase)
    }
}

pub fn normalize_phrase(phrase: &str) -> String {
    phrase.trim().to_lowercase()
}

/// Creates a level 1 hero from a class template.
pub fn create_hero(name: &str, template: &ClassTemplate) -> Hero {
    Hero {
        name: name.to_string(),
        class_name: template.name.clone(),
        health: template.health,
        base_damage: template.base_damage,
        crit_chance: template.crit_chance,
        dodge_chance: template.dodge_chance,
        level: 1,
        skills: template.skills.clone(),
        inventory: Vec::new(),
    }
}

/// Finds a class template by name, ignoring case.
pub fn find_class<'a>(classes: &'a [ClassTemplate], name: &str) -> Option<&'a ClassTemplate> {
    classes
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::types::{DamageType, SkillEffect};

    fn paladin() -> ClassTemplate {
        ClassTemplate {
            name: "Paladin".to_string(),
            health: 110,
            base_damage: 11,
            crit_chance: 8,
            dodge_chance: 5,
            skills: vec![Skill::new(
                "Smite",
                SkillEffect::Attack { damage: 16 },
                DamageType::Holy,
                "A hammer blow wreathed in light.",
            )],
        }
    }

    #[test]
    fn test_create_hero_copies_template() {
        let hero = create_hero("Aria", &paladin());
        assert_eq!(hero.name, "Aria");
        assert_eq!(hero.class_name, "Paladin");
        assert_eq!(hero.level, 1);
        assert_eq!(hero.health, 110);
        assert_eq!(hero.base_damage, 11);
        assert_eq!(hero.skills.len(), 1);
        assert!(hero.inventory.is_empty());
    }

    #[test]
    fn test_phrase_normalization() {
        let rule = ClassUnlockRule {
            from_class: "Paladin".to_string(),
            phrase: "By the Light".to_string(),
            to_class: "Templar".to_string(),
            skill: paladin().skills[0].clone(),
        };
        assert!(rule.matches_phrase("  by the light "));
        assert!(rule.matches_phrase("BY THE LIGHT"));
        assert!(!rule.matches_phrase("by the lights"));
    }

    #[test]
    fn test_find_class_ignores_case() {
        let classes = vec![paladin()];
        assert!(find_class(&classes, "paladin").is_some());
        assert!(find_class(&classes, "Rogue").is_none());
    }
}
