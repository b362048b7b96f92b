//! Error types for rejected player actions and content loading.
//!
//! None of these are fatal: the campaign reports the message and carries on.

use thiserror::Error;

/// A player action the engine refused. State is never mutated when one of
/// these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Not enough gold: {item} costs {cost}, you have {gold}")]
    InsufficientFunds { item: String, cost: u32, gold: u32 },

    #[error("You have not learned any skills")]
    EmptySkillList,

    #[error("No skill in slot {0}")]
    UnknownSkill(usize),

    #[error("The {class} path has already been unlocked")]
    AlreadyUnlocked { class: String },

    #[error("The words mean nothing to a {class}")]
    InvalidUnlockPhrase { class: String },

    #[error("The battle is already over")]
    BattleOver,

    #[error("The battle is not over yet")]
    BattleOngoing,
}

/// Failure to load or validate content tables.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("could not read content file: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse content tables: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid content tables: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_funds_message() {
        let err = GameError::InsufficientFunds {
            item: "Iron Sword".to_string(),
            cost: 40,
            gold: 39,
        };
        assert_eq!(
            err.to_string(),
            "Not enough gold: Iron Sword costs 40, you have 39"
        );
    }

    #[test]
    fn test_content_error_wraps_parse_error() {
        let parse = serde_json::from_str::<u32>("not json").unwrap_err();
        let err = ContentError::from(parse);
        assert!(err.to_string().starts_with("could not parse content tables"));
    }
}
