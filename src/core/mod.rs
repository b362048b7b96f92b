//! Core game state and logic.

pub mod campaign;
pub mod config;
pub mod constants;
pub mod error;
pub mod progression;
pub mod rng;
pub mod tavern;

pub use campaign::*;
pub use config::GameConfig;
pub use error::{ContentError, GameError};
pub use progression::*;
pub use rng::*;
pub use tavern::visit_tavern;
