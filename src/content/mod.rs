//! Content generation: static tables, enemy recipes and random events.

pub mod data;
pub mod events;
pub mod generation;

pub use data::*;
pub use events::*;
pub use generation::*;
