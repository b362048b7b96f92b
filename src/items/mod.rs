//! Item system: gear records sold in the tavern and found as loot.

pub mod types;

pub use types::*;
