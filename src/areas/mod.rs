//! Area progression.
//!
//! Each area asks for a quota of trash kills before its mid-boss appears.
//! Clearing every area opens the boss lair.

mod progression;

pub use progression::WorldState;
