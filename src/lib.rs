//! Delver - turn-based dungeon crawler library
//!
//! This module exposes the game logic for testing and external use.

pub mod areas;
pub mod build_info;
pub mod character;
pub mod combat;
pub mod content;
pub mod core;
pub mod items;
pub mod ui;
