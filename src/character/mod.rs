//! The hero, their skills, and class templates.

pub mod classes;
pub mod types;

pub use classes::*;
pub use types::*;
