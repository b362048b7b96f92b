//! The single source of nondeterminism in the game.
//!
//! Every random decision goes through [`RandomSource::next_int`], consumed in a
//! fixed order per event, so a seeded generator or a scripted sequence replays a
//! whole campaign exactly.

use rand::Rng;
use std::collections::VecDeque;

/// Supplies uniform integers in a half-open range.
pub trait RandomSource {
    /// Returns an integer in `[low, high)`. Returns `low` when the range is empty.
    fn next_int(&mut self, low: i32, high: i32) -> i32;
}

/// Adapts any `rand` generator (e.g. `ChaCha8Rng` for seeded runs).
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_int(&mut self, low: i32, high: i32) -> i32 {
        if low >= high {
            return low;
        }
        self.0.gen_range(low..high)
    }
}

/// Replays a fixed sequence of draws.
///
/// Values are clamped into the requested range. Once the script runs out every
/// draw returns `low`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRolls {
    rolls: VecDeque<i32>,
    draws: usize,
}

impl ScriptedRolls {
    pub fn new(rolls: impl IntoIterator<Item = i32>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
            draws: 0,
        }
    }

    /// Number of draws consumed so far (scripted or fallback).
    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Scripted draws not yet consumed.
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl RandomSource for ScriptedRolls {
    fn next_int(&mut self, low: i32, high: i32) -> i32 {
        self.draws += 1;
        if low >= high {
            return low;
        }
        match self.rolls.pop_front() {
            Some(roll) => roll.clamp(low, high - 1),
            None => low,
        }
    }
}
