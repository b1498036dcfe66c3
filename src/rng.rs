#![warn(clippy::all, clippy::pedantic)]

use std::collections::VecDeque;
use std::ops::RangeInclusive;

use bevy_ecs::prelude::*;

/// Source of uniformly distributed integers.
///
/// Gameplay code only ever asks for integers in an inclusive range, so tests
/// can swap in a scripted source and get exact positions and speeds.
pub trait RandomSource: Send + Sync {
    fn int_in(&mut self, range: RangeInclusive<i32>) -> i32;
}

impl RandomSource for fastrand::Rng {
    fn int_in(&mut self, range: RangeInclusive<i32>) -> i32 {
        self.i32(range)
    }
}

/// Replays a fixed list of values, then falls back to the low end of each range.
///
/// Values are clamped into the requested range.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    values: VecDeque<i32>,
}

impl ScriptedRandom {
    #[must_use]
    pub fn new(values: impl IntoIterator<Item = i32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn int_in(&mut self, range: RangeInclusive<i32>) -> i32 {
        let (low, high) = (*range.start(), *range.end());
        self.values
            .pop_front()
            .map_or(low, |value| value.clamp(low, high))
    }
}

/// The random source shared by the spawner and the speed sampler
#[derive(Resource)]
pub struct GameRng(pub Box<dyn RandomSource>);

impl GameRng {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self(Box::new(fastrand::Rng::with_seed(seed)))
    }

    #[must_use]
    pub fn from_entropy() -> Self {
        Self(Box::new(fastrand::Rng::new()))
    }

    #[must_use]
    pub fn scripted(values: impl IntoIterator<Item = i32>) -> Self {
        Self(Box::new(ScriptedRandom::new(values)))
    }
}
