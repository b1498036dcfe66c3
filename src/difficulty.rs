#![warn(clippy::all, clippy::pedantic)]

use std::fmt;
use std::ops::RangeInclusive;

use crate::rng::RandomSource;

/// Fall speed range for the hardest tier, sampled per object per tick
pub const HARD_SPEED_RANGE: RangeInclusive<i32> = 18..=40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DifficultyTier {
    Easy,
    Medium,
    Hard,
}

/// How far a falling object moves on each tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeedPolicy {
    Constant(i32),
    Sampled(RangeInclusive<i32>),
}

impl DifficultyTier {
    pub const ALL: [DifficultyTier; 3] = [
        DifficultyTier::Easy,
        DifficultyTier::Medium,
        DifficultyTier::Hard,
    ];

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            DifficultyTier::Easy => 0,
            DifficultyTier::Medium => 1,
            DifficultyTier::Hard => 2,
        }
    }

    /// Label shown on the stage selector
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            DifficultyTier::Easy => "Noob",
            DifficultyTier::Medium => "Pro",
            DifficultyTier::Hard => "Master",
        }
    }

    #[must_use]
    pub fn spawn_interval_ms(self) -> u64 {
        match self {
            DifficultyTier::Easy => 1500,
            DifficultyTier::Medium => 1000,
            DifficultyTier::Hard => 400,
        }
    }

    #[must_use]
    pub fn speed_policy(self) -> SpeedPolicy {
        match self {
            DifficultyTier::Easy => SpeedPolicy::Constant(5),
            DifficultyTier::Medium => SpeedPolicy::Constant(10),
            DifficultyTier::Hard => SpeedPolicy::Sampled(HARD_SPEED_RANGE),
        }
    }
}

impl fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl SpeedPolicy {
    pub fn sample(&self, rng: &mut dyn RandomSource) -> i32 {
        match self {
            SpeedPolicy::Constant(speed) => *speed,
            SpeedPolicy::Sampled(range) => rng.int_in(range.clone()),
        }
    }
}

/// Speed for one object on one tick. Constant tiers never touch the rng.
pub fn sample_speed(tier: DifficultyTier, rng: &mut dyn RandomSource) -> i32 {
    tier.speed_policy().sample(rng)
}
