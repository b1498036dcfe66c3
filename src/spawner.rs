#![warn(clippy::all, clippy::pedantic)]

use bevy_ecs::prelude::*;
use log::trace;

use crate::assets::AssetCatalog;
use crate::components::FallingObject;
use crate::difficulty::DifficultyTier;
use crate::game::{SPAWN_MAX_X, SPAWN_MIN_X};
use crate::rng::RandomSource;

/// Recurring spawn timer driven by per-frame elapsed time
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct SpawnTimer {
    interval_ms: u64,
    elapsed_ms: u64,
}

impl SpawnTimer {
    #[must_use]
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            elapsed_ms: 0,
        }
    }

    #[must_use]
    pub fn for_tier(tier: DifficultyTier) -> Self {
        Self::new(tier.spawn_interval_ms())
    }

    /// Replaces the interval and restarts the countdown
    pub fn rearm(&mut self, interval_ms: u64) {
        *self = Self::new(interval_ms);
    }

    #[must_use]
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    #[must_use]
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Adds elapsed time and returns how many times the timer fired
    pub fn advance(&mut self, delta_ms: u64) -> u32 {
        self.elapsed_ms += delta_ms;
        let fired = self.elapsed_ms / self.interval_ms;
        self.elapsed_ms %= self.interval_ms;
        u32::try_from(fired).unwrap_or(u32::MAX)
    }
}

/// A new object just above the top edge at a random column
pub fn spawn_object(rng: &mut dyn RandomSource, assets: &AssetCatalog) -> FallingObject {
    let x = rng.int_in(SPAWN_MIN_X..=SPAWN_MAX_X);
    #[allow(clippy::cast_precision_loss)]
    let object = FallingObject::new(
        x as f32,
        -assets.coconut.height,
        assets.coconut.width,
        assets.coconut.height,
    );
    trace!("Spawned object at ({}, {})", object.x, object.y);
    object
}
