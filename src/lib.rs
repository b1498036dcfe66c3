pub mod app;
pub mod assets;
pub mod collision;
pub mod components;
pub mod config;
pub mod difficulty;
pub mod game;
pub mod input;
pub mod menu;
pub mod menu_types;
pub mod motion;
pub mod rng;
pub mod scene;
pub mod screen;
pub mod spawner;
pub mod systems;
pub mod ui;

#[cfg(test)]
mod tests;

use std::time::{Duration, Instant};

/// Monotonic frame clock
#[derive(Debug, Clone)]
pub struct Time {
    delta: Duration,
    last_update: Instant,
    // Sub-millisecond time not yet handed out by `take_millis`
    carry: Duration,
}

impl Time {
    #[must_use]
    pub fn new() -> Self {
        Self {
            delta: Duration::default(),
            last_update: Instant::now(),
            carry: Duration::default(),
        }
    }

    pub fn update(&mut self) {
        let now = Instant::now();
        self.delta = now.duration_since(self.last_update);
        self.last_update = now;
        self.carry += self.delta;
    }

    /// Whole milliseconds elapsed since the last call; fractions carry over
    pub fn take_millis(&mut self) -> u64 {
        let millis = u64::try_from(self.carry.as_millis()).unwrap_or(u64::MAX);
        self.carry = self.carry.saturating_sub(Duration::from_millis(millis));
        millis
    }

    #[must_use]
    pub fn delta(&self) -> Duration {
        self.delta
    }

    #[must_use]
    pub fn last_update(&self) -> Instant {
        self.last_update
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}
