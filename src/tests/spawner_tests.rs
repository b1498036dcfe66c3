#![warn(clippy::all, clippy::pedantic)]

#[cfg(test)]
mod tests {
    use crate::assets::AssetCatalog;
    use crate::difficulty::DifficultyTier;
    use crate::rng::ScriptedRandom;
    use crate::spawner::{SpawnTimer, spawn_object};

    #[test]
    fn test_timer_fires_on_interval() {
        let mut timer = SpawnTimer::for_tier(DifficultyTier::Easy);
        assert_eq!(timer.interval_ms(), 1500);

        assert_eq!(timer.advance(1000), 0);
        assert_eq!(timer.advance(499), 0);
        assert_eq!(timer.advance(1), 1);
        assert_eq!(timer.elapsed_ms(), 0);
    }

    #[test]
    fn test_timer_catches_up_after_long_frame() {
        let mut timer = SpawnTimer::new(1000);

        assert_eq!(timer.advance(3100), 3);
        assert_eq!(timer.elapsed_ms(), 100);
        assert_eq!(timer.advance(900), 1);
    }

    #[test]
    fn test_timer_rearm_resets_phase() {
        let mut timer = SpawnTimer::for_tier(DifficultyTier::Medium);
        timer.advance(900);

        timer.rearm(DifficultyTier::Hard.spawn_interval_ms());

        assert_eq!(timer.interval_ms(), 400);
        assert_eq!(timer.elapsed_ms(), 0);
        assert_eq!(timer.advance(399), 0);
        assert_eq!(timer.advance(1), 1);
    }

    #[test]
    fn test_zero_interval_is_raised() {
        let mut timer = SpawnTimer::new(0);
        assert_eq!(timer.interval_ms(), 1);
        assert_eq!(timer.advance(5), 5);
    }

    #[test]
    fn test_spawn_object_above_top_edge() {
        let assets = AssetCatalog::default();
        let mut rng = ScriptedRandom::new([100]);

        let object = spawn_object(&mut rng, &assets);

        assert_eq!(object.x, 100.0);
        assert_eq!(object.y, -40.0);
        assert_eq!(object.width, 40.0);
        assert_eq!(object.height, 40.0);
    }

    #[test]
    fn test_spawn_columns_stay_in_bounds() {
        let assets = AssetCatalog::default();
        let mut rng = ScriptedRandom::new([10, 1000, 40, 740]);

        let xs: Vec<f32> = (0..4).map(|_| spawn_object(&mut rng, &assets).x).collect();
        assert_eq!(xs, vec![40.0, 740.0, 40.0, 740.0]);

        let mut seeded = fastrand::Rng::with_seed(42);
        for _ in 0..500 {
            let x = spawn_object(&mut seeded, &assets).x;
            assert!((40.0..=740.0).contains(&x));
        }
    }
}
