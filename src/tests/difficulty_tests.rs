#![warn(clippy::all, clippy::pedantic)]

#[cfg(test)]
mod tests {
    use crate::difficulty::{DifficultyTier, HARD_SPEED_RANGE, SpeedPolicy, sample_speed};
    use crate::rng::ScriptedRandom;

    #[test]
    fn test_spawn_intervals() {
        assert_eq!(DifficultyTier::Easy.spawn_interval_ms(), 1500);
        assert_eq!(DifficultyTier::Medium.spawn_interval_ms(), 1000);
        assert_eq!(DifficultyTier::Hard.spawn_interval_ms(), 400);
    }

    #[test]
    fn test_speed_policies() {
        assert_eq!(DifficultyTier::Easy.speed_policy(), SpeedPolicy::Constant(5));
        assert_eq!(DifficultyTier::Medium.speed_policy(), SpeedPolicy::Constant(10));
        assert_eq!(
            DifficultyTier::Hard.speed_policy(),
            SpeedPolicy::Sampled(18..=40)
        );
    }

    #[test]
    fn test_constant_tiers_do_not_consume_randomness() {
        let mut rng = ScriptedRandom::new([25]);

        assert_eq!(sample_speed(DifficultyTier::Easy, &mut rng), 5);
        assert_eq!(sample_speed(DifficultyTier::Medium, &mut rng), 10);

        // The scripted value is still there for the sampled tier
        assert_eq!(sample_speed(DifficultyTier::Hard, &mut rng), 25);
    }

    #[test]
    fn test_hard_tier_resamples_every_call() {
        let mut rng = ScriptedRandom::new([20, 33, 40]);

        let speeds: Vec<i32> = (0..3)
            .map(|_| sample_speed(DifficultyTier::Hard, &mut rng))
            .collect();

        assert_eq!(speeds, vec![20, 33, 40]);
    }

    #[test]
    fn test_hard_tier_stays_in_range() {
        let mut rng = fastrand::Rng::with_seed(7);

        for _ in 0..1000 {
            let speed = sample_speed(DifficultyTier::Hard, &mut rng);
            assert!(HARD_SPEED_RANGE.contains(&speed), "speed {speed} out of range");
        }
    }

    #[test]
    fn test_tier_indices_and_labels() {
        for (i, tier) in DifficultyTier::ALL.iter().enumerate() {
            assert_eq!(tier.index(), i);
            assert_eq!(DifficultyTier::from_index(i), Some(*tier));
        }
        assert_eq!(DifficultyTier::from_index(3), None);

        assert_eq!(DifficultyTier::Easy.label(), "Noob");
        assert_eq!(DifficultyTier::Medium.label(), "Pro");
        assert_eq!(DifficultyTier::Hard.to_string(), "Master");
    }
}
