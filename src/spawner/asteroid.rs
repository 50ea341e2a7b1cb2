use super::random_x;
use crate::asteroid::{Asteroid, AsteroidSize};
use crate::config::{AsteroidSpawnConfig, SizeWeights};
use glam::Vec2;
use rand::Rng;
use tracing::debug;

/// Drops asteroids above the rocket on a schedule that tightens with altitude
///
/// Every `adjust_period` seconds the interval is recomputed from the
/// rocket's height and the schedule restarts with zero delay, so each
/// adjustment also drops an asteroid straight away.
pub struct AsteroidSpawner {
    config: AsteroidSpawnConfig,
    started: bool,
    current_interval: f32,
    /// Seconds until the next scheduled spawn
    spawn_timer: f32,
    adjust_timer: f32,
    next_id: u64,
}

impl AsteroidSpawner {
    pub fn new(config: AsteroidSpawnConfig) -> Self {
        let current_interval = config.initial_spawn_interval;
        AsteroidSpawner {
            config,
            started: false,
            current_interval,
            spawn_timer: 0.0,
            adjust_timer: 0.0,
            next_id: 0,
        }
    }

    pub fn reset(&mut self) {
        *self = AsteroidSpawner::new(self.config.clone());
    }

    pub fn has_started(&self) -> bool {
        self.started
    }

    pub fn current_interval(&self) -> f32 {
        self.current_interval
    }

    /// Spawn interval for a given rocket height
    pub fn interval_for_altitude(&self, rocket_y: f32) -> f32 {
        let initial = self.config.initial_spawn_interval;
        (initial - rocket_y * self.config.altitude_interval_factor)
            .clamp(self.config.min_spawn_interval, initial)
    }

    /// Advances the schedule and returns the asteroids due this frame
    ///
    /// `running` is false before launch and after the rocket is destroyed.
    pub fn update<R: Rng>(
        &mut self,
        dt: f32,
        rocket_y: f32,
        running: bool,
        rng: &mut R,
    ) -> Vec<Asteroid> {
        let mut spawned = Vec::new();
        if !running {
            return spawned;
        }

        if !self.started {
            self.started = true;
            self.current_interval = self.config.initial_spawn_interval;
            self.adjust_timer = 0.0;
            spawned.push(self.spawn(rocket_y, rng));
            self.spawn_timer = self.current_interval;
            return spawned;
        }

        self.spawn_timer -= dt;
        while self.spawn_timer <= 0.0 {
            spawned.push(self.spawn(rocket_y, rng));
            self.spawn_timer += self.current_interval;
        }

        self.adjust_timer += dt;
        if self.adjust_timer >= self.config.adjust_period {
            self.adjust_timer -= self.config.adjust_period;
            self.current_interval = self.interval_for_altitude(rocket_y);
            spawned.push(self.spawn(rocket_y, rng));
            self.spawn_timer = self.current_interval;
        }

        spawned
    }

    fn spawn<R: Rng>(&mut self, rocket_y: f32, rng: &mut R) -> Asteroid {
        let position = Vec2::new(
            random_x(rng, self.config.spawn_range_x),
            rocket_y + self.config.spawn_offset_y,
        );
        let size = select_size(&self.config.size_weights, rng);
        let variant = rng.gen_range(0..self.config.variants_per_size.max(1));

        self.next_id += 1;
        debug!(id = self.next_id, ?size, x = position.x, y = position.y, "asteroid spawned");

        Asteroid::new(
            self.next_id,
            size,
            variant,
            position,
            Vec2::new(0.0, -self.config.fall_speed),
        )
    }
}

/// Picks a size by walking the cumulative normalised weights
pub fn select_size<R: Rng>(weights: &SizeWeights, rng: &mut R) -> AsteroidSize {
    let total = weights.total();
    if total <= 0.0 {
        return AsteroidSize::Small;
    }

    let roll = rng.gen_range(0.0..1.0) * total;
    let mut cumulative = 0.0;
    let bands = [
        (AsteroidSize::Small, weights.small),
        (AsteroidSize::Medium, weights.medium),
        (AsteroidSize::Large, weights.large),
        (AsteroidSize::Huge, weights.huge),
    ];

    for (size, weight) in bands {
        cumulative += weight.max(0.0);
        if roll < cumulative {
            return size;
        }
    }

    // Float rounding can leave the roll a hair past the last band
    bands
        .iter()
        .rev()
        .find(|(_, weight)| *weight > 0.0)
        .map(|(size, _)| *size)
        .unwrap_or(AsteroidSize::Small)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    #[test]
    fn test_idle_until_launch() {
        let mut spawner = AsteroidSpawner::new(AsteroidSpawnConfig::default());
        let mut rng = StdRng::seed_from_u64(1);

        assert!(spawner.update(1.0, 0.0, false, &mut rng).is_empty());
        assert!(!spawner.has_started());
    }

    #[test]
    fn test_first_spawn_is_immediate_and_above_rocket() {
        let mut spawner = AsteroidSpawner::new(AsteroidSpawnConfig::default());
        let mut rng = StdRng::seed_from_u64(2);

        let spawned = spawner.update(1.0 / 60.0, 4.0, true, &mut rng);
        assert_eq!(spawned.len(), 1);

        let asteroid = &spawned[0];
        assert_eq!(asteroid.position.y, 14.0);
        assert!(asteroid.position.x.abs() <= 8.0);
        assert_eq!(asteroid.velocity, Vec2::new(0.0, -0.1));
        assert!(asteroid.variant < 3);
    }

    #[test]
    fn test_repeats_at_interval() {
        let mut spawner = AsteroidSpawner::new(AsteroidSpawnConfig::default());
        let mut rng = StdRng::seed_from_u64(3);
        spawner.update(0.01, 0.0, true, &mut rng);

        // 0.7s interval: nothing at 0.5s, one by 0.8s
        assert!(spawner.update(0.5, 0.0, true, &mut rng).is_empty());
        assert_eq!(spawner.update(0.3, 0.0, true, &mut rng).len(), 1);
    }

    #[test]
    fn test_interval_clamps_with_altitude() {
        let spawner = AsteroidSpawner::new(AsteroidSpawnConfig::default());

        assert!((spawner.interval_for_altitude(0.0) - 0.7).abs() < 1e-6);
        assert!((spawner.interval_for_altitude(300.0) - 0.4).abs() < 1e-5);
        assert_eq!(spawner.interval_for_altitude(5000.0), 0.2);
        assert_eq!(spawner.interval_for_altitude(-100.0), 0.7);
    }

    #[test]
    fn test_adjustment_restarts_schedule() {
        let mut spawner = AsteroidSpawner::new(AsteroidSpawnConfig::default());
        let mut rng = StdRng::seed_from_u64(4);
        spawner.update(0.01, 0.0, true, &mut rng);
        spawner.update(0.6, 500.0, true, &mut rng);

        // Crossing the one-second mark recomputes the interval and spawns at once
        let spawned = spawner.update(0.45, 500.0, true, &mut rng);
        assert!(!spawned.is_empty());
        assert!((spawner.current_interval() - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_every_size_is_reachable() {
        let weights = SizeWeights::default();
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts: HashMap<AsteroidSize, u32> = HashMap::new();

        for _ in 0..4000 {
            *counts.entry(select_size(&weights, &mut rng)).or_default() += 1;
        }

        for size in AsteroidSize::ALL {
            let count = counts.get(&size).copied().unwrap_or(0);
            assert!(count > 800, "{:?} drawn only {} times", size, count);
        }
    }

    #[test]
    fn test_zero_weight_size_never_drawn() {
        let weights = SizeWeights {
            small: 1.0,
            medium: 0.0,
            large: 0.0,
            huge: 1.0,
        };
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let size = select_size(&weights, &mut rng);
            assert!(matches!(size, AsteroidSize::Small | AsteroidSize::Huge));
        }
    }
}
