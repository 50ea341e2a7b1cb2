use super::random_x;
use crate::config::HealthBoosterSpawnConfig;
use crate::health_booster::HealthBooster;
use glam::Vec2;
use rand::Rng;
use tracing::debug;

/// Places health pickups above the rocket
///
/// After launch it waits `initial_spawn_delay` seconds, then alternates
/// between spawning one booster and waiting a random gap drawn from
/// `[min_spawn_interval, max_spawn_interval]`.
pub struct HealthBoosterSpawner {
    config: HealthBoosterSpawnConfig,
    started: bool,
    /// Seconds until the next booster
    timer: f32,
    next_id: u64,
}

impl HealthBoosterSpawner {
    pub fn new(config: HealthBoosterSpawnConfig) -> Self {
        HealthBoosterSpawner {
            config,
            started: false,
            timer: 0.0,
            next_id: 0,
        }
    }

    pub fn reset(&mut self) {
        *self = HealthBoosterSpawner::new(self.config.clone());
    }

    pub fn has_started(&self) -> bool {
        self.started
    }

    /// Seconds remaining before the next booster appears
    pub fn time_until_next(&self) -> f32 {
        self.timer.max(0.0)
    }

    pub fn update<R: Rng>(
        &mut self,
        dt: f32,
        rocket_y: f32,
        running: bool,
        rng: &mut R,
    ) -> Vec<HealthBooster> {
        let mut spawned = Vec::new();
        if !running {
            return spawned;
        }

        if !self.started {
            self.started = true;
            self.timer = self.config.initial_spawn_delay;
            return spawned;
        }

        self.timer -= dt;
        while self.timer <= 0.0 {
            spawned.push(self.spawn(rocket_y, rng));
            let gap = rng.gen_range(self.config.min_spawn_interval..=self.config.max_spawn_interval);
            self.timer += gap;
        }

        spawned
    }

    fn spawn<R: Rng>(&mut self, rocket_y: f32, rng: &mut R) -> HealthBooster {
        let position = Vec2::new(
            random_x(rng, self.config.spawn_range_x),
            rocket_y + self.config.spawn_offset_y,
        );

        self.next_id += 1;
        debug!(id = self.next_id, x = position.x, y = position.y, "health booster spawned");

        HealthBooster::new(
            self.next_id,
            position,
            self.config.heal_amount,
            self.config.collider_radius,
        )
    }
}
