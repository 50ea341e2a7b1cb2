// GameWorld struct and per-frame simulation
//
// This module contains the GameWorld struct which owns every object in a run
// (rocket, asteroids, health boosters, effects) together with the systems that
// drive them (launch sequence, spawners, camera, altitude counter).

use crate::altitude::AltitudeCounter;
use crate::asteroid::{Asteroid, BOOST_RAM_DAMAGE};
use crate::camera::{BackgroundAnchor, Camera};
use crate::collision;
use crate::config::GameConfig;
use crate::effects::{Effects, ExplosionKind};
use crate::events::GameEvent;
use crate::health_booster::HealthBooster;
use crate::input::InputState;
use crate::launch::LaunchSequence;
use crate::rocket::{AsteroidHit, Rocket};
use crate::spawner::{AsteroidSpawner, HealthBoosterSpawner};
use rand::Rng;
use tracing::{debug, info};

/// GameWorld encapsulates one run of the game
pub struct GameWorld {
    config: GameConfig,
    pub rocket: Rocket,
    pub asteroids: Vec<Asteroid>,
    pub health_boosters: Vec<HealthBooster>,
    pub launch: LaunchSequence,
    pub camera: Camera,
    pub background: BackgroundAnchor,
    pub altitude: AltitudeCounter,
    pub effects: Effects,
    asteroid_spawner: AsteroidSpawner,
    booster_spawner: HealthBoosterSpawner,
    /// A "new high score" event has already gone out this run
    record_announced: bool,
}

impl GameWorld {
    pub fn new(config: GameConfig, high_score: i32) -> Self {
        GameWorld {
            rocket: Rocket::new(config.rocket.clone(), config.knockback.clone()),
            asteroids: Vec::new(),
            health_boosters: Vec::new(),
            launch: LaunchSequence::new(&config.launch),
            camera: Camera::new(&config.camera),
            background: BackgroundAnchor::new(&config.background),
            altitude: AltitudeCounter::new(config.score.altitude_offset, high_score),
            effects: Effects::new(),
            asteroid_spawner: AsteroidSpawner::new(config.asteroids.clone()),
            booster_spawner: HealthBoosterSpawner::new(config.health_boosters.clone()),
            record_announced: false,
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Starts a fresh run, keeping the high score
    pub fn reset(&mut self) {
        self.rocket.reset();
        self.asteroids.clear();
        self.health_boosters.clear();
        self.launch.reset();
        self.camera.reset();
        self.altitude.reset();
        self.effects.clear();
        self.asteroid_spawner.reset();
        self.booster_spawner.reset();
        self.record_announced = false;
        info!("world reset");
    }

    pub fn is_game_over(&self) -> bool {
        !self.rocket.is_active()
    }

    /// Advances the whole world by one frame
    ///
    /// Order matters: launch, rocket, falling objects, contacts, spawners,
    /// score, then camera and effects once everything has moved.
    pub fn update<R: Rng>(&mut self, dt: f32, input: &InputState, rng: &mut R) -> Vec<GameEvent> {
        let mut events = self.launch.update(dt, input);
        if events.contains(&GameEvent::Launched) {
            self.rocket.launch();
            self.altitude.start_launch();
        }

        let half_width = self.camera.half_width();
        events.extend(self.rocket.update(dt, input, half_width));

        self.update_falling_objects(dt);

        if self.rocket.is_launched() && self.rocket.is_active() {
            self.resolve_asteroid_contacts(&mut events);
        }
        if self.rocket.is_active() {
            self.resolve_booster_pickups(&mut events);
        }

        self.run_spawners(dt, rng, &mut events);

        if let Some(high_score) = self.altitude.update(self.rocket.position.y) {
            if !self.record_announced {
                self.record_announced = true;
                info!(high_score, "new high score");
                events.push(GameEvent::NewHighScore(high_score));
            }
        }

        self.camera.follow(self.rocket.position.y);
        self.effects.update(dt);

        events
    }

    fn update_falling_objects(&mut self, dt: f32) {
        let rocket_y = self.rocket.position.y;
        let despawn_distance = self.config.asteroids.despawn_distance;

        for asteroid in &mut self.asteroids {
            asteroid.update(dt);
        }

        self.asteroids
            .retain(|asteroid| !asteroid.is_below(rocket_y, despawn_distance));
        self.health_boosters
            .retain(|booster| !booster.is_below(rocket_y, despawn_distance));
    }

    /// Applies hits from asteroids the rocket has just started touching
    fn resolve_asteroid_contacts(&mut self, events: &mut Vec<GameEvent>) {
        let touching = collision::check_collisions_with_collection(&self.rocket, &self.asteroids);

        for (index, asteroid) in self.asteroids.iter_mut().enumerate() {
            let is_touching = touching.contains(&index);
            let contact_began = is_touching && !asteroid.in_contact;
            asteroid.in_contact = is_touching;

            if !contact_began || !self.rocket.is_active() {
                continue;
            }

            match self.rocket.hit_asteroid(asteroid.position, asteroid.damage()) {
                AsteroidHit::Shattered => {
                    asteroid.take_damage(BOOST_RAM_DAMAGE);
                    debug!(id = asteroid.id, size = ?asteroid.size, "asteroid shattered");
                    self.effects
                        .spawn_explosion(asteroid.position, ExplosionKind::Asteroid);
                    events.push(GameEvent::AsteroidShattered {
                        position: asteroid.position,
                    });
                }
                AsteroidHit::Damaged { damage, fatal } => {
                    debug!(
                        id = asteroid.id,
                        damage,
                        health = self.rocket.health.current(),
                        "rocket hit"
                    );
                    events.push(GameEvent::AsteroidHit { damage });

                    if fatal {
                        info!(altitude = self.rocket.position.y, "rocket destroyed");
                        self.effects
                            .spawn_explosion(self.rocket.position, ExplosionKind::Rocket);
                        events.push(GameEvent::RocketDestroyed {
                            position: self.rocket.position,
                        });
                    }
                }
            }
        }

        self.asteroids.retain(|asteroid| asteroid.health > 0);
    }

    fn resolve_booster_pickups(&mut self, events: &mut Vec<GameEvent>) {
        let touching =
            collision::check_collisions_with_collection(&self.rocket, &self.health_boosters);
        if touching.is_empty() {
            return;
        }

        for &index in &touching {
            let amount = self.health_boosters[index].heal_amount;
            let healed = self.rocket.collect_health(amount);
            debug!(
                id = self.health_boosters[index].id,
                healed,
                health = self.rocket.health.current(),
                "health booster collected"
            );
            events.push(GameEvent::HealthCollected { healed });
        }

        let mut index = 0;
        self.health_boosters.retain(|_| {
            let keep = !touching.contains(&index);
            index += 1;
            keep
        });
    }

    fn run_spawners<R: Rng>(&mut self, dt: f32, rng: &mut R, events: &mut Vec<GameEvent>) {
        let running = self.rocket.is_launched() && self.rocket.is_active();
        let rocket_y = self.rocket.position.y;

        for asteroid in self.asteroid_spawner.update(dt, rocket_y, running, rng) {
            events.push(GameEvent::AsteroidSpawned {
                size: asteroid.size,
            });
            self.asteroids.push(asteroid);
        }

        for booster in self.booster_spawner.update(dt, rocket_y, running, rng) {
            events.push(GameEvent::HealthBoosterSpawned);
            self.health_boosters.push(booster);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asteroid::AsteroidSize;
    use crate::launch::LaunchPhase;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const DT: f32 = 1.0 / 60.0;

    fn launched_world(rng: &mut StdRng) -> GameWorld {
        let mut world = GameWorld::new(GameConfig::default(), 0);
        let press = InputState {
            launch_pressed: true,
            ..Default::default()
        };
        world.update(DT, &press, rng);
        for _ in 0..4 {
            world.update(1.0, &InputState::default(), rng);
        }
        assert!(world.rocket.is_launched());
        world
    }

    fn place_asteroid(world: &mut GameWorld, size: AsteroidSize, offset: Vec2) {
        let position = world.rocket.position + offset;
        world
            .asteroids
            .push(Asteroid::new(999, size, 0, position, Vec2::ZERO));
    }

    #[test]
    fn test_rocket_waits_on_pad_until_launch() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut world = GameWorld::new(GameConfig::default(), 0);

        for _ in 0..120 {
            world.update(DT, &InputState::default(), &mut rng);
        }
        assert_eq!(world.launch.phase(), LaunchPhase::AwaitingIgnition);
        assert_eq!(world.rocket.position, Vec2::ZERO);
        assert!(world.asteroids.is_empty());
        assert!(!world.altitude.is_visible());
    }

    #[test]
    fn test_launch_releases_rocket_and_spawners() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut world = launched_world(&mut rng);
        assert!(world.altitude.is_visible());

        let mut spawned = 0;
        for _ in 0..60 {
            let events = world.update(DT, &InputState::default(), &mut rng);
            spawned += events
                .iter()
                .filter(|e| matches!(e, GameEvent::AsteroidSpawned { .. }))
                .count();
        }
        assert!(spawned >= 1);
        assert!(world.rocket.position.y > 4.0);
        assert!(world.camera.position.y > 0.0);
    }

    #[test]
    fn test_asteroid_contact_damages_once() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut world = launched_world(&mut rng);
        world.asteroids.clear();
        place_asteroid(&mut world, AsteroidSize::Large, Vec2::new(0.0, 0.3));

        let events = world.update(DT, &InputState::default(), &mut rng);
        assert!(events.contains(&GameEvent::AsteroidHit { damage: 30 }));
        assert_eq!(world.rocket.health.current(), 70);
        assert!(world.rocket.knockback.is_some());

        // Still overlapping next frame: no second hit
        let events = world.update(DT, &InputState::default(), &mut rng);
        assert!(!events.iter().any(|e| matches!(e, GameEvent::AsteroidHit { .. })));
        assert_eq!(world.rocket.health.current(), 70);
    }

    #[test]
    fn test_boosting_shatters_asteroids() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut world = launched_world(&mut rng);
        world.asteroids.clear();

        let boost = InputState {
            boost_held: true,
            ..Default::default()
        };
        world.update(DT, &boost, &mut rng);
        assert!(world.rocket.is_boosting());

        world.asteroids.clear();
        place_asteroid(&mut world, AsteroidSize::Huge, Vec2::new(0.0, 0.5));
        let events = world.update(DT, &InputState::default(), &mut rng);

        assert!(events.iter().any(|e| matches!(e, GameEvent::AsteroidShattered { .. })));
        assert_eq!(world.rocket.health.current(), 100);
        assert!(world.asteroids.iter().all(|a| a.id != 999));
        assert_eq!(world.effects.explosions().len(), 1);
    }

    #[test]
    fn test_booster_pickup_heals_and_disappears() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut world = launched_world(&mut rng);
        world.asteroids.clear();
        world.rocket.health.take_damage(50);

        let position = world.rocket.position + Vec2::new(0.0, 0.1);
        world
            .health_boosters
            .push(HealthBooster::new(7, position, 20, 0.4));

        let events = world.update(DT, &InputState::default(), &mut rng);
        assert!(events.contains(&GameEvent::HealthCollected { healed: 20 }));
        assert_eq!(world.rocket.health.current(), 70);
        assert!(world.health_boosters.iter().all(|b| b.id != 7));
    }

    #[test]
    fn test_fatal_hit_ends_run_and_stops_spawning() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut world = launched_world(&mut rng);
        world.asteroids.clear();
        world.rocket.health.take_damage(60);
        place_asteroid(&mut world, AsteroidSize::Huge, Vec2::new(0.2, 0.2));

        let events = world.update(DT, &InputState::default(), &mut rng);
        assert!(events.iter().any(|e| matches!(e, GameEvent::RocketDestroyed { .. })));
        assert!(world.is_game_over());

        let remaining = world.asteroids.len();
        for _ in 0..120 {
            let events = world.update(DT, &InputState::default(), &mut rng);
            assert!(!events.iter().any(|e| matches!(e, GameEvent::AsteroidSpawned { .. })));
        }
        assert!(world.asteroids.len() <= remaining);
    }

    #[test]
    fn test_high_score_announced_once_per_run() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut world = GameWorld::new(GameConfig::default(), 5);
        let press = InputState {
            launch_pressed: true,
            ..Default::default()
        };
        world.update(DT, &press, &mut rng);

        let mut announcements = 0;
        for _ in 0..(60 * 8) {
            world.asteroids.clear();
            let events = world.update(DT, &InputState::default(), &mut rng);
            announcements += events
                .iter()
                .filter(|e| matches!(e, GameEvent::NewHighScore(_)))
                .count();
        }
        assert_eq!(announcements, 1);
        assert!(world.altitude.high_score() > 5);
    }

    #[test]
    fn test_reset_starts_new_run() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut world = launched_world(&mut rng);
        for _ in 0..300 {
            world.update(DT, &InputState::default(), &mut rng);
        }
        let high_score = world.altitude.high_score();

        world.reset();
        assert!(!world.rocket.is_launched());
        assert!(world.asteroids.is_empty());
        assert_eq!(world.launch.phase(), LaunchPhase::AwaitingIgnition);
        assert_eq!(world.altitude.high_score(), high_score);
    }
}
