//! The player's rocket
//!
//! Once launched the rocket climbs on its own. The player only steers
//! sideways and triggers boosts. Each frame runs in two phases, mirroring
//! how timed effects resume after the main update:
//!
//! 1. Main update: steering, boost activation, tilt, boost regeneration,
//!    ascent speed ramp
//! 2. Timed effects: boost drain/expiry and knockback decay
//!
//! After both phases the velocity is integrated and the rocket is kept
//! inside the visible column.

use crate::collision::{Circle, Collidable, CollisionLayer};
use crate::config::{KnockbackConfig, RocketConfig};
use crate::events::GameEvent;
use crate::input::InputState;
use crate::stats::{BoostMeter, Health};
use glam::Vec2;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoostState {
    Ready,
    /// Ascent speed is multiplied; the pre-boost speed is restored when the
    /// meter runs dry
    Boosting { original_launch_speed: f32 },
}

impl BoostState {
    pub fn is_boosting(&self) -> bool {
        matches!(self, BoostState::Boosting { .. })
    }
}

/// A decaying shove applied after an asteroid hit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Knockback {
    /// Unit direction, always pointing upward
    pub direction: Vec2,
    /// Velocity at the moment of impact, restored when the shove ends
    pub initial_velocity: Vec2,
    pub elapsed: f32,
}

/// Outcome of the rocket touching an asteroid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsteroidHit {
    /// The rocket was boosting: the asteroid breaks, the rocket is unharmed
    Shattered,
    Damaged { damage: i32, fatal: bool },
}

pub struct Rocket {
    pub position: Vec2,
    pub velocity: Vec2,
    pub tilt_degrees: f32,
    pub health: Health,
    pub boost: BoostMeter,
    pub boost_state: BoostState,
    pub launch_speed: f32,
    pub knockback: Option<Knockback>,
    launched: bool,
    active: bool,
    config: RocketConfig,
    knockback_config: KnockbackConfig,
}

impl Rocket {
    pub fn new(config: RocketConfig, knockback_config: KnockbackConfig) -> Self {
        Rocket {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            tilt_degrees: 0.0,
            health: Health::new(config.max_health),
            boost: BoostMeter::full(),
            boost_state: BoostState::Ready,
            launch_speed: config.launch_speed,
            knockback: None,
            launched: false,
            active: true,
            config,
            knockback_config,
        }
    }

    /// Puts the rocket back on the pad with full resources
    pub fn reset(&mut self) {
        *self = Rocket::new(self.config.clone(), self.knockback_config.clone());
    }

    pub fn launch(&mut self) {
        self.launched = true;
    }

    pub fn is_launched(&self) -> bool {
        self.launched
    }

    /// False once the rocket has been destroyed
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_boosting(&self) -> bool {
        self.boost_state.is_boosting()
    }

    pub fn boost_fraction(&self) -> f32 {
        self.boost.fraction()
    }

    pub fn health_fraction(&self) -> f32 {
        self.health.percentage()
    }

    pub fn update(&mut self, dt: f32, input: &InputState, half_width: f32) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if !self.launched || !self.active {
            return events;
        }

        // Phase 1: main update
        self.velocity = Vec2::new(input.horizontal * self.config.horizontal_speed, self.launch_speed);

        let mut boost_started = false;
        if input.boost_held && self.boost.is_full() && !self.is_boosting() {
            self.boost_state = BoostState::Boosting {
                original_launch_speed: self.launch_speed,
            };
            self.launch_speed *= self.config.boost_multiplier;
            // The first drain tick happens immediately on activation
            self.boost.drain(self.config.boost_drain_rate, dt);
            boost_started = true;
            debug!(launch_speed = self.launch_speed, "boost engaged");
            events.push(GameEvent::BoostStarted);
        }

        self.apply_tilt(input.horizontal, dt);

        if !self.is_boosting() {
            self.boost.regenerate(self.config.boost_regen_rate, dt);
        }

        self.launch_speed += self.config.speed_increase_rate * dt;

        // Phase 2: timed effects
        if !boost_started {
            if let BoostState::Boosting {
                original_launch_speed,
            } = self.boost_state
            {
                if self.boost.is_empty() {
                    self.launch_speed = original_launch_speed;
                    self.boost_state = BoostState::Ready;
                    debug!(launch_speed = self.launch_speed, "boost depleted");
                    events.push(GameEvent::BoostEnded);
                } else {
                    self.boost.drain(self.config.boost_drain_rate, dt);
                }
            }
        }

        self.step_knockback(dt);

        self.position += self.velocity * dt;
        self.position.x = self.position.x.clamp(-half_width, half_width);

        events
    }

    fn apply_tilt(&mut self, horizontal: f32, dt: f32) {
        let target = -horizontal * self.config.tilt_amount;
        let t = (dt * self.config.tilt_smoothing).min(1.0);
        self.tilt_degrees += (target - self.tilt_degrees) * t;
    }

    fn step_knockback(&mut self, dt: f32) {
        let duration = self.knockback_config.duration;
        let force = self.knockback_config.force;

        if let Some(knockback) = self.knockback.as_mut() {
            if knockback.elapsed < duration {
                let step = force * (1.0 - knockback.elapsed / duration);
                self.velocity = knockback.initial_velocity + knockback.direction * step;
                knockback.elapsed += dt;
            } else {
                self.velocity = knockback.initial_velocity;
                self.knockback = None;
            }
        }
    }

    /// Resolves contact with an asteroid centred at `asteroid_position`
    ///
    /// Every hit shoves the rocket away and upward. A boosting rocket
    /// shatters the asteroid. Otherwise the rocket takes `damage` and is
    /// deactivated when its health runs out.
    pub fn hit_asteroid(&mut self, asteroid_position: Vec2, damage: i32) -> AsteroidHit {
        let mut direction = (self.position - asteroid_position).normalize_or_zero();
        if direction == Vec2::ZERO {
            direction = Vec2::Y;
        }
        direction.y = direction.y.abs();

        self.knockback = Some(Knockback {
            direction,
            initial_velocity: self.velocity,
            elapsed: 0.0,
        });

        if self.is_boosting() {
            return AsteroidHit::Shattered;
        }

        let result = self.health.take_damage(damage);
        if result.is_fatal {
            self.active = false;
        }

        AsteroidHit::Damaged {
            damage: result.damage_dealt,
            fatal: result.is_fatal,
        }
    }

    /// Heals from a pickup and returns how much health was restored
    pub fn collect_health(&mut self, amount: i32) -> i32 {
        self.health.heal(amount)
    }
}

impl Collidable for Rocket {
    fn get_bounds(&self) -> Circle {
        Circle::new(self.position, self.config.collider_radius)
    }

    fn get_collision_layer(&self) -> CollisionLayer {
        CollisionLayer::Rocket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn launched_rocket() -> Rocket {
        let mut rocket = Rocket::new(RocketConfig::default(), KnockbackConfig::default());
        rocket.launch();
        rocket
    }

    fn idle() -> InputState {
        InputState::default()
    }

    fn boosting() -> InputState {
        InputState {
            boost_held: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_does_nothing_before_launch() {
        let mut rocket = Rocket::new(RocketConfig::default(), KnockbackConfig::default());
        let events = rocket.update(DT, &boosting(), 8.0);

        assert!(events.is_empty());
        assert_eq!(rocket.position, Vec2::ZERO);
        assert!(!rocket.is_boosting());
    }

    #[test]
    fn test_climbs_and_ramps_speed() {
        let mut rocket = launched_rocket();
        rocket.update(1.0, &idle(), 8.0);

        assert!((rocket.position.y - 5.0).abs() < 1e-4);
        assert!((rocket.launch_speed - 5.05).abs() < 1e-4);
    }

    #[test]
    fn test_steering_is_clamped_to_column() {
        let mut rocket = launched_rocket();
        let right = InputState {
            horizontal: 1.0,
            ..Default::default()
        };
        for _ in 0..200 {
            rocket.update(DT, &right, 3.0);
        }
        assert_eq!(rocket.position.x, 3.0);
        assert!(rocket.tilt_degrees < -14.0);
    }

    #[test]
    fn test_boost_requires_full_meter() {
        let mut rocket = launched_rocket();
        rocket.boost = BoostMeter::full();
        rocket.boost.drain(1.0, 0.5);

        let events = rocket.update(DT, &boosting(), 8.0);
        assert!(!events.contains(&GameEvent::BoostStarted));
        assert!(!rocket.is_boosting());
    }

    #[test]
    fn test_boost_multiplies_then_restores_speed() {
        let mut rocket = launched_rocket();
        let before = rocket.launch_speed;

        let events = rocket.update(DT, &boosting(), 8.0);
        assert!(events.contains(&GameEvent::BoostStarted));
        assert!(rocket.is_boosting());
        assert!(rocket.launch_speed > before * 2.0 - 1e-3);

        // 1.0 power at 0.15/s drains in under 7 seconds
        let mut ended = false;
        for _ in 0..(60 * 8) {
            if rocket.update(DT, &idle(), 8.0).contains(&GameEvent::BoostEnded) {
                ended = true;
                break;
            }
        }
        assert!(ended);
        assert!(!rocket.is_boosting());
        assert_eq!(rocket.launch_speed, before);
        assert!(rocket.boost.is_empty());
    }

    #[test]
    fn test_boost_regenerates_only_when_idle() {
        let mut rocket = launched_rocket();
        rocket.boost.drain(1.0, 1.0);

        rocket.update(1.0, &idle(), 8.0);
        assert!((rocket.boost.power() - 0.1).abs() < 1e-5);

        for _ in 0..20 {
            rocket.update(1.0, &idle(), 8.0);
        }
        assert_eq!(rocket.boost.power(), 1.0);
    }

    #[test]
    fn test_damage_and_death() {
        let mut rocket = launched_rocket();
        let hit = rocket.hit_asteroid(Vec2::new(0.0, 1.0), 50);
        assert_eq!(hit, AsteroidHit::Damaged { damage: 50, fatal: false });
        assert!(rocket.is_active());

        let hit = rocket.hit_asteroid(Vec2::new(0.0, 1.0), 60);
        assert_eq!(hit, AsteroidHit::Damaged { damage: 50, fatal: true });
        assert_eq!(rocket.health.current(), 0);
        assert!(!rocket.is_active());

        let y = rocket.position.y;
        rocket.update(DT, &idle(), 8.0);
        assert_eq!(rocket.position.y, y);
    }

    #[test]
    fn test_boosting_rocket_shatters_without_damage() {
        let mut rocket = launched_rocket();
        rocket.update(DT, &boosting(), 8.0);

        let hit = rocket.hit_asteroid(Vec2::new(0.5, 0.5), 50);
        assert_eq!(hit, AsteroidHit::Shattered);
        assert_eq!(rocket.health.current(), 100);
    }

    #[test]
    fn test_knockback_points_up() {
        let mut rocket = launched_rocket();
        rocket.update(DT, &idle(), 8.0);

        // Asteroid below-left: push is up-right
        rocket.hit_asteroid(rocket.position + Vec2::new(-1.0, -1.0), 10);
        let knockback = rocket.knockback.unwrap();
        assert!(knockback.direction.x > 0.0);
        assert!(knockback.direction.y > 0.0);

        // Asteroid directly above: the push is flipped to straight up
        rocket.hit_asteroid(rocket.position + Vec2::new(0.0, 1.0), 10);
        let knockback = rocket.knockback.unwrap();
        assert_eq!(knockback.direction, Vec2::Y);
        assert_eq!(knockback.initial_velocity, rocket.velocity);
    }

    #[test]
    fn test_knockback_decays_linearly_then_restores_velocity() {
        let mut rocket = launched_rocket();
        rocket.update(DT, &idle(), 8.0);
        rocket.hit_asteroid(rocket.position + Vec2::new(0.0, 1.0), 10);

        let initial = rocket.knockback.unwrap().initial_velocity;
        let force = rocket.knockback_config.force;
        let duration = rocket.knockback_config.duration;

        // Full force on the first frame
        rocket.update(DT, &idle(), 8.0);
        assert!((rocket.velocity - (initial + Vec2::Y * force)).length() < 1e-4);

        // One frame in: force * (1 - elapsed / duration)
        rocket.update(DT, &idle(), 8.0);
        let expected = initial + Vec2::Y * force * (1.0 - DT / duration);
        assert!((rocket.velocity - expected).length() < 1e-4);

        let mut frames = 0;
        while rocket.knockback.is_some() {
            rocket.update(DT, &idle(), 8.0);
            frames += 1;
            assert!(frames < 60, "knockback never ended");
        }
        assert_eq!(rocket.velocity, initial);
    }

    #[test]
    fn test_boost_drains_on_activation_frame() {
        let mut rocket = launched_rocket();
        assert!(rocket.boost.is_full());

        let events = rocket.update(DT, &boosting(), 8.0);
        assert!(events.contains(&GameEvent::BoostStarted));
        assert!(rocket.boost.power() < 1.0);

        let expected = 1.0 - rocket.config.boost_drain_rate * DT;
        assert!((rocket.boost.power() - expected).abs() < 1e-5);
    }

    #[test]
    fn test_collect_health_caps() {
        let mut rocket = launched_rocket();
        rocket.hit_asteroid(Vec2::new(1.0, 0.0), 10);
        assert_eq!(rocket.collect_health(20), 10);
        assert_eq!(rocket.health.current(), 100);
    }

    #[test]
    fn test_reset_restores_pad_state() {
        let mut rocket = launched_rocket();
        rocket.update(1.0, &boosting(), 8.0);
        rocket.hit_asteroid(Vec2::ZERO, 100);
        rocket.reset();

        assert!(!rocket.is_launched());
        assert!(rocket.is_active());
        assert_eq!(rocket.position, Vec2::ZERO);
        assert_eq!(rocket.launch_speed, 5.0);
        assert!(rocket.boost.is_full());
    }
}
