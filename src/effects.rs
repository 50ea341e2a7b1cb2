//! Short-lived explosion effects
//!
//! Game Dev Pattern: effects own their lifetime and the owner sweeps out
//! finished ones with `retain`, the same way projectiles and particles are
//! usually handled.

use glam::Vec2;

/// Seconds an explosion stays in the world
pub const EXPLOSION_LIFETIME: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplosionKind {
    Asteroid,
    Rocket,
}

#[derive(Debug, Clone)]
pub struct Explosion {
    pub position: Vec2,
    pub kind: ExplosionKind,
    pub age: f32,
}

impl Explosion {
    pub fn new(position: Vec2, kind: ExplosionKind) -> Self {
        Explosion {
            position,
            kind,
            age: 0.0,
        }
    }

    /// 0.0 when spawned, 1.0 when about to disappear
    pub fn progress(&self) -> f32 {
        (self.age / EXPLOSION_LIFETIME).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.age >= EXPLOSION_LIFETIME
    }
}

#[derive(Debug, Default)]
pub struct Effects {
    explosions: Vec<Explosion>,
}

impl Effects {
    pub fn new() -> Self {
        Effects::default()
    }

    pub fn spawn_explosion(&mut self, position: Vec2, kind: ExplosionKind) {
        self.explosions.push(Explosion::new(position, kind));
    }

    pub fn update(&mut self, dt: f32) {
        for explosion in &mut self.explosions {
            explosion.age += dt;
        }
        self.explosions.retain(|explosion| !explosion.is_finished());
    }

    pub fn explosions(&self) -> &[Explosion] {
        &self.explosions
    }

    pub fn clear(&mut self) {
        self.explosions.clear();
    }
}
