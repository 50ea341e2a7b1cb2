use crate::collision::{Circle, Collidable, CollisionLayer};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Hit points every asteroid starts with
pub const ASTEROID_HEALTH: i32 = 3;

/// Damage a boosting rocket deals when it rams an asteroid
pub const BOOST_RAM_DAMAGE: i32 = ASTEROID_HEALTH;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AsteroidSize {
    Small,
    Medium,
    Large,
    Huge,
}

impl AsteroidSize {
    pub const ALL: [AsteroidSize; 4] = [
        AsteroidSize::Small,
        AsteroidSize::Medium,
        AsteroidSize::Large,
        AsteroidSize::Huge,
    ];

    /// Health the rocket loses when it hits this asteroid without boosting
    pub fn damage(&self) -> i32 {
        match self {
            AsteroidSize::Small => 10,
            AsteroidSize::Medium => 20,
            AsteroidSize::Large => 30,
            AsteroidSize::Huge => 50,
        }
    }

    /// Collider radius in world units
    pub fn radius(&self) -> f32 {
        match self {
            AsteroidSize::Small => 0.35,
            AsteroidSize::Medium => 0.55,
            AsteroidSize::Large => 0.8,
            AsteroidSize::Huge => 1.2,
        }
    }
}

pub struct Asteroid {
    pub id: u64,
    pub size: AsteroidSize,
    /// Which of the size's shapes to draw
    pub variant: u8,
    pub position: Vec2,
    pub velocity: Vec2,
    pub health: i32,
    /// Touching the rocket last frame; damage only applies when contact begins
    pub in_contact: bool,
}

impl Asteroid {
    pub fn new(id: u64, size: AsteroidSize, variant: u8, position: Vec2, velocity: Vec2) -> Self {
        Asteroid {
            id,
            size,
            variant,
            position,
            velocity,
            health: ASTEROID_HEALTH,
            in_contact: false,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.position += self.velocity * dt;
    }

    /// True once the asteroid has dropped far enough behind the rocket to discard
    pub fn is_below(&self, rocket_y: f32, despawn_distance: f32) -> bool {
        self.position.y < rocket_y - despawn_distance
    }

    /// Returns true when this hit destroyed the asteroid
    pub fn take_damage(&mut self, amount: i32) -> bool {
        self.health -= amount;
        self.health <= 0
    }

    pub fn damage(&self) -> i32 {
        self.size.damage()
    }
}

impl Collidable for Asteroid {
    fn get_bounds(&self) -> Circle {
        Circle::new(self.position, self.size.radius())
    }

    fn get_collision_layer(&self) -> CollisionLayer {
        CollisionLayer::Asteroid
    }
}
