//! Health pickups
//!
//! Boosters hang still in the play column. The rocket collects one by
//! flying through it.

use crate::collision::{Circle, Collidable, CollisionLayer};
use glam::Vec2;

pub struct HealthBooster {
    pub id: u64,
    pub position: Vec2,
    pub heal_amount: i32,
    radius: f32,
}

impl HealthBooster {
    pub fn new(id: u64, position: Vec2, heal_amount: i32, radius: f32) -> Self {
        HealthBooster {
            id,
            position,
            heal_amount,
            radius,
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Same rule as asteroids: anything the rocket has left far behind goes away
    pub fn is_below(&self, rocket_y: f32, despawn_distance: f32) -> bool {
        self.position.y < rocket_y - despawn_distance
    }
}

impl Collidable for HealthBooster {
    fn get_bounds(&self) -> Circle {
        Circle::new(self.position, self.radius)
    }

    fn get_collision_layer(&self) -> CollisionLayer {
        CollisionLayer::Pickup
    }
}
