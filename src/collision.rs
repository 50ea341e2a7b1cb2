/// Collision detection for Boost Blitz
///
/// Everything in the play column is round enough to collide as a circle:
/// the rocket hull, asteroids and health boosters. Detection is a pure
/// function over positions; the world decides what a contact means.
///
/// # Architecture
///
/// - `Collidable` trait: implemented by anything with a circular collider
/// - `CollisionLayer`: what kind of object a collider belongs to
/// - Circle functions: pure overlap tests
use glam::Vec2;

/// Categories of collidable objects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollisionLayer {
    Rocket,
    Asteroid,
    Pickup,
}

/// A circular collider in world units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Circle { center, radius }
    }
}

/// Trait for objects that take part in collision detection
pub trait Collidable {
    /// Returns the collider in world coordinates
    fn get_bounds(&self) -> Circle;

    fn get_collision_layer(&self) -> CollisionLayer;
}

/// Checks if two circles overlap.
///
/// Touching exactly at the rim does not count as a hit.
pub fn circles_intersect(a: &Circle, b: &Circle) -> bool {
    let reach = a.radius + b.radius;
    a.center.distance_squared(b.center) < reach * reach
}

/// Returns the indices of every entity in `entities` that overlaps `entity`.
///
/// Colliders on the same layer never collide with each other, so falling
/// objects pass through one another.
///
/// # Example
///
/// ```ignore
/// let hits = check_collisions_with_collection(&rocket, &asteroids);
/// for index in hits {
///     // resolve asteroids[index]
/// }
/// ```
pub fn check_collisions_with_collection<T: Collidable>(
    entity: &impl Collidable,
    entities: &[T],
) -> Vec<usize> {
    let entity_bounds = entity.get_bounds();
    let entity_layer = entity.get_collision_layer();

    entities
        .iter()
        .enumerate()
        .filter(|(_, other)| other.get_collision_layer() != entity_layer)
        .filter(|(_, other)| circles_intersect(&entity_bounds, &other.get_bounds()))
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Dot(Circle, CollisionLayer);

    impl Collidable for Dot {
        fn get_bounds(&self) -> Circle {
            self.0
        }

        fn get_collision_layer(&self) -> CollisionLayer {
            self.1
        }
    }

    fn rock(x: f32, y: f32, radius: f32) -> Dot {
        Dot(Circle::new(Vec2::new(x, y), radius), CollisionLayer::Asteroid)
    }

    #[test]
    fn test_circles_overlapping() {
        let a = Circle::new(Vec2::ZERO, 1.0);
        let b = Circle::new(Vec2::new(1.5, 0.0), 1.0);

        assert!(circles_intersect(&a, &b));
        assert!(circles_intersect(&b, &a)); // Symmetric
    }

    #[test]
    fn test_circles_touching_rims() {
        let a = Circle::new(Vec2::ZERO, 1.0);
        let b = Circle::new(Vec2::new(2.0, 0.0), 1.0);

        assert!(!circles_intersect(&a, &b));
    }

    #[test]
    fn test_circle_contained() {
        let large = Circle::new(Vec2::ZERO, 5.0);
        let small = Circle::new(Vec2::new(1.0, 1.0), 0.5);

        assert!(circles_intersect(&large, &small));
    }

    #[test]
    fn test_collection_returns_hit_indices() {
        let hull = Dot(Circle::new(Vec2::ZERO, 0.5), CollisionLayer::Rocket);
        let rocks = vec![rock(0.0, 0.8, 0.5), rock(10.0, 0.0, 0.5), rock(-0.6, 0.0, 0.2)];

        assert_eq!(check_collisions_with_collection(&hull, &rocks), vec![0, 2]);
    }

    #[test]
    fn test_same_layer_overlap_is_ignored() {
        let rocks = vec![rock(0.0, 0.3, 0.5), rock(0.2, 0.0, 0.5)];
        let pickup = Dot(Circle::new(Vec2::new(0.0, 0.3), 0.5), CollisionLayer::Pickup);

        assert!(check_collisions_with_collection(&rock(0.0, 0.0, 0.5), &rocks).is_empty());
        assert_eq!(check_collisions_with_collection(&pickup, &rocks), vec![0, 1]);
    }
}
