//! Procedural spawners
//!
//! Both spawners sit idle until the rocket launches, then place objects
//! a fixed distance above the rocket at a random horizontal position.
//! They take the random source as a parameter so tests can seed it.
//!
//! - `asteroid`: a fast repeating schedule that tightens with altitude
//! - `health_booster`: a long initial delay, then random gaps

pub mod asteroid;
pub mod health_booster;

pub use asteroid::AsteroidSpawner;
pub use health_booster::HealthBoosterSpawner;

use rand::Rng;

/// Random x in `[-range, range]`
fn random_x<R: Rng>(rng: &mut R, range: f32) -> f32 {
    let range = range.abs();
    rng.gen_range(-range..=range)
}
