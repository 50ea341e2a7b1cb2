//! Per-frame gameplay events
//!
//! The simulation never plays sounds or spawns particles itself. It reports
//! what happened and the front end decides how to present it.

use crate::asteroid::AsteroidSize;
use glam::Vec2;

#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    // === Launch sequence ===
    /// Exhaust nozzle `n` (0-2) lit during the countdown
    ExhaustIgnited(usize),
    LaunchSoundPlayed,
    Launched,

    // === Rocket ===
    BoostStarted,
    BoostEnded,
    AsteroidHit { damage: i32 },
    AsteroidShattered { position: Vec2 },
    HealthCollected { healed: i32 },
    RocketDestroyed { position: Vec2 },

    // === Spawners ===
    AsteroidSpawned { size: AsteroidSize },
    HealthBoosterSpawned,

    // === Score ===
    NewHighScore(i32),
}
