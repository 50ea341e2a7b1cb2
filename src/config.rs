//! Gameplay tuning loaded from JSON
//!
//! Every field carries a serde default matching the shipped tuning, so a
//! partial `game.json` only needs the values it overrides.
//!
//! ```ignore
//! let config = GameConfig::load_or_default("assets/config/game.json")?;
//! let world = GameWorld::new(config, high_score);
//! ```

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::warn;

/// Errors raised while loading or validating the tuning file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rocket: RocketConfig,
    pub knockback: KnockbackConfig,
    pub asteroids: AsteroidSpawnConfig,
    pub health_boosters: HealthBoosterSpawnConfig,
    pub camera: CameraConfig,
    pub background: BackgroundConfig,
    pub launch: LaunchConfig,
    pub score: ScoreConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RocketConfig {
    /// Sideways speed at full axis deflection (units/s)
    pub horizontal_speed: f32,
    /// Ascent speed at liftoff (units/s)
    pub launch_speed: f32,
    /// Ascent speed gained per second of flight
    pub speed_increase_rate: f32,
    pub boost_multiplier: f32,
    /// Boost power regained per second while not boosting
    pub boost_regen_rate: f32,
    /// Boost power spent per second while boosting
    pub boost_drain_rate: f32,
    /// Maximum tilt in degrees at full deflection
    pub tilt_amount: f32,
    pub tilt_smoothing: f32,
    pub max_health: i32,
    pub collider_radius: f32,
}

impl Default for RocketConfig {
    fn default() -> Self {
        RocketConfig {
            horizontal_speed: 5.0,
            launch_speed: 5.0,
            speed_increase_rate: 0.05,
            boost_multiplier: 2.0,
            boost_regen_rate: 0.1,
            boost_drain_rate: 0.15,
            tilt_amount: 15.0,
            tilt_smoothing: 5.0,
            max_health: 100,
            collider_radius: 0.45,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KnockbackConfig {
    pub force: f32,
    /// Seconds the impulse takes to decay back to the pre-hit velocity
    pub duration: f32,
}

impl Default for KnockbackConfig {
    fn default() -> Self {
        KnockbackConfig {
            force: 5.0,
            duration: 0.2,
        }
    }
}

/// Relative odds of each asteroid size. Normalised at selection time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeWeights {
    pub small: f32,
    pub medium: f32,
    pub large: f32,
    pub huge: f32,
}

impl Default for SizeWeights {
    fn default() -> Self {
        SizeWeights {
            small: 0.25,
            medium: 0.25,
            large: 0.25,
            huge: 0.25,
        }
    }
}

impl SizeWeights {
    pub fn total(&self) -> f32 {
        self.small.max(0.0) + self.medium.max(0.0) + self.large.max(0.0) + self.huge.max(0.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AsteroidSpawnConfig {
    pub initial_spawn_interval: f32,
    pub min_spawn_interval: f32,
    /// Seconds of interval removed per unit of altitude
    pub altitude_interval_factor: f32,
    /// How often the interval is recomputed from altitude
    pub adjust_period: f32,
    pub spawn_range_x: f32,
    pub spawn_offset_y: f32,
    pub fall_speed: f32,
    pub despawn_distance: f32,
    pub size_weights: SizeWeights,
    pub variants_per_size: u8,
}

impl Default for AsteroidSpawnConfig {
    fn default() -> Self {
        AsteroidSpawnConfig {
            initial_spawn_interval: 0.7,
            min_spawn_interval: 0.2,
            altitude_interval_factor: 0.001,
            adjust_period: 1.0,
            spawn_range_x: 8.0,
            spawn_offset_y: 10.0,
            fall_speed: 0.1,
            despawn_distance: 20.0,
            size_weights: SizeWeights::default(),
            variants_per_size: 3,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthBoosterSpawnConfig {
    pub min_spawn_interval: f32,
    pub max_spawn_interval: f32,
    pub spawn_range_x: f32,
    pub spawn_offset_y: f32,
    pub initial_spawn_delay: f32,
    pub heal_amount: i32,
    pub collider_radius: f32,
}

impl Default for HealthBoosterSpawnConfig {
    fn default() -> Self {
        HealthBoosterSpawnConfig {
            min_spawn_interval: 5.0,
            max_spawn_interval: 20.0,
            spawn_range_x: 8.0,
            spawn_offset_y: 12.0,
            initial_spawn_delay: 10.0,
            heal_amount: 20,
            collider_radius: 0.4,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Per-frame lerp factor toward the rocket
    pub smooth_speed: f32,
    pub offset: Vec2,
    /// Half the visible height in world units
    pub orthographic_size: f32,
    pub aspect: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        CameraConfig {
            smooth_speed: 0.125,
            offset: Vec2::ZERO,
            orthographic_size: 5.0,
            aspect: 16.0 / 9.0,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    pub offset: Vec2,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchConfig {
    /// Seconds each countdown message stays on screen
    pub step_duration: f32,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        LaunchConfig { step_duration: 1.0 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreConfig {
    /// Added to the rocket height before flooring into a score
    pub altitude_offset: f32,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        ScoreConfig {
            altitude_offset: 3.0,
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: GameConfig =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the file, falling back to built-in tuning when it does not exist.
    ///
    /// A file that exists but fails to parse or validate is still an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            warn!(path = %path.display(), "config file not found, using defaults");
            return Ok(GameConfig::default());
        }
        Self::load_from_file(path)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let asteroids = &self.asteroids;
        if asteroids.initial_spawn_interval <= 0.0 {
            return Err(invalid("asteroids.initial_spawn_interval", "must be positive"));
        }
        if asteroids.min_spawn_interval <= 0.0 {
            return Err(invalid("asteroids.min_spawn_interval", "must be positive"));
        }
        if asteroids.min_spawn_interval > asteroids.initial_spawn_interval {
            return Err(invalid(
                "asteroids.min_spawn_interval",
                "must not exceed initial_spawn_interval",
            ));
        }
        if asteroids.adjust_period <= 0.0 {
            return Err(invalid("asteroids.adjust_period", "must be positive"));
        }
        if asteroids.size_weights.total() <= 0.0 {
            return Err(invalid("asteroids.size_weights", "at least one weight must be positive"));
        }
        if asteroids.variants_per_size == 0 {
            return Err(invalid("asteroids.variants_per_size", "must be at least 1"));
        }

        let boosters = &self.health_boosters;
        if boosters.min_spawn_interval <= 0.0 {
            return Err(invalid("health_boosters.min_spawn_interval", "must be positive"));
        }
        if boosters.min_spawn_interval > boosters.max_spawn_interval {
            return Err(invalid(
                "health_boosters.min_spawn_interval",
                "must not exceed max_spawn_interval",
            ));
        }

        if self.rocket.max_health <= 0 {
            return Err(invalid("rocket.max_health", "must be positive"));
        }
        if self.knockback.duration <= 0.0 {
            return Err(invalid("knockback.duration", "must be positive"));
        }
        if self.launch.step_duration < 0.0 {
            return Err(invalid("launch.step_duration", "must not be negative"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.rocket.max_health, 100);
        assert_eq!(config.asteroids.initial_spawn_interval, 0.7);
        assert_eq!(config.health_boosters.initial_spawn_delay, 10.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{ "rocket": { "launch_speed": 8.0 }, "knockback": { "force": 2.5 } }"#;
        let config: GameConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.rocket.launch_speed, 8.0);
        assert_eq!(config.rocket.horizontal_speed, 5.0);
        assert_eq!(config.knockback.force, 2.5);
        assert_eq!(config.knockback.duration, 0.2);
        assert_eq!(config.camera.smooth_speed, 0.125);
    }

    #[test]
    fn test_rejects_inverted_booster_range() {
        let mut config = GameConfig::default();
        config.health_boosters.min_spawn_interval = 30.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "health_boosters.min_spawn_interval", .. })
        ));
    }

    #[test]
    fn test_rejects_zero_weights() {
        let mut config = GameConfig::default();
        config.asteroids.size_weights = SizeWeights {
            small: 0.0,
            medium: 0.0,
            large: 0.0,
            huge: 0.0,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig::load_or_default(dir.path().join("nope.json")).unwrap();
        assert_eq!(config.rocket.boost_multiplier, 2.0);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            GameConfig::load_or_default(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_shipped_config_matches_defaults() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/config/game.json");
        let config = GameConfig::load_from_file(path).unwrap();
        let defaults = GameConfig::default();

        assert_eq!(config.rocket.launch_speed, defaults.rocket.launch_speed);
        assert_eq!(config.asteroids.size_weights.huge, 0.25);
        assert_eq!(config.health_boosters.heal_amount, 20);
        assert_eq!(config.camera.offset, defaults.camera.offset);
    }
}
