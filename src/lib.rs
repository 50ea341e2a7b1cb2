//! Boost Blitz simulation
//!
//! Everything here is independent of SDL: the binary feeds an [`InputState`]
//! and a frame time into [`GameWorld::update`] and presents the returned
//! [`GameEvent`]s.
//!
//! [`InputState`]: input::InputState
//! [`GameWorld::update`]: game::GameWorld::update
//! [`GameEvent`]: events::GameEvent

pub mod altitude;
pub mod asteroid;
pub mod bounce;
pub mod camera;
pub mod collision;
pub mod config;
pub mod effects;
pub mod events;
pub mod game;
pub mod health_booster;
pub mod input;
pub mod launch;
pub mod prefs;
pub mod rocket;
pub mod spawner;
pub mod stats;
