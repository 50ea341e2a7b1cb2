// Game module - Run state and screen flow
//
// This module contains:
// - world.rs: GameWorld struct, owning everything in one run
// - types.rs: Screen and menu enums shared with the front end

pub mod types;
pub mod world;

pub use types::*;
pub use world::GameWorld;
