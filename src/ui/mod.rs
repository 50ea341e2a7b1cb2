//! In-game HUD
//!
//! Screen-space elements drawn over the world while a run is in progress.
//!
//! # Available Components
//!
//! - [`SliderBar`] - Labelled fill bar, used for the boost and health meters
//! - [`Hud`] - Everything shown during a run, laid out on the logical screen

pub mod hud;
pub mod slider_bar;

pub use hud::Hud;
pub use slider_bar::{SliderBar, SliderStyle};
