//! Screen-Space GUI
//!
//! Panels and pages drawn in logical screen pixels on top of everything
//! else.
//!
//! # Available Components
//!
//! - [`menu::Menu`] - Navigable list of choices
//! - [`TitleScreen`] - Main menu with the bobbing high score
//! - [`GameOverPanel`] - Retry / main menu panel after a crash
//! - [`controls`] - The key bindings page

pub mod controls;
pub mod game_over;
pub mod menu;
pub mod title;

pub use game_over::GameOverPanel;
pub use title::TitleScreen;
