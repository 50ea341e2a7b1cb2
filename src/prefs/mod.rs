//! Persistent player preferences
//!
//! A small key/value store of integers, written to one JSON file in the
//! player's data directory. The only key the game uses today is the high
//! score, stored under [`HIGH_SCORE_KEY`].
//!
//! # Architecture
//!
//! - `types`: on-disk file layout and error types
//! - `store`: `PrefsStore` for reading, updating and saving values
//!
//! # Example Usage
//!
//! ```ignore
//! let mut prefs = PrefsStore::open(PrefsStore::default_dir())?;
//! let best = prefs.get_int(HIGH_SCORE_KEY, 0);
//! prefs.set_int(HIGH_SCORE_KEY, best + 10);
//! prefs.save()?;
//! ```

pub mod store;
pub mod types;

pub use store::PrefsStore;
pub use types::*;

/// Key the high score is stored under
pub const HIGH_SCORE_KEY: &str = "HighScore";
