//! Altitude score and high score tracking
//!
//! The score is simply how high the rocket has climbed. The high score is
//! read from prefs once and written back only when it has changed, at the
//! points the front end chooses (game over, leaving a run, exit).

use crate::prefs::{HIGH_SCORE_KEY, PrefsError, PrefsStore};
use tracing::info;

pub struct AltitudeCounter {
    altitude_offset: f32,
    current_score: i32,
    high_score: i32,
    /// High score changed since it was last persisted
    dirty: bool,
    visible: bool,
}

impl AltitudeCounter {
    pub fn new(altitude_offset: f32, high_score: i32) -> Self {
        AltitudeCounter {
            altitude_offset,
            current_score: 0,
            high_score,
            dirty: false,
            visible: false,
        }
    }

    /// Reads the saved high score, defaulting to 0
    pub fn load_high_score(prefs: &PrefsStore) -> i32 {
        prefs.get_int(HIGH_SCORE_KEY, 0)
    }

    /// Starts a new run; the high score carries over
    pub fn reset(&mut self) {
        self.current_score = 0;
        self.visible = false;
    }

    pub fn score_for(&self, rocket_y: f32) -> i32 {
        (rocket_y + self.altitude_offset).floor() as i32
    }

    /// Recomputes the score; returns the new high score if it was just beaten
    pub fn update(&mut self, rocket_y: f32) -> Option<i32> {
        self.current_score = self.score_for(rocket_y);

        if self.current_score > self.high_score {
            self.high_score = self.current_score;
            self.dirty = true;
            return Some(self.high_score);
        }
        None
    }

    /// Shows the score label once the rocket launches
    pub fn start_launch(&mut self) {
        self.visible = true;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn score(&self) -> i32 {
        self.current_score
    }

    pub fn high_score(&self) -> i32 {
        self.high_score
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn score_text(&self) -> String {
        format!("Score: {}", self.current_score)
    }

    pub fn high_score_text(&self) -> String {
        format!("High Score: {}", self.high_score)
    }

    /// Writes the high score to prefs if it changed
    pub fn persist(&mut self, prefs: &mut PrefsStore) -> Result<(), PrefsError> {
        if !self.dirty {
            return Ok(());
        }
        prefs.set_int(HIGH_SCORE_KEY, self.high_score);
        prefs.save()?;
        self.dirty = false;
        info!(high_score = self.high_score, "high score saved");
        Ok(())
    }
}
