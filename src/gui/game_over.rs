//! Game Over Panel
//!
//! Shown over the frozen world once the rocket is destroyed. Input is
//! ignored for a short moment so a key held during the crash does not pick
//! a menu entry straight away.

use super::menu::{Menu, MenuStyle};
use crate::text::draw_text_centered;
use boost_blitz::game::GameOverChoice;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;
use std::time::{Duration, Instant};

pub struct GameOverPanel {
    menu: Menu<GameOverChoice>,
    input_delay: Duration,
    shown_at: Option<Instant>,
    score_color: Color,
}

impl GameOverPanel {
    pub fn new() -> Self {
        let style = MenuStyle {
            height: 200,
            title_color: Color::RGB(255, 70, 60),
            overlay_alpha: 140,
            ..Default::default()
        };

        GameOverPanel {
            menu: Menu::with_style("GAME OVER", GameOverChoice::all(), GameOverChoice::label, style),
            input_delay: Duration::from_millis(750),
            shown_at: None,
            score_color: Color::RGB(255, 255, 120),
        }
    }

    /// Opens the panel and starts the input delay
    pub fn trigger(&mut self) {
        self.menu.reset_selection();
        self.shown_at = Some(Instant::now());
    }

    pub fn reset(&mut self) {
        self.shown_at = None;
    }

    /// True once the panel has been up long enough to take input
    pub fn accepts_input(&self) -> bool {
        self.shown_at
            .is_some_and(|shown_at| shown_at.elapsed() >= self.input_delay)
    }

    pub fn select_previous(&mut self) {
        if self.accepts_input() {
            self.menu.select_previous();
        }
    }

    pub fn select_next(&mut self) {
        if self.accepts_input() {
            self.menu.select_next();
        }
    }

    /// The confirmed choice, or `None` while input is still locked
    pub fn confirm(&self) -> Option<GameOverChoice> {
        self.accepts_input().then(|| self.menu.selected())
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, score: i32, high_score: i32) -> Result<(), String> {
        if self.shown_at.is_none() {
            return Ok(());
        }

        let below_items = self.menu.render(canvas)?;
        let (screen_width, _) = canvas.logical_size();
        let center_x = screen_width as i32 / 2;

        draw_text_centered(
            canvas,
            &format!("Score: {}   Best: {}", score, high_score),
            center_x,
            below_items + 4,
            self.score_color,
            1,
        )
    }
}

impl Default for GameOverPanel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_panel_takes_no_input() {
        let panel = GameOverPanel::new();
        assert!(!panel.accepts_input());
        assert_eq!(panel.confirm(), None);
    }

    #[test]
    fn test_input_locked_right_after_trigger() {
        let mut panel = GameOverPanel::new();
        panel.trigger();
        assert!(!panel.accepts_input());
        panel.select_next();
        assert_eq!(panel.confirm(), None);
    }

    #[test]
    fn test_confirm_after_delay() {
        let mut panel = GameOverPanel::new();
        panel.input_delay = Duration::ZERO;
        panel.trigger();
        panel.select_next();
        assert_eq!(panel.confirm(), Some(GameOverChoice::MainMenu));
    }
}
