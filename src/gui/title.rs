//! Title Screen
//!
//! The main menu drawn over the idle world, with the best altitude bobbing
//! underneath it.

use super::menu::{Menu, MenuStyle};
use crate::text::draw_text_centered;
use boost_blitz::bounce::Bounce;
use boost_blitz::game::TitleChoice;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Bob height of the high score label, smaller than the launch prompt's
const LABEL_BOUNCE_HEIGHT: f32 = 6.0;

pub struct TitleScreen {
    menu: Menu<TitleChoice>,
    bounce: Bounce,
    label_color: Color,
}

impl TitleScreen {
    pub fn new() -> Self {
        let style = MenuStyle {
            overlay_alpha: 0,
            height: 190,
            ..Default::default()
        };

        TitleScreen {
            menu: Menu::with_style("BOOST BLITZ", TitleChoice::all(), TitleChoice::label, style),
            bounce: Bounce::with_height(LABEL_BOUNCE_HEIGHT),
            label_color: Color::RGB(240, 240, 250),
        }
    }

    /// Advances the label bob; call only while the title is showing
    pub fn update(&mut self, dt: f32) {
        self.bounce.update(dt);
    }

    /// Upward shift of the high score label in pixels
    pub fn label_offset(&self) -> i32 {
        self.bounce.offset().round() as i32
    }

    /// Back to the first entry with the label at rest
    pub fn reset(&mut self) {
        self.menu.reset_selection();
        self.bounce.reset();
    }

    pub fn select_previous(&mut self) {
        self.menu.select_previous();
    }

    pub fn select_next(&mut self) {
        self.menu.select_next();
    }

    pub fn selected(&self) -> TitleChoice {
        self.menu.selected()
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, high_score_text: &str) -> Result<(), String> {
        self.menu.render(canvas)?;

        let (screen_width, screen_height) = canvas.logical_size();
        draw_text_centered(
            canvas,
            high_score_text,
            screen_width as i32 / 2,
            screen_height as i32 - 30 - self.label_offset(),
            self.label_color,
            1,
        )?;

        Ok(())
    }
}
