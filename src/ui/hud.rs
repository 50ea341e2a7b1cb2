//! Heads-up display for a run
//!
//! Boost and health sliders plus the score appear once the rocket has
//! launched. The high score is always shown, and the countdown label sits
//! above the rocket until liftoff.

use super::slider_bar::{SliderBar, SliderStyle};
use crate::text::{draw_shadowed_text, draw_simple_text, text_width};
use boost_blitz::game::GameWorld;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

const MARGIN: i32 = 10;

pub struct Hud {
    boost_bar: SliderBar,
    health_bar: SliderBar,
    text_color: Color,
    countdown_color: Color,
}

impl Hud {
    pub fn new() -> Self {
        Hud {
            boost_bar: SliderBar::new(
                "BOOST",
                SliderStyle {
                    fill_color: Color::RGB(60, 170, 255),
                    low_color: Color::RGB(40, 90, 160),
                    ..Default::default()
                },
            ),
            health_bar: SliderBar::new("HEALTH", SliderStyle::default()),
            text_color: Color::RGB(240, 240, 250),
            countdown_color: Color::RGB(255, 210, 90),
        }
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, world: &GameWorld) -> Result<(), String> {
        let (width, height) = canvas.logical_size();
        let center_x = width as i32 / 2;

        let high_score = world.altitude.high_score_text();
        let high_score_x = width as i32 - MARGIN - text_width(&high_score, 1) as i32;
        draw_simple_text(canvas, &high_score, high_score_x, MARGIN, self.text_color, 1)?;

        if world.altitude.is_visible() {
            draw_shadowed_text(canvas, &world.altitude.score_text(), center_x, MARGIN, self.text_color, 2)?;
        }

        if world.rocket.is_launched() {
            let bars_y = height as i32 - MARGIN - 40;
            self.boost_bar
                .render(canvas, MARGIN, bars_y, world.rocket.boost_fraction())?;
            self.health_bar
                .render(canvas, MARGIN, bars_y + 22, world.rocket.health_fraction())?;
        }

        if let Some(text) = world.launch.text() {
            let y = height as i32 / 2 - 90 - world.launch.text_offset() as i32;
            draw_shadowed_text(canvas, &text, center_x, y, self.countdown_color, 2)?;
        }

        Ok(())
    }
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}
