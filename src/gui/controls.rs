//! Controls Screen
//!
//! A static page listing the key bindings. ESC goes back to the title.

use crate::text::{draw_simple_text, draw_text_centered};
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// (keys, what they do)
pub const BINDINGS: [(&str, &str); 4] = [
    ("SPACE", "Start the launch countdown"),
    ("A / D  or  LEFT / RIGHT", "Steer"),
    ("W  or  UP", "Boost when the meter is full"),
    ("ESC", "Back to the title screen"),
];

pub fn render(canvas: &mut Canvas<Window>) -> Result<(), String> {
    canvas.set_draw_color(Color::RGB(10, 12, 28));
    canvas.clear();

    let (screen_width, _) = canvas.logical_size();
    let center_x = screen_width as i32 / 2;

    draw_text_centered(canvas, "CONTROLS", center_x, 40, Color::RGB(255, 210, 90), 3)?;

    let mut y = 110;
    for (keys, action) in BINDINGS {
        draw_simple_text(canvas, keys, 60, y, Color::RGB(255, 255, 255), 1)?;
        draw_simple_text(canvas, action, 260, y, Color::RGB(160, 170, 200), 1)?;
        y += 30;
    }

    draw_text_centered(canvas, "Press ESC to go back", center_x, 310, Color::RGB(120, 120, 140), 1)
}
