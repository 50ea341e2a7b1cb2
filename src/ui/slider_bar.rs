//! Slider bar for the boost and health meters
//!
//! A horizontal fill bar at a fixed screen position. Bars are stateless:
//! the fraction to show is passed in on every render.

use crate::text::draw_simple_text;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Visual style of a slider bar
///
/// ```ignore
/// let boost_style = SliderStyle {
///     fill_color: Color::RGB(60, 170, 255),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct SliderStyle {
    pub width: u32,
    pub height: u32,
    pub background_color: Color,
    pub fill_color: Color,

    /// Fill colour below `low_threshold`
    pub low_color: Color,
    pub low_threshold: f32,

    /// Border colour, drawn last so it sits on top
    pub border_color: Color,
    pub border_thickness: u32,
    pub label_color: Color,
}

impl Default for SliderStyle {
    fn default() -> Self {
        SliderStyle {
            width: 120,
            height: 8,
            background_color: Color::RGB(40, 40, 55),
            fill_color: Color::RGB(0, 200, 0),
            low_color: Color::RGB(200, 0, 0),
            low_threshold: 0.3,
            border_color: Color::RGB(0, 0, 0),
            border_thickness: 1,
            label_color: Color::RGB(230, 230, 240),
        }
    }
}

pub struct SliderBar {
    label: &'static str,
    style: SliderStyle,
}

impl SliderBar {
    pub fn new(label: &'static str, style: SliderStyle) -> Self {
        SliderBar { label, style }
    }

    /// Width of the filled part for `fraction`, clamped to the bar
    pub fn fill_width(&self, fraction: f32) -> u32 {
        (self.style.width as f32 * fraction.clamp(0.0, 1.0)) as u32
    }

    pub fn fill_color(&self, fraction: f32) -> Color {
        if fraction < self.style.low_threshold {
            self.style.low_color
        } else {
            self.style.fill_color
        }
    }

    /// Draws the label at (`x`, `y`) and the bar just below it
    pub fn render(&self, canvas: &mut Canvas<Window>, x: i32, y: i32, fraction: f32) -> Result<(), String> {
        draw_simple_text(canvas, self.label, x, y, self.style.label_color, 1)?;

        let bar = Rect::new(x, y + 10, self.style.width, self.style.height);
        canvas.set_draw_color(self.style.background_color);
        canvas.fill_rect(bar)?;

        let fill_width = self.fill_width(fraction);
        if fill_width > 0 {
            canvas.set_draw_color(self.fill_color(fraction));
            canvas.fill_rect(Rect::new(x, y + 10, fill_width, self.style.height))?;
        }

        if self.style.border_thickness > 0 {
            canvas.set_draw_color(self.style.border_color);
            canvas.draw_rect(bar)?;
        }

        Ok(())
    }
}
