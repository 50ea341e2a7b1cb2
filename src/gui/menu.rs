//! Base Menu Component
//!
//! A vertical list of choices with keyboard navigation, drawn as a panel
//! in the middle of the logical screen.

use crate::text::{draw_text_centered, text_height};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;

/// Configuration for menu appearance
#[derive(Debug, Clone)]
pub struct MenuStyle {
    /// Panel width in pixels
    pub width: u32,

    /// Panel height in pixels
    pub height: u32,

    pub background_color: Color,
    pub border_color: Color,

    /// Draws a second inner border if > 1
    pub border_thickness: u32,

    /// Darkening of whatever is behind the panel; 0 skips the overlay
    pub overlay_alpha: u8,

    pub title_color: Color,
    pub title_scale: u32,
    pub item_color: Color,
    pub selected_item_color: Color,
    pub highlight_color: Color,
    pub item_scale: u32,

    /// Vertical distance between item baselines
    pub item_spacing: u32,
}

impl Default for MenuStyle {
    fn default() -> Self {
        MenuStyle {
            width: 300,
            height: 180,
            background_color: Color::RGB(18, 20, 40),
            border_color: Color::RGB(90, 110, 170),
            border_thickness: 2,
            overlay_alpha: 160,
            title_color: Color::RGB(255, 210, 90),
            title_scale: 3,
            item_color: Color::RGB(150, 155, 175),
            selected_item_color: Color::RGB(255, 255, 255),
            highlight_color: Color::RGB(60, 80, 140),
            item_scale: 2,
            item_spacing: 28,
        }
    }
}

/// A menu over a fixed set of choices
///
/// ```ignore
/// let mut menu = Menu::with_style("PAUSED", choices, label, MenuStyle::default());
/// menu.select_next();
/// let choice = menu.selected();
/// ```
pub struct Menu<T: Copy> {
    title: String,
    items: Vec<T>,
    labels: Vec<&'static str>,
    selected_index: usize,
    style: MenuStyle,
}

impl<T: Copy> Menu<T> {
    pub fn with_style(
        title: &str,
        items: Vec<T>,
        label: fn(&T) -> &'static str,
        style: MenuStyle,
    ) -> Self {
        let labels = items.iter().map(label).collect();
        Menu {
            title: title.to_string(),
            items,
            labels,
            selected_index: 0,
            style,
        }
    }

    /// Move selection up (wraps to bottom)
    pub fn select_previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.items.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Move selection down (wraps to top)
    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.items.len();
    }

    pub fn reset_selection(&mut self) {
        self.selected_index = 0;
    }

    pub fn selected(&self) -> T {
        self.items[self.selected_index]
    }

    /// Draws the panel; returns the y just below the last item
    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<i32, String> {
        let style = &self.style;

        if style.overlay_alpha > 0 {
            canvas.set_blend_mode(BlendMode::Blend);
            canvas.set_draw_color(Color::RGBA(0, 0, 0, style.overlay_alpha));
            canvas.fill_rect(None)?;
            canvas.set_blend_mode(BlendMode::None);
        }

        let (screen_width, screen_height) = canvas.logical_size();
        let panel = Rect::new(
            (screen_width.saturating_sub(style.width) / 2) as i32,
            (screen_height.saturating_sub(style.height) / 2) as i32,
            style.width,
            style.height,
        );
        let center_x = panel.x() + style.width as i32 / 2;

        canvas.set_draw_color(style.background_color);
        canvas.fill_rect(panel)?;

        canvas.set_draw_color(style.border_color);
        canvas.draw_rect(panel)?;
        if style.border_thickness > 1 {
            canvas.draw_rect(Rect::new(
                panel.x() + 2,
                panel.y() + 2,
                style.width.saturating_sub(4),
                style.height.saturating_sub(4),
            ))?;
        }

        draw_text_centered(
            canvas,
            &self.title,
            center_x,
            panel.y() + 18,
            style.title_color,
            style.title_scale,
        )?;

        let item_height = text_height(style.item_scale);
        let mut y = panel.y() + 18 + text_height(style.title_scale) as i32 + 24;

        for (i, label) in self.labels.iter().enumerate() {
            let is_selected = i == self.selected_index;

            if is_selected {
                canvas.set_draw_color(style.highlight_color);
                canvas.fill_rect(Rect::new(
                    panel.x() + 16,
                    y - 4,
                    style.width.saturating_sub(32),
                    item_height + 8,
                ))?;
            }

            let color = if is_selected {
                style.selected_item_color
            } else {
                style.item_color
            };
            draw_text_centered(canvas, label, center_x, y, color, style.item_scale)?;

            y += style.item_spacing as i32;
        }

        Ok(y)
    }
}
