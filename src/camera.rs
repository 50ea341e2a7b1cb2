//! Camera tracking and the background that rides with it
//!
//! The camera stays centred on the play column and eases toward the
//! rocket's height a fixed fraction per frame. The background is pinned to
//! the camera so it always fills the view.

use crate::config::{BackgroundConfig, CameraConfig};
use glam::Vec2;

#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec2,
    smooth_speed: f32,
    offset: Vec2,
    orthographic_size: f32,
    aspect: f32,
}

impl Camera {
    pub fn new(config: &CameraConfig) -> Self {
        Camera {
            position: config.offset,
            smooth_speed: config.smooth_speed,
            offset: config.offset,
            orthographic_size: config.orthographic_size,
            aspect: config.aspect,
        }
    }

    pub fn reset(&mut self) {
        self.position = self.offset;
    }

    /// Eases toward the rocket's height, called once per frame after movement
    pub fn follow(&mut self, target_y: f32) {
        let desired = Vec2::new(0.0, target_y) + self.offset;
        self.position = self.position.lerp(desired, self.smooth_speed);
    }

    /// Half the visible height in world units
    pub fn half_height(&self) -> f32 {
        self.orthographic_size
    }

    /// Half the visible width in world units
    pub fn half_width(&self) -> f32 {
        self.aspect * self.orthographic_size
    }

    pub fn pixels_per_unit(&self, screen_height: u32) -> f32 {
        screen_height as f32 / (2.0 * self.orthographic_size)
    }

    /// Maps a world point to screen pixels (y down, origin top-left)
    pub fn world_to_screen(&self, point: Vec2, screen_width: u32, screen_height: u32) -> (i32, i32) {
        let ppu = self.pixels_per_unit(screen_height);
        let relative = point - self.position;
        let x = screen_width as f32 / 2.0 + relative.x * ppu;
        let y = screen_height as f32 / 2.0 - relative.y * ppu;
        (x.round() as i32, y.round() as i32)
    }

    /// True when a circle at `point` could be on screen
    pub fn is_visible(&self, point: Vec2, radius: f32) -> bool {
        let relative = point - self.position;
        relative.x.abs() <= self.half_width() + radius && relative.y.abs() <= self.half_height() + radius
    }
}

/// Background that follows the camera with a fixed offset
#[derive(Debug, Clone)]
pub struct BackgroundAnchor {
    offset: Vec2,
}

impl BackgroundAnchor {
    pub fn new(config: &BackgroundConfig) -> Self {
        BackgroundAnchor {
            offset: config.offset,
        }
    }

    pub fn position(&self, camera: &Camera) -> Vec2 {
        camera.position + self.offset
    }
}
