//! World rendering
//!
//! Everything in the world is drawn procedurally with SDL2 rectangles,
//! except the rocket, which uses `assets/sprites/rocket.png` when present and
//! a texture painted at startup otherwise.
//!
//! Draw order is fixed by [`Renderable::layer`]: pickups, asteroids, the
//! rocket, then explosions on top.

use boost_blitz::asteroid::{Asteroid, AsteroidSize};
use boost_blitz::camera::Camera;
use boost_blitz::effects::{Explosion, ExplosionKind};
use boost_blitz::game::GameWorld;
use boost_blitz::health_booster::HealthBooster;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sdl2::image::LoadTexture;
use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use std::path::Path;
use tracing::{info, warn};

/// Rocket footprint in world units
const ROCKET_SIZE: Vec2 = Vec2::new(0.6, 1.2);
/// Nozzle x positions relative to the rocket centre, in world units
const NOZZLE_OFFSETS: [f32; 3] = [-0.18, 0.0, 0.18];
const STAR_COUNT: usize = 90;

struct Star {
    /// Position as a fraction of the screen
    x: f32,
    y: f32,
    brightness: u8,
    size: u32,
}

/// A world object that can be drawn
pub enum Renderable<'a> {
    Booster(&'a HealthBooster),
    Asteroid(&'a Asteroid),
    Explosion(&'a Explosion),
}

impl Renderable<'_> {
    fn layer(&self) -> u8 {
        match self {
            Renderable::Booster(_) => 0,
            Renderable::Asteroid(_) => 1,
            Renderable::Explosion(_) => 3,
        }
    }

    fn position(&self) -> (Vec2, f32) {
        match self {
            Renderable::Booster(b) => (b.position, b.radius()),
            Renderable::Asteroid(a) => (a.position, a.size.radius()),
            Renderable::Explosion(e) => (e.position, explosion_radius(e)),
        }
    }

    fn render(&self, canvas: &mut Canvas<Window>, camera: &Camera) -> Result<(), String> {
        match self {
            Renderable::Booster(b) => draw_booster(canvas, camera, b),
            Renderable::Asteroid(a) => draw_asteroid(canvas, camera, a),
            Renderable::Explosion(e) => draw_explosion(canvas, camera, e),
        }
    }
}

pub struct SceneRenderer<'a> {
    rocket_texture: Texture<'a>,
    stars: Vec<Star>,
}

impl<'a> SceneRenderer<'a> {
    /// Loads the rocket sprite, falling back to a painted one
    pub fn new(
        canvas: &mut Canvas<Window>,
        texture_creator: &'a TextureCreator<WindowContext>,
        sprite_path: &Path,
    ) -> Result<Self, String> {
        let rocket_texture = match texture_creator.load_texture(sprite_path) {
            Ok(texture) => {
                info!(path = %sprite_path.display(), "rocket sprite loaded");
                texture
            }
            Err(e) => {
                warn!(path = %sprite_path.display(), error = %e, "rocket sprite unavailable, painting one");
                paint_rocket_texture(canvas, texture_creator)?
            }
        };

        let mut rng = StdRng::seed_from_u64(0x5EED);
        let stars = (0..STAR_COUNT)
            .map(|_| Star {
                x: rng.gen_range(0.0..1.0),
                y: rng.gen_range(0.0..1.0),
                brightness: rng.gen_range(90..=255),
                size: if rng.gen_range(0..10) == 0 { 2 } else { 1 },
            })
            .collect();

        Ok(SceneRenderer {
            rocket_texture,
            stars,
        })
    }

    /// Draws the whole world for one frame; `time` drives flame flicker
    pub fn render_world(&self, canvas: &mut Canvas<Window>, world: &GameWorld, time: f32) -> Result<(), String> {
        self.draw_background(canvas, world)?;

        let mut renderables: Vec<Renderable> = Vec::new();
        renderables.extend(world.health_boosters.iter().map(Renderable::Booster));
        renderables.extend(world.asteroids.iter().map(Renderable::Asteroid));
        renderables.extend(world.effects.explosions().iter().map(Renderable::Explosion));
        renderables.sort_by_key(|r| r.layer());

        let (before_rocket, after_rocket): (Vec<_>, Vec<_>) =
            renderables.into_iter().partition(|r| r.layer() < 2);

        for renderable in &before_rocket {
            let (position, radius) = renderable.position();
            if world.camera.is_visible(position, radius) {
                renderable.render(canvas, &world.camera)?;
            }
        }

        if world.rocket.is_active() {
            self.draw_rocket(canvas, world, time)?;
        }

        for renderable in &after_rocket {
            renderable.render(canvas, &world.camera)?;
        }

        Ok(())
    }

    fn draw_background(&self, canvas: &mut Canvas<Window>, world: &GameWorld) -> Result<(), String> {
        canvas.set_draw_color(Color::RGB(6, 8, 24));
        canvas.clear();

        let (width, height) = canvas.logical_size();
        let anchor = world.background.position(&world.camera);
        let (anchor_x, anchor_y) = world.camera.world_to_screen(anchor, width, height);
        let shift_x = anchor_x - width as i32 / 2;
        let shift_y = anchor_y - height as i32 / 2;

        for star in &self.stars {
            let x = (star.x * width as f32) as i32 + shift_x;
            let y = (star.y * height as f32) as i32 + shift_y;
            let b = star.brightness;
            canvas.set_draw_color(Color::RGB(b, b, b.saturating_add(20)));
            canvas.fill_rect(Rect::new(x, y, star.size, star.size))?;
        }

        Ok(())
    }

    fn draw_rocket(&self, canvas: &mut Canvas<Window>, world: &GameWorld, time: f32) -> Result<(), String> {
        let (width, height) = canvas.logical_size();
        let camera = &world.camera;
        let rocket = &world.rocket;
        let ppu = camera.pixels_per_unit(height);

        let lit = world.launch.exhausts_lit();
        for (i, offset) in NOZZLE_OFFSETS.iter().enumerate().take(lit) {
            let nozzle = rocket.position + Vec2::new(*offset, -ROCKET_SIZE.y / 2.0);
            let (x, y) = camera.world_to_screen(nozzle, width, height);
            draw_flame(canvas, x, y, rocket.is_boosting(), time + i as f32 * 0.37)?;
        }

        let (cx, cy) = camera.world_to_screen(rocket.position, width, height);
        let w = (ROCKET_SIZE.x * ppu) as u32;
        let h = (ROCKET_SIZE.y * ppu) as u32;
        let dst = Rect::new(cx - w as i32 / 2, cy - h as i32 / 2, w, h);

        // SDL rotates clockwise, the tilt angle is counter-clockwise
        canvas.copy_ex(
            &self.rocket_texture,
            None,
            dst,
            -rocket.tilt_degrees as f64,
            None,
            false,
            false,
        )
    }
}

fn paint_rocket_texture<'a>(
    canvas: &mut Canvas<Window>,
    texture_creator: &'a TextureCreator<WindowContext>,
) -> Result<Texture<'a>, String> {
    let mut texture = texture_creator
        .create_texture_target(PixelFormatEnum::RGBA8888, 16, 32)
        .map_err(|e| e.to_string())?;
    texture.set_blend_mode(BlendMode::Blend);

    let mut result = Ok(());
    canvas
        .with_texture_canvas(&mut texture, |c| {
            result = paint_rocket(c);
        })
        .map_err(|e| e.to_string())?;
    result?;

    Ok(texture)
}

fn paint_rocket(c: &mut Canvas<Window>) -> Result<(), String> {
    c.set_draw_color(Color::RGBA(0, 0, 0, 0));
    c.clear();

    // Nose cone
    c.set_draw_color(Color::RGB(220, 50, 50));
    for (row, (x, w)) in [(7, 2), (6, 4), (5, 6), (4, 8)].iter().enumerate() {
        c.fill_rect(Rect::new(*x, row as i32 * 2, *w, 2))?;
    }

    // Body
    c.set_draw_color(Color::RGB(225, 228, 235));
    c.fill_rect(Rect::new(4, 8, 8, 20))?;
    c.set_draw_color(Color::RGB(170, 175, 190));
    c.fill_rect(Rect::new(10, 8, 2, 20))?;

    // Window
    c.set_draw_color(Color::RGB(70, 160, 230));
    c.fill_rect(Rect::new(6, 12, 4, 4))?;

    // Fins
    c.set_draw_color(Color::RGB(220, 50, 50));
    c.fill_rect(Rect::new(0, 22, 4, 8))?;
    c.fill_rect(Rect::new(12, 22, 4, 8))?;

    // Nozzles
    c.set_draw_color(Color::RGB(80, 80, 90));
    c.fill_rect(Rect::new(4, 28, 8, 4))?;

    Ok(())
}

fn draw_flame(canvas: &mut Canvas<Window>, x: i32, y: i32, boosting: bool, time: f32) -> Result<(), String> {
    let flicker = ((time * 30.0).sin() * 0.5 + 0.5) * 4.0;
    let base = if boosting { 16.0 } else { 9.0 };
    let length = base + flicker;

    canvas.set_draw_color(Color::RGB(255, 140, 30));
    canvas.fill_rect(Rect::new(x - 3, y, 6, length as u32))?;
    canvas.set_draw_color(Color::RGB(255, 230, 120));
    canvas.fill_rect(Rect::new(x - 1, y, 2, (length * 0.6) as u32))
}

fn asteroid_color(size: AsteroidSize, variant: u8) -> Color {
    let base: (u8, u8, u8) = match size {
        AsteroidSize::Small => (150, 140, 130),
        AsteroidSize::Medium => (130, 115, 100),
        AsteroidSize::Large => (115, 100, 90),
        AsteroidSize::Huge => (95, 85, 80),
    };
    let shade = variant.wrapping_mul(9);
    Color::RGB(
        base.0.saturating_sub(shade),
        base.1.saturating_sub(shade),
        base.2.saturating_sub(shade / 2),
    )
}

/// Lumpy disc built from horizontal strips; the variant picks the lumps
fn draw_asteroid(canvas: &mut Canvas<Window>, camera: &Camera, asteroid: &Asteroid) -> Result<(), String> {
    let (width, height) = canvas.logical_size();
    let (cx, cy) = camera.world_to_screen(asteroid.position, width, height);
    let radius = asteroid.size.radius() * camera.pixels_per_unit(height);
    let strip = 2;

    let color = asteroid_color(asteroid.size, asteroid.variant);
    let variant = asteroid.variant as i32;

    let mut dy = -radius as i32;
    while dy < radius as i32 {
        let row = dy / strip;
        let lump = ((row * 7 + variant * 13).rem_euclid(5)) as f32 * 0.05;
        let half = ((radius * radius - (dy * dy) as f32).max(0.0)).sqrt() * (1.0 - lump);

        if half >= 1.0 {
            canvas.set_draw_color(color);
            canvas.fill_rect(Rect::new(cx - half as i32, cy + dy, (half * 2.0) as u32, strip as u32))?;
        }
        dy += strip;
    }

    // A couple of craters
    let crater = (radius / 4.0).max(2.0) as u32;
    canvas.set_draw_color(asteroid_color(asteroid.size, asteroid.variant.saturating_add(3)));
    canvas.fill_rect(Rect::new(cx - (radius / 3.0) as i32, cy - (radius / 4.0) as i32, crater, crater))?;
    canvas.fill_rect(Rect::new(cx + (radius / 5.0) as i32, cy + (radius / 6.0) as i32, crater / 2 + 1, crater / 2 + 1))
}

fn draw_booster(canvas: &mut Canvas<Window>, camera: &Camera, booster: &HealthBooster) -> Result<(), String> {
    let (width, height) = canvas.logical_size();
    let (cx, cy) = camera.world_to_screen(booster.position, width, height);
    let size = (booster.radius() * camera.pixels_per_unit(height) * 1.6) as u32;
    let arm = (size / 3).max(2);
    let half = size as i32 / 2;

    canvas.set_draw_color(Color::RGB(255, 255, 255));
    canvas.fill_rect(Rect::new(cx - half - 1, cy - arm as i32 / 2 - 1, size + 2, arm + 2))?;
    canvas.fill_rect(Rect::new(cx - arm as i32 / 2 - 1, cy - half - 1, arm + 2, size + 2))?;

    canvas.set_draw_color(Color::RGB(40, 210, 90));
    canvas.fill_rect(Rect::new(cx - half, cy - arm as i32 / 2, size, arm))?;
    canvas.fill_rect(Rect::new(cx - arm as i32 / 2, cy - half, arm, size))
}

fn explosion_radius(explosion: &Explosion) -> f32 {
    let max = match explosion.kind {
        ExplosionKind::Asteroid => 1.0,
        ExplosionKind::Rocket => 1.8,
    };
    max * (0.3 + 0.7 * explosion.progress())
}

fn draw_explosion(canvas: &mut Canvas<Window>, camera: &Camera, explosion: &Explosion) -> Result<(), String> {
    let (width, height) = canvas.logical_size();
    let (cx, cy) = camera.world_to_screen(explosion.position, width, height);
    let radius = (explosion_radius(explosion) * camera.pixels_per_unit(height)) as i32;
    let alpha = (255.0 * (1.0 - explosion.progress())) as u8;

    canvas.set_blend_mode(BlendMode::Blend);
    for (scale, color) in [(1.0, (255, 90, 20)), (0.65, (255, 170, 40)), (0.3, (255, 240, 180))] {
        let r = (radius as f32 * scale) as i32;
        canvas.set_draw_color(Color::RGBA(color.0, color.1, color.2, alpha));
        canvas.fill_rect(Rect::new(cx - r, cy - r / 2, (r * 2) as u32, r as u32))?;
        canvas.fill_rect(Rect::new(cx - r / 2, cy - r, r as u32, (r * 2) as u32))?;
    }
    canvas.set_blend_mode(BlendMode::None);

    Ok(())
}
