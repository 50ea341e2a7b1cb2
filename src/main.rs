use anyhow::{Context, anyhow};
use boost_blitz::altitude::AltitudeCounter;
use boost_blitz::config::GameConfig;
use boost_blitz::events::GameEvent;
use boost_blitz::game::{GameOverChoice, GameWorld, Screen, TitleChoice};
use boost_blitz::prefs::PrefsStore;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

mod gui;
mod input_system;
mod logger;
mod render;
mod text;
mod ui;

use gui::{GameOverPanel, TitleScreen};
use input_system::{GameAction, InputSystem};
use render::SceneRenderer;
use ui::Hud;

// Game resolution constants
const GAME_WIDTH: u32 = 640;
const GAME_HEIGHT: u32 = 360;

const DEFAULT_CONFIG_PATH: &str = "assets/config/game.json";
const ROCKET_SPRITE_PATH: &str = "assets/sprites/rocket.png";

/// Longest frame the simulation will take in one step
const MAX_FRAME_TIME: f32 = 0.1;

/// Calculate the best window scale based on monitor size
fn calculate_window_scale(video_subsystem: &sdl2::VideoSubsystem) -> u32 {
    match video_subsystem.desktop_display_mode(0) {
        Ok(display_mode) => {
            // Leave 10% margin for taskbars/decorations
            let usable_w = (display_mode.w as f32 * 0.9) as i32;
            let usable_h = (display_mode.h as f32 * 0.9) as i32;

            let scale = (usable_w / GAME_WIDTH as i32).min(usable_h / GAME_HEIGHT as i32);
            scale.clamp(1, 4) as u32
        }
        Err(e) => {
            warn!(error = %e, "could not detect monitor size, using 2x scale");
            2
        }
    }
}

/// Opens the prefs store, or keeps scores in memory if the data dir is unusable
fn open_prefs() -> PrefsStore {
    let dir = PrefsStore::default_dir();
    match PrefsStore::open(&dir) {
        Ok(store) => store,
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "prefs unavailable, high score will not be saved");
            PrefsStore::in_memory()
        }
    }
}

fn persist_high_score(world: &mut GameWorld, prefs: &mut PrefsStore) {
    if let Err(e) = world.altitude.persist(prefs) {
        warn!(error = %e, "failed to save high score");
    }
}

/// Logs what a frame's events would sound like; there is no audio output
fn play_cues(events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::ExhaustIgnited(index) => debug!(nozzle = index, "cue: exhaust ignition"),
            GameEvent::LaunchSoundPlayed => debug!("cue: launch rumble"),
            GameEvent::BoostStarted => debug!("cue: boost"),
            GameEvent::AsteroidHit { damage } => debug!(damage, "cue: hull impact"),
            GameEvent::AsteroidShattered { .. } => debug!("cue: asteroid explosion"),
            GameEvent::HealthCollected { .. } => debug!("cue: health pickup"),
            GameEvent::RocketDestroyed { .. } => debug!("cue: rocket explosion"),
            GameEvent::Launched
            | GameEvent::BoostEnded
            | GameEvent::AsteroidSpawned { .. }
            | GameEvent::HealthBoosterSpawned
            | GameEvent::NewHighScore(_) => {}
        }
    }
}

fn main() -> anyhow::Result<()> {
    logger::init()?;

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    run(&config_path)
}

fn run(config_path: &Path) -> anyhow::Result<()> {
    let config = GameConfig::load_or_default(config_path)
        .with_context(|| format!("loading config from {}", config_path.display()))?;

    let mut prefs = open_prefs();
    let high_score = AltitudeCounter::load_high_score(&prefs);
    info!(high_score, "starting Boost Blitz");

    let sdl_context = sdl2::init().map_err(|e| anyhow!(e))?;
    let video_subsystem = sdl_context.video().map_err(|e| anyhow!(e))?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG).map_err(|e| anyhow!(e))?;

    let window_scale = calculate_window_scale(&video_subsystem);
    let window_width = GAME_WIDTH * window_scale;
    let window_height = GAME_HEIGHT * window_scale;
    info!(window_scale, window_width, window_height, "creating window");

    let window = video_subsystem
        .window("Boost Blitz", window_width, window_height)
        .position_centered()
        .build()?;

    let mut canvas = window.into_canvas().target_texture().build()?;

    // Logical size gives pixel-perfect scaling at any window size
    canvas.set_logical_size(GAME_WIDTH, GAME_HEIGHT)?;

    let texture_creator = canvas.texture_creator();
    let mut event_pump = sdl_context.event_pump().map_err(|e| anyhow!(e))?;

    let renderer = SceneRenderer::new(&mut canvas, &texture_creator, Path::new(ROCKET_SPRITE_PATH))
        .map_err(|e| anyhow!(e))?;
    let hud = Hud::new();
    let mut title_screen = TitleScreen::new();
    let mut game_over_panel = GameOverPanel::new();

    let mut world = GameWorld::new(config, high_score);
    let mut input_system = InputSystem::new();
    let mut rng = rand::thread_rng();

    let mut screen = Screen::Title;
    let mut last_frame = Instant::now();
    let mut clock = 0.0_f32;

    'running: loop {
        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f32().min(MAX_FRAME_TIME);
        last_frame = now;
        clock += dt;

        input_system.update_context(screen);
        let actions = input_system.poll_events(&mut event_pump);

        for action in &actions {
            match (screen, action) {
                (_, GameAction::Quit) => break 'running,

                (Screen::Title, GameAction::MenuUp) => title_screen.select_previous(),
                (Screen::Title, GameAction::MenuDown) => title_screen.select_next(),
                (Screen::Title, GameAction::MenuConfirm) => match title_screen.selected() {
                    TitleChoice::Play => {
                        title_screen.reset();
                        world.reset();
                        screen = Screen::Playing;
                        info!("run started");
                    }
                    TitleChoice::Controls => {
                        title_screen.reset();
                        screen = Screen::Controls;
                    }
                    TitleChoice::Quit => break 'running,
                },
                (Screen::Title, GameAction::Back) => break 'running,

                (Screen::Controls, GameAction::Back) => screen = Screen::Title,

                (Screen::Playing, GameAction::Back) => {
                    persist_high_score(&mut world, &mut prefs);
                    world.reset();
                    screen = Screen::Title;
                    info!("run abandoned");
                }

                (Screen::GameOver, GameAction::MenuUp) => game_over_panel.select_previous(),
                (Screen::GameOver, GameAction::MenuDown) => game_over_panel.select_next(),
                (Screen::GameOver, GameAction::MenuConfirm) => match game_over_panel.confirm() {
                    Some(GameOverChoice::Retry) => {
                        game_over_panel.reset();
                        world.reset();
                        screen = Screen::Playing;
                    }
                    Some(GameOverChoice::MainMenu) => {
                        game_over_panel.reset();
                        world.reset();
                        title_screen.reset();
                        screen = Screen::Title;
                    }
                    None => {}
                },

                _ => {}
            }
        }

        if screen == Screen::Title {
            title_screen.update(dt);
        }

        if screen.simulates() {
            let keyboard = event_pump.keyboard_state();
            let input = if screen == Screen::Playing {
                input_system.sample(&keyboard, &actions, dt)
            } else {
                Default::default()
            };

            let events = world.update(dt, &input, &mut rng);
            play_cues(&events);

            if screen == Screen::Playing && world.is_game_over() {
                info!(
                    score = world.altitude.score(),
                    high_score = world.altitude.high_score(),
                    "game over"
                );
                persist_high_score(&mut world, &mut prefs);
                game_over_panel.trigger();
                screen = Screen::GameOver;
            }
        }

        match screen {
            Screen::Title => {
                renderer.render_world(&mut canvas, &world, clock).map_err(|e| anyhow!(e))?;
                title_screen
                    .render(&mut canvas, &world.altitude.high_score_text())
                    .map_err(|e| anyhow!(e))?;
            }
            Screen::Controls => gui::controls::render(&mut canvas).map_err(|e| anyhow!(e))?,
            Screen::Playing => {
                renderer.render_world(&mut canvas, &world, clock).map_err(|e| anyhow!(e))?;
                hud.render(&mut canvas, &world).map_err(|e| anyhow!(e))?;
            }
            Screen::GameOver => {
                renderer.render_world(&mut canvas, &world, clock).map_err(|e| anyhow!(e))?;
                hud.render(&mut canvas, &world).map_err(|e| anyhow!(e))?;
                game_over_panel
                    .render(&mut canvas, world.altitude.score(), world.altitude.high_score())
                    .map_err(|e| anyhow!(e))?;
            }
        }

        canvas.present();

        // Cap at roughly 60 FPS
        std::thread::sleep(Duration::new(0, 1_000_000_000u32 / 60));
    }

    persist_high_score(&mut world, &mut prefs);
    info!("shutting down");
    Ok(())
}
