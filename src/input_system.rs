use boost_blitz::game::Screen;
use boost_blitz::input::{AxisSmoother, InputState};
use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::keyboard::{KeyboardState, Keycode, Scancode};

/// Discrete actions produced by key presses
///
/// Held keys (steering, boost) are not actions; they are sampled from the
/// keyboard state each frame by [`InputSystem::sample`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    // === Menu Navigation ===
    MenuUp,
    MenuDown,
    MenuConfirm,
    Back,

    // === Gameplay ===
    Launch,

    // === System ===
    Quit,
}

/// Which set of bindings is live
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Title menu or game over panel
    Menu,
    /// The controls screen, which only goes back
    Info,
    /// Flying the rocket
    Playing,
}

impl InputContext {
    pub fn for_screen(screen: Screen) -> Self {
        match screen {
            Screen::Title | Screen::GameOver => InputContext::Menu,
            Screen::Controls => InputContext::Info,
            Screen::Playing => InputContext::Playing,
        }
    }
}

/// Turns SDL2 events into [`GameAction`]s and the keyboard into [`InputState`]
pub struct InputSystem {
    pub context: InputContext,
    horizontal: AxisSmoother,
}

impl InputSystem {
    pub fn new() -> Self {
        InputSystem {
            context: InputContext::Menu,
            horizontal: AxisSmoother::new(),
        }
    }

    /// Switches bindings to match the screen being shown
    pub fn update_context(&mut self, screen: Screen) {
        let context = InputContext::for_screen(screen);
        if context != self.context {
            self.horizontal.reset();
            self.context = context;
        }
    }

    /// Drains pending SDL2 events into actions for the current context
    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<GameAction> {
        let mut actions = Vec::new();

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => actions.push(GameAction::Quit),
                Event::KeyDown {
                    keycode: Some(key),
                    repeat: false,
                    ..
                } => {
                    if let Some(action) = self.map_key(key) {
                        actions.push(action);
                    }
                }
                _ => {}
            }
        }

        actions
    }

    fn map_key(&self, key: Keycode) -> Option<GameAction> {
        match self.context {
            InputContext::Menu => match key {
                Keycode::Up | Keycode::W => Some(GameAction::MenuUp),
                Keycode::Down | Keycode::S => Some(GameAction::MenuDown),
                Keycode::Return | Keycode::Space => Some(GameAction::MenuConfirm),
                Keycode::Escape => Some(GameAction::Back),
                _ => None,
            },
            InputContext::Info => match key {
                Keycode::Escape | Keycode::Return | Keycode::Backspace => Some(GameAction::Back),
                _ => None,
            },
            InputContext::Playing => match key {
                Keycode::Space => Some(GameAction::Launch),
                Keycode::Escape => Some(GameAction::Back),
                _ => None,
            },
        }
    }

    /// Builds this frame's rocket input from held keys and the launch action
    pub fn sample(&mut self, keyboard: &KeyboardState, actions: &[GameAction], dt: f32) -> InputState {
        let left = keyboard.is_scancode_pressed(Scancode::A)
            || keyboard.is_scancode_pressed(Scancode::Left);
        let right = keyboard.is_scancode_pressed(Scancode::D)
            || keyboard.is_scancode_pressed(Scancode::Right);
        let boost_held = keyboard.is_scancode_pressed(Scancode::W)
            || keyboard.is_scancode_pressed(Scancode::Up);

        InputState {
            horizontal: self.horizontal.update(left, right, dt),
            boost_held,
            launch_pressed: actions.contains(&GameAction::Launch),
        }
    }
}
