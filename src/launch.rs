//! Countdown and launch state machine
//!
//! ```text
//! AwaitingIgnition --space--> Countdown(3) --1s--> Countdown(2) --1s-->
//!     Countdown(1) --1s--> Liftoff --1s--> Launched
//! ```
//!
//! Each countdown step lights one exhaust nozzle; the last one also fires
//! the launch sound. Reaching `Launched` is what releases the rocket.

use crate::bounce::Bounce;
use crate::config::LaunchConfig;
use crate::events::GameEvent;
use crate::input::InputState;
use tracing::info;

pub const IGNITION_PROMPT: &str = "Press space bar to initiate launch!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchPhase {
    AwaitingIgnition,
    /// Seconds left on the countdown display (3, 2, 1)
    Countdown(u8),
    Liftoff,
    Launched,
}

pub struct LaunchSequence {
    phase: LaunchPhase,
    /// Time spent in the current phase
    elapsed: f32,
    step_duration: f32,
    prompt_bounce: Bounce,
}

impl LaunchSequence {
    pub fn new(config: &LaunchConfig) -> Self {
        LaunchSequence {
            phase: LaunchPhase::AwaitingIgnition,
            elapsed: 0.0,
            step_duration: config.step_duration,
            prompt_bounce: Bounce::new(),
        }
    }

    pub fn reset(&mut self) {
        self.phase = LaunchPhase::AwaitingIgnition;
        self.elapsed = 0.0;
        self.prompt_bounce.reset();
    }

    pub fn phase(&self) -> LaunchPhase {
        self.phase
    }

    pub fn is_launched(&self) -> bool {
        self.phase == LaunchPhase::Launched
    }

    /// Text for the countdown label, `None` once it is hidden
    pub fn text(&self) -> Option<String> {
        match self.phase {
            LaunchPhase::AwaitingIgnition => Some(IGNITION_PROMPT.to_string()),
            LaunchPhase::Countdown(n) => Some(format!("Launching in {}", n)),
            LaunchPhase::Liftoff => Some("Launch!".to_string()),
            LaunchPhase::Launched => None,
        }
    }

    /// Vertical bob of the label; only the ignition prompt bounces
    pub fn text_offset(&self) -> f32 {
        match self.phase {
            LaunchPhase::AwaitingIgnition => self.prompt_bounce.offset(),
            _ => 0.0,
        }
    }

    /// How many of the three exhaust nozzles are burning
    pub fn exhausts_lit(&self) -> usize {
        match self.phase {
            LaunchPhase::AwaitingIgnition => 0,
            LaunchPhase::Countdown(n) => (4 - n.clamp(1, 3)) as usize,
            LaunchPhase::Liftoff | LaunchPhase::Launched => 3,
        }
    }

    pub fn update(&mut self, dt: f32, input: &InputState) -> Vec<GameEvent> {
        let mut events = Vec::new();

        match self.phase {
            LaunchPhase::AwaitingIgnition => {
                self.prompt_bounce.update(dt);
                if input.launch_pressed {
                    self.prompt_bounce.reset();
                    info!("ignition, countdown started");
                    self.enter(LaunchPhase::Countdown(3), &mut events);
                }
            }
            LaunchPhase::Launched => {}
            _ => {
                self.elapsed += dt;
                if self.elapsed >= self.step_duration {
                    let next = match self.phase {
                        LaunchPhase::Countdown(n) if n > 1 => LaunchPhase::Countdown(n - 1),
                        LaunchPhase::Countdown(_) => LaunchPhase::Liftoff,
                        _ => LaunchPhase::Launched,
                    };
                    self.enter(next, &mut events);
                }
            }
        }

        events
    }

    fn enter(&mut self, phase: LaunchPhase, events: &mut Vec<GameEvent>) {
        self.phase = phase;
        self.elapsed = 0.0;

        match phase {
            LaunchPhase::Countdown(n) => {
                events.push(GameEvent::ExhaustIgnited((3 - n.clamp(1, 3)) as usize));
                if n == 1 {
                    events.push(GameEvent::LaunchSoundPlayed);
                }
            }
            LaunchPhase::Launched => {
                info!("launched");
                events.push(GameEvent::Launched);
            }
            LaunchPhase::AwaitingIgnition | LaunchPhase::Liftoff => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_space() -> InputState {
        InputState {
            launch_pressed: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_waits_for_ignition() {
        let mut sequence = LaunchSequence::new(&LaunchConfig::default());
        for _ in 0..300 {
            assert!(sequence.update(0.1, &InputState::default()).is_empty());
        }
        assert_eq!(sequence.phase(), LaunchPhase::AwaitingIgnition);
        assert_eq!(sequence.text().as_deref(), Some(IGNITION_PROMPT));
    }

    #[test]
    fn test_full_countdown_timeline() {
        let mut sequence = LaunchSequence::new(&LaunchConfig::default());
        let idle = InputState::default();

        let events = sequence.update(0.016, &press_space());
        assert_eq!(events, vec![GameEvent::ExhaustIgnited(0)]);
        assert_eq!(sequence.text().as_deref(), Some("Launching in 3"));
        assert_eq!(sequence.exhausts_lit(), 1);
        assert_eq!(sequence.text_offset(), 0.0);

        let events = sequence.update(1.0, &idle);
        assert_eq!(events, vec![GameEvent::ExhaustIgnited(1)]);
        assert_eq!(sequence.text().as_deref(), Some("Launching in 2"));

        let events = sequence.update(1.0, &idle);
        assert_eq!(
            events,
            vec![GameEvent::ExhaustIgnited(2), GameEvent::LaunchSoundPlayed]
        );
        assert_eq!(sequence.exhausts_lit(), 3);

        let events = sequence.update(1.0, &idle);
        assert!(events.is_empty());
        assert_eq!(sequence.text().as_deref(), Some("Launch!"));
        assert!(!sequence.is_launched());

        let events = sequence.update(1.0, &idle);
        assert_eq!(events, vec![GameEvent::Launched]);
        assert!(sequence.is_launched());
        assert_eq!(sequence.text(), None);

        assert!(sequence.update(5.0, &press_space()).is_empty());
    }

    #[test]
    fn test_partial_steps_accumulate() {
        let mut sequence = LaunchSequence::new(&LaunchConfig::default());
        sequence.update(0.0, &press_space());

        for _ in 0..9 {
            sequence.update(0.1, &InputState::default());
        }
        assert_eq!(sequence.phase(), LaunchPhase::Countdown(3));

        sequence.update(0.15, &InputState::default());
        assert_eq!(sequence.phase(), LaunchPhase::Countdown(2));
    }
}
