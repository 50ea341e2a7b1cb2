//! Text bob animation
//!
//! Lerps a vertical offset from rest up to `height` and back, half a second
//! each way, forever. Prompts use it to draw the eye.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BouncePhase {
    Rising,
    Falling,
}

#[derive(Debug, Clone)]
pub struct Bounce {
    height: f32,
    /// Lerp parameter within the current phase, 0.0-1.0
    t: f32,
    phase: BouncePhase,
}

impl Bounce {
    /// Default bob height in screen pixels
    pub const DEFAULT_HEIGHT: f32 = 20.0;

    pub fn new() -> Self {
        Self::with_height(Self::DEFAULT_HEIGHT)
    }

    pub fn with_height(height: f32) -> Self {
        Bounce {
            height,
            t: 0.0,
            phase: BouncePhase::Rising,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.t += dt * 2.0;
        if self.t >= 1.0 {
            self.t = 0.0;
            self.phase = match self.phase {
                BouncePhase::Rising => BouncePhase::Falling,
                BouncePhase::Falling => BouncePhase::Rising,
            };
        }
    }

    /// Current upward offset, 0.0 at rest
    pub fn offset(&self) -> f32 {
        match self.phase {
            BouncePhase::Rising => self.height * self.t,
            BouncePhase::Falling => self.height * (1.0 - self.t),
        }
    }

    pub fn reset(&mut self) {
        self.t = 0.0;
        self.phase = BouncePhase::Rising;
    }
}

impl Default for Bounce {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rises_then_falls() {
        let mut bounce = Bounce::new();
        assert_eq!(bounce.offset(), 0.0);

        bounce.update(0.25);
        assert!((bounce.offset() - 10.0).abs() < 1e-4);

        bounce.update(0.25); // top reached, phase flips
        assert!((bounce.offset() - 20.0).abs() < 1e-4);

        bounce.update(0.25);
        assert!((bounce.offset() - 10.0).abs() < 1e-4);

        bounce.update(0.25);
        assert_eq!(bounce.offset(), 0.0);
    }

    #[test]
    fn test_reset_returns_to_rest() {
        let mut bounce = Bounce::with_height(8.0);
        bounce.update(0.3);
        bounce.reset();
        assert_eq!(bounce.offset(), 0.0);
    }
}
