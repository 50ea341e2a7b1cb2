//! Sampled player input
//!
//! The front end reads raw keys once per frame and hands the simulation an
//! `InputState`. The horizontal axis is smoothed the way a gamepad-style
//! virtual axis behaves: it ramps toward the held direction and falls back
//! to centre when released.

/// Input for a single simulation step
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputState {
    /// Smoothed steering axis, -1.0 (left) to 1.0 (right)
    pub horizontal: f32,
    pub boost_held: bool,
    /// True only on the frame the launch key went down
    pub launch_pressed: bool,
}

/// Smooths a digital left/right pair into an analog axis
#[derive(Debug, Clone)]
pub struct AxisSmoother {
    value: f32,
    /// Units per second toward a held direction
    sensitivity: f32,
    /// Units per second back toward zero when released
    gravity: f32,
}

impl AxisSmoother {
    pub fn new() -> Self {
        AxisSmoother {
            value: 0.0,
            sensitivity: 3.0,
            gravity: 3.0,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn reset(&mut self) {
        self.value = 0.0;
    }

    /// Advances the axis toward the raw direction and returns the new value
    ///
    /// Reversing direction snaps through zero instead of sliding across it.
    pub fn update(&mut self, left: bool, right: bool, dt: f32) -> f32 {
        let target = match (left, right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        };

        if target == 0.0 {
            let step = self.gravity * dt;
            self.value = if self.value.abs() <= step {
                0.0
            } else {
                self.value - step * self.value.signum()
            };
        } else {
            if self.value != 0.0 && self.value.signum() != target {
                self.value = 0.0;
            }
            self.value = (self.value + target * self.sensitivity * dt).clamp(-1.0, 1.0);
        }

        self.value
    }
}

impl Default for AxisSmoother {
    fn default() -> Self {
        Self::new()
    }
}
