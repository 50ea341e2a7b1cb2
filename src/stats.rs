//! Rocket health and boost resources
//!
//! - `Health`: integer hit points with damage and capped healing
//! - `BoostMeter`: a 0.0-1.0 resource that drains while boosting and
//!   regenerates otherwise

/// Hit points of the rocket
///
/// # Example
///
/// ```rust
/// use boost_blitz::stats::Health;
///
/// let mut health = Health::new(100);
/// health.take_damage(30);
/// assert_eq!(health.current(), 70);
/// assert_eq!(health.percentage(), 0.7);
/// ```
#[derive(Debug, Clone)]
pub struct Health {
    current: i32,
    max: i32,
}

impl Health {
    /// Creates a new Health instance with full health
    pub fn new(max: i32) -> Self {
        Health { current: max, max }
    }

    pub fn current(&self) -> i32 {
        self.current
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// Returns health as a fraction (0.0 to 1.0)
    pub fn percentage(&self) -> f32 {
        if self.max <= 0 {
            0.0
        } else {
            self.current as f32 / self.max as f32
        }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    /// Applies damage, never dropping below zero
    ///
    /// ```rust
    /// use boost_blitz::stats::Health;
    ///
    /// let mut health = Health::new(40);
    /// let result = health.take_damage(50);
    /// assert_eq!(result.damage_dealt, 40);
    /// assert!(result.is_fatal);
    /// assert_eq!(health.current(), 0);
    /// ```
    pub fn take_damage(&mut self, amount: i32) -> DamageResult {
        let old_health = self.current;
        self.current = (self.current - amount.max(0)).max(0);

        DamageResult {
            damage_dealt: old_health - self.current,
            is_fatal: self.current <= 0,
        }
    }

    /// Heals health, capped at max health
    ///
    /// Returns the amount actually restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let old_health = self.current;
        self.current = (self.current + amount.max(0)).min(self.max);
        self.current - old_health
    }

    /// Restores full health
    pub fn reset(&mut self) {
        self.current = self.max;
    }
}

/// Result of a damage operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageResult {
    /// Actual damage dealt (less than requested if the target had less health)
    pub damage_dealt: i32,
    /// Whether this damage emptied the health pool
    pub is_fatal: bool,
}

/// Boost resource, clamped to 0.0-1.0
///
/// A boost can only be triggered from a full meter; it then drains to zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoostMeter {
    power: f32,
}

impl BoostMeter {
    /// A full meter, ready to boost
    pub fn full() -> Self {
        BoostMeter { power: 1.0 }
    }

    pub fn power(&self) -> f32 {
        self.power
    }

    pub fn fraction(&self) -> f32 {
        self.power.clamp(0.0, 1.0)
    }

    pub fn is_full(&self) -> bool {
        self.power >= 1.0
    }

    pub fn is_empty(&self) -> bool {
        self.power <= 0.0
    }

    /// Adds `rate * dt`, stopping at 1.0
    pub fn regenerate(&mut self, rate: f32, dt: f32) {
        if self.power < 1.0 {
            self.power = (self.power + rate * dt).clamp(0.0, 1.0);
        }
    }

    /// Removes `rate * dt`, stopping at 0.0
    pub fn drain(&mut self, rate: f32, dt: f32) {
        self.power = (self.power - rate * dt).max(0.0);
    }
}

impl Default for BoostMeter {
    fn default() -> Self {
        Self::full()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_damage_and_percentage() {
        let mut health = Health::new(100);
        let result = health.take_damage(30);

        assert_eq!(result.damage_dealt, 30);
        assert!(!result.is_fatal);
        assert_eq!(health.current(), 70);
        assert!((health.percentage() - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn test_health_overkill_clamps_to_zero() {
        let mut health = Health::new(20);
        let result = health.take_damage(50);

        assert_eq!(result.damage_dealt, 20);
        assert!(result.is_fatal);
        assert_eq!(health.current(), 0);
        assert!(!health.is_alive());
    }

    #[test]
    fn test_heal_is_capped_at_max() {
        let mut health = Health::new(100);
        health.take_damage(10);

        assert_eq!(health.heal(20), 10);
        assert_eq!(health.current(), 100);
    }

    #[test]
    fn test_boost_regenerate_stops_at_full() {
        let mut meter = BoostMeter { power: 0.95 };
        meter.regenerate(0.1, 1.0);
        assert_eq!(meter.power(), 1.0);
        assert!(meter.is_full());
    }

    #[test]
    fn test_boost_drain_stops_at_empty() {
        let mut meter = BoostMeter::full();
        meter.drain(0.15, 10.0);
        assert_eq!(meter.power(), 0.0);
        assert!(meter.is_empty());
    }
}
