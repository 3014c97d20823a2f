//! Simulated actuator for hosts and tests.

use crate::config::units::Steps;

use super::actuator::AxisActuator;

/// A deterministic software actuator.
///
/// Interprets the commanded cruise speed as a per-tick step budget (floored
/// to at least one step) and moves straight toward the target, so motion
/// duration is exactly predictable from the commanded distance and speeds.
/// The last commanded acceleration and cruise speed are recorded and
/// observable, which is what the scheduler tests use to verify zone
/// switching. No pulse generation or trapezoid profiling happens here.
#[derive(Debug, Clone, Default)]
pub struct SimActuator {
    position: i64,
    target: i64,
    acceleration: f32,
    cruise_speed: f32,
}

impl SimActuator {
    /// Create a simulated actuator at position zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current absolute position in steps.
    #[inline]
    pub fn position(&self) -> Steps {
        Steps(self.position)
    }

    /// Last commanded target position.
    #[inline]
    pub fn target(&self) -> Steps {
        Steps(self.target)
    }

    /// Last commanded acceleration in steps/s².
    #[inline]
    pub fn acceleration(&self) -> f32 {
        self.acceleration
    }

    /// Last commanded cruise speed in steps/s.
    #[inline]
    pub fn cruise_speed(&self) -> f32 {
        self.cruise_speed
    }
}

impl AxisActuator for SimActuator {
    fn set_acceleration(&mut self, steps_per_sec2: f32) {
        self.acceleration = steps_per_sec2;
    }

    fn set_cruise_speed(&mut self, steps_per_sec: f32) {
        self.cruise_speed = steps_per_sec;
    }

    fn move_to(&mut self, target: Steps) {
        self.target = target.value();
    }

    fn tick(&mut self) -> bool {
        let remaining = self.target - self.position;
        if remaining == 0 {
            return false;
        }

        // Per-tick budget: at least one step, never past the target
        let budget = (self.cruise_speed as i64).max(1).min(remaining.abs());
        self.position += budget * remaining.signum();

        self.position != self.target
    }

    fn distance_to_go(&self) -> Steps {
        Steps(self.target - self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settles_exactly_on_target() {
        let mut sim = SimActuator::new();
        sim.set_cruise_speed(30.0);
        sim.move_to(Steps(100));

        let mut ticks = 0;
        while sim.tick() {
            ticks += 1;
        }
        // 30 + 30 + 30 + 10
        assert_eq!(ticks, 3);
        assert_eq!(sim.position(), Steps(100));
        assert!(sim.distance_to_go().is_zero());
    }

    #[test]
    fn test_negative_target() {
        let mut sim = SimActuator::new();
        sim.set_cruise_speed(50.0);
        sim.move_to(Steps(-75));

        while sim.tick() {}
        assert_eq!(sim.position(), Steps(-75));
    }

    #[test]
    fn test_retarget_mid_motion() {
        let mut sim = SimActuator::new();
        sim.set_cruise_speed(10.0);
        sim.move_to(Steps(100));
        sim.tick();
        assert_eq!(sim.position(), Steps(10));

        // New target overwrites the old one
        sim.move_to(Steps(0));
        while sim.tick() {}
        assert_eq!(sim.position(), Steps(0));
    }

    #[test]
    fn test_zero_speed_still_crawls() {
        let mut sim = SimActuator::new();
        sim.move_to(Steps(3));
        assert!(sim.tick());
        assert_eq!(sim.position(), Steps(1));
    }

    #[test]
    fn test_records_tuning() {
        let mut sim = SimActuator::new();
        sim.set_acceleration(1234.0);
        sim.set_cruise_speed(42.0);
        assert!((sim.acceleration() - 1234.0).abs() < 0.01);
        assert!((sim.cruise_speed() - 42.0).abs() < 0.01);
    }
}
