//! Actuator seam - the external motion primitive.

use crate::config::units::Steps;

/// Interface to one axis's motion primitive.
///
/// An implementation owns step-pulse generation, the acceleration and
/// deceleration profile, and direction sequencing for a single motor; the
/// core only commands targets and tuning and polls for progress. One
/// actuator exists per axis, constructed once at startup with its pin
/// identity and optional direction inversion.
///
/// All calls are non-blocking. [`tick`](AxisActuator::tick) must be called
/// once per control-loop iteration; the actuator decides internally whether
/// and how far to move on that iteration.
pub trait AxisActuator {
    /// Set the acceleration/deceleration rate in steps per second squared.
    fn set_acceleration(&mut self, steps_per_sec2: f32);

    /// Set the target cruise speed in steps per second.
    ///
    /// Takes effect on the next tick, mid-motion included; the scheduler
    /// re-commands this every tick from its zone evaluation.
    fn set_cruise_speed(&mut self, steps_per_sec: f32);

    /// Command a move to an absolute step position.
    ///
    /// A new target overwrites any move in progress; there is no separate
    /// stop primitive.
    fn move_to(&mut self, target: Steps);

    /// Advance one control-loop iteration of motion.
    ///
    /// Returns `true` while the axis is still moving toward its target.
    fn tick(&mut self) -> bool;

    /// Signed remaining distance to the commanded target.
    ///
    /// An axis is settled exactly when this is zero.
    fn distance_to_go(&self) -> Steps;
}
