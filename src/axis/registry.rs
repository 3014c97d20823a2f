//! Axis registry - per-axis configuration and mutable tuning state.

use heapless::Vec;

use crate::config::{AxisConfig, SystemConfig};
use crate::error::ProtocolError;

/// Maximum number of axes the registry can hold.
pub const MAX_AXES: usize = 8;

/// One axis's identity and tuning state.
///
/// The registry owns configuration; motion progress (current position,
/// remaining distance) is owned by the corresponding actuator.
#[derive(Debug, Clone)]
pub struct Axis {
    /// Axis index, fixed at startup.
    id: usize,
    /// Microstepping resolution, immutable.
    steps_per_revolution: u32,
    /// Acceleration in steps/s²; mutable via the `A` verb.
    acceleration: f32,
    /// Cruise speed while far from target, in steps/s; mutable via `T`.
    fast_speed: f32,
    /// Cruise speed inside the slow zone, in steps/s; mutable via `L`.
    slow_speed: f32,
}

impl Axis {
    fn from_config(id: usize, config: &AxisConfig) -> Self {
        Self {
            id,
            steps_per_revolution: config.steps_per_revolution,
            acceleration: config.acceleration,
            fast_speed: config.fast_speed,
            slow_speed: config.slow_speed,
        }
    }

    /// Get the axis index.
    #[inline]
    pub fn id(&self) -> usize {
        self.id
    }

    /// Get the steps per revolution.
    #[inline]
    pub fn steps_per_revolution(&self) -> u32 {
        self.steps_per_revolution
    }

    /// Get the current acceleration in steps/s².
    #[inline]
    pub fn acceleration(&self) -> f32 {
        self.acceleration
    }

    /// Get the current fast (cruise) speed in steps/s.
    #[inline]
    pub fn fast_speed(&self) -> f32 {
        self.fast_speed
    }

    /// Get the current slow (near-target) speed in steps/s.
    #[inline]
    pub fn slow_speed(&self) -> f32 {
        self.slow_speed
    }

    /// Set the acceleration.
    ///
    /// The caller that owns the actuator must push the new value to it
    /// immediately; the registry itself never touches actuators.
    #[inline]
    pub fn set_acceleration(&mut self, steps_per_sec2: f32) {
        self.acceleration = steps_per_sec2;
    }

    /// Set the fast speed. Consumed lazily by the scheduler's per-tick
    /// zone evaluation.
    #[inline]
    pub fn set_fast_speed(&mut self, steps_per_sec: f32) {
        self.fast_speed = steps_per_sec;
    }

    /// Set the slow speed. Consumed lazily by the scheduler's per-tick
    /// zone evaluation.
    #[inline]
    pub fn set_slow_speed(&mut self, steps_per_sec: f32) {
        self.slow_speed = steps_per_sec;
    }
}

/// Registry of all configured axes, addressed by index.
#[derive(Debug, Clone)]
pub struct AxisRegistry {
    axes: Vec<Axis, MAX_AXES>,
}

impl AxisRegistry {
    /// Build the registry from a validated system configuration.
    ///
    /// Axis indices follow the configuration's `[[axes]]` order.
    pub fn from_config(config: &SystemConfig) -> Self {
        let mut axes = Vec::new();
        for (id, axis_config) in config.axes.iter().enumerate() {
            // Capacity matches MAX_AXES, which validation already enforced
            let _ = axes.push(Axis::from_config(id, axis_config));
        }
        Self { axes }
    }

    /// Number of axes.
    #[inline]
    pub fn len(&self) -> usize {
        self.axes.len()
    }

    /// Check if the registry is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    /// Get an axis by index.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::IndexOutOfRange` when `index` is not in
    /// `[0, len)`. No side effect on read.
    pub fn axis(&self, index: usize) -> Result<&Axis, ProtocolError> {
        self.axes
            .get(index)
            .ok_or(ProtocolError::IndexOutOfRange(index as i64))
    }

    /// Get a mutable axis by index.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::IndexOutOfRange` when `index` is not in
    /// `[0, len)`.
    pub fn axis_mut(&mut self, index: usize) -> Result<&mut Axis, ProtocolError> {
        self.axes
            .get_mut(index)
            .ok_or(ProtocolError::IndexOutOfRange(index as i64))
    }

    /// Iterate over all axes in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Axis> {
        self.axes.iter()
    }
}
