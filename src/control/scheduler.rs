//! Motion scheduler - the cooperative tick loop.

use heapless::Vec;

use crate::axis::{AxisActuator, AxisRegistry, MAX_AXES};
use crate::config::{validate_config, AxisConfig, SystemConfig};
use crate::error::Result;
use crate::protocol::{run_line, Reporter};

use super::batch::BatchTracker;
use super::transport::LineSource;

/// The control loop driving all axes.
///
/// One [`tick`](Scheduler::tick) per control-loop iteration, never
/// blocking: poll for input, re-evaluate every axis's speed zone, advance
/// every axis one increment of motion, then check batch completion. Axes
/// are serviced in fixed index order, which produces simultaneous
/// multi-axis motion without threads: every actuator call is non-blocking
/// and independent.
pub struct Scheduler<A: AxisActuator> {
    registry: AxisRegistry,
    actuators: Vec<A, MAX_AXES>,
    tracker: BatchTracker,
    slow_zone: i64,
}

impl<A: AxisActuator> Scheduler<A> {
    /// Build a scheduler from a configuration, constructing one actuator
    /// per axis with the given factory.
    ///
    /// The factory receives each axis's configuration so it can wire pin
    /// identity and direction inversion. Initial acceleration and cruise
    /// speed are pushed into every actuator before the first tick.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn from_config<F>(config: &SystemConfig, mut make_actuator: F) -> Result<Self>
    where
        F: FnMut(&AxisConfig) -> A,
    {
        validate_config(config)?;

        let registry = AxisRegistry::from_config(config);
        let mut actuators = Vec::new();
        for axis_config in config.axes.iter() {
            let mut actuator = make_actuator(axis_config);
            actuator.set_acceleration(axis_config.acceleration);
            actuator.set_cruise_speed(axis_config.fast_speed);
            // Capacity bounded by MAX_AXES, which validation enforced
            let _ = actuators.push(actuator);
        }

        Ok(Self {
            registry,
            actuators,
            tracker: BatchTracker::new(),
            slow_zone: config.slow_zone_steps,
        })
    }

    /// Get the axis registry.
    #[inline]
    pub fn registry(&self) -> &AxisRegistry {
        &self.registry
    }

    /// Get the batch tracker.
    #[inline]
    pub fn tracker(&self) -> &BatchTracker {
        &self.tracker
    }

    /// Get an actuator by axis index.
    #[inline]
    pub fn actuator(&self, index: usize) -> Option<&A> {
        self.actuators.get(index)
    }

    /// Get the slow zone threshold in steps.
    #[inline]
    pub fn slow_zone(&self) -> i64 {
        self.slow_zone
    }

    /// Check whether every axis reports zero remaining distance.
    pub fn all_settled(&self) -> bool {
        self.actuators.iter().all(|a| a.distance_to_go().is_zero())
    }

    /// Run one control-loop iteration.
    pub fn tick<L, R>(&mut self, lines: &mut L, reporter: &mut R)
    where
        L: LineSource,
        R: Reporter,
    {
        // 1. Opportunistic input poll: zero or one line per tick
        if let Some(line) = lines.poll_line() {
            self.process_line(line, reporter);
        }

        // 2. Speed-zone evaluation, every axis, every tick. Running this
        // unconditionally is what makes T/L commands take effect on the
        // very next tick even mid-motion.
        for (record, actuator) in self.registry.iter().zip(self.actuators.iter_mut()) {
            let speed = if actuator.distance_to_go().abs() > self.slow_zone as u64 {
                record.fast_speed()
            } else {
                record.slow_speed()
            };
            actuator.set_cruise_speed(speed);
        }

        // 3. Advance all axes one non-blocking increment, fixed index order
        for actuator in self.actuators.iter_mut() {
            let _ = actuator.tick();
        }

        // 4. Batch completion check
        let all_settled = self.all_settled();
        self.tracker.poll(all_settled, reporter);
    }

    /// Parse and apply one input line, then resolve its acknowledgment.
    ///
    /// Leading/trailing whitespace is trimmed first; blank lines are
    /// ignored entirely (no acknowledgment, no state change).
    pub fn process_line<R: Reporter>(&mut self, line: &str, reporter: &mut R) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }

        self.tracker.begin_line();
        let outcome = run_line(line, &mut self.registry, &mut self.actuators, reporter);
        if outcome.motion_requested {
            self.tracker.note_motion();
        }
        self.tracker.finish_line(reporter);
    }
}
