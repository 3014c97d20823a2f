//! Axis module for stepper-console.
//!
//! Provides the axis registry (static identity plus mutable tuning), the
//! actuator seam the motion primitive plugs into, and a simulated actuator
//! for hosts and tests.

mod actuator;
mod registry;
mod sim;

pub use actuator::AxisActuator;
pub use registry::{Axis, AxisRegistry, MAX_AXES};
pub use sim::SimActuator;
