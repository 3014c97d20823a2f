//! Control module for stepper-console.
//!
//! Provides the batch completion tracker, the line transport seam, and the
//! cooperative tick scheduler that drives all axes.

mod batch;
mod scheduler;
mod transport;

pub use batch::{BatchState, BatchTracker};
pub use scheduler::Scheduler;
pub use transport::{LineQueue, LineSource, MAX_LINE, QUEUE_DEPTH};
