//! # stepper-console
//!
//! Line-protocol batch control for multi-axis stepper systems.
//!
//! ## Features
//!
//! - **Batch protocol**: one text line = one batch of per-axis commands
//! - **Single acknowledgment**: exactly one `DONE` per batch, emitted once
//!   every commanded axis has settled
//! - **Configuration-driven**: axis tuning and the slow zone come from TOML
//! - **Cooperative scheduling**: one non-blocking tick loop drives polling,
//!   speed-zone switching, and motion for all axes
//! - **no_std compatible**: core library works without standard library
//! - **Actuator-agnostic**: step generation lives behind the [`AxisActuator`]
//!   trait; a deterministic [`SimActuator`] is included for hosts and tests
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stepper_console::{FmtReporter, LineQueue, Scheduler, SimActuator, SystemConfig};
//!
//! // Load configuration from TOML
//! let config: SystemConfig = stepper_console::load_config("axes.toml")?;
//!
//! // One actuator per configured axis
//! let mut scheduler = Scheduler::from_config(&config, |_axis| SimActuator::new())?;
//!
//! let mut lines = LineQueue::new();
//! lines.push("A 2 1000 T 2 2000 P 2 180");
//!
//! let mut out = String::new();
//! let mut reporter = FmtReporter::new(&mut out);
//! loop {
//!     scheduler.tick(&mut lines, &mut reporter);
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod axis;
pub mod config;
pub mod control;
pub mod error;
pub mod protocol;

// Re-exports for ergonomic API
pub use axis::{Axis, AxisActuator, AxisRegistry, SimActuator};
pub use config::{validate_config, AxisConfig, SystemConfig};
pub use control::{BatchState, BatchTracker, LineQueue, LineSource, Scheduler};
pub use error::{Error, Result};
pub use protocol::{FmtReporter, Report, Reporter, Verb};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::load_config;

// Unit types
pub use config::units::{Degrees, Steps};
