//! Report events - the observable output protocol.
//!
//! Every acknowledgment the system emits is a [`Report`] delivered through
//! a [`Reporter`]. The human-readable rendering lives in [`FmtReporter`];
//! the exact text is not contractual, but each event is a distinct variant
//! so callers (and tests) can tell them apart without string matching.

use core::fmt;

use crate::config::units::{Degrees, Steps};
use crate::error::ProtocolError;

/// One observable protocol event.
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    /// An `A` command was accepted.
    AccelerationSet {
        /// Axis index.
        axis: usize,
        /// New acceleration in steps/s².
        value: f32,
    },
    /// A `T` command was accepted.
    FastSpeedSet {
        /// Axis index.
        axis: usize,
        /// New speed in steps/s.
        value: f32,
    },
    /// An `L` command was accepted.
    SlowSpeedSet {
        /// Axis index.
        axis: usize,
        /// New speed in steps/s.
        value: f32,
    },
    /// A `P` command was accepted.
    MoveCommanded {
        /// Axis index.
        axis: usize,
        /// Commanded angle.
        degrees: Degrees,
        /// Computed absolute step target.
        target: Steps,
    },
    /// Status of one axis (`D` / `ALL`).
    AxisStatus {
        /// Axis index.
        axis: usize,
        /// Signed remaining distance to the commanded target.
        remaining: Steps,
        /// Current acceleration in steps/s².
        acceleration: f32,
        /// Current fast speed in steps/s.
        fast_speed: f32,
        /// Current slow speed in steps/s.
        slow_speed: f32,
    },
    /// A command was rejected; processing continued or halted per the
    /// error kind's failure policy.
    Rejected(ProtocolError),
    /// Batch completion acknowledgment, exactly once per batch.
    Done,
}

/// Sink for protocol events.
pub trait Reporter {
    /// Deliver one event.
    fn report(&mut self, report: Report);
}

/// Renders each event as one text line on a [`core::fmt::Write`] sink.
///
/// Write errors are discarded: the output stream is fire-and-forget, like
/// a serial console.
#[derive(Debug)]
pub struct FmtReporter<W: fmt::Write> {
    writer: W,
}

impl<W: fmt::Write> FmtReporter<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Unwrap the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: fmt::Write> Reporter for FmtReporter<W> {
    fn report(&mut self, report: Report) {
        let _ = match report {
            Report::AccelerationSet { axis, value } => {
                writeln!(self.writer, "A {} {}", axis, value)
            }
            Report::FastSpeedSet { axis, value } => writeln!(self.writer, "T {} {}", axis, value),
            Report::SlowSpeedSet { axis, value } => writeln!(self.writer, "L {} {}", axis, value),
            Report::MoveCommanded {
                axis,
                degrees,
                target,
            } => writeln!(
                self.writer,
                "P {} {} -> {} steps",
                axis,
                degrees.value(),
                target.value()
            ),
            Report::AxisStatus {
                axis,
                remaining,
                acceleration,
                fast_speed,
                slow_speed,
            } => writeln!(
                self.writer,
                "M{} remaining={} accel={} fast={} slow={}",
                axis,
                remaining.value(),
                acceleration,
                fast_speed,
                slow_speed
            ),
            Report::Rejected(err) => writeln!(self.writer, "ERR {}", err),
            Report::Done => writeln!(self.writer, "DONE"),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_reporter_renders_done() {
        let mut out = heapless::String::<64>::new();
        let mut reporter = FmtReporter::new(&mut out);
        reporter.report(Report::Done);
        assert_eq!(out.as_str(), "DONE\n");
    }

    #[test]
    fn test_fmt_reporter_renders_move() {
        let mut out = heapless::String::<64>::new();
        let mut reporter = FmtReporter::new(&mut out);
        reporter.report(Report::MoveCommanded {
            axis: 2,
            degrees: Degrees(180.0),
            target: Steps(100),
        });
        assert_eq!(out.as_str(), "P 2 180 -> 100 steps\n");
    }

    #[test]
    fn test_fmt_reporter_renders_rejection() {
        let mut out = heapless::String::<64>::new();
        let mut reporter = FmtReporter::new(&mut out);
        reporter.report(Report::Rejected(ProtocolError::IndexOutOfRange(7)));
        assert!(out.as_str().starts_with("ERR "));
        assert!(out.as_str().contains('7'));
    }
}
