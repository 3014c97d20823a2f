//! Command grammar - verbs and parsed commands.

use crate::config::units::Degrees;

/// A protocol verb.
///
/// Verb tokens are case-insensitive. `A`/`T`/`L`/`P` take an axis index
/// and a numeric value; `D` takes only an index; `ALL` takes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    /// `A idx val` - set axis acceleration.
    Acceleration,
    /// `T idx val` - set axis fast (cruise) speed.
    FastSpeed,
    /// `L idx val` - set axis slow (near-target) speed.
    SlowSpeed,
    /// `P idx deg` - command an absolute move in degrees.
    Position,
    /// `D idx` - report one axis's status.
    Status,
    /// `ALL` - report every axis's status.
    StatusAll,
}

impl Verb {
    /// Recognize a verb token, case-insensitively.
    pub fn parse(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("ALL") {
            return Some(Verb::StatusAll);
        }
        if token.len() != 1 {
            return None;
        }
        match token.as_bytes()[0].to_ascii_uppercase() {
            b'A' => Some(Verb::Acceleration),
            b'T' => Some(Verb::FastSpeed),
            b'L' => Some(Verb::SlowSpeed),
            b'P' => Some(Verb::Position),
            b'D' => Some(Verb::Status),
            _ => None,
        }
    }

    /// The canonical token for this verb.
    pub fn token(self) -> &'static str {
        match self {
            Verb::Acceleration => "A",
            Verb::FastSpeed => "T",
            Verb::SlowSpeed => "L",
            Verb::Position => "P",
            Verb::Status => "D",
            Verb::StatusAll => "ALL",
        }
    }

    /// Number of argument tokens the verb consumes.
    pub fn arg_count(self) -> usize {
        match self {
            Verb::StatusAll => 0,
            Verb::Status => 1,
            _ => 2,
        }
    }
}

/// One fully parsed command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Set acceleration of one axis, pushed to its actuator immediately.
    SetAcceleration {
        /// Target axis index.
        axis: usize,
        /// New acceleration in steps/s².
        value: f32,
    },
    /// Set the fast (cruise) speed of one axis.
    SetFastSpeed {
        /// Target axis index.
        axis: usize,
        /// New speed in steps/s.
        value: f32,
    },
    /// Set the slow (near-target) speed of one axis.
    SetSlowSpeed {
        /// Target axis index.
        axis: usize,
        /// New speed in steps/s.
        value: f32,
    },
    /// Move one axis to an absolute angle.
    MoveTo {
        /// Target axis index.
        axis: usize,
        /// Commanded absolute angle.
        degrees: Degrees,
    },
    /// Report the status of one axis.
    Status {
        /// Target axis index.
        axis: usize,
    },
    /// Report the status of every axis.
    StatusAll,
}
