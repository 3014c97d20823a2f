//! Line parser - turns one line of text into per-axis actions.
//!
//! Tokens are consumed strictly left to right and every command is fully
//! applied (or rejected) before the next token is read. The failure policy
//! distinguishes three cases:
//!
//! - out-of-range axis index (or non-numeric token): notice, skip that one
//!   command, keep parsing the line;
//! - verb with missing argument tokens: notice, abandon the rest of the
//!   line, earlier effects stand;
//! - unrecognized verb: same halting behavior.

use core::str::SplitWhitespace;

use crate::axis::{AxisActuator, AxisRegistry};
use crate::config::units::{Degrees, Steps};
use crate::error::ProtocolError;

use super::command::{Command, Verb};
use super::report::{Report, Reporter};

/// What the parser decided about one verb and its argument tokens.
#[derive(Debug, Clone, PartialEq)]
enum ParseStep {
    /// Command parsed and range-checked; apply it.
    Apply(Command),
    /// This command is rejected; report and keep parsing the line.
    Skip(ProtocolError),
    /// This command is rejected; report and abandon the rest of the line.
    Halt(ProtocolError),
}

/// Result of running one line through the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineOutcome {
    /// True iff at least one valid `P` command was accepted.
    pub motion_requested: bool,
}

/// Parse and apply one line of text against the registry and actuators.
///
/// Every accepted command and every rejection is reported as it happens.
/// The caller decides what the returned [`LineOutcome`] means for batch
/// acknowledgment; the parser never emits [`Report::Done`] itself.
///
/// `actuators` must hold one actuator per registry axis, in index order.
pub fn run_line<A, R>(
    line: &str,
    registry: &mut AxisRegistry,
    actuators: &mut [A],
    reporter: &mut R,
) -> LineOutcome
where
    A: AxisActuator,
    R: Reporter,
{
    debug_assert_eq!(registry.len(), actuators.len());

    let mut outcome = LineOutcome::default();
    let mut tokens = line.split_whitespace();

    while let Some(token) = tokens.next() {
        let step = match Verb::parse(token) {
            Some(verb) => next_command(verb, &mut tokens, registry.len()),
            None => ParseStep::Halt(ProtocolError::unknown(token)),
        };

        match step {
            ParseStep::Apply(command) => {
                if apply(command, registry, actuators, reporter) {
                    outcome.motion_requested = true;
                }
            }
            ParseStep::Skip(err) => reporter.report(Report::Rejected(err)),
            ParseStep::Halt(err) => {
                reporter.report(Report::Rejected(err));
                break;
            }
        }
    }

    outcome
}

/// Consume a verb's argument tokens and build the command.
fn next_command(verb: Verb, tokens: &mut SplitWhitespace<'_>, axis_count: usize) -> ParseStep {
    if verb == Verb::StatusAll {
        return ParseStep::Apply(Command::StatusAll);
    }

    let Some(index_token) = tokens.next() else {
        return ParseStep::Halt(ProtocolError::MalformedCommand(verb));
    };

    let value_token = if verb.arg_count() == 2 {
        match tokens.next() {
            Some(t) => Some(t),
            None => return ParseStep::Halt(ProtocolError::MalformedCommand(verb)),
        }
    } else {
        None
    };

    // Both argument tokens are consumed at this point; anything below
    // rejects only this command.
    let raw_index: i64 = match index_token.parse() {
        Ok(i) => i,
        Err(_) => return ParseStep::Skip(ProtocolError::invalid_number(index_token)),
    };
    // try_from keeps the range check exact on 32-bit targets, where an
    // `as usize` cast of an over-u32 index would wrap into range
    let axis = match usize::try_from(raw_index) {
        Ok(axis) if axis < axis_count => axis,
        _ => return ParseStep::Skip(ProtocolError::IndexOutOfRange(raw_index)),
    };

    let value: f32 = match value_token {
        Some(t) => match t.parse() {
            Ok(v) => v,
            Err(_) => return ParseStep::Skip(ProtocolError::invalid_number(t)),
        },
        None => 0.0,
    };

    ParseStep::Apply(match verb {
        Verb::Acceleration => Command::SetAcceleration { axis, value },
        Verb::FastSpeed => Command::SetFastSpeed { axis, value },
        Verb::SlowSpeed => Command::SetSlowSpeed { axis, value },
        Verb::Position => Command::MoveTo {
            axis,
            degrees: Degrees(value),
        },
        Verb::Status => Command::Status { axis },
        // Handled by the early return above; kept total
        Verb::StatusAll => Command::StatusAll,
    })
}

/// Apply one range-checked command. Returns true iff it commanded motion.
fn apply<A, R>(
    command: Command,
    registry: &mut AxisRegistry,
    actuators: &mut [A],
    reporter: &mut R,
) -> bool
where
    A: AxisActuator,
    R: Reporter,
{
    match command {
        Command::SetAcceleration { axis, value } => {
            if let Ok(record) = registry.axis_mut(axis) {
                record.set_acceleration(value);
                // Acceleration is the one tuning value the actuator
                // consumes immediately
                actuators[axis].set_acceleration(value);
                reporter.report(Report::AccelerationSet { axis, value });
            }
            false
        }
        Command::SetFastSpeed { axis, value } => {
            if let Ok(record) = registry.axis_mut(axis) {
                record.set_fast_speed(value);
                reporter.report(Report::FastSpeedSet { axis, value });
            }
            false
        }
        Command::SetSlowSpeed { axis, value } => {
            if let Ok(record) = registry.axis_mut(axis) {
                record.set_slow_speed(value);
                reporter.report(Report::SlowSpeedSet { axis, value });
            }
            false
        }
        Command::MoveTo { axis, degrees } => {
            let Ok(record) = registry.axis(axis) else {
                return false;
            };
            let target = Steps::from_degrees(degrees, record.steps_per_revolution());
            actuators[axis].move_to(target);
            reporter.report(Report::MoveCommanded {
                axis,
                degrees,
                target,
            });
            true
        }
        Command::Status { axis } => {
            report_status(axis, registry, actuators, reporter);
            false
        }
        Command::StatusAll => {
            for axis in 0..registry.len() {
                report_status(axis, registry, actuators, reporter);
            }
            false
        }
    }
}

fn report_status<A, R>(
    axis: usize,
    registry: &AxisRegistry,
    actuators: &[A],
    reporter: &mut R,
) where
    A: AxisActuator,
    R: Reporter,
{
    if let Ok(record) = registry.axis(axis) {
        reporter.report(Report::AxisStatus {
            axis,
            remaining: actuators[axis].distance_to_go(),
            acceleration: record.acceleration(),
            fast_speed: record.fast_speed(),
            slow_speed: record.slow_speed(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::SimActuator;
    use crate::config::{AxisConfig, SystemConfig};

    struct Recorder(std::vec::Vec<Report>);

    impl Reporter for Recorder {
        fn report(&mut self, report: Report) {
            self.0.push(report);
        }
    }

    fn fixture(axes: usize) -> (AxisRegistry, std::vec::Vec<SimActuator>, Recorder) {
        let mut configs = heapless::Vec::new();
        for _ in 0..axes {
            configs
                .push(AxisConfig {
                    steps_per_revolution: 200,
                    acceleration: 1000.0,
                    fast_speed: 2000.0,
                    slow_speed: 200.0,
                    invert_direction: false,
                })
                .unwrap();
        }
        let config = SystemConfig {
            slow_zone_steps: 100,
            axes: configs,
        };
        let registry = AxisRegistry::from_config(&config);
        let actuators = (0..axes).map(|_| SimActuator::new()).collect();
        (registry, actuators, Recorder(std::vec::Vec::new()))
    }

    #[test]
    fn test_tuning_verbs() {
        let (mut registry, mut actuators, mut rec) = fixture(6);
        let outcome = run_line("A 1 500 T 1 3000 L 1 50", &mut registry, &mut actuators, &mut rec);

        assert!(!outcome.motion_requested);
        let axis = registry.axis(1).unwrap();
        assert!((axis.acceleration() - 500.0).abs() < 0.01);
        assert!((axis.fast_speed() - 3000.0).abs() < 0.01);
        assert!((axis.slow_speed() - 50.0).abs() < 0.01);
        // Acceleration reached the actuator immediately, speeds did not
        assert!((actuators[1].acceleration() - 500.0).abs() < 0.01);
        assert!((actuators[1].cruise_speed()).abs() < 0.01);
        assert_eq!(rec.0.len(), 3);
    }

    #[test]
    fn test_position_converts_degrees() {
        let (mut registry, mut actuators, mut rec) = fixture(6);
        let outcome = run_line("P 0 180", &mut registry, &mut actuators, &mut rec);

        assert!(outcome.motion_requested);
        assert_eq!(actuators[0].target(), Steps(100));
        assert_eq!(
            rec.0,
            vec![Report::MoveCommanded {
                axis: 0,
                degrees: Degrees(180.0),
                target: Steps(100),
            }]
        );
    }

    #[test]
    fn test_negative_degrees_reverse() {
        let (mut registry, mut actuators, mut rec) = fixture(6);
        run_line("P 0 -90", &mut registry, &mut actuators, &mut rec);
        assert_eq!(actuators[0].target(), Steps(-50));
    }

    #[test]
    fn test_multi_axis_batch() {
        let (mut registry, mut actuators, mut rec) = fixture(6);
        let outcome = run_line(
            "P 2 200 P 1 200 P 0 -200",
            &mut registry,
            &mut actuators,
            &mut rec,
        );

        assert!(outcome.motion_requested);
        assert_eq!(actuators[2].target(), Steps(111));
        assert_eq!(actuators[1].target(), Steps(111));
        assert_eq!(actuators[0].target(), Steps(-111));
        assert_eq!(rec.0.len(), 3);
    }

    #[test]
    fn test_out_of_range_index_skips_and_continues() {
        let (mut registry, mut actuators, mut rec) = fixture(6);
        let outcome = run_line("P 7 90 A 0 500", &mut registry, &mut actuators, &mut rec);

        // The move was rejected but the later command still applied
        assert!(!outcome.motion_requested);
        assert!((registry.axis(0).unwrap().acceleration() - 500.0).abs() < 0.01);
        assert_eq!(
            rec.0[0],
            Report::Rejected(ProtocolError::IndexOutOfRange(7))
        );
        assert_eq!(rec.0.len(), 2);
    }

    #[test]
    fn test_negative_index_is_out_of_range() {
        let (mut registry, mut actuators, mut rec) = fixture(6);
        run_line("P -1 90", &mut registry, &mut actuators, &mut rec);
        assert_eq!(
            rec.0,
            vec![Report::Rejected(ProtocolError::IndexOutOfRange(-1))]
        );
    }

    #[test]
    fn test_index_wider_than_u32_is_out_of_range() {
        let (mut registry, mut actuators, mut rec) = fixture(6);
        // 2^32: wraps to 0 under a plain `as usize` cast on 32-bit
        // targets, must still be rejected there
        let outcome = run_line("P 4294967296 90", &mut registry, &mut actuators, &mut rec);

        assert!(!outcome.motion_requested);
        assert_eq!(actuators[0].target(), Steps(0));
        assert_eq!(
            rec.0,
            vec![Report::Rejected(ProtocolError::IndexOutOfRange(4294967296))]
        );
    }

    #[test]
    fn test_missing_argument_halts_line() {
        let (mut registry, mut actuators, mut rec) = fixture(6);
        let outcome = run_line("A 0", &mut registry, &mut actuators, &mut rec);

        assert!(!outcome.motion_requested);
        // No acceleration change
        assert!((registry.axis(0).unwrap().acceleration() - 1000.0).abs() < 0.01);
        assert_eq!(
            rec.0,
            vec![Report::Rejected(ProtocolError::MalformedCommand(
                Verb::Acceleration
            ))]
        );
    }

    #[test]
    fn test_malformed_keeps_earlier_effects() {
        let (mut registry, mut actuators, mut rec) = fixture(6);
        let outcome = run_line("P 0 90 T 1", &mut registry, &mut actuators, &mut rec);

        // The accepted move stands even though the line halted afterwards
        assert!(outcome.motion_requested);
        assert_eq!(actuators[0].target(), Steps(50));
        assert_eq!(rec.0.len(), 2);
        assert!(matches!(
            rec.0[1],
            Report::Rejected(ProtocolError::MalformedCommand(Verb::FastSpeed))
        ));
    }

    #[test]
    fn test_unknown_verb_halts_line() {
        let (mut registry, mut actuators, mut rec) = fixture(6);
        run_line("Q 0 90 A 0 500", &mut registry, &mut actuators, &mut rec);

        // Nothing after the unknown token was applied
        assert!((registry.axis(0).unwrap().acceleration() - 1000.0).abs() < 0.01);
        assert_eq!(rec.0.len(), 1);
        assert!(matches!(
            rec.0[0],
            Report::Rejected(ProtocolError::UnknownCommand(_))
        ));
    }

    #[test]
    fn test_non_numeric_value_skips_and_continues() {
        let (mut registry, mut actuators, mut rec) = fixture(6);
        let outcome = run_line("P 0 fast A 1 500", &mut registry, &mut actuators, &mut rec);

        assert!(!outcome.motion_requested);
        assert_eq!(actuators[0].target(), Steps(0));
        assert!((registry.axis(1).unwrap().acceleration() - 500.0).abs() < 0.01);
        assert!(matches!(
            rec.0[0],
            Report::Rejected(ProtocolError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_case_insensitive_verbs() {
        let (mut registry, mut actuators, mut rec) = fixture(6);
        let outcome = run_line("p 0 90", &mut registry, &mut actuators, &mut rec);
        assert!(outcome.motion_requested);
        assert_eq!(actuators[0].target(), Steps(50));
    }

    #[test]
    fn test_status_verbs_report_without_motion() {
        let (mut registry, mut actuators, mut rec) = fixture(3);
        actuators[1].move_to(Steps(40));

        let outcome = run_line("D 1 ALL", &mut registry, &mut actuators, &mut rec);

        assert!(!outcome.motion_requested);
        // One report for D, three for ALL
        assert_eq!(rec.0.len(), 4);
        assert_eq!(
            rec.0[0],
            Report::AxisStatus {
                axis: 1,
                remaining: Steps(40),
                acceleration: 1000.0,
                fast_speed: 2000.0,
                slow_speed: 200.0,
            }
        );
    }

    #[test]
    fn test_empty_line_is_noop() {
        let (mut registry, mut actuators, mut rec) = fixture(6);
        let outcome = run_line("", &mut registry, &mut actuators, &mut rec);
        assert!(!outcome.motion_requested);
        assert!(rec.0.is_empty());
    }
}
