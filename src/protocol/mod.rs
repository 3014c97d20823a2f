//! Protocol module for stepper-console.
//!
//! Provides the command grammar, the left-to-right line parser, and the
//! report events that make up the output side of the protocol.

mod command;
mod parser;
mod report;

pub use command::{Command, Verb};
pub use parser::{run_line, LineOutcome};
pub use report::{FmtReporter, Report, Reporter};
