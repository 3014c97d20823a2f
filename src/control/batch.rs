//! Batch completion tracking.
//!
//! One batch = the commands parsed from one input line. The tracker is a
//! two-state machine layered on top of the actuators' individual
//! moving/stopped status: it decides whether a just-parsed batch needs a
//! deferred acknowledgment and emits that acknowledgment at most once.

use crate::protocol::{Report, Reporter};

/// Acknowledgment state of the most recent batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchState {
    /// No batch awaiting completion; its acknowledgment has been sent.
    Idle,
    /// At least one axis was given a new target by the batch that armed
    /// this state; the acknowledgment is still owed.
    Awaiting,
}

/// The per-batch acknowledgment state machine.
///
/// Exists because motion is asynchronous relative to the protocol: a
/// caller must be told, deterministically and exactly once, that a batch's
/// motion has fully stopped, without polling axis state itself.
#[derive(Debug, Clone)]
pub struct BatchTracker {
    state: BatchState,
    /// True iff at least one valid position command was accepted in the
    /// line currently being parsed.
    pending_motion: bool,
}

impl Default for BatchTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchTracker {
    /// Create a tracker with no batch outstanding.
    pub fn new() -> Self {
        Self {
            state: BatchState::Idle,
            pending_motion: false,
        }
    }

    /// Get the current state.
    #[inline]
    pub fn state(&self) -> BatchState {
        self.state
    }

    /// Check whether an acknowledgment is still owed.
    #[inline]
    pub fn is_awaiting(&self) -> bool {
        self.state == BatchState::Awaiting
    }

    /// Start a new line.
    ///
    /// Resets the pending-motion flag. A new line started while still
    /// Awaiting supersedes the previous batch's wait: the old batch never
    /// gets its own acknowledgment, the new one takes over.
    pub fn begin_line(&mut self) {
        self.pending_motion = false;
    }

    /// Record that the current line accepted a valid position command.
    pub fn note_motion(&mut self) {
        self.pending_motion = true;
    }

    /// Finish the current line, whether parsing reached the end of the
    /// line or halted on a malformed/unknown token.
    ///
    /// With no motion pending the acknowledgment is emitted immediately;
    /// otherwise the tracker arms and defers to [`poll`](Self::poll).
    pub fn finish_line<R: Reporter>(&mut self, reporter: &mut R) {
        if self.pending_motion {
            self.state = BatchState::Awaiting;
        } else {
            reporter.report(Report::Done);
            self.state = BatchState::Idle;
        }
    }

    /// Per-tick completion check.
    ///
    /// The first tick on which every axis reports zero remaining distance
    /// while Awaiting emits the acknowledgment; the state transition to
    /// Idle guarantees it is never emitted twice for the same batch.
    pub fn poll<R: Reporter>(&mut self, all_settled: bool, reporter: &mut R) {
        if self.state == BatchState::Awaiting && all_settled {
            reporter.report(Report::Done);
            self.state = BatchState::Idle;
        }
    }
}
