//! Line transport seam.
//!
//! The scheduler reads input opportunistically: zero or one line per tick,
//! never blocking. Byte-stream framing (baud, newline handling, buffering)
//! lives outside the core, behind [`LineSource`].

use heapless::{Deque, String};

/// Maximum accepted line length in bytes.
pub const MAX_LINE: usize = 128;

/// Queue depth of [`LineQueue`].
pub const QUEUE_DEPTH: usize = 8;

/// Non-blocking source of complete input lines.
pub trait LineSource {
    /// Take the next complete line, if one is available right now.
    ///
    /// Must never block. The returned slice stays valid until the next
    /// call on this source.
    fn poll_line(&mut self) -> Option<&str>;
}

/// A bounded in-memory line queue.
///
/// Hosts feed completed lines in (from a serial ISR, a socket reader, a
/// test script) and the scheduler drains one per tick.
#[derive(Default)]
pub struct LineQueue {
    lines: Deque<String<MAX_LINE>, QUEUE_DEPTH>,
    current: Option<String<MAX_LINE>>,
}

impl core::fmt::Debug for LineQueue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LineQueue")
            .field("queued", &self.lines.len())
            .finish()
    }
}

impl LineQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue one line.
    ///
    /// Returns false if the queue is full or the line exceeds
    /// [`MAX_LINE`] bytes; the line is dropped in either case.
    pub fn push(&mut self, line: &str) -> bool {
        let Ok(line) = String::try_from(line) else {
            return false;
        };
        self.lines.push_back(line).is_ok()
    }

    /// Number of queued lines not yet polled.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if no lines are queued.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl LineSource for LineQueue {
    fn poll_line(&mut self) -> Option<&str> {
        self.current = self.lines.pop_front();
        self.current.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut queue = LineQueue::new();
        assert!(queue.push("first"));
        assert!(queue.push("second"));
        assert_eq!(queue.len(), 2);

        assert_eq!(queue.poll_line(), Some("first"));
        assert_eq!(queue.poll_line(), Some("second"));
        assert_eq!(queue.poll_line(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_overlong_line_dropped() {
        let mut queue = LineQueue::new();
        let long = core::str::from_utf8(&[b'x'; MAX_LINE + 1]).unwrap().to_string();
        assert!(!queue.push(&long));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_full_queue_rejects() {
        let mut queue = LineQueue::new();
        for _ in 0..QUEUE_DEPTH {
            assert!(queue.push("P 0 90"));
        }
        assert!(!queue.push("P 0 90"));
    }
}
