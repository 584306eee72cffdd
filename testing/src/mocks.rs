//! Mock implementations for testing.
//!
//! Environment doubles make store behavior deterministic; recording
//! doubles capture what a store pushed through the view and diagnostic
//! contracts so tests can assert on it afterwards.

use chrono::{DateTime, Utc};
use std::cell::RefCell;
use std::rc::Rc;
use tristore_core::environment::{Clock, IdSource};
use tristore_core::inspect::{Inspector, Transition};
use tristore_core::item::TodoId;
use tristore_core::view::{Frame, Surface};
use uuid::Uuid;

/// Fixed clock for deterministic tests
///
/// Always returns the same time, making tests reproducible.
///
/// # Example
///
/// ```
/// use tristore_testing::mocks::test_clock;
/// use tristore_core::environment::Clock;
///
/// let clock = test_clock();
/// assert_eq!(clock.now(), clock.now());
/// ```
#[derive(Debug, Clone)]
pub struct FixedClock {
    time: DateTime<Utc>,
}

impl FixedClock {
    /// Create a new fixed clock with the given time
    #[must_use]
    pub const fn new(time: DateTime<Utc>) -> Self {
        Self { time }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.time
    }
}

/// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
///
/// # Panics
///
/// This function will panic if the hardcoded timestamp fails to parse,
/// which should never happen in practice.
#[must_use]
#[allow(clippy::expect_used)]
pub fn test_clock() -> FixedClock {
    FixedClock::new(
        DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
            .expect("hardcoded timestamp should always parse")
            .with_timezone(&Utc),
    )
}

/// Sequential id source for predictable ids
///
/// Ids are built from a counter, so the n-th minted id is stable across
/// runs. Use [`SequentialIds::nth`] to reconstruct an id a store will
/// have assigned.
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    counter: u128,
}

impl SequentialIds {
    /// Create a source whose first id is `nth(1)`
    #[must_use]
    pub const fn new() -> Self {
        Self { counter: 0 }
    }

    /// The id this source returns on its n-th call (1-based)
    #[must_use]
    pub const fn nth(n: u128) -> TodoId {
        TodoId::from_uuid(Uuid::from_u128(n))
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> TodoId {
        self.counter += 1;
        Self::nth(self.counter)
    }
}

/// Surface double that records every presented frame
///
/// Clones share the same buffer, so a test can keep one handle and hand
/// the other to a binding.
#[derive(Clone, Default)]
pub struct RecordingSurface {
    frames: Rc<RefCell<Vec<Frame>>>,
}

impl RecordingSurface {
    /// Create an empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames presented so far
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frames.borrow().len()
    }

    /// All presented frames, oldest first
    #[must_use]
    pub fn frames(&self) -> Vec<Frame> {
        self.frames.borrow().clone()
    }

    /// The most recently presented frame, if any
    #[must_use]
    pub fn last(&self) -> Option<Frame> {
        self.frames.borrow().last().cloned()
    }
}

impl Surface for RecordingSurface {
    fn present(&mut self, frame: &Frame) {
        self.frames.borrow_mut().push(frame.clone());
    }
}

/// Inspector double that records every reported transition
///
/// Clones share the same buffer.
#[derive(Clone, Default)]
pub struct RecordingInspector {
    transitions: Rc<RefCell<Vec<Transition>>>,
}

impl RecordingInspector {
    /// Create an empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of transitions reported so far
    #[must_use]
    pub fn transition_count(&self) -> usize {
        self.transitions.borrow().len()
    }

    /// All reported transitions, oldest first
    #[must_use]
    pub fn transitions(&self) -> Vec<Transition> {
        self.transitions.borrow().clone()
    }
}

impl Inspector for RecordingInspector {
    fn transition(&mut self, transition: &Transition) {
        self.transitions.borrow_mut().push(transition.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let clock = test_clock();
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn sequential_ids_are_predictable() {
        let mut ids = SequentialIds::new();
        assert_eq!(ids.next_id(), SequentialIds::nth(1));
        assert_eq!(ids.next_id(), SequentialIds::nth(2));
    }

    #[test]
    fn recording_surface_shares_its_buffer_across_clones() {
        let recorder = RecordingSurface::new();
        let mut handle = recorder.clone();
        handle.present(&Frame::new("Test", Vec::new(), ""));
        assert_eq!(recorder.frame_count(), 1);
    }
}
