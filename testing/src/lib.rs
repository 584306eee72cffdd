//! # Tristore Testing
//!
//! Testing utilities and helpers for the tristore workspace.
//!
//! This crate provides:
//! - Mock implementations of environment traits (fixed clock, sequential ids)
//! - Recording doubles for the view and diagnostic contracts
//! - A fluent Given-When-Then harness for pure state transitions
//!
//! ## Example
//!
//! ```
//! use tristore_testing::ReducerTest;
//!
//! #[derive(Clone)]
//! struct State {
//!     count: usize,
//! }
//!
//! enum Action {
//!     Bump,
//! }
//!
//! fn reduce(state: &State, action: &Action) -> State {
//!     match action {
//!         Action::Bump => State { count: state.count + 1 },
//!     }
//! }
//!
//! ReducerTest::new(reduce)
//!     .given_state(State { count: 0 })
//!     .when_action(Action::Bump)
//!     .then_state(|state| assert_eq!(state.count, 1))
//!     .run();
//! ```

pub mod mocks;

// Re-export commonly used items
pub use mocks::{
    FixedClock, RecordingInspector, RecordingSurface, SequentialIds, test_clock,
};
pub use reducer_test::ReducerTest;
