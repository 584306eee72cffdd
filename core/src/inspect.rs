//! Optional diagnostic hook invoked on every state transition.
//!
//! Stores accept an [`Inspector`] at construction. It is absent by
//! default and never consulted for correctness; when present it receives
//! one [`Transition`] record per applied mutation, synchronously, after
//! the mutation has been applied.

use chrono::{DateTime, Utc};

/// Record of one applied state transition
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Sequence number of the transition within its store, starting at 1
    pub seq: u64,
    /// When the transition was applied, per the store's clock
    pub at: DateTime<Utc>,
    /// Description of the action that caused the transition
    pub action: String,
    /// List length after the transition
    pub len: usize,
    /// Unfinished count after the transition
    pub unfinished: usize,
}

/// Diagnostic callback contract
///
/// Rejected operations (empty text, unknown id) do not transition state
/// and are never reported.
pub trait Inspector {
    /// Called synchronously after each applied transition
    fn transition(&mut self, transition: &Transition);
}
