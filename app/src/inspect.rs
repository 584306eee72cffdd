//! Diagnostic transition logging.

use tristore_core::inspect::{Inspector, Transition};

/// Inspector that forwards transitions to the tracing pipeline
///
/// Wired in when `TRISTORE_INSPECT` is set. The stores run identically
/// without it.
#[derive(Clone, Copy, Debug, Default)]
pub struct TraceInspector;

impl Inspector for TraceInspector {
    fn transition(&mut self, transition: &Transition) {
        tracing::info!(
            seq = transition.seq,
            at = %transition.at,
            action = %transition.action,
            len = transition.len,
            unfinished = transition.unfinished,
            "transition"
        );
    }
}
