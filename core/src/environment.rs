//! Injected dependencies for the store variants.
//!
//! External inputs (time, identifier generation) are abstracted behind
//! traits and handed to stores at construction, so tests can substitute
//! deterministic implementations.

use crate::item::TodoId;
use chrono::{DateTime, Utc};

/// Clock trait - abstracts time operations for testability
///
/// # Examples
///
/// ```
/// use tristore_core::environment::{Clock, SystemClock};
///
/// let clock = SystemClock;
/// let now = clock.now();
/// assert!(clock.now() >= now);
/// ```
pub trait Clock {
    /// Get the current time
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Source of fresh todo identifiers
///
/// Every identifier a store assigns comes from its `IdSource`, which makes
/// the uniqueness invariant a property of the source rather than of each
/// call site. The production source is [`UuidSource`]; tests use a
/// sequential source for reproducible ids.
pub trait IdSource {
    /// Mint an identifier that has not been returned by this source before
    fn next_id(&mut self) -> TodoId;
}

/// Production id source backed by random v4 UUIDs
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidSource;

impl IdSource for UuidSource {
    fn next_id(&mut self) -> TodoId {
        TodoId::new()
    }
}
