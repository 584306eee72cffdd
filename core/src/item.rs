//! The todo item entity shared by every store variant.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a todo item
///
/// Assigned once at creation and immutable afterwards. Production code
/// mints these through [`crate::environment::IdSource`] so tests can
/// substitute a deterministic source.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TodoId(Uuid);

impl TodoId {
    /// Creates a new random `TodoId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a `TodoId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo item
///
/// `id` and `text` are fixed at creation; `completed` is flipped by
/// exactly one operation ([`TodoItem::toggle`]).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier
    pub id: TodoId,
    /// Text of the todo, non-empty after trimming
    pub text: String,
    /// Whether the todo is completed
    pub completed: bool,
}

impl TodoItem {
    /// Creates a new, unfinished todo item
    #[must_use]
    pub const fn new(id: TodoId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }

    /// Flips the completed flag
    pub const fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// Live count of items whose `completed` flag is unset.
///
/// Derived values are recomputed on demand, never cached, so the result
/// always agrees with the list it is computed over.
#[must_use]
pub fn unfinished_count(items: &[TodoItem]) -> usize {
    items.iter().filter(|item| !item.completed).count()
}
