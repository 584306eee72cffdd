//! # Tristore Core
//!
//! Shared vocabulary for the tristore workspace: three independent
//! state-management architectures (observable object, immutable reducer,
//! model tree) built over the same todo-list feature.
//!
//! This crate holds only the types every variant speaks:
//!
//! - **Item**: [`TodoId`] and [`TodoItem`], the single domain entity
//! - **Environment**: injected dependencies behind traits ([`environment::Clock`],
//!   [`environment::IdSource`])
//! - **Listeners**: the synchronous publish/subscribe registry variants use
//!   to drive their view-bindings
//! - **Inspect**: the optional diagnostic hook invoked on state transitions
//! - **View**: the render contract between a store and its view-binding
//!
//! The store implementations themselves live in their own crates
//! (`tristore-observable`, `tristore-reducer`, `tristore-model-tree`) and do
//! not depend on one another.
//!
//! ## Concurrency model
//!
//! Everything here is single-threaded by design: stores are owned by one
//! session, mutations and the notifications they trigger complete
//! synchronously within the calling turn, and shared interior access uses
//! `Rc`/`RefCell` rather than locks.

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use serde::{Deserialize, Serialize};

pub mod environment;
pub mod inspect;
pub mod item;
pub mod listeners;
pub mod view;

pub use inspect::{Inspector, Transition};
pub use item::{TodoId, TodoItem, unfinished_count};
pub use listeners::{ListenerSet, Subscription};
pub use view::{Frame, Surface, TodoRow, ViewEvent};
