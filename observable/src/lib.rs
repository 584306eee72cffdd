//! # Tristore Observable
//!
//! Variant 1 of the tristore comparison: a mutable, observable-object
//! store.
//!
//! The store is an ordinary owned object whose mutating methods publish
//! to an explicit listener registry after every applied change. Where a
//! decorator-based library would auto-track field access, here the
//! contract is spelled out: [`ObservableTodoList::subscribe`] registers a
//! listener, the returned guard unsubscribes on drop, and listeners run
//! synchronously inside the mutating call.
//!
//! ## Example
//!
//! ```
//! use tristore_observable::ObservableTodoList;
//!
//! let mut store = ObservableTodoList::seeded(["Get Coffee"]);
//! let subscription = store.subscribe(|items| {
//!     println!("now {} item(s)", items.len());
//! });
//!
//! store.add_todo("Write simpler code"); // prints "now 2 item(s)"
//! assert_eq!(store.unfinished_count(), 2);
//! drop(subscription);
//! ```

pub mod binding;
pub mod store;

pub use binding::ObservableBinding;
pub use store::ObservableTodoList;
