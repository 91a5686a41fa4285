//! # Views, state and reducers
//!
//! The selector widgets are plain functions that return a [`View`] tree. A
//! host renderer walks that tree, draws it and feeds input back through the
//! callbacks stored on `Pressable`, `Switch` and `Overlay` nodes. Nothing in
//! this crate draws or lays out anything.
//!
//! Every node built inside [`compose`] gets a [`ViewId`] that is unique for
//! that pass. State that must survive between passes lives in one of two
//! places:
//!
//! - keyed `remember_with_key` slots bound to the composition.
//! - a [`Store`], which keeps an immutable snapshot of a [`StateHolder`] and
//!   replaces it on every event:
//!
//! ```rust
//! use selector_core::*;
//!
//! #[derive(Clone)]
//! struct Counter(u32);
//!
//! impl StateHolder for Counter {
//!     type Event = u32;
//!     fn reduce(&self, by: u32) -> Self {
//!         Counter(self.0 + by)
//!     }
//! }
//!
//! let store = Store::new(Counter(0));
//! store.dispatch(2);
//! assert_eq!(store.get().0, 2);
//! ```
//!
//! Keyed slots are the usual way to keep one store per widget instance:
//!
//! ```rust
//! use selector_core::*;
//!
//! let a = remember_with_key("counter", || signal(1));
//! let b = remember_with_key("counter", || signal(99));
//! assert_eq!(b.get(), 1); // same slot
//! a.set(3);
//! assert_eq!(b.get(), 3);
//! assert!(forget_key("counter"));
//! ```

pub mod color;
pub mod error;
pub mod locals;
pub mod modifier;
pub mod presentation;
pub mod runtime;
pub mod semantics;
pub mod signal;
pub mod state;
pub mod tests;
pub mod view;

pub use color::*;
pub use error::*;
pub use locals::*;
pub use modifier::*;
pub use presentation::*;
pub use runtime::*;
pub use semantics::*;
pub use signal::*;
pub use state::*;
pub use view::*;

pub use taffy::{AlignItems, JustifyContent};
