#![allow(non_snake_case)]
//! # Modal selector
//!
//! A pressable field that opens an overlay listing options. In single-select
//! mode a pick is reported, shown in the field and closes the overlay. In
//! multi-select mode every option carries a toggle, the field shows the
//! selected labels joined with `,`, and the overlay stays open until it is
//! dismissed or the trailing "Done" row is pressed.
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use modal_selector::*;
//! use selector_core::compose;
//! use selector_ui::interact::press_text;
//!
//! let picked = Rc::new(RefCell::new(None));
//! let props = SelectorProps::new([SelectOption::new("a", "Apple")]).on_change({
//!     let picked = picked.clone();
//!     move |o: &SelectOption| *picked.borrow_mut() = Some(o.key.clone())
//! });
//!
//! let handle = SelectorHandle::new("demo", &props);
//! handle.open();
//! let view = compose(|| ModalSelector(&handle, props.clone()));
//! assert!(press_text(&view, "Apple"));
//!
//! assert_eq!(picked.borrow().as_deref(), Some("a"));
//! assert_eq!(handle.trigger_text(), "Apple");
//! assert!(!handle.is_open());
//! ```
//!
//! State lives in an immutable [`SelectorState`] snapshot that only moves
//! through [`SelectorEvent`]s; configuration updates go through [`reconcile`].

pub mod option;
pub mod props;
mod render;
pub mod selection;
pub mod selector;
pub mod state;
pub mod style;

pub use option::SelectOption;
pub use props::*;
pub use selection::MultiSelection;
pub use selector::{FOOTER_KEY, ModalSelector, SelectorHandle, remember_selector};
pub use state::{Selection, SelectorEvent, SelectorState, reconcile};
pub use style::{SelectorStyles, TextStyleOverride};
