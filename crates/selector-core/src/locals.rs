//! # Theming
//!
//! Widgets read their built-in colors from a thread‑local `Theme` instead of
//! hard‑coding them. Override it for a subtree with `with_theme`:
//!
//! ```rust
//! use selector_core::*;
//!
//! let light = Theme {
//!     surface: Color::from_hex("#F5F5F5"),
//!     on_surface: Color::from_hex("#222222"),
//!     ..Theme::default()
//! };
//!
//! with_theme(light, || {
//!     assert_eq!(theme().on_surface, Color::from_hex("#222222"));
//! });
//! ```

use std::cell::RefCell;

use crate::Color;

thread_local! {
    static THEME_STACK: RefCell<Vec<Theme>> = const { RefCell::new(Vec::new()) };
}

/// Color set shared by the selector widgets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    /// Container surface (option sheet, trigger field).
    pub surface: Color,
    /// Foreground on top of `surface`.
    pub on_surface: Color,
    /// Low-emphasis text, used for section headers.
    pub on_surface_variant: Color,
    /// Accent for the confirm/cancel row.
    pub primary: Color,
    pub outline: Color,
    /// Dimmed layer behind an overlay.
    pub scrim: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            surface: Color::from_hex("#F2F2F2"),
            on_surface: Color::from_hex("#1F1F1F"),
            on_surface_variant: Color::from_hex("#5C5C5C"),
            primary: Color::from_hex("#1A73E8"),
            outline: Color::from_hex("#CCCCCC"),
            scrim: Color::from_hex("#000000B3"),
        }
    }
}

pub fn with_theme<R>(theme: Theme, f: impl FnOnce() -> R) -> R {
    // Pops on unwind too.
    struct Guard;
    impl Drop for Guard {
        fn drop(&mut self) {
            THEME_STACK.with(|st| {
                st.borrow_mut().pop();
            });
        }
    }
    THEME_STACK.with(|st| st.borrow_mut().push(theme));
    let _guard = Guard;
    f()
}

pub fn theme() -> Theme {
    THEME_STACK.with(|st| st.borrow().last().copied().unwrap_or_default())
}
