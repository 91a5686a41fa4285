#![allow(non_snake_case)]
//! Primitive builders the selector composes, plus host-side interaction.

pub mod interact;

use std::rc::Rc;

use selector_core::*;

pub fn Box(modifier: Modifier) -> View {
    View::new(next_view_id(), ViewKind::Box).modifier(modifier)
}

pub fn Row(modifier: Modifier) -> View {
    View::new(next_view_id(), ViewKind::Row).modifier(modifier)
}

pub fn Column(modifier: Modifier) -> View {
    View::new(next_view_id(), ViewKind::Column).modifier(modifier)
}

/// Vertical scroll container. `persist_taps` is handed to the host as is.
pub fn ScrollArea(modifier: Modifier, persist_taps: KeyboardPersistTaps) -> View {
    View::new(
        next_view_id(),
        ViewKind::ScrollV {
            keyboard_should_persist_taps: persist_taps,
        },
    )
    .modifier(modifier)
    .semantics(Semantics::new(Role::ScrollView))
}

pub fn Text(text: impl Into<String>) -> View {
    View::new(
        next_view_id(),
        ViewKind::Text {
            text: text.into(),
            color: theme().on_surface,
            font_size: 16.0,
        },
    )
}

/// Touch target wrapping `child`. A disabled pressable swallows presses.
pub fn Pressable(modifier: Modifier, enabled: bool, on_press: impl Fn() + 'static, child: View) -> View {
    View::new(
        next_view_id(),
        ViewKind::Pressable {
            on_press: Some(Rc::new(on_press)),
            enabled,
        },
    )
    .modifier(modifier)
    .semantics(Semantics::new(Role::Button).enabled(enabled))
    .with_children(vec![child])
}

pub fn Switch(checked: bool, on_change: impl Fn(bool) + 'static) -> View {
    View::new(
        next_view_id(),
        ViewKind::Switch {
            checked,
            on_change: Some(Rc::new(on_change)),
        },
    )
    .semantics(Semantics::new(Role::Switch))
}

/// Presentation options for [`Overlay`].
#[derive(Clone, Debug)]
pub struct OverlayConfig {
    pub key: String,
    pub visible: bool,
    pub transparent: bool,
    pub animation: AnimationType,
    pub supported_orientations: Vec<Orientation>,
}

/// Layered content above the main view. `content` is only built while the
/// overlay is visible; `on_request_close` receives the host's dismiss signal
/// (hardware back and the like).
pub fn Overlay(
    config: OverlayConfig,
    on_request_close: impl Fn() + 'static,
    content: impl FnOnce() -> View,
) -> View {
    let children = if config.visible {
        vec![content()]
    } else {
        vec![]
    };
    View::new(
        next_view_id(),
        ViewKind::Overlay {
            key: config.key,
            visible: config.visible,
            transparent: config.transparent,
            animation: config.animation,
            supported_orientations: config.supported_orientations,
            on_request_close: Some(Rc::new(on_request_close)),
        },
    )
    .semantics(Semantics::new(Role::Dialog))
    .with_children(children)
}

/// Extension trait for child building
pub trait ViewExt: Sized {
    fn child(self, children: impl IntoChildren) -> Self;
}

impl ViewExt for View {
    fn child(self, children: impl IntoChildren) -> Self {
        self.with_children(children.into_children())
    }
}

pub trait IntoChildren {
    fn into_children(self) -> Vec<View>;
}

impl IntoChildren for View {
    fn into_children(self) -> Vec<View> {
        vec![self]
    }
}

impl IntoChildren for Vec<View> {
    fn into_children(self) -> Vec<View> {
        self
    }
}

impl IntoChildren for Option<View> {
    fn into_children(self) -> Vec<View> {
        self.into_iter().collect()
    }
}

macro_rules! impl_into_children_tuple {
    ($($idx:tt $t:ident),+) => {
        impl<$($t: IntoChildren),+> IntoChildren for ($($t,)+) {
            fn into_children(self) -> Vec<View> {
                let mut v = Vec::new();
                $(v.extend(self.$idx.into_children());)+
                v
            }
        }
    };
}

impl_into_children_tuple!(0 A, 1 B);
impl_into_children_tuple!(0 A, 1 B, 2 C);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D);

/// Method styling for `Text` nodes; no-ops on anything else.
pub trait TextStyle {
    fn color(self, c: Color) -> View;
    fn size(self, font_size: f32) -> View;
}

impl TextStyle for View {
    fn color(mut self, c: Color) -> View {
        if let ViewKind::Text {
            color: text_color, ..
        } = &mut self.kind
        {
            *text_color = c;
        }
        self
    }
    fn size(mut self, size: f32) -> View {
        if let ViewKind::Text { font_size, .. } = &mut self.kind {
            *font_size = size;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_overlay_does_not_build_content() {
        let built = std::cell::Cell::new(false);
        let overlay = Overlay(
            OverlayConfig {
                key: "o".into(),
                visible: false,
                transparent: true,
                animation: AnimationType::Slide,
                supported_orientations: vec![Orientation::Portrait],
            },
            || {},
            || {
                built.set(true);
                Text("hidden")
            },
        );
        assert!(!built.get());
        assert!(overlay.children.is_empty());
    }

    #[test]
    fn text_style_only_touches_text() {
        let t = Text("x").color(Color::BLACK).size(12.0);
        match t.kind {
            ViewKind::Text {
                color, font_size, ..
            } => {
                assert_eq!(color, Color::BLACK);
                assert_eq!(font_size, 12.0);
            }
            other => panic!("unexpected {other:?}"),
        }
        let b = Box(Modifier::new()).color(Color::WHITE);
        assert!(matches!(b.kind, ViewKind::Box));
    }

    #[test]
    fn tuple_children_flatten_options() {
        let col = Column(Modifier::new()).child((Text("a"), None::<View>, vec![Text("b"), Text("c")]));
        assert_eq!(col.collect_text(), vec!["a", "b", "c"]);
    }
}
