use std::rc::Rc;

use crate::{AnimationType, Color, KeyboardPersistTaps, Modifier, Orientation, Semantics};

pub type ViewId = u64;

pub type Callback = Rc<dyn Fn()>;
pub type ToggleCallback = Rc<dyn Fn(bool)>;

/// Node kinds a host renderer has to understand.
///
/// `Overlay`, `ScrollV`, `Pressable` and `Switch` are the primitives the host
/// toolkit supplies; the widgets in this workspace only describe them.
#[derive(Clone)]
pub enum ViewKind {
    Box,
    Row,
    Column,
    ScrollV {
        keyboard_should_persist_taps: KeyboardPersistTaps,
    },
    Text {
        text: String,
        color: Color,
        font_size: f32,
    },
    Pressable {
        on_press: Option<Callback>,
        enabled: bool,
    },
    Switch {
        checked: bool,
        on_change: Option<ToggleCallback>,
    },
    /// Layered content shown above the main view. Children are only present
    /// while `visible` is true.
    Overlay {
        key: String,
        visible: bool,
        transparent: bool,
        animation: AnimationType,
        supported_orientations: Vec<Orientation>,
        on_request_close: Option<Callback>,
    },
}

impl std::fmt::Debug for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewKind::Box => write!(f, "Box"),
            ViewKind::Row => write!(f, "Row"),
            ViewKind::Column => write!(f, "Column"),
            ViewKind::ScrollV {
                keyboard_should_persist_taps,
            } => f
                .debug_struct("ScrollV")
                .field("keyboard_should_persist_taps", keyboard_should_persist_taps)
                .finish(),
            ViewKind::Text {
                text,
                color,
                font_size,
            } => f
                .debug_struct("Text")
                .field("text", text)
                .field("color", color)
                .field("font_size", font_size)
                .finish(),
            ViewKind::Pressable { on_press, enabled } => f
                .debug_struct("Pressable")
                .field("on_press", &on_press.as_ref().map(|_| "<callback>"))
                .field("enabled", enabled)
                .finish(),
            ViewKind::Switch { checked, .. } => f
                .debug_struct("Switch")
                .field("checked", checked)
                .field("on_change", &"<callback>")
                .finish(),
            ViewKind::Overlay {
                key,
                visible,
                transparent,
                animation,
                supported_orientations,
                on_request_close,
            } => f
                .debug_struct("Overlay")
                .field("key", key)
                .field("visible", visible)
                .field("transparent", transparent)
                .field("animation", animation)
                .field("supported_orientations", supported_orientations)
                .field(
                    "on_request_close",
                    &on_request_close.as_ref().map(|_| "<callback>"),
                )
                .finish(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct View {
    pub id: ViewId,
    /// Identity among siblings, e.g. the option key of a list row.
    pub key: Option<String>,
    pub kind: ViewKind,
    pub modifier: Modifier,
    pub children: Vec<View>,
    pub semantics: Option<Semantics>,
    /// Touch targets inside this subtree never receive presses; a press on
    /// it goes to the nearest enclosing target instead.
    pub inert: bool,
}

impl View {
    pub fn new(id: ViewId, kind: ViewKind) -> Self {
        View {
            id,
            key: None,
            kind,
            modifier: Modifier::default(),
            children: vec![],
            semantics: None,
            inert: false,
        }
    }
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }
    pub fn modifier(mut self, m: Modifier) -> Self {
        self.modifier = m;
        self
    }
    pub fn with_children(mut self, kids: Vec<View>) -> Self {
        self.children = kids;
        self
    }
    pub fn semantics(mut self, s: Semantics) -> Self {
        self.semantics = Some(s);
        self
    }
    pub fn inert(mut self) -> Self {
        self.inert = true;
        self
    }

    /// Text content when this is a `Text` node.
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            ViewKind::Text { text, .. } => Some(text),
            _ => None,
        }
    }

    /// Pre-order traversal.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a View)) {
        f(self);
        for child in &self.children {
            child.walk(f);
        }
    }

    /// First node in pre-order for which `pred` holds.
    pub fn find(&self, pred: &impl Fn(&View) -> bool) -> Option<&View> {
        if pred(self) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(pred))
    }

    pub fn find_by_key(&self, key: &str) -> Option<&View> {
        self.find(&|v: &View| v.key.as_deref() == Some(key))
    }

    /// Concatenated text of every `Text` node in this subtree, in order.
    pub fn collect_text(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.walk(&mut |v| {
            if let Some(t) = v.text() {
                out.push(t);
            }
        });
        out
    }
}
