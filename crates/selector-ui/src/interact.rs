//! Event delivery the way a host toolkit performs it.
//!
//! A renderer that draws a composed tree also owns hit-testing; once it has
//! decided which node was touched it calls back into the tree through these
//! helpers. Tests and headless hosts use them directly with node keys or
//! visible text instead of coordinates.

use std::fmt::Write;

use selector_core::{View, ViewKind};

/// Delivers a press to the innermost pressable whose subtree shows `text`.
/// Returns whether a callback ran; disabled pressables swallow the press.
pub fn press_text(root: &View, text: &str) -> bool {
    match innermost_pressable(root, &|v: &View| v.text() == Some(text)) {
        Some(target) => deliver_press(target),
        None => {
            log::debug!("press_text: nothing pressable shows {text:?}");
            false
        }
    }
}

/// Delivers a press to the innermost pressable at or above the node keyed
/// `key`.
pub fn press_key(root: &View, key: &str) -> bool {
    match innermost_pressable(root, &|v: &View| v.key.as_deref() == Some(key)) {
        Some(target) => deliver_press(target),
        None => {
            log::debug!("press_key: no pressable for key {key:?}");
            false
        }
    }
}

/// Flips the first switch inside the node keyed `key` to `value`.
pub fn toggle_key(root: &View, key: &str, value: bool) -> bool {
    let Some(row) = root.find_by_key(key) else {
        return false;
    };
    let switch = row.find(&|v: &View| matches!(v.kind, ViewKind::Switch { .. }));
    match switch.map(|v| &v.kind) {
        Some(ViewKind::Switch {
            on_change: Some(cb),
            ..
        }) => {
            cb(value);
            true
        }
        _ => false,
    }
}

/// Current checked state of the switch inside the node keyed `key`.
pub fn switch_state(root: &View, key: &str) -> Option<bool> {
    let row = root.find_by_key(key)?;
    row.find(&|v: &View| matches!(v.kind, ViewKind::Switch { .. }))
        .and_then(|v| match v.kind {
            ViewKind::Switch { checked, .. } => Some(checked),
            _ => None,
        })
}

/// Sends the dismiss signal (e.g. hardware back) to the first visible overlay.
pub fn request_close(root: &View) -> bool {
    match visible_overlay(root).map(|v| &v.kind) {
        Some(ViewKind::Overlay {
            on_request_close: Some(cb),
            ..
        }) => {
            cb();
            true
        }
        _ => false,
    }
}

/// Presses the backdrop of the first visible overlay, i.e. the overlay's
/// outermost pressable, outside any list item.
pub fn press_backdrop(root: &View) -> bool {
    let Some(overlay) = visible_overlay(root) else {
        return false;
    };
    match overlay
        .find(&|v: &View| matches!(v.kind, ViewKind::Pressable { .. }))
    {
        Some(backdrop) => deliver_press(backdrop),
        None => false,
    }
}

pub fn overlay_visible(root: &View) -> bool {
    visible_overlay(root).is_some()
}

/// Indented one-line-per-node dump of a tree, stable across renders.
pub fn outline(root: &View) -> String {
    let mut out = String::new();
    write_outline(root, 0, &mut out);
    out
}

fn write_outline(v: &View, depth: usize, out: &mut String) {
    let _ = write!(out, "{}", "  ".repeat(depth));
    let _ = match &v.kind {
        ViewKind::Box => write!(out, "Box"),
        ViewKind::Row => write!(out, "Row"),
        ViewKind::Column => write!(out, "Column"),
        ViewKind::ScrollV {
            keyboard_should_persist_taps,
        } => write!(out, "ScrollV persist={keyboard_should_persist_taps}"),
        ViewKind::Text { text, .. } => write!(out, "Text {text:?}"),
        ViewKind::Pressable { enabled: true, .. } => write!(out, "Pressable"),
        ViewKind::Pressable { enabled: false, .. } => write!(out, "Pressable disabled"),
        ViewKind::Switch { checked, .. } => {
            write!(out, "Switch {}", if *checked { "on" } else { "off" })
        }
        ViewKind::Overlay { visible, .. } => {
            write!(out, "Overlay {}", if *visible { "visible" } else { "hidden" })
        }
    };
    if let Some(key) = &v.key {
        let _ = write!(out, " #{key}");
    }
    if v.inert {
        out.push_str(" inert");
    }
    out.push('\n');
    for child in &v.children {
        write_outline(child, depth + 1, out);
    }
}

fn visible_overlay(root: &View) -> Option<&View> {
    root.find(&|v: &View| matches!(v.kind, ViewKind::Overlay { visible: true, .. }))
}

fn is_pressable(v: &View) -> bool {
    matches!(v.kind, ViewKind::Pressable { .. })
}

/// Deepest pressable that contains a node matching `pred`. Pressables inside
/// inert subtrees are skipped.
fn innermost_pressable<'a>(v: &'a View, pred: &impl Fn(&View) -> bool) -> Option<&'a View> {
    for child in v.children.iter().filter(|c| !c.inert) {
        if let Some(hit) = innermost_pressable(child, pred) {
            return Some(hit);
        }
    }
    if is_pressable(v) && v.find(pred).is_some() {
        return Some(v);
    }
    None
}

fn deliver_press(target: &View) -> bool {
    match &target.kind {
        ViewKind::Pressable {
            on_press: Some(cb),
            enabled: true,
        } => {
            log::debug!("press delivered to node {}", target.id);
            cb();
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use selector_core::*;

    use super::*;
    use crate::{Column, Pressable, Switch, Text, ViewExt};

    fn log_press(log: Rc<RefCell<Vec<&'static str>>>, what: &'static str) -> impl Fn() + 'static {
        move || log.borrow_mut().push(what)
    }

    #[test]
    fn press_reaches_innermost_target() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let tree = Pressable(
            Modifier::new(),
            true,
            log_press(log.clone(), "outer"),
            Column(Modifier::new()).child((
                Pressable(Modifier::new(), true, log_press(log.clone(), "inner"), Text("Apple")).key("a"),
                Text("loose"),
            )),
        );

        assert!(press_text(&tree, "Apple"));
        assert!(press_text(&tree, "loose"));
        assert!(press_key(&tree, "a"));
        assert!(!press_text(&tree, "missing"));
        assert_eq!(*log.borrow(), vec!["inner", "outer", "inner"]);
    }

    #[test]
    fn inert_subtree_passes_press_to_enclosing_target() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let tree = Pressable(
            Modifier::new(),
            true,
            log_press(log.clone(), "outer"),
            Pressable(Modifier::new(), true, log_press(log.clone(), "inner"), Text("Label"))
                .key("inner")
                .inert(),
        );

        assert!(press_text(&tree, "Label"));
        assert!(press_key(&tree, "inner"));
        assert_eq!(*log.borrow(), vec!["outer", "outer"]);
    }

    #[test]
    fn builders_number_nodes_per_pass() {
        let build = || Column(Modifier::new()).child((Text("a"), Text("b")));
        let first = compose(build);
        let second = compose(build);

        let mut ids = Vec::new();
        first.walk(&mut |v| ids.push(v.id));
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 3);
        assert_eq!(first.id, second.id);
    }

    #[test]
    fn disabled_pressable_swallows_press() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let tree = Pressable(Modifier::new(), false, log_press(log.clone(), "x"), Text("x"));
        assert!(!press_text(&tree, "x"));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn toggle_reports_requested_value() {
        let got = Rc::new(RefCell::new(None));
        let got2 = got.clone();
        let tree = Column(Modifier::new())
            .child(Column(Modifier::new()).key("b").child(Switch(false, move |v| *got2.borrow_mut() = Some(v))));

        assert_eq!(switch_state(&tree, "b"), Some(false));
        assert!(toggle_key(&tree, "b", true));
        assert_eq!(*got.borrow(), Some(true));
        assert!(!toggle_key(&tree, "zzz", true));
    }

    #[test]
    fn outline_is_stable() {
        let tree = Column(Modifier::new()).child((
            Text("Fruit"),
            Pressable(Modifier::new(), false, || {}, Text("Apple")).key("a"),
            Switch(true, |_| {}),
        ));
        insta::assert_snapshot!(outline(&tree).trim_end(), @r#"
        Column
          Text "Fruit"
          Pressable disabled #a
            Text "Apple"
          Switch on
        "#);
    }
}
