//! List and trigger rendering for the two selection modes.

use std::collections::HashSet;

use selector_core::{Modifier, View};
use selector_ui::{Box, Pressable, Row, Switch, Text, ViewExt};

use crate::style::ResolvedStyles;
use crate::{SelectMode, SelectOption, Selection, SelectorHandle, SelectorProps, SelectorState};

pub(crate) struct RenderCtx<'a> {
    pub handle: &'a SelectorHandle,
    pub props: &'a SelectorProps,
    pub state: &'a SelectorState,
    pub styles: &'a ResolvedStyles,
}

/// Mode-specific parts of the selector.
pub(crate) trait ListRenderer {
    /// One row per entry of the option list, in list order.
    fn option_row(&self, option: &SelectOption, cx: &RenderCtx<'_>) -> View;

    /// Label of the trailing row, which only closes the overlay.
    fn footer_label<'p>(&self, props: &'p SelectorProps) -> &'p str;

    /// Built-in trigger text for the current selection.
    fn trigger_text(&self, state: &SelectorState, props: &SelectorProps) -> String;

    fn rows(&self, cx: &RenderCtx<'_>) -> Vec<View> {
        cx.props
            .data
            .iter()
            .map(|item| {
                if item.section {
                    section_row(item, cx.styles)
                } else {
                    self.option_row(item, cx)
                }
            })
            .collect()
    }
}

pub(crate) struct SingleSelectList;
pub(crate) struct MultiSelectList;

impl SelectMode {
    pub(crate) fn renderer(self) -> &'static dyn ListRenderer {
        match self {
            SelectMode::Single => &SingleSelectList,
            SelectMode::Multi => &MultiSelectList,
        }
    }
}

fn section_row(section: &SelectOption, styles: &ResolvedStyles) -> View {
    Box(styles.section.clone())
        .key(section.key.clone())
        .child(styles.section_text.apply(Text(section.label.clone())))
}

impl ListRenderer for SingleSelectList {
    fn option_row(&self, option: &SelectOption, cx: &RenderCtx<'_>) -> View {
        let on_press = {
            let handle = cx.handle.clone();
            let on_change = cx.props.on_change.clone();
            let option = option.clone();
            move || handle.pick(option.clone(), &on_change)
        };
        Pressable(
            cx.styles.option.clone(),
            true,
            on_press,
            cx.styles.option_text.apply(Text(option.label.clone())),
        )
        .key(option.key.clone())
    }

    fn footer_label<'p>(&self, props: &'p SelectorProps) -> &'p str {
        &props.cancel_text
    }

    fn trigger_text(&self, state: &SelectorState, _props: &SelectorProps) -> String {
        match &state.selection {
            Selection::Single(label) => label.clone(),
            Selection::Multi(m) => m.display_text().unwrap_or_default(),
        }
    }
}

impl ListRenderer for MultiSelectList {
    fn option_row(&self, option: &SelectOption, cx: &RenderCtx<'_>) -> View {
        let checked = cx
            .state
            .selection
            .as_multi()
            .is_some_and(|m| m.contains(&option.key));
        let on_toggle = {
            let handle = cx.handle.clone();
            let on_change = cx.props.on_change_multi_select.clone();
            let option = option.clone();
            move |on: bool| handle.toggle(option.clone(), on, &on_change)
        };
        // Pressing the row flips the toggle as well, from the live selection.
        let on_press = {
            let on_toggle = on_toggle.clone();
            let handle = cx.handle.clone();
            let key = option.key.clone();
            move || on_toggle(!handle.multi_selected().contains(&key))
        };
        Pressable(
            Modifier::new(),
            true,
            on_press,
            Row(cx.styles.option_with_toggle.clone()).child((
                cx.styles.option_text.apply(Text(option.label.clone())),
                Switch(checked, on_toggle),
            )),
        )
        .key(option.key.clone())
    }

    fn footer_label<'p>(&self, props: &'p SelectorProps) -> &'p str {
        &props.done_text
    }

    fn trigger_text(&self, state: &SelectorState, props: &SelectorProps) -> String {
        state
            .selection
            .as_multi()
            .and_then(|m| m.display_text())
            .unwrap_or_else(|| props.multi_select_placeholder_text.clone())
    }
}

/// Warns once per render when keys repeat; rendering goes on regardless.
pub(crate) fn warn_duplicate_keys(data: &[SelectOption]) {
    let mut seen = HashSet::with_capacity(data.len());
    let dupes: Vec<&str> = data
        .iter()
        .filter(|o| !seen.insert(o.key.as_str()))
        .map(|o| o.key.as_str())
        .collect();
    if !dupes.is_empty() {
        log::warn!("modal selector: duplicate option keys {dupes:?}; the last entry wins");
    }
}
