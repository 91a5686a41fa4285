use std::cell::{Cell, RefCell};
use std::rc::Rc;

use selector_core::{Modifier, Store, SubId, View, forget_key, remember_with_key};
use selector_ui::{
    Box, Column, Overlay, OverlayConfig, Pressable, ScrollArea, Text, ViewExt,
};

use crate::render::{RenderCtx, warn_duplicate_keys};
use crate::state::reconcile;
use crate::{
    MultiSelection, OnChange, OnChangeMultiSelect, SelectOption, Selection, SelectorEvent,
    SelectorProps, SelectorState,
};

/// Key of the trailing cancel / done row.
pub const FOOTER_KEY: &str = "modal-selector:footer";

/// Reference to one selector instance.
///
/// Hosts keep it to drive the selector imperatively (`open`, `close`) and to
/// read its state; [`ModalSelector`] renders from it. Clones share the
/// instance.
#[derive(Clone)]
pub struct SelectorHandle {
    inner: Rc<HandleInner>,
}

struct HandleInner {
    key: String,
    store: Store<SelectorState>,
    props: RefCell<SelectorProps>,
    renders: Cell<u64>,
}

impl SelectorHandle {
    /// A fresh, closed instance seeded from `props`.
    pub fn new(key: impl Into<String>, props: &SelectorProps) -> Self {
        Self {
            inner: Rc::new(HandleInner {
                key: key.into(),
                store: Store::new(SelectorState::initial(props)),
                props: RefCell::new(props.clone()),
                renders: Cell::new(0),
            }),
        }
    }

    pub fn key(&self) -> &str {
        &self.inner.key
    }

    pub fn open(&self) {
        log::debug!("selector {}: open", self.inner.key);
        self.inner.store.dispatch(SelectorEvent::Open);
    }

    pub fn close(&self) {
        log::debug!("selector {}: close", self.inner.key);
        self.inner.store.dispatch(SelectorEvent::Close);
    }

    pub fn is_open(&self) -> bool {
        self.inner.store.with(|s| s.visible)
    }

    pub fn state(&self) -> SelectorState {
        self.inner.store.get()
    }

    pub fn selection(&self) -> Selection {
        self.inner.store.with(|s| s.selection.clone())
    }

    /// Current multi-selection; empty in single mode.
    pub fn multi_selected(&self) -> MultiSelection {
        self.inner
            .store
            .with(|s| s.selection.as_multi().cloned().unwrap_or_default())
    }

    /// What the built-in trigger label shows right now.
    pub fn trigger_text(&self) -> String {
        let props = self.inner.props.borrow();
        self.inner
            .store
            .with(|s| props.mode().renderer().trigger_text(s, &props))
    }

    /// Runs `f` after every committed state change.
    pub fn subscribe(&self, f: impl Fn(&SelectorState) + 'static) -> SubId {
        self.inner.store.subscribe(f)
    }

    pub fn unsubscribe(&self, id: SubId) {
        self.inner.store.unsubscribe(id);
    }

    /// Tears down the remembered instance; the next [`remember_selector`]
    /// with the same key starts over from its props.
    pub fn dispose(&self) {
        log::debug!("selector {}: disposed", self.inner.key);
        forget_key(&slot_key(&self.inner.key));
    }

    /// Single-select commit. The callback sees the state from before the pick.
    pub(crate) fn pick(&self, option: SelectOption, on_change: &OnChange) {
        log::debug!("selector {}: pick {:?}", self.inner.key, option.key);
        on_change(&option);
        self.inner.store.dispatch(SelectorEvent::Pick(option));
    }

    /// Multi-select toggle. The callback gets the full mapping after the
    /// toggle, before it is committed. The toggle is then applied to whatever
    /// state the callback left behind, so an `open`/`close` made from inside
    /// it sticks.
    pub(crate) fn toggle(&self, option: SelectOption, on: bool, on_change: &OnChangeMultiSelect) {
        log::debug!(
            "selector {}: toggle {:?} {}",
            self.inner.key,
            option.key,
            if on { "on" } else { "off" }
        );
        let next = self.inner.store.preview(SelectorEvent::Toggle {
            option: option.clone(),
            on,
        });
        if let Selection::Multi(mapping) = &next.selection {
            on_change(mapping);
        }
        self.inner.store.dispatch(SelectorEvent::Toggle { option, on });
    }

    /// Applies a configuration update. See [`reconcile`].
    pub(crate) fn sync_props(&self, props: &SelectorProps) {
        let old = self.inner.props.replace(props.clone());
        let next = self.inner.store.with(|s| reconcile(&old, props, s));
        if self.inner.store.with(|s| *s != next) {
            self.inner.store.commit(next);
        }
    }

    fn next_overlay_key(&self) -> String {
        let n = self.inner.renders.get();
        self.inner.renders.set(n + 1);
        format!("{}:overlay:{}", self.inner.key, n)
    }
}

impl std::fmt::Debug for SelectorHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectorHandle")
            .field("key", &self.inner.key)
            .field("state", &self.inner.store.get())
            .finish()
    }
}

fn slot_key(key: &str) -> String {
    format!("modal_selector:{key}")
}

/// Selector instance bound to the composition under `key`.
pub fn remember_selector(key: impl Into<String>, props: &SelectorProps) -> SelectorHandle {
    let key = key.into();
    let handle = remember_with_key(slot_key(&key), || SelectorHandle::new(key.clone(), props));
    (*handle).clone()
}

/// The trigger field plus its overlay.
///
/// ```rust
/// use modal_selector::*;
/// use selector_core::compose;
///
/// let props = SelectorProps::new([
///     SelectOption::section("fruit", "Fruit"),
///     SelectOption::new("a", "Apple"),
///     SelectOption::new("b", "Banana"),
/// ])
/// .init_value("Pick a fruit");
///
/// let handle = remember_selector("fruit", &props);
/// let view = compose(|| ModalSelector(&handle, props.clone()));
/// assert_eq!(view.collect_text(), vec!["Pick a fruit"]);
///
/// handle.open();
/// let view = compose(|| ModalSelector(&handle, props.clone()));
/// assert!(view.collect_text().contains(&"Banana"));
/// ```
pub fn ModalSelector(handle: &SelectorHandle, props: SelectorProps) -> View {
    handle.sync_props(&props);
    let state = handle.state();
    let styles = props.styles.resolve();
    let renderer = props.mode().renderer();

    let overlay = Overlay(
        OverlayConfig {
            key: handle.next_overlay_key(),
            visible: state.visible,
            transparent: true,
            animation: props.animation_type,
            supported_orientations: props.supported_orientations.clone(),
        },
        {
            let handle = handle.clone();
            move || handle.close()
        },
        || {
            warn_duplicate_keys(&props.data);
            let cx = RenderCtx {
                handle,
                props: &props,
                state: &state,
                styles: &styles,
            };
            let backdrop_closes = props.backdrop_press_to_close;
            let on_backdrop = {
                let handle = handle.clone();
                move || {
                    if backdrop_closes {
                        handle.close();
                    }
                }
            };
            let on_footer = {
                let handle = handle.clone();
                move || handle.close()
            };
            Pressable(
                styles.overlay.clone(),
                true,
                on_backdrop,
                Column(Modifier::new().fill_max_size()).child((
                    Column(styles.option_container.clone()).child(
                        ScrollArea(Modifier::new(), props.keyboard_should_persist_taps)
                            .child(Column(styles.list_body.clone()).child(renderer.rows(&cx))),
                    ),
                    Column(styles.cancel_container.clone()).child(
                        Pressable(
                            styles.cancel.clone(),
                            true,
                            on_footer,
                            styles
                                .cancel_text
                                .apply(Text(renderer.footer_label(&props))),
                        )
                        .key(FOOTER_KEY),
                    ),
                )),
            )
        },
    );

    // Custom trigger content only decorates the field; presses on it open
    // the overlay.
    let trigger_content = match &props.children {
        Some(custom) => custom.clone().inert(),
        None => Box(styles.select.clone()).child(
            styles
                .select_text
                .apply(Text(renderer.trigger_text(&state, &props))),
        ),
    };
    let trigger = Pressable(
        Modifier::new(),
        !props.disabled,
        {
            let handle = handle.clone();
            move || handle.open()
        },
        trigger_content,
    );

    Column(styles.container.clone()).child((overlay, trigger))
}
