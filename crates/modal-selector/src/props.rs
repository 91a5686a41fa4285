use std::rc::Rc;

use selector_core::{AnimationType, KeyboardPersistTaps, Orientation, View};

use crate::{MultiSelection, SelectOption, SelectorStyles};

pub const DEFAULT_INIT_VALUE: &str = "Select me!";
pub const DEFAULT_CANCEL_TEXT: &str = "cancel";
pub const DEFAULT_DONE_TEXT: &str = "Done";
pub const DEFAULT_PLACEHOLDER: &str = "Select something";

pub type OnChange = Rc<dyn Fn(&SelectOption)>;
pub type OnChangeMultiSelect = Rc<dyn Fn(&MultiSelection)>;

/// Single or multi select, fixed per configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectMode {
    Single,
    Multi,
}

/// Configuration of one selector instance.
///
/// Everything has a default; the builder methods mirror the field names.
#[derive(Clone)]
pub struct SelectorProps {
    pub data: Vec<SelectOption>,
    /// Fires on a single-select pick, before the selector commits it.
    pub on_change: OnChange,
    /// Fires on every multi-select toggle with the whole updated mapping.
    pub on_change_multi_select: OnChangeMultiSelect,
    pub init_value: String,
    pub init_multi_selected: MultiSelection,
    pub multi_select: bool,
    pub multi_select_placeholder_text: String,
    pub disabled: bool,
    pub cancel_text: String,
    pub done_text: String,
    pub backdrop_press_to_close: bool,
    pub keyboard_should_persist_taps: KeyboardPersistTaps,
    pub supported_orientations: Vec<Orientation>,
    pub animation_type: AnimationType,
    pub styles: SelectorStyles,
    /// Replaces the built-in trigger label. Rendered as given; it does not
    /// follow the selection.
    pub children: Option<View>,
}

impl Default for SelectorProps {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            on_change: Rc::new(|_: &SelectOption| {}),
            on_change_multi_select: Rc::new(|_: &MultiSelection| {}),
            init_value: DEFAULT_INIT_VALUE.to_string(),
            init_multi_selected: MultiSelection::new(),
            multi_select: false,
            multi_select_placeholder_text: DEFAULT_PLACEHOLDER.to_string(),
            disabled: false,
            cancel_text: DEFAULT_CANCEL_TEXT.to_string(),
            done_text: DEFAULT_DONE_TEXT.to_string(),
            backdrop_press_to_close: false,
            keyboard_should_persist_taps: KeyboardPersistTaps::Always,
            supported_orientations: vec![Orientation::Portrait, Orientation::Landscape],
            animation_type: AnimationType::Slide,
            styles: SelectorStyles::default(),
            children: None,
        }
    }
}

impl std::fmt::Debug for SelectorProps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectorProps")
            .field("data", &self.data)
            .field("on_change", &"<callback>")
            .field("on_change_multi_select", &"<callback>")
            .field("init_value", &self.init_value)
            .field("init_multi_selected", &self.init_multi_selected)
            .field("multi_select", &self.multi_select)
            .field(
                "multi_select_placeholder_text",
                &self.multi_select_placeholder_text,
            )
            .field("disabled", &self.disabled)
            .field("cancel_text", &self.cancel_text)
            .field("done_text", &self.done_text)
            .field("backdrop_press_to_close", &self.backdrop_press_to_close)
            .field(
                "keyboard_should_persist_taps",
                &self.keyboard_should_persist_taps,
            )
            .field("supported_orientations", &self.supported_orientations)
            .field("animation_type", &self.animation_type)
            .field("styles", &self.styles)
            .field("children", &self.children.as_ref().map(|_| "<view>"))
            .finish()
    }
}

impl SelectorProps {
    pub fn new(data: impl IntoIterator<Item = SelectOption>) -> Self {
        Self {
            data: data.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn mode(&self) -> SelectMode {
        if self.multi_select {
            SelectMode::Multi
        } else {
            SelectMode::Single
        }
    }

    pub fn data(mut self, data: impl IntoIterator<Item = SelectOption>) -> Self {
        self.data = data.into_iter().collect();
        self
    }
    pub fn on_change(mut self, f: impl Fn(&SelectOption) + 'static) -> Self {
        self.on_change = Rc::new(f);
        self
    }
    pub fn on_change_multi_select(mut self, f: impl Fn(&MultiSelection) + 'static) -> Self {
        self.on_change_multi_select = Rc::new(f);
        self
    }
    pub fn init_value(mut self, v: impl Into<String>) -> Self {
        self.init_value = v.into();
        self
    }
    pub fn init_multi_selected(mut self, selected: impl IntoIterator<Item = SelectOption>) -> Self {
        self.init_multi_selected = selected.into_iter().collect();
        self
    }
    pub fn multi_select(mut self, multi: bool) -> Self {
        self.multi_select = multi;
        self
    }
    pub fn multi_select_placeholder_text(mut self, text: impl Into<String>) -> Self {
        self.multi_select_placeholder_text = text.into();
        self
    }
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
    pub fn cancel_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_text = text.into();
        self
    }
    pub fn done_text(mut self, text: impl Into<String>) -> Self {
        self.done_text = text.into();
        self
    }
    pub fn backdrop_press_to_close(mut self, close: bool) -> Self {
        self.backdrop_press_to_close = close;
        self
    }
    pub fn keyboard_should_persist_taps(mut self, taps: impl Into<KeyboardPersistTaps>) -> Self {
        self.keyboard_should_persist_taps = taps.into();
        self
    }
    pub fn supported_orientations(mut self, o: impl IntoIterator<Item = Orientation>) -> Self {
        self.supported_orientations = o.into_iter().collect();
        self
    }
    pub fn animation_type(mut self, a: AnimationType) -> Self {
        self.animation_type = a;
        self
    }
    pub fn styles(mut self, styles: SelectorStyles) -> Self {
        self.styles = styles;
        self
    }
    pub fn children(mut self, trigger: View) -> Self {
        self.children = Some(trigger);
        self
    }
}
