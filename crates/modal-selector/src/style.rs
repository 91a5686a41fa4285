//! Built-in look of every selector region and the host's overrides.

use selector_core::{AlignItems, Color, JustifyContent, Modifier, PaddingValues, View, theme};
use selector_ui::TextStyle;

/// Partial text style; unset fields keep the built-in value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextStyleOverride {
    pub color: Option<Color>,
    pub font_size: Option<f32>,
}

impl TextStyleOverride {
    pub fn color(mut self, c: Color) -> Self {
        self.color = Some(c);
        self
    }
    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }
    fn merge(self, overrides: &TextStyleOverride) -> Self {
        TextStyleOverride {
            color: overrides.color.or(self.color),
            font_size: overrides.font_size.or(self.font_size),
        }
    }
    pub(crate) fn apply(&self, mut text: View) -> View {
        if let Some(c) = self.color {
            text = text.color(c);
        }
        if let Some(size) = self.font_size {
            text = text.size(size);
        }
        text
    }
}

/// Per-region overrides. Each slot is layered over the built-in default for
/// that region rather than replacing it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectorStyles {
    /// Outermost wrapper around trigger and overlay.
    pub container: Modifier,
    /// Trigger field.
    pub select: Modifier,
    pub select_text: TextStyleOverride,
    /// Full-screen backdrop of the overlay.
    pub overlay: Modifier,
    /// Sheet holding the scrollable option list.
    pub option_container: Modifier,
    pub section: Modifier,
    pub section_text: TextStyleOverride,
    pub option: Modifier,
    pub option_text: TextStyleOverride,
    /// Multi-select row (label plus toggle).
    pub option_with_toggle: Modifier,
    /// Trailing cancel / done row.
    pub cancel: Modifier,
    pub cancel_text: TextStyleOverride,
}

/// Defaults merged with overrides, ready to hand to the builders.
#[derive(Clone, Debug)]
pub(crate) struct ResolvedStyles {
    pub container: Modifier,
    pub select: Modifier,
    pub select_text: TextStyleOverride,
    pub overlay: Modifier,
    pub option_container: Modifier,
    pub list_body: Modifier,
    pub section: Modifier,
    pub section_text: TextStyleOverride,
    pub option: Modifier,
    pub option_text: TextStyleOverride,
    pub option_with_toggle: Modifier,
    pub cancel_container: Modifier,
    pub cancel: Modifier,
    pub cancel_text: TextStyleOverride,
}

impl SelectorStyles {
    pub(crate) fn resolve(&self) -> ResolvedStyles {
        let d = SelectorStyles::builtin();
        ResolvedStyles {
            container: d.container.merge(&self.container),
            select: d.select.merge(&self.select),
            select_text: d.select_text.merge(&self.select_text),
            overlay: d.overlay.merge(&self.overlay),
            option_container: d.option_container.merge(&self.option_container),
            list_body: Modifier::new().padding_horizontal(10.0),
            section: d.section.merge(&self.section),
            section_text: d.section_text.merge(&self.section_text),
            option: d.option.merge(&self.option),
            option_text: d.option_text.merge(&self.option_text),
            option_with_toggle: d.option_with_toggle.merge(&self.option_with_toggle),
            cancel_container: Modifier::new().margin_values(PaddingValues {
                top: 8.0,
                ..PaddingValues::default()
            }),
            cancel: d.cancel.merge(&self.cancel),
            cancel_text: d.cancel_text.merge(&self.cancel_text),
        }
    }

    /// Built-in look, read from the current theme.
    pub fn builtin() -> SelectorStyles {
        let t = theme();
        let row_divider = Modifier::new()
            .padding(8.0)
            .border(1.0, t.outline, 0.0);
        SelectorStyles {
            container: Modifier::new(),
            select: Modifier::new()
                .padding(8.0)
                .border(1.0, t.outline, 5.0)
                .align_items(AlignItems::Center),
            select_text: TextStyleOverride::default()
                .color(t.on_surface)
                .font_size(14.0),
            overlay: Modifier::new()
                .fill_max_size()
                .padding(20.0)
                .background(t.scrim)
                .justify_content(JustifyContent::Center),
            option_container: Modifier::new()
                .background(t.surface)
                .clip_rounded(5.0)
                .flex_grow(1.0),
            section: row_divider.clone(),
            section_text: TextStyleOverride::default()
                .color(t.on_surface_variant)
                .font_size(16.0),
            option: row_divider.clone(),
            option_text: TextStyleOverride::default()
                .color(t.primary)
                .font_size(16.0),
            option_with_toggle: row_divider
                .justify_content(JustifyContent::SpaceBetween)
                .align_items(AlignItems::Center),
            cancel: Modifier::new()
                .padding(8.0)
                .background(t.surface)
                .clip_rounded(5.0)
                .align_items(AlignItems::Center),
            cancel_text: TextStyleOverride::default()
                .color(t.primary)
                .font_size(16.0),
        }
    }
}
