use taffy::{AlignItems, JustifyContent};

use crate::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
    pub radius: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PaddingValues {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl PaddingValues {
    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            left: horizontal,
            right: horizontal,
            top: vertical,
            bottom: vertical,
        }
    }
}

/// Style and layout attributes for a single view.
///
/// Every attribute is optional so that two modifiers can be layered with
/// [`Modifier::merge`]: the built-in look of a widget region is one modifier,
/// the host's override for that region is another.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Modifier {
    pub fill_max_w: bool,
    pub fill_max_h: bool,
    pub padding: Option<f32>,
    pub padding_values: Option<PaddingValues>,
    pub margin: Option<PaddingValues>,
    pub background: Option<Color>,
    pub border: Option<Border>,
    pub clip_rounded: Option<f32>,
    pub flex_grow: Option<f32>,
    pub justify_content: Option<JustifyContent>,
    pub align_items_container: Option<AlignItems>,
}

impl Modifier {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn fill_max_size(mut self) -> Self {
        self.fill_max_w = true;
        self.fill_max_h = true;
        self
    }
    pub fn padding(mut self, v: f32) -> Self {
        self.padding = Some(v);
        self
    }
    pub fn padding_values(mut self, padding: PaddingValues) -> Self {
        self.padding_values = Some(padding);
        self
    }
    pub fn padding_horizontal(self, v: f32) -> Self {
        self.padding_values(PaddingValues::symmetric(v, 0.0))
    }
    pub fn margin_values(mut self, margin: PaddingValues) -> Self {
        self.margin = Some(margin);
        self
    }
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }
    pub fn border(mut self, width: f32, color: Color, radius: f32) -> Self {
        self.border = Some(Border {
            width,
            color,
            radius,
        });
        self
    }
    pub fn clip_rounded(mut self, radius: f32) -> Self {
        self.clip_rounded = Some(radius);
        self
    }
    pub fn flex_grow(mut self, v: f32) -> Self {
        self.flex_grow = Some(v);
        self
    }
    pub fn justify_content(mut self, j: JustifyContent) -> Self {
        self.justify_content = Some(j);
        self
    }
    pub fn align_items(mut self, a: AlignItems) -> Self {
        self.align_items_container = Some(a);
        self
    }

    /// Layers `overrides` on top of `self`. Attributes set in `overrides`
    /// win; attributes it leaves unset keep the value from `self`.
    /// The fill flags can only be switched on by an override.
    pub fn merge(self, overrides: &Modifier) -> Modifier {
        Modifier {
            fill_max_w: overrides.fill_max_w || self.fill_max_w,
            fill_max_h: overrides.fill_max_h || self.fill_max_h,
            padding: overrides.padding.or(self.padding),
            padding_values: overrides.padding_values.or(self.padding_values),
            margin: overrides.margin.or(self.margin),
            background: overrides.background.or(self.background),
            border: overrides.border.or(self.border),
            clip_rounded: overrides.clip_rounded.or(self.clip_rounded),
            flex_grow: overrides.flex_grow.or(self.flex_grow),
            justify_content: overrides.justify_content.or(self.justify_content),
            align_items_container: overrides
                .align_items_container
                .or(self.align_items_container),
        }
    }
}
