//! Construction-time configuration for a flow layout.

use crate::types::{Alignment, Edges, StateColors};

/// Presentation hints applied to every tag element when it is created.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagStyle {
    /// Line height of the tag text in cells. `None` keeps a single line.
    pub text_size: Option<u16>,
    pub text_color: Option<StateColors>,
    pub background: Option<StateColors>,
    /// Space between the tag border and its label.
    pub padding: Edges,
    /// Space reserved around the tag within its line.
    pub margin: Edges,
}

/// Flow layout configuration.
///
/// Fixed for the lifetime of a layout. Spacing values given to the setters
/// are clamped to zero so the arrangement never produces inverted rects.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlowConfig {
    pub alignment: Alignment,
    /// Extra gap between rows.
    pub line_spacing: i32,
    /// Extra gap between items on the same row. Justified lines may widen it.
    pub item_spacing: i32,
    pub padding: Edges,
    pub tag_style: TagStyle,
}

impl FlowConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn line_spacing(mut self, spacing: i32) -> Self {
        self.line_spacing = spacing.max(0);
        self
    }

    pub fn item_spacing(mut self, spacing: i32) -> Self {
        self.item_spacing = spacing.max(0);
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding.clamped();
        self
    }

    pub fn tag_text_size(mut self, size: u16) -> Self {
        self.tag_style.text_size = Some(size);
        self
    }

    pub fn tag_text_color(mut self, colors: StateColors) -> Self {
        self.tag_style.text_color = Some(colors);
        self
    }

    pub fn tag_background(mut self, colors: StateColors) -> Self {
        self.tag_style.background = Some(colors);
        self
    }

    pub fn tag_padding(mut self, padding: Edges) -> Self {
        self.tag_style.padding = padding.clamped();
        self
    }

    pub fn tag_margin(mut self, margin: Edges) -> Self {
        self.tag_style.margin = margin.clamped();
        self
    }

    /// Copy with every spacing value clamped, for configs built by struct
    /// literal rather than through the setters.
    pub(crate) fn sanitized(mut self) -> Self {
        self.line_spacing = self.line_spacing.max(0);
        self.item_spacing = self.item_spacing.max(0);
        self.padding = self.padding.clamped();
        self.tag_style.padding = self.tag_style.padding.clamped();
        self.tag_style.margin = self.tag_style.margin.clamped();
        self
    }
}
