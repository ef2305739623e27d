use crate::config::TagStyle;
use crate::layout::{Rect, Size};
use crate::types::{Edges, Rgb, StateColors, Visual};

/// One tag element: a label plus the interactive state a host renders.
#[derive(Debug, Clone)]
pub struct Tag {
    label: String,

    // Box model
    pub margin: Edges,
    pub padding: Edges,

    // Visual
    pub text_size: Option<u16>,
    pub text_color: Option<StateColors>,
    pub background: Option<StateColors>,

    /// Hidden tags take no space and are skipped by measure and arrange.
    pub visible: bool,

    // Interaction, owned by the selection controller
    pub(crate) activatable: bool,
    pub(crate) pressed: bool,
    pub(crate) selected: bool,

    // Layout results
    measured: Size,
    bounds: Rect,
}

impl Tag {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            margin: Edges::default(),
            padding: Edges::default(),
            text_size: None,
            text_color: None,
            background: None,
            visible: true,
            activatable: false,
            pressed: false,
            selected: false,
            measured: Size::default(),
            bounds: Rect::default(),
        }
    }

    pub(crate) fn styled(label: impl Into<String>, style: &TagStyle) -> Self {
        Self {
            margin: style.margin,
            padding: style.padding,
            text_size: style.text_size,
            text_color: style.text_color,
            background: style.background,
            ..Self::new(label)
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Size computed by the last measure pass, padding included.
    pub fn measured(&self) -> Size {
        self.measured
    }

    /// Rect committed by the last arrange pass.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Whether an activation handler is attached to this tag.
    pub fn is_activatable(&self) -> bool {
        self.activatable
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Selection flags are written by [`CheckedFlowLayout`] only, so a tag
    /// handle cannot change them:
    ///
    /// ```compile_fail
    /// let mut layout = tagflow::CheckedFlowLayout::default();
    /// layout.add_tag("c").selected = true;
    /// ```
    ///
    /// [`CheckedFlowLayout`]: crate::CheckedFlowLayout
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn width_with_margin(&self) -> i32 {
        self.measured.width + self.margin.horizontal_total()
    }

    pub fn height_with_margin(&self) -> i32 {
        self.measured.height + self.margin.vertical_total()
    }

    /// Flip the selected flag and return the new value.
    pub(crate) fn toggle(&mut self) -> bool {
        self.selected = !self.selected;
        self.selected
    }

    /// Which variant to draw. A held press shows over the selected state.
    pub fn visual(&self) -> Visual {
        if self.pressed {
            Visual::Pressed
        } else if self.selected {
            Visual::Selected
        } else {
            Visual::Default
        }
    }

    pub fn foreground(&self) -> Option<Rgb> {
        self.text_color.map(|c| c.resolve(self.visual()))
    }

    pub fn background_color(&self) -> Option<Rgb> {
        self.background.map(|c| c.resolve(self.visual()))
    }

    // Builders
    pub fn margin(mut self, margin: Edges) -> Self {
        self.margin = margin;
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub(crate) fn set_measured(&mut self, size: Size) {
        self.measured = size;
    }

    pub(crate) fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }
}
