//! Flow layout whose tags can be toggled on and off.

use std::ops::Deref;

use crate::error::TagError;
use crate::layout::{FlowLayout, Line, Rect, Size};
use crate::selection::SelectionSet;
use crate::tag::Tag;
use crate::types::Constraint;
use crate::FlowConfig;

/// Receives selection notifications from a [`CheckedFlowLayout`].
///
/// Both methods are called synchronously from inside the operation that
/// caused them, after the selection has been fully updated.
pub trait SelectionListener {
    /// A user activated the tag at `index`; `selected` is its new state.
    /// Not called for programmatic changes.
    fn on_tag_activated(&mut self, index: usize, selected: bool);

    /// The set of selected tags changed.
    fn on_selection_changed(&mut self, selected: &SelectionSet);
}

/// A [`FlowLayout`] that tracks which tags are selected.
///
/// Read access to the wrapped layout goes through `Deref`. Every operation
/// that changes the tag list or selection is on this type, so the selection
/// set always names present tags and matches their selected flags.
#[derive(Default)]
pub struct CheckedFlowLayout {
    layout: FlowLayout,
    selection: SelectionSet,
    listener: Option<Box<dyn SelectionListener>>,
    pressed: Option<usize>,
}

impl std::fmt::Debug for CheckedFlowLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckedFlowLayout")
            .field("layout", &self.layout)
            .field("selection", &self.selection)
            .field("has_listener", &self.listener.is_some())
            .field("pressed", &self.pressed)
            .finish()
    }
}

impl Deref for CheckedFlowLayout {
    type Target = FlowLayout;

    fn deref(&self) -> &Self::Target {
        &self.layout
    }
}

impl CheckedFlowLayout {
    pub fn new(config: FlowConfig) -> Self {
        Self::from_layout(FlowLayout::new(config))
    }

    /// Wrap an existing layout. Tags it already holds become activatable
    /// and start deselected.
    pub fn from_layout(mut layout: FlowLayout) -> Self {
        for index in 0..layout.len() {
            if let Some(tag) = layout.tag_mut(index) {
                tag.activatable = true;
                tag.selected = false;
            }
        }
        Self {
            layout,
            selection: SelectionSet::new(),
            listener: None,
            pressed: None,
        }
    }

    pub fn set_listener(&mut self, listener: impl SelectionListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// Replace all tags. The selection is cleared and listeners are told
    /// so with an empty set.
    pub fn set_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.layout.set_tags(tags);
        for index in 0..self.layout.len() {
            if let Some(tag) = self.layout.tag_mut(index) {
                tag.activatable = true;
            }
        }
        self.pressed = None;
        self.selection.clear();
        self.notify_selection_changed();
    }

    /// Append a tag that can be toggled by activation. The returned handle
    /// can restyle the tag but not change its selection state.
    pub fn add_tag(&mut self, tag: impl Into<String>) -> &mut Tag {
        let element = self.layout.add_tag(tag);
        element.activatable = true;
        element
    }

    /// Select or deselect every tag, then notify once with the result.
    pub fn set_all_selected(&mut self, selected: bool) {
        self.layout.set_selected_all(selected);
        if selected {
            self.selection = SelectionSet::all(self.layout.len());
        } else {
            self.selection.clear();
        }
        self.notify_selection_changed();
    }

    /// Toggle the tag at `index` as if the user clicked it.
    ///
    /// Returns the tag's new selected state. An index that no longer names
    /// an activatable tag is rejected without touching any state.
    pub fn activate(&mut self, index: usize) -> Result<bool, TagError> {
        let tag = self.layout.tag_checked(index).inspect_err(|err| {
            log::warn!("[checked] ignoring activation: {err}");
        })?;
        if !tag.activatable {
            log::warn!("[checked] ignoring activation of tag {index}: no handler");
            return Err(TagError::NotActivatable(index));
        }

        let selected = tag.toggle();
        if selected {
            self.selection.insert(index);
        } else {
            self.selection.remove(index);
        }
        log::debug!(
            "[checked] tag {index} {}, selection {:?}",
            if selected { "selected" } else { "deselected" },
            self.selection.to_vec()
        );

        if let Some(listener) = self.listener.as_mut() {
            listener.on_tag_activated(index, selected);
            listener.on_selection_changed(&self.selection);
        }
        Ok(selected)
    }

    /// Show the pressed visual on a tag until [`release`](Self::release).
    pub fn press(&mut self, index: usize) -> Result<(), TagError> {
        let tag = self.layout.tag_checked(index)?;
        if !tag.activatable {
            return Err(TagError::NotActivatable(index));
        }
        tag.pressed = true;

        if let Some(previous) = self.pressed.replace(index) {
            if previous != index {
                if let Some(tag) = self.layout.tag_mut(previous) {
                    tag.pressed = false;
                }
            }
        }
        Ok(())
    }

    /// End a press. When the press is released over the tag it started on,
    /// that tag is activated and its new state returned.
    pub fn release(&mut self, over: Option<usize>) -> Result<Option<bool>, TagError> {
        let Some(pressed) = self.pressed.take() else {
            return Ok(None);
        };
        if let Some(tag) = self.layout.tag_mut(pressed) {
            tag.pressed = false;
        }

        if over == Some(pressed) {
            self.activate(pressed).map(Some)
        } else {
            Ok(None)
        }
    }

    pub fn pressed(&self) -> Option<usize> {
        self.pressed
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selection.contains(index)
    }

    /// Labels of the selected tags, in selection order.
    pub fn selected_tags(&self) -> Vec<&str> {
        self.selection
            .iter()
            .filter_map(|index| self.layout.tag(index).map(Tag::label))
            .collect()
    }

    pub fn set_visible(&mut self, index: usize, visible: bool) -> Result<(), TagError> {
        self.layout.set_visible(index, visible)
    }

    pub fn measure(&mut self, width: Constraint, height: Constraint) -> Size {
        self.layout.measure(width, height)
    }

    pub fn arrange(&mut self, area: Rect) -> Vec<Line> {
        self.layout.arrange(area)
    }

    fn notify_selection_changed(&mut self) {
        log::debug!(
            "[checked] selection changed: {:?}",
            self.selection.to_vec()
        );
        if let Some(listener) = self.listener.as_mut() {
            listener.on_selection_changed(&self.selection);
        }
    }
}
