use super::{BoundsPool, Rect, Size};
use crate::config::FlowConfig;
use crate::error::TagError;
use crate::tag::Tag;
use crate::text::{CellMeasure, TextMeasure};
use crate::types::{Alignment, Constraint};

/// One wrapped row produced by [`FlowLayout::arrange`].
///
/// `first_index` counts visible tags only, so it equals the tag index
/// whenever no tag is hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub first_index: usize,
    pub child_count: usize,
    /// Summed width of the row's items with margins and inner spacing.
    pub width_used: i32,
}

/// Arranges tags left to right, wrapping onto a new row when the current
/// one runs out of width.
pub struct FlowLayout {
    config: FlowConfig,
    elements: Vec<Tag>,
    pool: BoundsPool,
    line_first_index: usize,
    measured: Size,
    measurer: Box<dyn TextMeasure>,
}

impl std::fmt::Debug for FlowLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlowLayout")
            .field("config", &self.config)
            .field("elements", &self.elements)
            .field("measured", &self.measured)
            .finish_non_exhaustive()
    }
}

impl Default for FlowLayout {
    fn default() -> Self {
        Self::new(FlowConfig::default())
    }
}

impl FlowLayout {
    pub fn new(config: FlowConfig) -> Self {
        Self {
            config: config.sanitized(),
            elements: Vec::new(),
            pool: BoundsPool::new(),
            line_first_index: 0,
            measured: Size::default(),
            measurer: Box::new(CellMeasure),
        }
    }

    /// Replace the intrinsic-size measurer used for tag labels.
    pub fn with_measure(mut self, measurer: impl TextMeasure + 'static) -> Self {
        self.measurer = Box::new(measurer);
        for tag in &mut self.elements {
            let size = intrinsic_size(self.measurer.as_ref(), tag);
            tag.set_measured(size);
        }
        self
    }

    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    /// Drop every tag and create a fresh element for each label, in order.
    pub fn set_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.elements.clear();
        for tag in tags {
            self.add_tag(tag);
        }
        log::debug!("[flow] tags replaced, {} tags", self.elements.len());
    }

    /// Append one tag and return its element so callers can attach behavior.
    pub fn add_tag(&mut self, tag: impl Into<String>) -> &mut Tag {
        let mut element = Tag::styled(tag, &self.config.tag_style);
        element.set_measured(intrinsic_size(self.measurer.as_ref(), &element));
        self.elements.push(element);
        let last = self.elements.len() - 1;
        &mut self.elements[last]
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().map(Tag::label)
    }

    pub fn elements(&self) -> &[Tag] {
        &self.elements
    }

    pub fn tag(&self, index: usize) -> Option<&Tag> {
        self.elements.get(index)
    }

    pub fn tag_mut(&mut self, index: usize) -> Option<&mut Tag> {
        self.elements.get_mut(index)
    }

    pub(crate) fn tag_checked(&mut self, index: usize) -> Result<&mut Tag, TagError> {
        let count = self.elements.len();
        self.elements
            .get_mut(index)
            .ok_or(TagError::IndexOutOfRange { index, count })
    }

    /// Bounds of a tag from the last arrange pass.
    pub fn bounds(&self, index: usize) -> Option<Rect> {
        self.elements.get(index).map(Tag::bounds)
    }

    /// Size reported by the last measure pass.
    pub fn measured_size(&self) -> Size {
        self.measured
    }

    pub fn set_visible(&mut self, index: usize, visible: bool) -> Result<(), TagError> {
        self.tag_checked(index)?.visible = visible;
        Ok(())
    }

    /// Set the selected flag of every tag.
    pub fn set_selected_all(&mut self, selected: bool) {
        for tag in &mut self.elements {
            tag.selected = selected;
        }
    }

    /// Compute the size the layout wants under the given constraints.
    ///
    /// The height is the sum of row heights plus line spacing between rows;
    /// the width is the widest row. Exact constraints are reported as given.
    pub fn measure(&mut self, width: Constraint, height: Constraint) -> Size {
        let padding = self.config.padding;
        let item_spacing = self.config.item_spacing;
        let line_spacing = self.config.line_spacing;
        let available = (width.size() - padding.horizontal_total()).max(0);

        let mut content_width = 0;
        let mut content_height = 0;
        let mut line_width = 0;
        let mut line_height = 0;
        let mut line_items = 0usize;

        let measurer = self.measurer.as_ref();
        for tag in self.elements.iter_mut().filter(|t| t.visible) {
            let size = intrinsic_size(measurer, tag);
            tag.set_measured(size);
            let child_width = tag.width_with_margin();
            let child_height = tag.height_with_margin();

            if line_items > 0 && line_width + child_width > available {
                // Close the row, dropping the spacing its last item added.
                content_width = content_width.max(line_width - item_spacing);
                content_height += line_height + line_spacing;

                line_width = child_width + item_spacing;
                line_height = child_height;
                line_items = 1;
            } else {
                line_width += child_width + item_spacing;
                line_height = line_height.max(child_height);
                line_items += 1;
            }
        }

        if line_items > 0 {
            content_width = content_width.max(line_width - item_spacing);
            content_height += line_height;
        }

        self.measured = Size::new(
            width.resolve(content_width + padding.horizontal_total()),
            height.resolve(content_height + padding.vertical_total()),
        );
        self.measured
    }

    /// Position every visible tag inside `area` using the sizes from the
    /// last measure pass. Bounds are absolute, offset by `area`'s origin.
    /// Hidden tags get an empty rect.
    pub fn arrange(&mut self, area: Rect) -> Vec<Line> {
        let padding = self.config.padding;
        let item_spacing = self.config.item_spacing;
        let line_spacing = self.config.line_spacing;
        let available = (area.width - padding.horizontal_total()).max(0);
        let start_x = area.x + padding.left;

        let mut offset_x = start_x;
        let mut offset_y = area.y + padding.top;
        let mut width_used = 0;
        let mut line_height = 0;
        let mut line_count = 0usize;
        let mut lines = Vec::new();

        self.line_first_index = 0;

        let mut visible = Vec::with_capacity(self.elements.len());
        for (index, tag) in self.elements.iter_mut().enumerate() {
            if tag.visible {
                visible.push(index);
            } else {
                tag.set_bounds(Rect::default());
            }
        }

        for (position, &index) in visible.iter().enumerate() {
            let tag = &self.elements[index];
            let size = tag.measured();
            let margin = tag.margin;
            let child_width = tag.width_with_margin();
            let child_height = tag.height_with_margin();

            if line_count > 0 && width_used + child_width > available {
                let line = self.layout_line(
                    &visible,
                    width_used - item_spacing,
                    available,
                    line_count,
                    false,
                );
                lines.push(line);

                offset_x = start_x;
                offset_y += line_height + line_spacing;
                width_used = 0;
                line_height = 0;
                line_count = 0;
            }

            let rect = Rect::new(
                offset_x + margin.left,
                offset_y + margin.top,
                size.width,
                size.height,
            );
            self.pool.set(position - self.line_first_index, rect);
            line_count += 1;

            line_height = line_height.max(child_height);
            width_used += child_width + item_spacing;
            offset_x += child_width + item_spacing;
        }

        if line_count > 0 {
            let line = self.layout_line(
                &visible,
                width_used - item_spacing,
                available,
                line_count,
                true,
            );
            lines.push(line);
        }

        log::debug!(
            "[flow] arranged {} tags into {} lines within {:?}",
            visible.len(),
            lines.len(),
            area
        );
        lines
    }

    /// Commit the pooled rects of one row, shifted for the alignment mode.
    fn layout_line(
        &mut self,
        visible: &[usize],
        width_used: i32,
        width_available: i32,
        child_count: usize,
        is_last_line: bool,
    ) -> Line {
        let leftover = width_available - width_used;

        let (line_offset, offset) = match self.config.alignment {
            Alignment::Start => (0, 0),
            Alignment::Center => (leftover / 2, 0),
            Alignment::End => (leftover, 0),
            Alignment::Justify if child_count > 1 && !is_last_line => {
                (0, leftover.max(0) / (child_count as i32 - 1))
            }
            Alignment::Justify => (0, 0),
        };

        let first_index = self.line_first_index;
        for j in 0..child_count {
            let rect = self.pool.get(j).offset_x(line_offset + offset * j as i32);
            self.elements[visible[first_index + j]].set_bounds(rect);
        }

        log::trace!(
            "[flow] line first={} count={} used={}/{} offset={}+{}*j last={}",
            first_index,
            child_count,
            width_used,
            width_available,
            line_offset,
            offset,
            is_last_line
        );

        self.line_first_index += child_count;
        Line {
            first_index,
            child_count,
            width_used,
        }
    }
}

fn intrinsic_size(measurer: &dyn TextMeasure, tag: &Tag) -> Size {
    let content = measurer.measure(tag.label(), tag.text_size);
    Size::new(
        content.width + tag.padding.horizontal_total(),
        content.height + tag.padding.vertical_total(),
    )
}
