use unicode_width::UnicodeWidthStr;

use crate::layout::Size;

pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Computes the intrinsic content size of a tag label, before the tag's own
/// padding is added.
pub trait TextMeasure {
    fn measure(&self, text: &str, text_size: Option<u16>) -> Size;
}

/// Terminal cell measurement. Labels are always a single line: the width is
/// the label's display width and the height is the text size in rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct CellMeasure;

impl TextMeasure for CellMeasure {
    fn measure(&self, text: &str, text_size: Option<u16>) -> Size {
        let height = text_size.unwrap_or(1).max(1);
        let width = i32::try_from(display_width(text)).unwrap_or(i32::MAX);
        Size::new(width, i32::from(height))
    }
}
