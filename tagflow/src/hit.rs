use crate::layout::FlowLayout;

/// Find the visible tag whose arranged bounds contain the given cell.
/// Later tags win where bounds overlap.
pub fn hit_test(layout: &FlowLayout, x: i32, y: i32) -> Option<usize> {
    layout
        .elements()
        .iter()
        .enumerate()
        .rev()
        .find(|(_, tag)| tag.visible && tag.bounds().contains(x, y))
        .map(|(index, _)| index)
}
