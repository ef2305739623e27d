use tagflow::{
    Alignment, BoundsPool, Constraint, Edges, FlowConfig, FlowLayout, Line, Rect, Size,
};

fn flow(config: FlowConfig, tags: &[&str]) -> FlowLayout {
    let mut layout = FlowLayout::new(config);
    layout.set_tags(tags.iter().copied());
    layout
}

/// Measure with an at-most width, then arrange into that width.
fn layout_width(layout: &mut FlowLayout, width: i32) -> (Size, Vec<Line>) {
    let size = layout.measure(Constraint::AtMost(width), Constraint::AtMost(1000));
    let lines = layout.arrange(Rect::new(0, 0, width, size.height));
    (size, lines)
}

fn xs(layout: &FlowLayout) -> Vec<i32> {
    layout.elements().iter().map(|t| t.bounds().x).collect()
}

fn ys(layout: &FlowLayout) -> Vec<i32> {
    layout.elements().iter().map(|t| t.bounds().y).collect()
}

// ============================================================================
// Line Breaking
// ============================================================================

#[test]
fn test_wraps_when_row_is_full() {
    let mut layout = flow(FlowConfig::new().item_spacing(1), &["a", "bb", "ccc"]);

    // "a" + 1 + "bb" = 4 fits in 5, adding 1 + "ccc" would need 8
    let (size, lines) = layout_width(&mut layout, 5);

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].first_index, 0);
    assert_eq!(lines[0].child_count, 2);
    assert_eq!(lines[0].width_used, 4);
    assert_eq!(lines[1].first_index, 2);
    assert_eq!(lines[1].child_count, 1);
    assert_eq!(lines[1].width_used, 3);

    assert_eq!(size, Size::new(4, 2));
    assert_eq!(xs(&layout), vec![0, 2, 0]);
    assert_eq!(ys(&layout), vec![0, 0, 1]);
}

#[test]
fn test_everything_fits_on_one_line() {
    let mut layout = flow(FlowConfig::new().item_spacing(1), &["a", "bb", "ccc"]);

    let (size, lines) = layout_width(&mut layout, 100);

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].child_count, 3);
    assert_eq!(size, Size::new(8, 1), "trailing spacing is not counted");
}

#[test]
fn test_oversized_tag_gets_its_own_line() {
    let mut layout = flow(FlowConfig::new().item_spacing(1), &["a", "toolong", "b"]);

    let (_, lines) = layout_width(&mut layout, 3);

    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|line| line.child_count == 1));

    let wide = layout.bounds(1).unwrap();
    assert_eq!(wide, Rect::new(0, 1, 7, 1), "not truncated or shrunk");
    assert_eq!(layout.bounds(2).unwrap().y, 2);
}

#[test]
fn test_oversized_first_tag_adds_no_empty_line() {
    let mut layout = flow(FlowConfig::new().line_spacing(2), &["toolong", "a"]);

    let (size, lines) = layout_width(&mut layout, 3);

    assert_eq!(lines.len(), 2);
    assert_eq!(ys(&layout), vec![0, 3]);
    assert_eq!(size.height, 4);
}

#[test]
fn test_zero_width_puts_every_tag_on_its_own_line() {
    let mut layout = flow(FlowConfig::new(), &["a", "b", "c"]);

    let size = layout.measure(Constraint::AtMost(0), Constraint::AtMost(100));
    assert_eq!(size, Size::new(1, 3));

    let lines = layout.arrange(Rect::new(0, 0, 0, 3));
    assert_eq!(lines.len(), 3);
    assert_eq!(ys(&layout), vec![0, 1, 2]);
}

#[test]
fn test_negative_width_treated_as_zero() {
    let mut layout = flow(FlowConfig::new(), &["a", "b"]);

    let size = layout.measure(Constraint::AtMost(-10), Constraint::AtMost(100));
    assert_eq!(size, Size::new(1, 2));

    let lines = layout.arrange(Rect::new(0, 0, -10, 2));
    assert_eq!(lines.len(), 2);
    assert_eq!(xs(&layout), vec![0, 0]);
}

#[test]
fn test_line_spacing_between_rows() {
    let mut layout = flow(FlowConfig::new().line_spacing(2), &["aa", "bb", "cc"]);

    let (size, lines) = layout_width(&mut layout, 4);

    assert_eq!(lines.len(), 2);
    assert_eq!(ys(&layout), vec![0, 0, 3]);
    assert_eq!(size.height, 4, "1 + 2 + 1, no spacing after the last row");
}

#[test]
fn test_rows_use_tallest_item() {
    let mut layout = flow(FlowConfig::new(), &["a", "b", "c"]);
    layout.tag_mut(1).unwrap().text_size = Some(3);

    let (size, _) = layout_width(&mut layout, 2);

    assert_eq!(ys(&layout), vec![0, 0, 3]);
    assert_eq!(size.height, 4);
}

// ============================================================================
// Empty Layout
// ============================================================================

#[test]
fn test_empty_layout_has_no_lines() {
    let mut layout = FlowLayout::new(FlowConfig::new());

    let (size, lines) = layout_width(&mut layout, 10);

    assert!(layout.is_empty());
    assert!(lines.is_empty());
    assert_eq!(size, Size::new(0, 0));
}

#[test]
fn test_empty_layout_reports_padding() {
    let mut layout = FlowLayout::new(FlowConfig::new().padding(Edges::new(1, 2, 3, 4)));

    let size = layout.measure(Constraint::AtMost(10), Constraint::AtMost(10));

    assert_eq!(size, Size::new(6, 4));
}

// ============================================================================
// Measure Constraints
// ============================================================================

#[test]
fn test_measure_is_idempotent() {
    let mut layout = flow(
        FlowConfig::new().item_spacing(1).line_spacing(1),
        &["alpha", "beta", "gamma", "delta", "epsilon"],
    );

    let first = layout.measure(Constraint::AtMost(12), Constraint::AtMost(50));
    let second = layout.measure(Constraint::AtMost(12), Constraint::AtMost(50));

    assert_eq!(first, second);
    assert_eq!(layout.measured_size(), second);
}

#[test]
fn test_exact_constraints_are_reported_as_given() {
    let mut layout = flow(FlowConfig::new(), &["a", "b"]);

    let size = layout.measure(Constraint::Exact(40), Constraint::Exact(7));
    assert_eq!(size, Size::new(40, 7));

    let size = layout.measure(Constraint::Exact(40), Constraint::AtMost(7));
    assert_eq!(size, Size::new(40, 1));
}

#[test]
fn test_exact_width_still_breaks_lines() {
    let mut layout = flow(FlowConfig::new(), &["aaa", "bbb"]);

    let size = layout.measure(Constraint::Exact(4), Constraint::AtMost(10));

    assert_eq!(size, Size::new(4, 2));
}

#[test]
fn test_padding_shrinks_available_width() {
    let config = FlowConfig::new().padding(Edges::new(1, 2, 1, 2));
    let mut layout = flow(config, &["aa", "bb"]);

    // 7 wide minus 4 padding leaves room for one tag per row
    let size = layout.measure(Constraint::AtMost(7), Constraint::AtMost(20));
    assert_eq!(size, Size::new(6, 4));

    layout.arrange(Rect::new(0, 0, 7, 4));
    assert_eq!(layout.bounds(0), Some(Rect::new(2, 1, 2, 1)));
    assert_eq!(layout.bounds(1), Some(Rect::new(2, 2, 2, 1)));
}

// ============================================================================
// Margin And Padding Tests
// ============================================================================

#[test]
fn test_tag_margin_offsets_bounds() {
    let config = FlowConfig::new().tag_margin(Edges::all(1));
    let mut layout = flow(config, &["ab", "cd"]);

    let (size, _) = layout_width(&mut layout, 20);

    assert_eq!(size, Size::new(8, 3));
    assert_eq!(layout.bounds(0), Some(Rect::new(1, 1, 2, 1)));
    assert_eq!(layout.bounds(1), Some(Rect::new(5, 1, 2, 1)));
}

#[test]
fn test_margin_counts_toward_line_width() {
    let config = FlowConfig::new().tag_margin(Edges::horizontal(1));
    let mut layout = flow(config, &["ab", "cd"]);

    // Each tag needs 4 cells with margins: 8 does not fit in 7
    let (_, lines) = layout_width(&mut layout, 7);

    assert_eq!(lines.len(), 2);
}

#[test]
fn test_tag_padding_grows_intrinsic_size() {
    let config = FlowConfig::new()
        .tag_padding(Edges::symmetric(1, 2))
        .tag_text_size(2);
    let mut layout = flow(config, &["ab"]);

    let (size, _) = layout_width(&mut layout, 20);

    assert_eq!(layout.tag(0).unwrap().measured(), Size::new(6, 4));
    assert_eq!(size, Size::new(6, 4));
}

#[test]
fn test_arrange_offsets_by_area_origin() {
    let mut layout = flow(FlowConfig::new().item_spacing(1), &["ab", "cd"]);
    layout.measure(Constraint::AtMost(10), Constraint::AtMost(10));

    layout.arrange(Rect::new(10, 5, 10, 1));

    assert_eq!(xs(&layout), vec![10, 13]);
    assert_eq!(ys(&layout), vec![5, 5]);
}

// ============================================================================
// Alignment Tests
// ============================================================================

#[test]
fn test_align_start() {
    let mut layout = flow(FlowConfig::new().alignment(Alignment::Start), &["ab", "cd"]);

    layout_width(&mut layout, 10);

    assert_eq!(xs(&layout), vec![0, 2]);
}

#[test]
fn test_align_center() {
    let mut layout = flow(FlowConfig::new().alignment(Alignment::Center), &["ab", "cd"]);

    layout_width(&mut layout, 10);

    assert_eq!(xs(&layout), vec![3, 5], "leftover 6 split evenly");
}

#[test]
fn test_align_end() {
    let mut layout = flow(FlowConfig::new().alignment(Alignment::End), &["ab", "cd"]);

    layout_width(&mut layout, 10);

    assert_eq!(xs(&layout), vec![6, 8]);
}

#[test]
fn test_align_applies_per_line() {
    let config = FlowConfig::new().alignment(Alignment::End);
    let mut layout = flow(config, &["aaaa", "bb", "c"]);

    layout_width(&mut layout, 6);

    // row 1: "aaaa" + "bb" fills 6; row 2: "c" pushed to the right edge
    assert_eq!(xs(&layout), vec![0, 4, 5]);
}

#[test]
fn test_center_oversized_tag_overhangs_both_sides() {
    let config = FlowConfig::new().alignment(Alignment::Center);
    let mut layout = flow(config, &["toolong"]);

    layout_width(&mut layout, 3);

    // leftover 3 - 7 = -4, half of it on each side
    assert_eq!(layout.bounds(0).unwrap().x, -2);
}

#[test]
fn test_end_oversized_tag_keeps_right_edge() {
    let config = FlowConfig::new().alignment(Alignment::End);
    let mut layout = flow(config, &["toolong"]);

    layout_width(&mut layout, 3);

    let bounds = layout.bounds(0).unwrap();
    assert_eq!(bounds.x, -4);
    assert_eq!(bounds.right(), 3);
}

#[test]
fn test_justify_spreads_full_lines() {
    let config = FlowConfig::new()
        .alignment(Alignment::Justify)
        .item_spacing(1);
    let mut layout = flow(config, &["aa", "bb", "cc", "ddddd"]);

    let (_, lines) = layout_width(&mut layout, 12);

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].width_used, 8);
    // leftover 4 over 2 gaps: offset 2 added per position
    assert_eq!(xs(&layout), vec![0, 5, 10, 0]);

    let last = layout.bounds(2).unwrap();
    assert_eq!(last.right(), 12, "full line reaches the right edge");
}

#[test]
fn test_justify_leaves_last_line_at_start() {
    let config = FlowConfig::new()
        .alignment(Alignment::Justify)
        .item_spacing(1);
    let mut layout = flow(config, &["aa", "bb"]);

    layout_width(&mut layout, 20);

    assert_eq!(xs(&layout), vec![0, 3]);
}

#[test]
fn test_justify_single_item_line_is_not_stretched() {
    let config = FlowConfig::new().alignment(Alignment::Justify);
    let mut layout = flow(config, &["aaaa", "bbbb", "c"]);

    // every row but the last holds one item
    layout_width(&mut layout, 5);

    assert_eq!(xs(&layout), vec![0, 0, 4]);
}

// ============================================================================
// Hidden Tags
// ============================================================================

#[test]
fn test_hidden_tag_takes_no_space() {
    let mut layout = flow(FlowConfig::new().item_spacing(1), &["a", "bb", "c"]);
    layout.set_visible(1, false).unwrap();

    let (size, lines) = layout_width(&mut layout, 20);

    assert_eq!(size, Size::new(3, 1));
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].child_count, 2);
    assert_eq!(layout.bounds(1), Some(Rect::default()));
    assert_eq!(layout.bounds(2).unwrap().x, 2);
}

#[test]
fn test_hidden_last_tag_keeps_final_line() {
    let mut layout = flow(FlowConfig::new(), &["aa", "bb", "c"]);
    layout.set_visible(2, false).unwrap();

    let (size, lines) = layout_width(&mut layout, 3);

    assert_eq!(lines.len(), 2);
    assert_eq!(size, Size::new(2, 2));
}

#[test]
fn test_set_visible_out_of_range() {
    let mut layout = flow(FlowConfig::new(), &["a"]);

    assert!(layout.set_visible(3, false).is_err());
}

// ============================================================================
// Tag Management
// ============================================================================

#[test]
fn test_set_tags_replaces_everything() {
    let mut layout = flow(FlowConfig::new(), &["a", "b", "c"]);

    layout.set_tags(["x", "y"]);

    assert_eq!(layout.len(), 2);
    assert_eq!(layout.tags().collect::<Vec<_>>(), vec!["x", "y"]);
}

#[test]
fn test_add_tag_applies_configured_style() {
    let config = FlowConfig::new()
        .tag_text_size(2)
        .tag_margin(Edges::all(1))
        .tag_padding(Edges::horizontal(1));
    let mut layout = FlowLayout::new(config);

    let tag = layout.add_tag("rust");

    assert_eq!(tag.label(), "rust");
    assert_eq!(tag.text_size, Some(2));
    assert_eq!(tag.margin, Edges::all(1));
    assert_eq!(tag.measured(), Size::new(6, 2));
    assert!(!tag.is_selected());
    assert!(!tag.is_activatable());
    assert!(tag.visible);
}

#[test]
fn test_wide_characters_measured_by_display_width() {
    let mut layout = flow(FlowConfig::new(), &["日本"]);

    let (size, _) = layout_width(&mut layout, 10);

    assert_eq!(size, Size::new(4, 1));
}

#[test]
fn test_custom_measure() {
    struct Fixed;

    impl tagflow::TextMeasure for Fixed {
        fn measure(&self, _text: &str, _text_size: Option<u16>) -> Size {
            Size::new(3, 2)
        }
    }

    let mut layout = FlowLayout::new(FlowConfig::new()).with_measure(Fixed);
    layout.set_tags(["a", "bbbbbbbb"]);

    let (size, _) = layout_width(&mut layout, 10);

    assert_eq!(size, Size::new(6, 2));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_negative_spacing_is_clamped() {
    let config = FlowConfig::new()
        .item_spacing(-3)
        .line_spacing(-2)
        .padding(Edges::all(-1));

    assert_eq!(config.item_spacing, 0);
    assert_eq!(config.line_spacing, 0);
    assert_eq!(config.padding, Edges::all(0));
}

#[test]
fn test_struct_literal_config_is_clamped_on_construction() {
    let config = FlowConfig {
        item_spacing: -4,
        line_spacing: -1,
        ..FlowConfig::default()
    };
    let layout = FlowLayout::new(config);

    assert_eq!(layout.config().item_spacing, 0);
    assert_eq!(layout.config().line_spacing, 0);
}

// ============================================================================
// Bounds Pool
// ============================================================================

#[test]
fn test_pool_grows_geometrically() {
    let mut pool = BoundsPool::new();
    assert_eq!(pool.capacity(), 5);

    pool.set(7, Rect::new(1, 2, 3, 4));

    assert_eq!(pool.capacity(), 10);
    assert_eq!(pool.get(7), Rect::new(1, 2, 3, 4));
}

#[test]
#[should_panic]
fn test_pool_read_past_capacity_panics() {
    let pool = BoundsPool::new();

    let _ = pool.get(100);
}

#[test]
fn test_long_line_past_initial_pool() {
    let tags: Vec<String> = (0..12).map(|i| format!("t{}", i % 10)).collect();
    let mut layout = FlowLayout::new(FlowConfig::new().item_spacing(1));
    layout.set_tags(tags);

    let (_, lines) = layout_width(&mut layout, 100);

    assert_eq!(lines.len(), 1);
    let expected: Vec<i32> = (0..12).map(|i| i * 3).collect();
    assert_eq!(xs(&layout), expected);
}

// ============================================================================
// Invariants
// ============================================================================

#[test]
fn test_lines_partition_tags_and_respect_width() {
    let labels = [
        "rust", "go", "c", "haskell", "ocaml", "zig", "javascript", "lua", "f", "elixir",
    ];

    for alignment in [
        Alignment::Start,
        Alignment::Center,
        Alignment::End,
        Alignment::Justify,
    ] {
        for width in 0..30 {
            let config = FlowConfig::new()
                .alignment(alignment)
                .item_spacing(1)
                .tag_margin(Edges::horizontal(1));
            let mut layout = flow(config, &labels);
            let (_, lines) = layout_width(&mut layout, width);

            let mut next = 0;
            for line in &lines {
                assert_eq!(line.first_index, next, "lines are contiguous");
                assert!(line.child_count > 0);
                next += line.child_count;

                if line.child_count > 1 {
                    assert!(
                        line.width_used <= width,
                        "width {width}: line {line:?} overflows"
                    );
                }

                let tags = &layout.elements()[line.first_index..next];
                let sum: i32 = tags.iter().map(|t| t.width_with_margin()).sum();
                assert_eq!(line.width_used, sum + line.child_count as i32 - 1);

                let top = tags[0].bounds().y;
                assert!(tags.iter().all(|t| t.bounds().y == top));
                assert!(tags.windows(2).all(|w| w[0].bounds().x < w[1].bounds().x));
            }
            assert_eq!(next, labels.len(), "every tag is placed exactly once");
        }
    }
}
