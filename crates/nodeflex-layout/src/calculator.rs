//! Flexbox layout: basis → distribute → justify → align → recurse.
//!
//! This is the only place absolute coordinates are produced. Nested
//! containers receive their parent's already-absolute origin, so a whole
//! item tree resolves in one top-down pass.

use std::ops::Range;

use indexmap::IndexMap;
use nodeflex_core::Rect;
use tracing::trace;

use crate::alignment::{apply_align_content, apply_align_items, apply_justify_content};
use crate::distributor::{distribute_sizes, flex_basis};
use crate::line::{FlexLine, LayoutItem};
use crate::types::{Direction, FlexItem, FlexWrap, FlexboxLayoutResult, FlexboxProperties, ItemLayout};

/// Lay out `items` inside a container at `(x, y)`.
///
/// `container_height` of `None` means the container is sized by its
/// content on the vertical axis.
pub fn calculate_flexbox_layout(
    container_x: f64,
    container_y: f64,
    container_width: f64,
    container_height: Option<f64>,
    props: &FlexboxProperties,
    items: &[FlexItem],
) -> FlexboxLayoutResult {
    if items.is_empty() {
        return FlexboxLayoutResult {
            bounds: Rect::new(
                container_x,
                container_y,
                container_width,
                container_height.unwrap_or(0.0),
            ),
            items: IndexMap::new(),
        };
    }

    trace!(
        container_x,
        container_y,
        container_width,
        ?container_height,
        num_items = items.len(),
        wrap = ?props.flex_wrap,
        "calculate_flexbox_layout"
    );

    let ordered = items_in_order(items);
    let container = Container {
        x: container_x,
        y: container_y,
        width: container_width,
        height: container_height,
        props,
    };

    match props.flex_wrap {
        FlexWrap::NoWrap => container.layout_single_line(&ordered),
        FlexWrap::Wrap | FlexWrap::WrapReverse => container.layout_multi_line(&ordered),
    }
}

/// Items sorted by `order`; ties keep declaration order.
fn items_in_order(items: &[FlexItem]) -> Vec<&FlexItem> {
    let mut ordered: Vec<&FlexItem> = items.iter().collect();
    ordered.sort_by_key(|item| item.properties.order);
    ordered
}

fn max_of(values: impl IntoIterator<Item = f64>) -> f64 {
    values.into_iter().fold(0.0, f64::max)
}

struct Container<'a> {
    x: f64,
    y: f64,
    width: f64,
    height: Option<f64>,
    props: &'a FlexboxProperties,
}

impl Container<'_> {
    fn direction(&self) -> Direction {
        self.props.direction
    }

    fn layout_single_line(&self, ordered: &[&FlexItem]) -> FlexboxLayoutResult {
        let direction = self.direction();
        let gap = self.props.main_gap();
        let total_gaps = gap * (ordered.len() - 1) as f64;

        let bases: Vec<f64> = ordered.iter().map(|item| flex_basis(item, direction)).collect();
        let cross_sizes: Vec<f64> = ordered
            .iter()
            .map(|item| item.properties.cross_size(direction))
            .collect();
        let total_basis: f64 = bases.iter().sum();

        let container_main = match direction {
            Direction::Row => self.width,
            Direction::Column => self.height.unwrap_or(total_basis + total_gaps),
        };

        let sizes = distribute_sizes(ordered, container_main - total_basis - total_gaps, direction);
        let total_size: f64 = sizes.iter().sum();

        let container_cross = match direction {
            Direction::Row => self
                .height
                .unwrap_or_else(|| max_of(cross_sizes.iter().copied())),
            Direction::Column => self.width,
        };

        let mut layout_items = build_layout_items(ordered, 0..ordered.len(), &bases, &sizes);
        apply_justify_content(
            &mut layout_items,
            container_main,
            total_size,
            self.props.justify_content,
            gap,
        );
        apply_align_items(&mut layout_items, container_cross, self.props.align_items, &cross_sizes);

        let height = match direction {
            Direction::Row => self.height.unwrap_or(container_cross),
            Direction::Column => self.height.unwrap_or(total_size + total_gaps),
        };

        let mut result = self.result_with_height(height, ordered.len());
        for item in &layout_items {
            let rect = self.to_absolute(item, 0.0);
            self.place(&mut result, ordered[item.index], rect);
        }
        result
    }

    fn layout_multi_line(&self, ordered: &[&FlexItem]) -> FlexboxLayoutResult {
        let direction = self.direction();
        let main_gap = self.props.main_gap();
        let cross_gap = self.props.cross_gap();

        let bases: Vec<f64> = ordered.iter().map(|item| flex_basis(item, direction)).collect();
        let cross_sizes: Vec<f64> = ordered
            .iter()
            .map(|item| item.properties.cross_size(direction))
            .collect();

        // Column containers without a definite height never wrap.
        let main_limit = match direction {
            Direction::Row => self.width,
            Direction::Column => self.height.unwrap_or(f64::INFINITY),
        };

        let mut lines: Vec<FlexLine> = pack_lines(&bases, main_gap, main_limit)
            .into_iter()
            .map(|range| {
                let count = range.len();
                let gaps = main_gap * (count - 1) as f64;
                let line_basis: f64 = bases[range.clone()].iter().sum();
                let line_main = if main_limit.is_finite() {
                    main_limit
                } else {
                    line_basis + gaps
                };

                let sizes = distribute_sizes(&ordered[range.clone()], line_main - line_basis - gaps, direction);
                let total_size: f64 = sizes.iter().sum();

                let mut line = FlexLine {
                    items: build_layout_items(ordered, range.clone(), &bases, &sizes),
                    main_size: total_size + gaps,
                    cross_size: max_of(cross_sizes[range].iter().copied()),
                    cross_position: 0.0,
                };
                apply_justify_content(
                    &mut line.items,
                    line_main,
                    total_size,
                    self.props.justify_content,
                    main_gap,
                );
                line
            })
            .collect();

        if self.props.flex_wrap == FlexWrap::WrapReverse {
            lines.reverse();
        }

        let total_lines: f64 = lines.iter().map(|line| line.cross_size).sum();
        let total_line_gaps = cross_gap * (lines.len() - 1) as f64;
        let container_cross = match direction {
            Direction::Row => self.height.unwrap_or(total_lines + total_line_gaps),
            Direction::Column => self.width,
        };

        apply_align_content(
            &mut lines,
            container_cross,
            total_lines,
            self.props.align_content,
            cross_gap,
        );

        // After align-content so stretched lines stretch their items too.
        for line in &mut lines {
            let line_cross: Vec<f64> = line.items.iter().map(|item| cross_sizes[item.index]).collect();
            apply_align_items(&mut line.items, line.cross_size, self.props.align_items, &line_cross);
        }

        let height = match direction {
            Direction::Row => self.height.unwrap_or(total_lines + total_line_gaps),
            Direction::Column => self
                .height
                .unwrap_or_else(|| max_of(lines.iter().map(|line| line.main_size))),
        };

        let mut result = self.result_with_height(height, ordered.len());
        for line in &lines {
            for item in &line.items {
                let rect = self.to_absolute(item, line.cross_position);
                self.place(&mut result, ordered[item.index], rect);
            }
        }
        result
    }

    fn result_with_height(&self, height: f64, capacity: usize) -> FlexboxLayoutResult {
        FlexboxLayoutResult {
            bounds: Rect::new(self.x, self.y, self.width, height),
            items: IndexMap::with_capacity(capacity),
        }
    }

    /// Absolute box of an item whose line starts at `line_cross` on the cross axis.
    fn to_absolute(&self, item: &LayoutItem, line_cross: f64) -> Rect {
        trace!(
            index = item.index,
            order = item.order,
            basis = item.basis,
            size = item.size,
            "placing flex item"
        );
        let cross = line_cross + item.cross_position;
        match self.direction() {
            Direction::Row => Rect::new(self.x + item.position, self.y + cross, item.size, item.cross_size),
            Direction::Column => Rect::new(self.x + cross, self.y + item.position, item.cross_size, item.size),
        }
    }

    /// Record an item's geometry, recursing into nested containers.
    fn place(&self, result: &mut FlexboxLayoutResult, item: &FlexItem, rect: Rect) {
        let layout = if item.is_container {
            let nested_height = (rect.height > 0.0).then_some(rect.height);
            ItemLayout::Container(calculate_flexbox_layout(
                rect.x,
                rect.y,
                rect.width,
                nested_height,
                self.props,
                &item.children,
            ))
        } else {
            ItemLayout::Leaf(rect)
        };
        result.items.insert(item.id.clone(), layout);
    }
}

fn build_layout_items(
    ordered: &[&FlexItem],
    range: Range<usize>,
    bases: &[f64],
    sizes: &[f64],
) -> smallvec::SmallVec<[LayoutItem; 8]> {
    range
        .zip(sizes)
        .map(|(index, &size)| {
            let properties = &ordered[index].properties;
            LayoutItem {
                index,
                order: properties.order,
                basis: bases[index],
                size,
                position: 0.0,
                cross_position: 0.0,
                cross_size: 0.0,
                align_self: properties.align_self,
            }
        })
        .collect()
}

/// Greedily split items into lines by their bases.
///
/// An item that does not fit starts a new line, unless the current line is
/// empty: an oversized item then gets a line of its own.
fn pack_lines(bases: &[f64], gap: f64, limit: f64) -> Vec<Range<usize>> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut line_main = 0.0;

    for (index, &basis) in bases.iter().enumerate() {
        if index == start {
            line_main = basis;
            continue;
        }

        let candidate = line_main + gap + basis;
        if candidate > limit {
            lines.push(start..index);
            start = index;
            line_main = basis;
        } else {
            line_main = candidate;
        }
    }

    lines.push(start..bases.len());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AlignContent, AlignItems, AlignSelf, FlexBasis, JustifyContent};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.001
    }

    fn row_items(count: usize, width: f64, height: f64) -> Vec<FlexItem> {
        (0..count)
            .map(|i| FlexItem::new(format!("item{}", i), width, height))
            .collect()
    }

    #[test]
    fn test_layout_items_keep_basis_and_order() {
        let items = vec![
            FlexItem::new("late", 30.0, 10.0).with_order(2),
            FlexItem::new("fill", 20.0, 10.0).with_grow(1.0),
        ];
        let ordered = items_in_order(&items);
        let bases: Vec<f64> = ordered.iter().map(|item| flex_basis(item, Direction::Row)).collect();
        let sizes = vec![70.0, 30.0];

        let layout_items = build_layout_items(&ordered, 0..2, &bases, &sizes);

        assert_eq!(ordered[0].id, "fill");
        assert_eq!(layout_items[0].order, 0);
        assert_eq!(layout_items[0].basis, 20.0);
        assert_eq!(layout_items[0].size, 70.0);
        assert_eq!(layout_items[1].order, 2);
        assert_eq!(layout_items[1].basis, 30.0);
        assert_eq!(layout_items[1].size, 30.0);
    }

    #[test]
    fn test_empty_container() {
        let props = FlexboxProperties::row();
        let result = calculate_flexbox_layout(5.0, 6.0, 100.0, None, &props, &[]);
        assert_eq!(result.bounds, Rect::new(5.0, 6.0, 100.0, 0.0));
        assert!(result.items.is_empty());

        let result = calculate_flexbox_layout(5.0, 6.0, 100.0, Some(40.0), &props, &[]);
        assert_eq!(result.bounds.height, 40.0);
    }

    #[test]
    fn test_row_positions_and_content_height() {
        let props = FlexboxProperties::row().with_gap(10.0);
        let mut items = row_items(3, 50.0, 30.0);
        items[1].properties.height = 45.0;

        let result = calculate_flexbox_layout(100.0, 200.0, 300.0, None, &props, &items);

        assert_eq!(result.item("item0"), Some(Rect::new(100.0, 200.0, 50.0, 30.0)));
        assert_eq!(result.item("item1"), Some(Rect::new(160.0, 200.0, 50.0, 45.0)));
        assert_eq!(result.item("item2"), Some(Rect::new(220.0, 200.0, 50.0, 30.0)));
        assert_eq!(result.bounds.height, 45.0);
    }

    #[test]
    fn test_row_grow_fills_container() {
        let props = FlexboxProperties::row().with_gap(10.0);
        let items = vec![
            FlexItem::new("fixed", 50.0, 20.0),
            FlexItem::new("fill", 0.0, 20.0).with_grow(1.0),
        ];

        let result = calculate_flexbox_layout(0.0, 0.0, 300.0, Some(20.0), &props, &items);

        let fill = result.item("fill").unwrap();
        assert!(approx(fill.x, 60.0));
        assert!(approx(fill.width, 240.0));
        assert!(approx(fill.right(), 300.0));
    }

    #[test]
    fn test_column_is_content_sized() {
        let props = FlexboxProperties::column().with_gap(5.0);
        let items = row_items(3, 80.0, 20.0);

        let result = calculate_flexbox_layout(0.0, 10.0, 200.0, None, &props, &items);

        assert_eq!(result.bounds.height, 70.0);
        assert_eq!(result.item("item2"), Some(Rect::new(0.0, 60.0, 80.0, 20.0)));
    }

    #[test]
    fn test_column_stretch_uses_width() {
        let props = FlexboxProperties::column().with_align_items(AlignItems::Stretch);
        let items = row_items(2, 80.0, 20.0);

        let result = calculate_flexbox_layout(0.0, 0.0, 200.0, None, &props, &items);

        assert_eq!(result.item("item0").unwrap().width, 200.0);
        assert_eq!(result.item("item1").unwrap().y, 20.0);
    }

    #[test]
    fn test_column_with_height_shrinks() {
        let props = FlexboxProperties::column();
        let items = row_items(2, 10.0, 100.0);

        let result = calculate_flexbox_layout(0.0, 0.0, 50.0, Some(150.0), &props, &items);

        assert!(approx(result.item("item0").unwrap().height, 75.0));
        assert!(approx(result.item("item1").unwrap().y, 75.0));
        assert_eq!(result.bounds.height, 150.0);
    }

    #[test]
    fn test_order_resequences() {
        let props = FlexboxProperties::row();
        let items = vec![
            FlexItem::new("a", 10.0, 10.0).with_order(2),
            FlexItem::new("b", 20.0, 10.0).with_order(1),
            FlexItem::new("c", 30.0, 10.0).with_order(1),
        ];

        let result = calculate_flexbox_layout(0.0, 0.0, 100.0, None, &props, &items);

        assert_eq!(result.item("b").unwrap().x, 0.0);
        assert_eq!(result.item("c").unwrap().x, 20.0);
        assert_eq!(result.item("a").unwrap().x, 50.0);
        let keys: Vec<&str> = result.items.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_align_self_in_row() {
        let props = FlexboxProperties::row().with_align_items(AlignItems::FlexStart);
        let items = vec![
            FlexItem::new("tall", 10.0, 60.0),
            FlexItem::new("end", 10.0, 20.0).with_align_self(AlignSelf::FlexEnd),
            FlexItem::new("middle", 10.0, 20.0).with_align_self(AlignSelf::Center),
            FlexItem::new("plain", 10.0, 20.0),
        ];

        let result = calculate_flexbox_layout(0.0, 0.0, 100.0, None, &props, &items);

        assert_eq!(result.item("end").unwrap().y, 40.0);
        assert_eq!(result.item("middle").unwrap().y, 20.0);
        assert_eq!(result.item("plain").unwrap().y, 0.0);
    }

    #[test]
    fn test_wrap_scenario() {
        let props = FlexboxProperties::row().with_gap(10.0).with_wrap(FlexWrap::Wrap);
        let items = row_items(3, 120.0, 40.0);

        let result = calculate_flexbox_layout(0.0, 0.0, 300.0, None, &props, &items);

        let first = result.item("item0").unwrap();
        let second = result.item("item1").unwrap();
        let third = result.item("item2").unwrap();
        assert_eq!(first.y, second.y);
        assert_eq!(second.x, 130.0);
        assert_eq!(third.x, 0.0);
        assert_eq!(third.y, 50.0);
        assert_eq!(result.bounds.height, 90.0);
    }

    #[test]
    fn test_wrap_oversized_item_gets_own_line() {
        let props = FlexboxProperties::row().with_wrap(FlexWrap::Wrap);
        let items = vec![
            FlexItem::new("huge", 500.0, 10.0).with_shrink(0.0),
            FlexItem::new("small", 50.0, 10.0),
        ];

        let result = calculate_flexbox_layout(0.0, 0.0, 100.0, None, &props, &items);

        assert_eq!(result.item("huge"), Some(Rect::new(0.0, 0.0, 500.0, 10.0)));
        assert_eq!(result.item("small"), Some(Rect::new(0.0, 10.0, 50.0, 10.0)));
    }

    #[test]
    fn test_wrap_reverse_stacks_from_end() {
        let props = FlexboxProperties::row().with_wrap(FlexWrap::WrapReverse);
        let items = row_items(3, 60.0, 20.0);

        let result = calculate_flexbox_layout(0.0, 0.0, 100.0, None, &props, &items);

        // Three lines; the first line ends up at the bottom
        assert_eq!(result.item("item0").unwrap().y, 40.0);
        assert_eq!(result.item("item2").unwrap().y, 0.0);
    }

    #[test]
    fn test_wrap_grow_within_line() {
        let props = FlexboxProperties::row().with_wrap(FlexWrap::Wrap);
        let items = vec![
            FlexItem::new("a", 60.0, 10.0).with_grow(1.0),
            FlexItem::new("b", 30.0, 10.0),
            FlexItem::new("c", 50.0, 10.0).with_grow(1.0),
        ];

        let result = calculate_flexbox_layout(0.0, 0.0, 100.0, None, &props, &items);

        assert_eq!(result.item("a").unwrap().width, 70.0);
        assert_eq!(result.item("b").unwrap().x, 70.0);
        assert_eq!(result.item("c").unwrap().width, 100.0);
    }

    #[test]
    fn test_wrap_align_content_center() {
        let props = FlexboxProperties::row()
            .with_wrap(FlexWrap::Wrap)
            .with_align_content(AlignContent::Center);
        let items = row_items(2, 60.0, 20.0);

        let result = calculate_flexbox_layout(0.0, 0.0, 100.0, Some(100.0), &props, &items);

        assert_eq!(result.item("item0").unwrap().y, 30.0);
        assert_eq!(result.item("item1").unwrap().y, 50.0);
    }

    #[test]
    fn test_wrap_align_content_stretch_stretches_items() {
        let props = FlexboxProperties::row()
            .with_wrap(FlexWrap::Wrap)
            .with_align_content(AlignContent::Stretch)
            .with_align_items(AlignItems::Stretch);
        let items = row_items(2, 60.0, 20.0);

        let result = calculate_flexbox_layout(0.0, 0.0, 100.0, Some(100.0), &props, &items);

        assert_eq!(result.item("item0").unwrap().height, 50.0);
        assert_eq!(result.item("item1").unwrap().y, 50.0);
    }

    #[test]
    fn test_column_wrap_with_height() {
        let props = FlexboxProperties::column().with_gap(10.0).with_wrap(FlexWrap::Wrap);
        let items = row_items(3, 30.0, 30.0);

        let result = calculate_flexbox_layout(0.0, 0.0, 200.0, Some(80.0), &props, &items);

        assert_eq!(result.item("item1"), Some(Rect::new(0.0, 40.0, 30.0, 30.0)));
        assert_eq!(result.item("item2"), Some(Rect::new(40.0, 0.0, 30.0, 30.0)));
    }

    #[test]
    fn test_column_wrap_without_height_is_single_line() {
        let props = FlexboxProperties::column().with_wrap(FlexWrap::Wrap);
        let items = row_items(3, 30.0, 30.0);

        let result = calculate_flexbox_layout(0.0, 0.0, 200.0, None, &props, &items);

        assert_eq!(result.item("item2").unwrap().y, 60.0);
        assert_eq!(result.bounds.height, 90.0);
    }

    #[test]
    fn test_nested_container_uses_absolute_origin() {
        let props = FlexboxProperties::row().with_gap(10.0);
        let items = vec![
            FlexItem::new("label", 40.0, 20.0),
            FlexItem::container(
                "group",
                100.0,
                20.0,
                vec![FlexItem::new("knob", 20.0, 20.0), FlexItem::new("value", 30.0, 20.0)],
            ),
        ];

        let result = calculate_flexbox_layout(10.0, 10.0, 300.0, None, &props, &items);

        let group = result.container("group").unwrap();
        assert_eq!(group.bounds, Rect::new(60.0, 10.0, 100.0, 20.0));
        assert_eq!(group.item("knob"), Some(Rect::new(60.0, 10.0, 20.0, 20.0)));
        assert_eq!(group.item("value"), Some(Rect::new(90.0, 10.0, 30.0, 20.0)));

        let leaves: Vec<&str> = result.leaves().into_iter().map(|(id, _)| id).collect();
        assert_eq!(leaves, vec!["label", "knob", "value"]);
    }

    #[test]
    fn test_fixed_basis_overrides_width() {
        let props = FlexboxProperties::row();
        let items = vec![FlexItem::new("a", 10.0, 10.0).with_basis(FlexBasis::Length(42.0))];

        let result = calculate_flexbox_layout(0.0, 0.0, 100.0, None, &props, &items);

        assert_eq!(result.item("a").unwrap().width, 42.0);
    }

    #[test]
    fn test_justify_space_between_row() {
        let props = FlexboxProperties::row().with_justify(JustifyContent::SpaceBetween);
        let items = row_items(3, 50.0, 10.0);

        let result = calculate_flexbox_layout(0.0, 0.0, 300.0, None, &props, &items);

        assert_eq!(result.item("item1").unwrap().x, 125.0);
        assert_eq!(result.item("item2").unwrap().x, 250.0);
    }

    #[test]
    fn test_pack_lines() {
        assert_eq!(pack_lines(&[120.0, 120.0, 120.0], 10.0, 300.0), vec![0..2, 2..3]);
        assert_eq!(pack_lines(&[400.0, 10.0], 0.0, 100.0), vec![0..1, 1..2]);
        assert_eq!(pack_lines(&[10.0, 10.0], 0.0, f64::INFINITY), vec![0..2]);
    }
}
