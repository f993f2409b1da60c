//! Flex basis resolution and grow/shrink distribution of main-axis space.

use std::borrow::Borrow;

use indexmap::IndexMap;

use crate::types::{Direction, FlexBasis, FlexItem};

/// Resolve an item's flex basis.
///
/// A numeric basis wins; `auto` and `content` both fall back to the
/// intrinsic main-axis size.
pub fn flex_basis(item: &FlexItem, direction: Direction) -> f64 {
    match item.properties.flex_basis {
        FlexBasis::Length(length) => length,
        FlexBasis::Auto | FlexBasis::Content => item.properties.main_size(direction),
    }
}

/// Clamp a main-axis size to the item's `[min, max]` constraints.
pub fn apply_constraints(size: f64, item: &FlexItem, direction: Direction) -> f64 {
    let (min, max) = item.properties.main_constraints(direction);
    let min = min.unwrap_or(0.0);
    let max = max.unwrap_or(f64::INFINITY);
    // min wins over max, as in CSS
    size.min(max).max(min)
}

/// Final main sizes for `items`, parallel to the input slice.
///
/// Positive space goes to items with `flex_grow > 0` in proportion to their
/// grow factor. Negative space is taken from items with `flex_shrink > 0` in
/// proportion to `flex_shrink × basis`. Sizes never drop below zero.
pub fn distribute_sizes<I: Borrow<FlexItem>>(
    items: &[I],
    available_space: f64,
    direction: Direction,
) -> Vec<f64> {
    let bases: Vec<f64> = items
        .iter()
        .map(|item| flex_basis(item.borrow(), direction))
        .collect();

    let mut sizes = bases.clone();

    if available_space > 0.0 {
        let total_grow: f64 = items
            .iter()
            .map(|item| item.borrow().properties.flex_grow)
            .filter(|grow| *grow > 0.0)
            .sum();

        if total_grow > 0.0 {
            for (size, item) in sizes.iter_mut().zip(items) {
                let grow = item.borrow().properties.flex_grow;
                if grow > 0.0 {
                    *size += available_space * grow / total_grow;
                }
            }
        }
    } else if available_space < 0.0 {
        let deficit = -available_space;
        let total_scaled: f64 = items
            .iter()
            .zip(&bases)
            .map(|(item, basis)| (item.borrow().properties.flex_shrink, *basis))
            .filter(|(shrink, _)| *shrink > 0.0)
            .map(|(shrink, basis)| shrink * basis)
            .sum();

        if total_scaled > 0.0 {
            for ((size, item), basis) in sizes.iter_mut().zip(items).zip(&bases) {
                let shrink = item.borrow().properties.flex_shrink;
                if shrink > 0.0 {
                    let share = deficit * shrink * basis / total_scaled;
                    *size = (basis - share).max(0.0);
                }
            }
        }
    }

    sizes
        .into_iter()
        .zip(items)
        .map(|(size, item)| apply_constraints(size, item.borrow(), direction).max(0.0))
        .collect()
}

/// Final main sizes keyed by item id.
pub fn distribute_space(
    items: &[FlexItem],
    available_space: f64,
    direction: Direction,
) -> IndexMap<String, f64> {
    items
        .iter()
        .map(|item| item.id.clone())
        .zip(distribute_sizes(items, available_space, direction))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, width: f64) -> FlexItem {
        FlexItem::new(id, width, 20.0)
    }

    #[test]
    fn test_basis_resolution() {
        let auto = item("a", 50.0);
        assert_eq!(flex_basis(&auto, Direction::Row), 50.0);
        assert_eq!(flex_basis(&auto, Direction::Column), 20.0);

        let content = item("c", 40.0).with_basis(FlexBasis::Content);
        assert_eq!(flex_basis(&content, Direction::Row), 40.0);

        let fixed = item("f", 40.0).with_basis(FlexBasis::Length(75.0));
        assert_eq!(flex_basis(&fixed, Direction::Row), 75.0);
        assert_eq!(flex_basis(&fixed, Direction::Column), 75.0);
    }

    #[test]
    fn test_constraints() {
        let mut constrained = item("a", 50.0);
        constrained.properties.min_width = Some(30.0);
        constrained.properties.max_width = Some(60.0);
        assert_eq!(apply_constraints(10.0, &constrained, Direction::Row), 30.0);
        assert_eq!(apply_constraints(100.0, &constrained, Direction::Row), 60.0);
        assert_eq!(apply_constraints(45.0, &constrained, Direction::Row), 45.0);
        // Width constraints do not apply on the column main axis
        assert_eq!(apply_constraints(100.0, &constrained, Direction::Column), 100.0);

        let open = item("b", 50.0);
        assert_eq!(apply_constraints(1e9, &open, Direction::Row), 1e9);
    }

    #[test]
    fn test_zero_space_keeps_basis() {
        let items = vec![item("a", 50.0).with_grow(1.0), item("b", 70.0)];
        let sizes = distribute_space(&items, 0.0, Direction::Row);
        assert_eq!(sizes["a"], 50.0);
        assert_eq!(sizes["b"], 70.0);
    }

    #[test]
    fn test_grow_proportional() {
        let items = vec![
            item("a", 50.0).with_grow(1.0),
            item("b", 50.0).with_grow(3.0),
            item("c", 50.0),
        ];
        let sizes = distribute_space(&items, 100.0, Direction::Row);
        assert_eq!(sizes["a"], 75.0);
        assert_eq!(sizes["b"], 125.0);
        assert_eq!(sizes["c"], 50.0);
    }

    #[test]
    fn test_no_growable_items_leaves_surplus() {
        let items = vec![item("a", 50.0), item("b", 30.0)];
        let sizes = distribute_space(&items, 500.0, Direction::Row);
        assert_eq!(sizes["a"], 50.0);
        assert_eq!(sizes["b"], 30.0);
    }

    #[test]
    fn test_shrink_weighted_by_basis() {
        let items = vec![item("a", 100.0), item("b", 300.0)];
        let sizes = distribute_space(&items, -100.0, Direction::Row);
        assert_eq!(sizes["a"], 75.0);
        assert_eq!(sizes["b"], 225.0);
    }

    #[test]
    fn test_shrink_never_negative() {
        let items = vec![item("a", 100.0).with_shrink(5.0), item("b", 10.0)];
        let sizes = distribute_space(&items, -1000.0, Direction::Row);
        assert!(sizes.values().all(|size| *size >= 0.0));
        assert_eq!(sizes["a"], 0.0);
    }

    #[test]
    fn test_no_shrinkable_items_overflow() {
        let items = vec![item("a", 100.0).with_shrink(0.0), item("b", 100.0).with_shrink(0.0)];
        let sizes = distribute_space(&items, -50.0, Direction::Row);
        assert_eq!(sizes["a"], 100.0);
        assert_eq!(sizes["b"], 100.0);
    }

    #[test]
    fn test_grow_respects_max() {
        let mut capped = item("a", 50.0).with_grow(1.0);
        capped.properties.max_width = Some(80.0);
        let sizes = distribute_sizes(&[capped], 200.0, Direction::Row);
        assert_eq!(sizes, vec![80.0]);
    }
}
