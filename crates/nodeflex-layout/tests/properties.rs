//! Property tests for the flexbox engine.

use nodeflex_layout::{
    calculate_flexbox_layout, distribute_sizes, flex_basis, AlignItems, Direction, FlexItem,
    FlexWrap, FlexboxProperties, JustifyContent,
};
use proptest::prelude::*;

fn items_from(specs: &[(f64, f64, f64)]) -> Vec<FlexItem> {
    specs
        .iter()
        .enumerate()
        .map(|(i, &(width, height, grow))| FlexItem::new(format!("item{}", i), width, height).with_grow(grow))
        .collect()
}

fn item_specs() -> impl Strategy<Value = Vec<(f64, f64, f64)>> {
    prop::collection::vec((0.0f64..200.0, 0.0f64..80.0, 0.0f64..3.0), 1..10)
}

fn wrap_mode() -> impl Strategy<Value = FlexWrap> {
    prop_oneof![Just(FlexWrap::NoWrap), Just(FlexWrap::Wrap), Just(FlexWrap::WrapReverse)]
}

fn justify_mode() -> impl Strategy<Value = JustifyContent> {
    prop_oneof![
        Just(JustifyContent::FlexStart),
        Just(JustifyContent::FlexEnd),
        Just(JustifyContent::Center),
        Just(JustifyContent::SpaceBetween),
        Just(JustifyContent::SpaceAround),
        Just(JustifyContent::SpaceEvenly),
    ]
}

proptest! {
    #[test]
    fn zero_space_keeps_basis(specs in item_specs()) {
        let items = items_from(&specs);
        let sizes = distribute_sizes(&items, 0.0, Direction::Row);
        for (item, size) in items.iter().zip(sizes) {
            prop_assert_eq!(size, flex_basis(item, Direction::Row));
        }
    }

    #[test]
    fn no_growable_items_keep_basis(specs in item_specs(), space in 0.1f64..1000.0) {
        let items: Vec<FlexItem> = items_from(&specs).into_iter().map(|item| item.with_grow(0.0)).collect();
        let sizes = distribute_sizes(&items, space, Direction::Row);
        for (item, size) in items.iter().zip(sizes) {
            prop_assert_eq!(size, item.properties.width);
        }
    }

    #[test]
    fn shrink_never_negative(specs in item_specs(), deficit in 0.0f64..5000.0) {
        let items = items_from(&specs);
        let sizes = distribute_sizes(&items, -deficit, Direction::Row);
        prop_assert!(sizes.iter().all(|size| *size >= 0.0));
    }

    #[test]
    fn growable_row_fills_container(
        specs in item_specs(),
        gap in 0.0f64..20.0,
        extra in 0.0f64..500.0,
    ) {
        let mut items = items_from(&specs);
        items[0].properties.flex_grow = 1.0;
        let total_basis: f64 = items.iter().map(|item| item.properties.width).sum();
        let total_gaps = gap * (items.len() - 1) as f64;
        let width = total_basis + total_gaps + extra;

        let props = FlexboxProperties::row().with_gap(gap);
        let result = calculate_flexbox_layout(0.0, 0.0, width, None, &props, &items);

        let used: f64 = result.items.values().map(|layout| layout.bounds().width).sum::<f64>() + total_gaps;
        prop_assert!((used - width).abs() < 1e-6, "used {} of {}", used, width);
    }

    #[test]
    fn layout_is_idempotent(
        specs in item_specs(),
        width in 50.0f64..600.0,
        gap in 0.0f64..16.0,
        wrap in wrap_mode(),
        justify in justify_mode(),
    ) {
        let items = items_from(&specs);
        let props = FlexboxProperties::row()
            .with_gap(gap)
            .with_wrap(wrap)
            .with_justify(justify)
            .with_align_items(AlignItems::Center);

        let first = calculate_flexbox_layout(3.0, 7.0, width, None, &props, &items);
        let second = calculate_flexbox_layout(3.0, 7.0, width, None, &props, &items);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn order_permutation_invariance(
        (specs, permutation) in item_specs().prop_flat_map(|specs| {
            let indices: Vec<usize> = (0..specs.len()).collect();
            (Just(specs), Just(indices).prop_shuffle())
        }),
        width in 50.0f64..600.0,
        wrap in wrap_mode(),
    ) {
        let items: Vec<FlexItem> = items_from(&specs)
            .into_iter()
            .enumerate()
            .map(|(i, item)| item.with_order(i as i32))
            .collect();
        let permuted: Vec<FlexItem> = permutation.iter().map(|&i| items[i].clone()).collect();

        let props = FlexboxProperties::row().with_gap(4.0).with_wrap(wrap);
        let expected = calculate_flexbox_layout(0.0, 0.0, width, None, &props, &items);
        let actual = calculate_flexbox_layout(0.0, 0.0, width, None, &props, &permuted);
        prop_assert_eq!(expected, actual);
    }

    #[test]
    fn nested_leaves_appear_once(
        outer in 1usize..5,
        inner in 0usize..5,
        column in any::<bool>(),
    ) {
        let items: Vec<FlexItem> = (0..outer)
            .map(|i| {
                let children = (0..inner)
                    .map(|j| FlexItem::new(format!("leaf-{}-{}", i, j), 10.0, 10.0))
                    .collect();
                FlexItem::container(format!("group-{}", i), 60.0, 20.0, children)
            })
            .chain(std::iter::once(FlexItem::new("solo", 5.0, 5.0)))
            .collect();

        let props = if column { FlexboxProperties::column() } else { FlexboxProperties::row() };
        let result = calculate_flexbox_layout(0.0, 0.0, 300.0, None, &props, &items);

        let mut leaves: Vec<&str> = result.leaves().into_iter().map(|(id, _)| id).collect();
        prop_assert_eq!(leaves.len(), outer * inner + 1);
        leaves.sort_unstable();
        leaves.dedup();
        prop_assert_eq!(leaves.len(), outer * inner + 1);
    }
}
