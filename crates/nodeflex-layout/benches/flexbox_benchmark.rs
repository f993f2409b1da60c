//! Flexbox calculator benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nodeflex_layout::{calculate_flexbox_layout, FlexItem, FlexWrap, FlexboxProperties};

fn knob_items(count: usize) -> Vec<FlexItem> {
    (0..count)
        .map(|i| FlexItem::new(format!("param{}", i), 96.0, 72.0))
        .collect()
}

fn slider_row() -> Vec<FlexItem> {
    vec![
        FlexItem::new("label", 60.0, 16.0),
        FlexItem::new("track", 0.0, 8.0).with_grow(1.0),
        FlexItem::new("value", 40.0, 16.0),
    ]
}

fn layout_slider_row(c: &mut Criterion) {
    let props = FlexboxProperties::row().with_gap(8.0);
    let items = slider_row();
    c.bench_function("layout_slider_row", |b| {
        b.iter(|| calculate_flexbox_layout(0.0, 0.0, black_box(240.0), None, &props, black_box(&items)))
    });
}

fn layout_wrapped_grid(c: &mut Criterion) {
    let props = FlexboxProperties::row().with_gap(12.0).with_wrap(FlexWrap::Wrap);
    let items = knob_items(24);
    c.bench_function("layout_wrapped_grid", |b| {
        b.iter(|| calculate_flexbox_layout(0.0, 0.0, black_box(400.0), None, &props, black_box(&items)))
    });
}

fn layout_nested(c: &mut Criterion) {
    let props = FlexboxProperties::column().with_gap(4.0);
    let items: Vec<FlexItem> = (0..8)
        .map(|i| FlexItem::container(format!("row{}", i), 240.0, 16.0, slider_row()))
        .collect();
    c.bench_function("layout_nested", |b| {
        b.iter(|| calculate_flexbox_layout(0.0, 0.0, black_box(240.0), None, &props, black_box(&items)))
    });
}

criterion_group!(benches, layout_slider_row, layout_wrapped_grid, layout_nested);
criterion_main!(benches);
