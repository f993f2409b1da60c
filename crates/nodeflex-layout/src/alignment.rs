//! Main-axis justification and cross-axis alignment.
//!
//! Gaps are always honoured: the space-* modes only distribute the free
//! space left over after gaps. Overflowing content packs from the start.

use crate::line::{FlexLine, LayoutItem};
use crate::types::{AlignContent, AlignItems, JustifyContent};

/// Offset of the first item and the step between adjacent items.
fn distribution_offsets(justify: JustifyContent, free_space: f64, count: usize, gap: f64) -> (f64, f64) {
    match justify {
        JustifyContent::FlexStart => (0.0, gap),
        JustifyContent::FlexEnd => (free_space, gap),
        JustifyContent::Center => (free_space / 2.0, gap),
        JustifyContent::SpaceBetween if count > 1 => (0.0, gap + free_space / (count - 1) as f64),
        JustifyContent::SpaceBetween => (0.0, gap),
        JustifyContent::SpaceAround => {
            let space = free_space / count as f64;
            (space / 2.0, gap + space)
        }
        JustifyContent::SpaceEvenly => {
            let space = free_space / (count + 1) as f64;
            (space, gap + space)
        }
    }
}

/// Set each item's main-axis `position` within the container.
pub fn apply_justify_content(
    items: &mut [LayoutItem],
    container_main_size: f64,
    total_items_size: f64,
    justify: JustifyContent,
    gap: f64,
) {
    if items.is_empty() {
        return;
    }

    let count = items.len();
    let total_gaps = gap * (count - 1) as f64;
    let free_space = (container_main_size - total_items_size - total_gaps).max(0.0);
    let (initial_offset, step) = distribution_offsets(justify, free_space, count, gap);

    let mut position = initial_offset;
    for item in items.iter_mut() {
        item.position = position;
        position += item.size + step;
    }
}

/// Set each item's `cross_position` (and `cross_size`) within its line.
///
/// `item_cross_sizes` are the intrinsic cross sizes, parallel to `items`.
/// An item's `align_self` overrides `align_items` unless it is `Auto`.
pub fn apply_align_items(
    items: &mut [LayoutItem],
    container_cross_size: f64,
    align_items: AlignItems,
    item_cross_sizes: &[f64],
) {
    for (item, &intrinsic) in items.iter_mut().zip(item_cross_sizes) {
        let align = item.align_self.resolve(align_items);

        if align == AlignItems::Stretch {
            item.cross_size = container_cross_size;
            item.cross_position = 0.0;
            continue;
        }

        item.cross_size = intrinsic;
        item.cross_position = match align {
            AlignItems::FlexStart | AlignItems::Baseline | AlignItems::Stretch => 0.0,
            AlignItems::Center => (container_cross_size - intrinsic) / 2.0,
            AlignItems::FlexEnd => container_cross_size - intrinsic,
        };
    }
}

/// Set each line's `cross_position` within the container.
///
/// `Stretch` grows every line by an equal share of the free cross space.
pub fn apply_align_content(
    lines: &mut [FlexLine],
    container_cross_size: f64,
    total_lines_size: f64,
    align_content: AlignContent,
    cross_gap: f64,
) {
    if lines.is_empty() {
        return;
    }

    let count = lines.len();
    let total_gaps = cross_gap * (count - 1) as f64;
    let free_space = (container_cross_size - total_lines_size - total_gaps).max(0.0);

    let (initial_offset, step) = match align_content {
        AlignContent::FlexStart => (0.0, cross_gap),
        AlignContent::FlexEnd => (free_space, cross_gap),
        AlignContent::Center => (free_space / 2.0, cross_gap),
        AlignContent::SpaceBetween => {
            distribution_offsets(JustifyContent::SpaceBetween, free_space, count, cross_gap)
        }
        AlignContent::SpaceAround => {
            distribution_offsets(JustifyContent::SpaceAround, free_space, count, cross_gap)
        }
        AlignContent::SpaceEvenly => {
            distribution_offsets(JustifyContent::SpaceEvenly, free_space, count, cross_gap)
        }
        AlignContent::Stretch => {
            if free_space > 0.0 {
                let extra = free_space / count as f64;
                for line in lines.iter_mut() {
                    line.cross_size += extra;
                }
            }
            (0.0, cross_gap)
        }
    };

    let mut position = initial_offset;
    for line in lines.iter_mut() {
        line.cross_position = position;
        position += line.cross_size + step;
    }
}
