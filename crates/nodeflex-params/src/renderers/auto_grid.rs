//! Automatic knob grid, one sub-grid per parameter group.
//!
//! Each group gets its own column count, chosen so the last row is as full
//! as possible. Cells are placed row-major by a wrapping flex container
//! sized to fit exactly `columns` cells per line.

use glam::DVec2;
use nodeflex_core::{LayoutElement, LayoutError, NodeSpec, Rect};
use nodeflex_layout::{FlexItem, FlexWrap, FlexboxProperties};
use rustc_hash::FxHashSet;
use tracing::trace;

use crate::draw::{DrawList, TextAlign};
use crate::metrics::{ElementMetrics, GroupHeader, ParameterGridPosition};
use crate::renderer::{mismatched, LayoutElementRenderer, RenderContext};
use crate::style::ParameterLayoutStyle;

/// Renders [`LayoutElement::AutoGrid`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoGridRenderer;

/// Parameters sharing one sub-grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterBucket<'a> {
    pub label: Option<&'a str>,
    pub parameters: Vec<&'a str>,
}

/// Split parameters into the node type's groups plus a trailing ungrouped bucket.
///
/// Groups keep their declared order. A parameter listed in several groups
/// lands in the first. `filter` restricts the set; names unknown to the
/// spec are ignored. Empty buckets are dropped.
pub fn group_parameters<'a>(spec: &'a NodeSpec, filter: Option<&'a [String]>) -> Vec<ParameterBucket<'a>> {
    let included = |name: &str| {
        spec.parameters.contains_key(name) && filter.map_or(true, |names| names.iter().any(|n| n == name))
    };

    let mut assigned: FxHashSet<&str> = FxHashSet::default();
    let mut buckets = Vec::with_capacity(spec.parameter_groups.len() + 1);

    for group in &spec.parameter_groups {
        let parameters: Vec<&str> = group
            .parameters
            .iter()
            .map(String::as_str)
            .filter(|name| included(*name) && assigned.insert(*name))
            .collect();

        if !parameters.is_empty() {
            buckets.push(ParameterBucket {
                label: group.label.as_deref(),
                parameters,
            });
        }
    }

    let ungrouped: Vec<&str> = spec
        .parameters
        .keys()
        .map(String::as_str)
        .filter(|name| included(*name) && !assigned.contains(*name))
        .collect();

    if !ungrouped.is_empty() {
        buckets.push(ParameterBucket {
            label: None,
            parameters: ungrouped,
        });
    }

    buckets
}

/// Column count for a group of `count` parameters.
///
/// Five and six always take three columns so the last row is never a
/// lonely single cell. Otherwise the count in `2..=4` leaving the fewest
/// empty cells wins, preferring fewer columns on ties.
pub fn optimal_columns(count: usize) -> usize {
    match count {
        0 | 1 => 1,
        2 => 2,
        5 | 6 => 3,
        _ => (2..=4)
            .min_by_key(|&columns| count.div_ceil(columns) * columns - count)
            .unwrap_or(2),
    }
}

/// Uniform cell width for `columns` cells across `available_width`.
pub fn cell_width(available_width: f64, columns: usize, style: &ParameterLayoutStyle) -> f64 {
    let gaps = style.gap * columns.saturating_sub(1) as f64;
    ((available_width - gaps) / columns.max(1) as f64)
        .max(style.cell_min_width)
        .max(0.0)
}

/// Width of exactly `columns` cells with gaps, summed the way the flex
/// line packer sums them.
fn packed_width(cell_width: f64, gap: f64, columns: usize) -> f64 {
    (1..columns).fold(cell_width, |width, _| width + gap + cell_width)
}

impl LayoutElementRenderer for AutoGridRenderer {
    fn name(&self) -> &'static str {
        "auto-grid"
    }

    fn can_handle(&self, element: &LayoutElement) -> bool {
        matches!(element, LayoutElement::AutoGrid(_))
    }

    fn calculate_metrics(
        &self,
        ctx: &RenderContext<'_>,
        element: &LayoutElement,
        start_y: f64,
    ) -> Result<ElementMetrics, LayoutError> {
        let LayoutElement::AutoGrid(grid) = element else {
            return Err(mismatched(self.name(), element));
        };

        if let Some(filter) = &grid.parameters {
            for name in filter {
                ctx.parameter(element.kind(), name)?;
            }
        }

        let style = ctx.style;
        let x = ctx.content_x();
        let available = ctx.available_width();
        let props = FlexboxProperties::row().with_gap(style.gap).with_wrap(FlexWrap::Wrap);

        let mut metrics = ElementMetrics::new(Rect::new(x, start_y, available, 0.0));
        let mut cursor = start_y;

        for (index, bucket) in group_parameters(ctx.spec, grid.parameters.as_deref()).iter().enumerate() {
            if index > 0 {
                cursor += style.divider_spacing;
                metrics.dividers.push(Rect::new(x, cursor, available, style.divider_height));
                cursor += style.divider_height + style.divider_spacing;
            }

            if let Some(label) = bucket.label {
                metrics.group_headers.push(GroupHeader {
                    label: label.to_string(),
                    bounds: Rect::new(x, cursor, available, style.group_header_height),
                });
                cursor += style.group_header_height;
            }

            let columns = optimal_columns(bucket.parameters.len());
            let width = cell_width(available, columns, style);
            let items: Vec<FlexItem> = bucket
                .parameters
                .iter()
                .map(|name| FlexItem::new(*name, width, style.cell_height).with_shrink(0.0))
                .collect();

            let layout = ctx.engine.calculate_layout(
                x,
                cursor,
                packed_width(width, style.gap, columns),
                None,
                &props,
                &items,
            );

            trace!(
                group = bucket.label.unwrap_or("<ungrouped>"),
                parameters = items.len(),
                columns,
                cell_width = width,
                "auto-grid group"
            );

            for (name, cell) in layout.leaves() {
                metrics.parameter_grid_positions.insert(
                    name.to_string(),
                    ParameterGridPosition::knob_cell(cell, ctx.frame.x, style),
                );
            }
            cursor += layout.bounds.height;
        }

        metrics.bounds.height = cursor - start_y;
        Ok(metrics)
    }

    fn render(
        &self,
        ctx: &RenderContext<'_>,
        element: &LayoutElement,
        metrics: &ElementMetrics,
        draw: &mut DrawList,
    ) -> Result<(), LayoutError> {
        if !self.can_handle(element) {
            return Err(mismatched(self.name(), element));
        }
        let style = ctx.style;

        for header in &metrics.group_headers {
            let anchor = DVec2::new(header.bounds.x, header.bounds.center_y());
            draw.text(anchor, header.label.as_str(), TextAlign::Left, &style.muted_text_color);
        }

        for divider in &metrics.dividers {
            let y = divider.center_y();
            draw.divider(DVec2::new(divider.x, y), DVec2::new(divider.right(), y), &style.divider_color);
        }

        for (name, position) in &metrics.parameter_grid_positions {
            draw.text(position.label, ctx.label(name), TextAlign::Center, &style.text_color);
            draw.knob(position.knob, position.knob_radius, ctx.normalized(name), &style.accent_color);
            draw.text(position.value, ctx.display_value(name), TextAlign::Center, &style.muted_text_color);
            ctx.draw_port(draw, name, position.port);
        }

        Ok(())
    }
}
