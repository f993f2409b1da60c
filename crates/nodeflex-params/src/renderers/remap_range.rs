//! Two stacked range bars: the input range mapped onto the output range.

use glam::DVec2;
use nodeflex_core::{LayoutElement, LayoutError, Rect};
use nodeflex_layout::{FlexItem, FlexboxLayoutResult, FlexboxProperties};

use crate::draw::{DrawList, TextAlign};
use crate::metrics::{ElementMetrics, ParameterGridPosition};
use crate::renderer::{mismatched, LayoutElementRenderer, RenderContext};

const CAPTIONS: [&str; 2] = ["In", "Out"];

/// Renders [`LayoutElement::RemapRange`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RemapRangeRenderer;

impl RemapRangeRenderer {
    /// Caption row and bar of one range.
    fn bar_rows(layout: &FlexboxLayoutResult, bar: usize) -> (Rect, Rect) {
        let caption = layout.item(&format!("caption{}", bar)).unwrap_or_default();
        let track = layout.item(&format!("bar{}", bar)).unwrap_or_default();
        (caption, track)
    }
}

impl LayoutElementRenderer for RemapRangeRenderer {
    fn name(&self) -> &'static str {
        "remap-range"
    }

    fn can_handle(&self, element: &LayoutElement) -> bool {
        matches!(element, LayoutElement::RemapRange(_))
    }

    fn calculate_metrics(
        &self,
        ctx: &RenderContext<'_>,
        element: &LayoutElement,
        start_y: f64,
    ) -> Result<ElementMetrics, LayoutError> {
        let LayoutElement::RemapRange(remap) = element else {
            return Err(mismatched(self.name(), element));
        };
        let parameters = remap.parameters();
        for name in parameters {
            ctx.parameter(element.kind(), name)?;
        }

        let style = ctx.style;
        let x = ctx.content_x();
        let available = ctx.available_width();
        let height = remap
            .height
            .filter(|height| height.is_finite() && *height > 0.0)
            .unwrap_or(style.remap_height);

        let items: Vec<FlexItem> = (0..CAPTIONS.len())
            .flat_map(|bar| {
                [
                    FlexItem::new(format!("caption{}", bar), available, style.label_height).with_shrink(0.0),
                    FlexItem::new(format!("bar{}", bar), available, style.bar_height).with_shrink(0.0),
                ]
            })
            .collect();
        let props = FlexboxProperties::column().with_gap(style.gap / 2.0);
        let layout = ctx
            .engine
            .calculate_layout(x, start_y, available, Some(height), &props, &items);

        let mut metrics = ElementMetrics::new(Rect::new(x, start_y, available, height));
        for (bar, pair) in parameters.chunks(2).enumerate() {
            let (caption, track) = Self::bar_rows(&layout, bar);
            metrics.tracks.push(track);

            for (end, name) in pair.iter().enumerate() {
                let knob = DVec2::new(track.x + ctx.normalized(name) * track.width, track.center_y());
                let port_y = if end == 0 { caption.center_y() } else { track.center_y() };
                metrics.parameter_grid_positions.insert(
                    name.to_string(),
                    ParameterGridPosition {
                        cell: track,
                        knob,
                        knob_radius: style.bar_height / 2.0,
                        port: DVec2::new(ctx.frame.x, port_y),
                        label: DVec2::new(caption.x, caption.center_y()),
                        value: DVec2::new(knob.x, caption.center_y()),
                    },
                );
            }
        }
        Ok(metrics)
    }

    fn render(
        &self,
        ctx: &RenderContext<'_>,
        element: &LayoutElement,
        metrics: &ElementMetrics,
        draw: &mut DrawList,
    ) -> Result<(), LayoutError> {
        let LayoutElement::RemapRange(remap) = element else {
            return Err(mismatched(self.name(), element));
        };
        let style = ctx.style;

        for ((pair, track), caption) in remap.parameters().chunks(2).zip(&metrics.tracks).zip(CAPTIONS) {
            let (Some(low), Some(high)) = (metrics.position(pair[0]), metrics.position(pair[1])) else {
                return Err(LayoutError::InvalidElement {
                    kind: element.kind().to_string(),
                    reason: format!("no geometry for the '{}' range", caption),
                });
            };

            draw.text(low.label, caption, TextAlign::Left, &style.muted_text_color);
            draw.rect(*track, &style.track_color);
            let left = low.knob.x.min(high.knob.x);
            let right = low.knob.x.max(high.knob.x);
            draw.rect(Rect::new(left, track.y, right - left, track.height), &style.accent_color);

            for (name, position) in pair.iter().zip([low, high]) {
                draw.knob(position.knob, position.knob_radius, ctx.normalized(name), &style.text_color);
                draw.text(position.value, ctx.display_value(name), TextAlign::Center, &style.text_color);
                ctx.draw_port(draw, name, position.port);
            }
        }
        Ok(())
    }
}
