//! Frequency band selector on a logarithmic axis.

use glam::DVec2;
use nodeflex_core::{LayoutElement, LayoutError, Rect};
use nodeflex_layout::{FlexItem, FlexboxProperties};

use crate::draw::{DrawList, TextAlign};
use crate::metrics::{ElementMetrics, ParameterGridPosition};
use crate::renderer::{mismatched, LayoutElementRenderer, RenderContext};

/// Renders [`LayoutElement::FrequencyRange`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyRangeRenderer;

/// Position of `hz` along a log axis from `min_hz` to `max_hz`, in [0, 1].
pub fn log_position(hz: f64, min_hz: f64, max_hz: f64) -> f64 {
    if !(hz.is_finite() && hz > 0.0 && min_hz > 0.0 && max_hz > min_hz) {
        return 0.0;
    }
    ((hz / min_hz).ln() / (max_hz / min_hz).ln()).clamp(0.0, 1.0)
}

fn format_hz(hz: f64) -> String {
    if hz >= 1000.0 {
        format!("{:.1} kHz", hz / 1000.0)
    } else {
        format!("{:.0} Hz", hz)
    }
}

/// Powers of ten strictly inside `(min_hz, max_hz)`.
fn decades(min_hz: f64, max_hz: f64) -> Vec<f64> {
    let mut ticks = Vec::new();
    let mut decade = 10f64.powf(min_hz.log10().floor() + 1.0);
    while decade < max_hz {
        if decade > min_hz {
            ticks.push(decade);
        }
        decade *= 10.0;
    }
    ticks
}

impl LayoutElementRenderer for FrequencyRangeRenderer {
    fn name(&self) -> &'static str {
        "frequency-range"
    }

    fn can_handle(&self, element: &LayoutElement) -> bool {
        matches!(element, LayoutElement::FrequencyRange(_))
    }

    fn calculate_metrics(
        &self,
        ctx: &RenderContext<'_>,
        element: &LayoutElement,
        start_y: f64,
    ) -> Result<ElementMetrics, LayoutError> {
        let LayoutElement::FrequencyRange(range) = element else {
            return Err(mismatched(self.name(), element));
        };
        ctx.parameter(element.kind(), &range.low)?;
        ctx.parameter(element.kind(), &range.high)?;

        let style = ctx.style;
        let x = ctx.content_x();
        let available = ctx.available_width();
        let height = range
            .height
            .filter(|height| height.is_finite() && *height > 0.0)
            .unwrap_or(style.frequency_height);
        let (min_hz, max_hz) = range.bounds_hz();

        let items = vec![
            FlexItem::new("caption", available, style.label_height).with_shrink(0.0),
            FlexItem::new("bar", available, style.bar_height).with_shrink(0.0),
        ];
        let props = FlexboxProperties::column().with_gap(style.gap / 2.0);
        let layout = ctx
            .engine
            .calculate_layout(x, start_y, available, Some(height), &props, &items);
        let caption = layout.item("caption").unwrap_or_default();
        let bar = layout.item("bar").unwrap_or_default();

        let mut metrics = ElementMetrics::new(Rect::new(x, start_y, available, height));
        metrics.tracks.push(bar);

        let ends = [
            (&range.low, min_hz, caption.x, caption.center_y()),
            (&range.high, max_hz, caption.right(), bar.center_y()),
        ];
        for (name, fallback, label_x, port_y) in ends {
            let hz = ctx.node.number(ctx.spec, name).unwrap_or(fallback);
            let knob = DVec2::new(bar.x + log_position(hz, min_hz, max_hz) * bar.width, bar.center_y());
            metrics.parameter_grid_positions.insert(
                name.clone(),
                ParameterGridPosition {
                    cell: bar,
                    knob,
                    knob_radius: style.bar_height / 2.0,
                    port: DVec2::new(ctx.frame.x, port_y),
                    label: DVec2::new(label_x, caption.center_y()),
                    value: DVec2::new(knob.x, caption.center_y()),
                },
            );
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
        let LayoutElement::FrequencyRange(range) = element else {
            return Err(mismatched(self.name(), element));
        };
        let style = ctx.style;
        let (Some(bar), Some(low), Some(high)) = (
            metrics.tracks.first(),
            metrics.position(&range.low),
            metrics.position(&range.high),
        ) else {
            return Err(LayoutError::InvalidElement {
                kind: element.kind().to_string(),
                reason: "incomplete band geometry".to_string(),
            });
        };
        let (min_hz, max_hz) = range.bounds_hz();

        draw.rect(*bar, &style.track_color);
        for decade in decades(min_hz, max_hz) {
            let tick_x = bar.x + log_position(decade, min_hz, max_hz) * bar.width;
            draw.divider(DVec2::new(tick_x, bar.y), DVec2::new(tick_x, bar.bottom()), &style.divider_color);
        }

        let left = low.knob.x.min(high.knob.x);
        let right = low.knob.x.max(high.knob.x);
        draw.rect(Rect::new(left, bar.y, right - left, bar.height), &style.accent_color);

        for (name, position, fallback, align) in [
            (&range.low, low, min_hz, TextAlign::Left),
            (&range.high, high, max_hz, TextAlign::Right),
        ] {
            let hz = ctx.node.number(ctx.spec, name).unwrap_or(fallback);
            draw.knob(position.knob, position.knob_radius, log_position(hz, min_hz, max_hz), &style.text_color);
            draw.text(position.label, format_hz(hz), align, &style.text_color);
            ctx.draw_port(draw, name, position.port);
        }
        Ok(())
    }
}
