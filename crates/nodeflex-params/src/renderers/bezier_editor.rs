//! Cubic bezier easing editor.
//!
//! The curve runs from the plot's bottom-left to its top-right corner; the
//! four parameters place the two control handles.

use glam::DVec2;
use nodeflex_core::{LayoutElement, LayoutError, Rect};

use crate::draw::DrawList;
use crate::metrics::{ElementMetrics, ParameterGridPosition};
use crate::renderer::{mismatched, LayoutElementRenderer, RenderContext};

const CURVE_SEGMENTS: usize = 24;

/// Renders [`LayoutElement::BezierEditor`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BezierEditorRenderer;

fn cubic_point(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2, t: f64) -> DVec2 {
    let u = 1.0 - t;
    p0 * (u * u * u) + p1 * (3.0 * u * u * t) + p2 * (3.0 * u * t * t) + p3 * (t * t * t)
}

impl LayoutElementRenderer for BezierEditorRenderer {
    fn name(&self) -> &'static str {
        "bezier-editor"
    }

    fn can_handle(&self, element: &LayoutElement) -> bool {
        matches!(element, LayoutElement::BezierEditor(_))
    }

    fn calculate_metrics(
        &self,
        ctx: &RenderContext<'_>,
        element: &LayoutElement,
        start_y: f64,
    ) -> Result<ElementMetrics, LayoutError> {
        let LayoutElement::BezierEditor(editor) = element else {
            return Err(mismatched(self.name(), element));
        };

        if editor.parameters.len() != 4 {
            return Err(LayoutError::InvalidElement {
                kind: element.kind().to_string(),
                reason: format!(
                    "expected 4 parameters (x1, y1, x2, y2), found {}",
                    editor.parameters.len()
                ),
            });
        }
        for name in &editor.parameters {
            ctx.parameter(element.kind(), name)?;
        }

        let style = ctx.style;
        let available = ctx.available_width();
        let height = editor
            .height
            .filter(|height| height.is_finite() && *height > 0.0)
            .unwrap_or_else(|| available.min(style.bezier_height));

        let bounds = Rect::new(ctx.content_x(), start_y, available, height);
        let plot = bounds.inset(style.handle_radius, style.handle_radius);
        let to_plot = |x: &str, y: &str| {
            DVec2::new(
                plot.x + ctx.normalized(x) * plot.width,
                plot.bottom() - ctx.normalized(y) * plot.height,
            )
        };
        let p = &editor.parameters;
        let handles = [to_plot(&p[0], &p[1]), to_plot(&p[2], &p[3])];
        let port_step = plot.height / 4.0;

        let mut metrics = ElementMetrics::new(bounds);
        metrics.tracks.push(plot);
        for (index, name) in editor.parameters.iter().enumerate() {
            let handle = handles[index / 2];
            metrics.parameter_grid_positions.insert(
                name.clone(),
                ParameterGridPosition {
                    cell: plot,
                    knob: handle,
                    knob_radius: style.handle_radius,
                    port: DVec2::new(ctx.frame.x, plot.y + port_step * (index as f64 + 0.5)),
                    label: handle,
                    value: handle,
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
        let LayoutElement::BezierEditor(editor) = element else {
            return Err(mismatched(self.name(), element));
        };
        let style = ctx.style;
        let (Some(plot), Some(first), Some(second)) = (
            metrics.tracks.first(),
            editor.parameters.first().and_then(|name| metrics.position(name)),
            editor.parameters.get(2).and_then(|name| metrics.position(name)),
        ) else {
            return Err(LayoutError::InvalidElement {
                kind: element.kind().to_string(),
                reason: "incomplete handle geometry".to_string(),
            });
        };

        let start = DVec2::new(plot.x, plot.bottom());
        let end = DVec2::new(plot.right(), plot.y);
        let points = (0..=CURVE_SEGMENTS)
            .map(|i| cubic_point(start, first.knob, second.knob, end, i as f64 / CURVE_SEGMENTS as f64))
            .collect();

        draw.rect(*plot, &style.track_color);
        draw.divider(start, first.knob, &style.divider_color);
        draw.divider(end, second.knob, &style.divider_color);
        draw.polyline(points, &style.accent_color);
        draw.knob(first.knob, first.knob_radius, 0.0, &style.text_color);
        draw.knob(second.knob, second.knob_radius, 0.0, &style.text_color);

        for name in &editor.parameters {
            if let Some(position) = metrics.position(name) {
                ctx.draw_port(draw, name, position.port);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::DrawCommand;
    use crate::renderers::test_support::context;
    use crate::style::ParameterLayoutStyle;
    use nodeflex_core::{BezierEditorElement, NodeData, NodeSpec, ParamValue, ParameterSpec};

    const NAMES: [&str; 4] = ["x1", "y1", "x2", "y2"];

    fn spec() -> NodeSpec {
        NAMES.iter().fold(NodeSpec::new("ease"), |spec, name| {
            spec.with_parameter(*name, ParameterSpec::float(0.0, 1.0, 0.0))
        })
    }

    fn editor() -> LayoutElement {
        LayoutElement::BezierEditor(BezierEditorElement {
            parameters: NAMES.iter().map(|name| name.to_string()).collect(),
            height: None,
        })
    }

    fn node() -> NodeData {
        NodeData::new("n")
            .with_value("x1", ParamValue::Number(0.25))
            .with_value("y1", ParamValue::Number(0.5))
            .with_value("x2", ParamValue::Number(0.75))
            .with_value("y2", ParamValue::Number(0.75))
    }

    #[test]
    fn test_handles_map_into_plot() {
        let style = ParameterLayoutStyle::default();
        let spec = spec();
        let node = node();
        let ctx = context(&node, &spec, &style);

        let metrics = BezierEditorRenderer.calculate_metrics(&ctx, &editor(), 0.0).unwrap();

        assert_eq!(metrics.bounds.height, 120.0);
        assert_eq!(metrics.tracks[0], Rect::new(17.0, 5.0, 206.0, 110.0));
        assert_eq!(metrics.position("x1").unwrap().knob, DVec2::new(68.5, 60.0));
        assert_eq!(metrics.position("y1").unwrap().knob, DVec2::new(68.5, 60.0));
        assert_eq!(metrics.position("x2").unwrap().knob, DVec2::new(171.5, 32.5));
        assert!(metrics.position("y2").unwrap().port.y > metrics.position("x2").unwrap().port.y);
    }

    #[test]
    fn test_curve_spans_plot_corners() {
        let style = ParameterLayoutStyle::default();
        let spec = spec();
        let node = node();
        let ctx = context(&node, &spec, &style);

        let metrics = BezierEditorRenderer.calculate_metrics(&ctx, &editor(), 0.0).unwrap();
        let mut draw = DrawList::new();
        BezierEditorRenderer.render(&ctx, &editor(), &metrics, &mut draw).unwrap();

        let points = draw
            .iter()
            .find_map(|command| match command {
                DrawCommand::Polyline { points, .. } => Some(points.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(points.len(), CURVE_SEGMENTS + 1);
        assert_eq!(points[0], DVec2::new(17.0, 115.0));
        assert_eq!(points[CURVE_SEGMENTS], DVec2::new(223.0, 5.0));
    }

    #[test]
    fn test_requires_four_parameters() {
        let style = ParameterLayoutStyle::default();
        let spec = spec();
        let node = node();
        let ctx = context(&node, &spec, &style);

        let element = LayoutElement::BezierEditor(BezierEditorElement {
            parameters: vec!["x1".into()],
            height: None,
        });
        assert!(matches!(
            BezierEditorRenderer.calculate_metrics(&ctx, &element, 0.0),
            Err(LayoutError::InvalidElement { .. })
        ));
    }
}
