//! Horizontal slider: `[label | track | value]`.

use glam::DVec2;
use nodeflex_core::{LayoutElement, LayoutError, Rect};
use nodeflex_layout::{AlignItems, FlexBasis, FlexItem, FlexItemProperties, FlexboxProperties};

use crate::draw::{DrawList, TextAlign};
use crate::metrics::{ElementMetrics, ParameterGridPosition};
use crate::renderer::{mismatched, LayoutElementRenderer, RenderContext};

/// Renders [`LayoutElement::SliderUi`].
///
/// The row container reads `node-param-slider-*` tokens and the track
/// item reads `node-param-slider-track-*` tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct SliderUiRenderer;

impl LayoutElementRenderer for SliderUiRenderer {
    fn name(&self) -> &'static str {
        "slider-ui"
    }

    fn can_handle(&self, element: &LayoutElement) -> bool {
        matches!(element, LayoutElement::SliderUi(_))
    }

    fn calculate_metrics(
        &self,
        ctx: &RenderContext<'_>,
        element: &LayoutElement,
        start_y: f64,
    ) -> Result<ElementMetrics, LayoutError> {
        let LayoutElement::SliderUi(slider) = element else {
            return Err(mismatched(self.name(), element));
        };
        ctx.parameter(element.kind(), &slider.parameter)?;

        let style = ctx.style;
        let x = ctx.content_x();
        let available = ctx.available_width();
        let height = slider
            .height
            .filter(|height| height.is_finite() && *height > 0.0)
            .unwrap_or(style.slider_height);

        let props = ctx.engine.flexbox_properties_from_tokens(
            "node-param-slider",
            FlexboxProperties::row()
                .with_gap(style.gap)
                .with_align_items(AlignItems::Center),
        );
        let track = ctx.engine.flex_item_properties_from_tokens(
            "node-param-slider-track",
            FlexItemProperties {
                flex_grow: 1.0,
                flex_basis: FlexBasis::Length(0.0),
                height: style.slider_track_height,
                ..Default::default()
            },
        );

        let mut items = vec![
            FlexItem::new("label", style.slider_label_width, style.label_height),
            FlexItem::new("track", 0.0, 0.0).with_properties(track),
        ];
        if !slider.hide_value {
            items.push(FlexItem::new("value", style.slider_value_width, style.label_height));
        }

        let layout = ctx
            .engine
            .calculate_layout(x, start_y, available, Some(height), &props, &items);
        let label = layout.item("label").unwrap_or_default();
        let track = layout.item("track").unwrap_or_default();
        let value = layout
            .item("value")
            .map(|rect| rect.center())
            .unwrap_or_else(|| DVec2::new(track.right(), track.center_y()));

        let fraction = ctx.normalized(&slider.parameter);
        let bounds = Rect::new(x, start_y, available, height);

        let mut metrics = ElementMetrics::new(bounds);
        metrics.tracks.push(track);
        metrics.parameter_grid_positions.insert(
            slider.parameter.clone(),
            ParameterGridPosition {
                cell: bounds,
                knob: DVec2::new(track.x + fraction * track.width, track.center_y()),
                knob_radius: style.slider_thumb_radius,
                port: DVec2::new(ctx.frame.x, bounds.center_y()),
                label: label.center(),
                value,
            },
        );
        Ok(metrics)
    }

    fn render(
        &self,
        ctx: &RenderContext<'_>,
        element: &LayoutElement,
        metrics: &ElementMetrics,
        draw: &mut DrawList,
    ) -> Result<(), LayoutError> {
        let LayoutElement::SliderUi(slider) = element else {
            return Err(mismatched(self.name(), element));
        };
        let style = ctx.style;
        let name = slider.parameter.as_str();
        let Some(position) = metrics.position(name) else {
            return Err(LayoutError::InvalidElement {
                kind: element.kind().to_string(),
                reason: format!("no geometry for parameter '{}'", name),
            });
        };

        draw.text(position.label, ctx.label(name), TextAlign::Center, &style.text_color);
        if let Some(track) = metrics.tracks.first() {
            draw.rect(*track, &style.track_color);
            let filled = Rect::new(track.x, track.y, position.knob.x - track.x, track.height);
            draw.rect(filled, &style.accent_color);
        }
        draw.knob(position.knob, position.knob_radius, ctx.normalized(name), &style.accent_color);
        if !slider.hide_value {
            draw.text(position.value, ctx.display_value(name), TextAlign::Center, &style.muted_text_color);
        }
        ctx.draw_port(draw, name, position.port);
        Ok(())
    }
}
