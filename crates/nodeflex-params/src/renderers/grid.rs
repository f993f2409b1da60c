//! Grid with an author-chosen column count.

use nodeflex_core::{LayoutElement, LayoutError, Rect};
use nodeflex_layout::{FlexItem, FlexboxProperties};

use crate::draw::{DrawList, TextAlign};
use crate::metrics::{ElementMetrics, ParameterGridPosition};
use crate::renderer::{mismatched, LayoutElementRenderer, RenderContext};

/// Renders [`LayoutElement::Grid`], one flex row per grid row.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridRenderer;

impl LayoutElementRenderer for GridRenderer {
    fn name(&self) -> &'static str {
        "grid"
    }

    fn can_handle(&self, element: &LayoutElement) -> bool {
        matches!(element, LayoutElement::Grid(_))
    }

    fn calculate_metrics(
        &self,
        ctx: &RenderContext<'_>,
        element: &LayoutElement,
        start_y: f64,
    ) -> Result<ElementMetrics, LayoutError> {
        let LayoutElement::Grid(grid) = element else {
            return Err(mismatched(self.name(), element));
        };

        if grid.columns == 0 {
            return Err(LayoutError::InvalidElement {
                kind: element.kind().to_string(),
                reason: "column count must be at least 1".to_string(),
            });
        }
        for name in &grid.parameters {
            ctx.parameter(element.kind(), name)?;
        }

        let style = ctx.style;
        let x = ctx.content_x();
        let available = ctx.available_width();
        let columns = grid.columns;
        let cell_height = grid
            .cell_height
            .filter(|height| height.is_finite() && *height > 0.0)
            .unwrap_or(style.cell_height);
        let cell_width = ((available - style.gap * (columns - 1) as f64) / columns as f64).max(0.0);
        let props = FlexboxProperties::row().with_gap(style.gap);

        let mut metrics = ElementMetrics::new(Rect::new(x, start_y, available, 0.0));
        let mut cursor = start_y;

        for (row, names) in grid.parameters.chunks(columns).enumerate() {
            if row > 0 {
                cursor += style.gap;
            }

            let items: Vec<FlexItem> = names
                .iter()
                .map(|name| FlexItem::new(name.as_str(), cell_width, cell_height).with_shrink(0.0))
                .collect();
            let layout = ctx
                .engine
                .calculate_layout(x, cursor, available, Some(cell_height), &props, &items);

            for (name, cell) in layout.leaves() {
                metrics.parameter_grid_positions.insert(
                    name.to_string(),
                    ParameterGridPosition::knob_cell(cell, ctx.frame.x, style),
                );
            }
            cursor += cell_height;
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

        for (name, position) in &metrics.parameter_grid_positions {
            draw.text(position.label, ctx.label(name), TextAlign::Center, &style.text_color);
            draw.knob(position.knob, position.knob_radius, ctx.normalized(name), &style.accent_color);
            draw.text(position.value, ctx.display_value(name), TextAlign::Center, &style.muted_text_color);
            ctx.draw_port(draw, name, position.port);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderers::test_support::context;
    use crate::style::ParameterLayoutStyle;
    use nodeflex_core::{GridElement, NodeData, NodeSpec, ParameterSpec};

    fn spec(count: usize) -> NodeSpec {
        (0..count).fold(NodeSpec::new("grid"), |spec, i| {
            spec.with_parameter(format!("p{}", i), ParameterSpec::float(0.0, 1.0, 0.0))
        })
    }

    fn element(count: usize, columns: usize) -> LayoutElement {
        LayoutElement::Grid(GridElement {
            parameters: (0..count).map(|i| format!("p{}", i)).collect(),
            columns,
            cell_height: None,
        })
    }

    #[test]
    fn test_rows_of_fixed_columns() {
        let style = ParameterLayoutStyle::default();
        let spec = spec(5);
        let node = NodeData::new("n");
        let ctx = context(&node, &spec, &style);

        let metrics = GridRenderer.calculate_metrics(&ctx, &element(5, 3), 40.0).unwrap();

        let p0 = metrics.position("p0").unwrap().cell;
        let p2 = metrics.position("p2").unwrap().cell;
        let p3 = metrics.position("p3").unwrap().cell;
        assert!((p0.width - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(p2.y, 40.0);
        assert_eq!(p3.y, 40.0 + style.cell_height + style.gap);
        assert_eq!(p3.x, p0.x);
        assert_eq!(metrics.bounds.height, 2.0 * style.cell_height + style.gap);
    }

    #[test]
    fn test_cell_height_override() {
        let style = ParameterLayoutStyle::default();
        let spec = spec(2);
        let node = NodeData::new("n");
        let ctx = context(&node, &spec, &style);

        let element = LayoutElement::Grid(GridElement {
            parameters: vec!["p0".into(), "p1".into()],
            columns: 1,
            cell_height: Some(40.0),
        });
        let metrics = GridRenderer.calculate_metrics(&ctx, &element, 0.0).unwrap();

        assert_eq!(metrics.position("p1").unwrap().cell.y, 40.0 + style.gap);
        assert_eq!(metrics.position("p0").unwrap().cell.width, 216.0);
    }

    #[test]
    fn test_invalid_grids() {
        let style = ParameterLayoutStyle::default();
        let spec = spec(1);
        let node = NodeData::new("n");
        let ctx = context(&node, &spec, &style);

        assert!(matches!(
            GridRenderer.calculate_metrics(&ctx, &element(1, 0), 0.0),
            Err(LayoutError::InvalidElement { .. })
        ));
        assert!(matches!(
            GridRenderer.calculate_metrics(&ctx, &element(2, 2), 0.0),
            Err(LayoutError::UnknownParameter { .. })
        ));
    }
}
