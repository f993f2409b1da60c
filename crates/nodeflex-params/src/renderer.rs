//! The layout element renderer contract.

use glam::DVec2;
use nodeflex_core::{LayoutElement, LayoutError, NodeData, NodeSpec, ParameterSpec};
use nodeflex_layout::FlexboxLayoutEngine;

use crate::draw::DrawList;
use crate::metrics::{ElementMetrics, NodeFrame};
use crate::style::ParameterLayoutStyle;

/// Everything a renderer may read while laying out one element.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub node: &'a NodeData,
    pub spec: &'a NodeSpec,
    pub frame: NodeFrame,
    pub style: &'a ParameterLayoutStyle,
    pub engine: FlexboxLayoutEngine<'a>,
}

impl<'a> RenderContext<'a> {
    /// Left edge of the element area.
    pub fn content_x(&self) -> f64 {
        self.frame.x + self.style.grid_padding
    }

    /// Width of the element area.
    pub fn available_width(&self) -> f64 {
        self.style.available_width(self.frame.width)
    }

    /// Declaration of a parameter the element references.
    pub fn parameter(&self, element: &str, name: &str) -> Result<&'a ParameterSpec, LayoutError> {
        self.spec.parameter(name).ok_or_else(|| LayoutError::UnknownParameter {
            element: element.to_string(),
            parameter: name.to_string(),
        })
    }

    /// Current value of a parameter mapped into [0, 1].
    pub fn normalized(&self, name: &str) -> f64 {
        match (self.spec.parameter(name), self.node.number(self.spec, name)) {
            (Some(parameter), Some(value)) => parameter.normalize(value),
            _ => 0.0,
        }
    }

    /// Value readout of a parameter.
    pub fn display_value(&self, name: &str) -> String {
        self.node
            .value(self.spec, name)
            .map(|value| value.display())
            .unwrap_or_default()
    }

    /// Name label of a parameter.
    pub fn label<'b>(&self, name: &'b str) -> &'b str
    where
        'a: 'b,
    {
        self.spec
            .parameter(name)
            .map(|parameter| parameter.display_label(name))
            .unwrap_or(name)
    }

    pub fn is_connected(&self, name: &str) -> bool {
        self.node.input_mode(name) == nodeflex_core::InputMode::Connected
    }

    /// Draw the input port of a parameter.
    pub fn draw_port(&self, draw: &mut DrawList, name: &str, center: DVec2) {
        let color = if self.is_connected(name) {
            &self.style.accent_color
        } else {
            &self.style.port_color
        };
        draw.port(center, self.style.port_radius, self.is_connected(name), color);
    }
}

/// Turns one kind of layout element into geometry and draw commands.
///
/// Renderers are stateless; the manager owns one of each and dispatches
/// to the first whose [`can_handle`](Self::can_handle) matches.
pub trait LayoutElementRenderer {
    /// Name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Whether this renderer lays out `element`. Inspects the type only.
    fn can_handle(&self, element: &LayoutElement) -> bool;

    /// Geometry of `element` with its top edge at `start_y`.
    fn calculate_metrics(
        &self,
        ctx: &RenderContext<'_>,
        element: &LayoutElement,
        start_y: f64,
    ) -> Result<ElementMetrics, LayoutError>;

    /// Emit draw commands for `element` from precomputed geometry.
    fn render(
        &self,
        ctx: &RenderContext<'_>,
        element: &LayoutElement,
        metrics: &ElementMetrics,
        draw: &mut DrawList,
    ) -> Result<(), LayoutError>;
}

/// Error for an element handed to a renderer of another kind.
pub(crate) fn mismatched(renderer: &str, element: &LayoutElement) -> LayoutError {
    LayoutError::InvalidElement {
        kind: element.kind().to_string(),
        reason: format!("not handled by the {} renderer", renderer),
    }
}
