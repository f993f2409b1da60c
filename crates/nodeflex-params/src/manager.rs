//! Whole-body parameter layout: stacks layout elements vertically.

use std::borrow::Cow;

use nodeflex_core::{LayoutElement, LayoutError, NodeData, NodeSpec, StyleResolver};
use nodeflex_layout::FlexboxLayoutEngine;
use tracing::{debug, warn};

use crate::draw::DrawList;
use crate::metrics::{NodeFrame, ParameterLayoutMetrics};
use crate::renderer::{LayoutElementRenderer, RenderContext};
use crate::renderers::default_renderers;
use crate::style::ParameterLayoutStyle;

/// Lays out and replays the layout elements of node bodies.
///
/// Renderers are tried in registration order and the first whose
/// `can_handle` matches wins.
pub struct ParameterLayoutManager<'a> {
    renderers: Vec<Box<dyn LayoutElementRenderer>>,
    style: ParameterLayoutStyle,
    engine: FlexboxLayoutEngine<'a>,
}

impl Default for ParameterLayoutManager<'static> {
    fn default() -> Self {
        Self {
            renderers: default_renderers(),
            style: ParameterLayoutStyle::default(),
            engine: FlexboxLayoutEngine::default(),
        }
    }
}

impl std::fmt::Debug for ParameterLayoutManager<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.renderers.iter().map(|renderer| renderer.name()).collect();
        f.debug_struct("ParameterLayoutManager")
            .field("renderers", &names)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

/// The node's elements, or a single implicit auto-grid when it declares none.
fn resolve_elements(spec: &NodeSpec) -> Cow<'_, [LayoutElement]> {
    match &spec.parameter_layout {
        Some(layout) => Cow::Borrowed(layout.elements.as_slice()),
        None => Cow::Owned(vec![LayoutElement::implicit()]),
    }
}

impl<'a> ParameterLayoutManager<'a> {
    /// A manager styled by `tokens`, with the built-in renderers.
    pub fn new(tokens: &'a dyn StyleResolver) -> Self {
        Self {
            renderers: default_renderers(),
            style: ParameterLayoutStyle::from_tokens(tokens),
            engine: FlexboxLayoutEngine::new(tokens),
        }
    }

    pub fn with_style(mut self, style: ParameterLayoutStyle) -> Self {
        self.style = style;
        self
    }

    /// Append a renderer after the built-in ones.
    pub fn register(&mut self, renderer: Box<dyn LayoutElementRenderer>) {
        self.renderers.push(renderer);
    }

    pub fn style(&self) -> &ParameterLayoutStyle {
        &self.style
    }

    /// First renderer that handles `element`.
    pub fn renderer_for(&self, element: &LayoutElement) -> Option<&dyn LayoutElementRenderer> {
        self.renderers
            .iter()
            .find(|renderer| renderer.can_handle(element))
            .map(|renderer| renderer.as_ref())
    }

    fn context<'c>(&'c self, node: &'c NodeData, spec: &'c NodeSpec, frame: NodeFrame) -> RenderContext<'c>
    where
        'a: 'c,
    {
        RenderContext {
            node,
            spec,
            frame,
            style: &self.style,
            engine: self.engine,
        }
    }

    /// Geometry of every element of `node`'s body.
    ///
    /// Elements that have no renderer or fail to lay out are logged and
    /// skipped; the rest still stack without gaps.
    pub fn calculate_metrics(&self, node: &NodeData, spec: &NodeSpec, frame: NodeFrame) -> ParameterLayoutMetrics {
        let ctx = self.context(node, spec, frame);
        let elements = resolve_elements(spec);
        let mut result = ParameterLayoutMetrics::default();
        let mut cursor = frame.body_top() + self.style.body_top_padding;

        for (index, element) in elements.iter().enumerate() {
            let Some(renderer) = self.renderer_for(element) else {
                let err = LayoutError::NoRenderer {
                    kind: element.kind().to_string(),
                };
                warn!(node = %node.id, index, "{}", err);
                continue;
            };

            match renderer.calculate_metrics(&ctx, element, cursor) {
                Ok(metrics) => {
                    debug!(
                        node = %node.id,
                        index,
                        renderer = renderer.name(),
                        height = metrics.bounds.height,
                        "element laid out"
                    );
                    cursor += metrics.bounds.height;
                    for (name, position) in &metrics.parameter_grid_positions {
                        result.parameter_grid_positions.insert(name.clone(), *position);
                    }
                    result.element_metrics.insert(index, metrics);
                }
                Err(err) => warn!(node = %node.id, index, "Skipping layout element: {}", err),
            }
        }

        result.total_height = cursor - frame.y + self.style.grid_padding;
        result
    }

    /// Emit draw commands for `node`'s body from precomputed geometry.
    ///
    /// Never aborts: an element without a renderer or without metrics is
    /// logged and skipped.
    pub fn render(
        &self,
        node: &NodeData,
        spec: &NodeSpec,
        frame: NodeFrame,
        layout: &ParameterLayoutMetrics,
        draw: &mut DrawList,
    ) {
        let ctx = self.context(node, spec, frame);

        for (index, element) in resolve_elements(spec).iter().enumerate() {
            let outcome = match (self.renderer_for(element), layout.element_metrics.get(&index)) {
                (None, _) => Err(LayoutError::NoRenderer {
                    kind: element.kind().to_string(),
                }),
                (Some(_), None) => Err(LayoutError::MissingMetrics {
                    index,
                    kind: element.kind().to_string(),
                }),
                (Some(renderer), Some(metrics)) => renderer.render(&ctx, element, metrics, draw),
            };

            if let Err(err) = outcome {
                warn!(node = %node.id, index, "{}", err);
            }
        }
    }
}
