//! Parameter layout for node bodies.
//!
//! A node type describes its body as an ordered list of layout elements
//! (knob grids, sliders, curve editors, range bars). This crate turns
//! those elements plus the node's current values into absolute geometry
//! and draw commands:
//!
//! - [`LayoutElementRenderer`] implementations, one per element kind
//! - [`ParameterLayoutManager`] stacks elements and aggregates positions
//! - [`NodeMetricsCalculator`] adds the header and caches per node
//!
//! # Example
//!
//! ```
//! use nodeflex_core::{NodeData, NodeSpec, ParameterSpec};
//! use nodeflex_params::NodeMetricsCalculator;
//!
//! let spec = NodeSpec::new("gain")
//!     .with_parameter("level", ParameterSpec::float(0.0, 1.0, 0.5))
//!     .with_parameter("pan", ParameterSpec::float(-1.0, 1.0, 0.0));
//! let node = NodeData::new("n1").at(40.0, 40.0);
//!
//! let mut calculator = NodeMetricsCalculator::default();
//! let metrics = calculator.calculate(&node, &spec);
//!
//! let level = metrics.parameter_layout.position("level").unwrap();
//! assert!(metrics.bounds.contains(level.knob.x, level.knob.y));
//! ```

mod cache;
mod draw;
mod manager;
mod metrics;
mod renderer;
mod renderers;
mod style;

pub use cache::NodeMetricsCalculator;
pub use draw::{DrawCommand, DrawList, TextAlign};
pub use manager::ParameterLayoutManager;
pub use metrics::{
    ElementMetrics, GroupHeader, NodeFrame, NodeMetrics, ParameterGridPosition, ParameterLayoutMetrics,
};
pub use renderer::{LayoutElementRenderer, RenderContext};
pub use renderers::{
    cell_width, default_renderers, group_parameters, log_position, optimal_columns, AutoGridRenderer,
    BezierEditorRenderer, FrequencyRangeRenderer, GridRenderer, ParameterBucket, RemapRangeRenderer,
    SliderUiRenderer,
};
pub use style::ParameterLayoutStyle;
