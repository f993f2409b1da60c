//! Built-in layout element renderers.

mod auto_grid;
mod bezier_editor;
mod frequency_range;
mod grid;
mod remap_range;
mod slider_ui;

pub use auto_grid::{cell_width, group_parameters, optimal_columns, AutoGridRenderer, ParameterBucket};
pub use bezier_editor::BezierEditorRenderer;
pub use frequency_range::{log_position, FrequencyRangeRenderer};
pub use grid::GridRenderer;
pub use remap_range::RemapRangeRenderer;
pub use slider_ui::SliderUiRenderer;

use crate::renderer::LayoutElementRenderer;

/// The built-in renderers in dispatch order.
pub fn default_renderers() -> Vec<Box<dyn LayoutElementRenderer>> {
    vec![
        Box::new(AutoGridRenderer),
        Box::new(GridRenderer),
        Box::new(SliderUiRenderer),
        Box::new(BezierEditorRenderer),
        Box::new(RemapRangeRenderer),
        Box::new(FrequencyRangeRenderer),
    ]
}
