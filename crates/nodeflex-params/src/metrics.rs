//! Geometry produced by element renderers and the layout manager.
//!
//! All coordinates are absolute canvas coordinates except
//! [`ParameterLayoutMetrics::total_height`], which is measured from the node's
//! top edge.

use glam::DVec2;
use indexmap::IndexMap;
use nodeflex_core::Rect;

use crate::style::ParameterLayoutStyle;

/// Screen frame of a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeFrame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub header_height: f64,
}

impl NodeFrame {
    pub fn new(x: f64, y: f64, width: f64, header_height: f64) -> Self {
        Self { x, y, width, header_height }
    }

    /// Top of the node body.
    pub fn body_top(&self) -> f64 {
        self.y + self.header_height
    }
}

/// Labelled sub-positions of one parameter's control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterGridPosition {
    /// The control's whole box
    pub cell: Rect,
    /// Center of the knob or draggable handle
    pub knob: DVec2,
    pub knob_radius: f64,
    /// Center of the input port on the node's left edge
    pub port: DVec2,
    /// Center of the name label
    pub label: DVec2,
    /// Center of the value readout
    pub value: DVec2,
}

impl ParameterGridPosition {
    /// Knob cell layout: label on top, knob below it, value at the bottom.
    pub fn knob_cell(cell: Rect, port_x: f64, style: &ParameterLayoutStyle) -> Self {
        let label_half = style.label_height / 2.0;
        let knob = DVec2::new(cell.center_x(), cell.y + style.label_height + style.knob_radius);
        Self {
            cell,
            knob,
            knob_radius: style.knob_radius,
            port: DVec2::new(port_x, knob.y),
            label: DVec2::new(cell.center_x(), cell.y + label_half),
            value: DVec2::new(cell.center_x(), cell.bottom() - label_half),
        }
    }
}

/// Section title inside an element.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupHeader {
    pub label: String,
    pub bounds: Rect,
}

/// Geometry of one layout element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementMetrics {
    pub bounds: Rect,
    pub parameter_grid_positions: IndexMap<String, ParameterGridPosition>,
    pub group_headers: Vec<GroupHeader>,
    pub dividers: Vec<Rect>,
    /// Track and plot rectangles
    pub tracks: Vec<Rect>,
}

impl ElementMetrics {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            ..Default::default()
        }
    }

    pub fn position(&self, parameter: &str) -> Option<&ParameterGridPosition> {
        self.parameter_grid_positions.get(parameter)
    }
}

/// Geometry of a whole node body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterLayoutMetrics {
    /// Height from the node's top edge to the bottom of the body
    pub total_height: f64,
    /// Element geometry keyed by the element's index in the node's layout
    pub element_metrics: IndexMap<usize, ElementMetrics>,
    /// Positions of every laid-out parameter, across all elements
    pub parameter_grid_positions: IndexMap<String, ParameterGridPosition>,
}

impl ParameterLayoutMetrics {
    pub fn position(&self, parameter: &str) -> Option<&ParameterGridPosition> {
        self.parameter_grid_positions.get(parameter)
    }
}

/// Geometry of a whole node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeMetrics {
    pub bounds: Rect,
    pub header: Rect,
    pub parameter_layout: ParameterLayoutMetrics,
}
