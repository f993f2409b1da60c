//! Read-only node and node-spec model consumed by layout.
//!
//! The graph editor owns these values; layout only reads them.

use glam::DVec2;
use indexmap::IndexMap;

use crate::element::LayoutElement;

/// The current value of a node parameter.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ParamValue {
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<f64>),
}

impl ParamValue {
    /// Numeric view of the value; booleans map to 0/1.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ParamValue::Number(n) => Some(*n),
            ParamValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            ParamValue::Text(_) | ParamValue::List(_) => None,
        }
    }

    /// Short display string for value labels.
    pub fn display(&self) -> String {
        match self {
            ParamValue::Number(n) => format_number(*n),
            ParamValue::Bool(b) => String::from(if *b { "on" } else { "off" }),
            ParamValue::Text(s) => s.clone(),
            ParamValue::List(values) => format!("[{}]", values.len()),
        }
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e9 {
        format!("{}", n as i64)
    } else {
        format!("{:.2}", n)
    }
}

/// Parameter value types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ParameterKind {
    #[default]
    Float,
    Int,
    Bool,
    Enum,
    String,
    Color,
    /// A list of control points
    Curve,
}

/// Declaration of one parameter on a node type.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParameterSpec {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: ParameterKind,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub default: Option<ParamValue>,
    pub label: Option<String>,
    pub step: Option<f64>,
}

impl ParameterSpec {
    pub fn float(min: f64, max: f64, default: f64) -> Self {
        Self {
            kind: ParameterKind::Float,
            min: Some(min),
            max: Some(max),
            default: Some(ParamValue::Number(default)),
            ..Default::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Label shown next to the control, falling back to the parameter name.
    pub fn display_label<'a>(&'a self, name: &'a str) -> &'a str {
        self.label.as_deref().unwrap_or(name)
    }

    /// Map a value into [0, 1] over the declared range.
    ///
    /// Missing or degenerate ranges map to 0.
    pub fn normalize(&self, value: f64) -> f64 {
        let min = self.min.unwrap_or(0.0);
        let max = self.max.unwrap_or(1.0);
        let span = max - min;
        if !span.is_finite() || span <= 0.0 || !value.is_finite() {
            return 0.0;
        }
        ((value - min) / span).clamp(0.0, 1.0)
    }
}

/// An ordered, optionally labelled group of parameters.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParameterGroup {
    pub label: Option<String>,
    pub parameters: Vec<String>,
}

impl ParameterGroup {
    pub fn new<I, S>(label: Option<&str>, parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.map(str::to_string),
            parameters: parameters.into_iter().map(Into::into).collect(),
        }
    }
}

/// Ordered layout elements describing a node body.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParameterLayout {
    pub elements: Vec<LayoutElement>,
}

/// Declaration of a node type.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct NodeSpec {
    pub id: String,
    pub parameters: IndexMap<String, ParameterSpec>,
    pub parameter_groups: Vec<ParameterGroup>,
    pub parameter_layout: Option<ParameterLayout>,
}

impl NodeSpec {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_parameter(mut self, name: impl Into<String>, spec: ParameterSpec) -> Self {
        self.parameters.insert(name.into(), spec);
        self
    }

    pub fn with_group(mut self, group: ParameterGroup) -> Self {
        self.parameter_groups.push(group);
        self
    }

    pub fn with_layout(mut self, elements: Vec<LayoutElement>) -> Self {
        self.parameter_layout = Some(ParameterLayout { elements });
        self
    }

    pub fn parameter(&self, name: &str) -> Option<&ParameterSpec> {
        self.parameters.get(name)
    }
}

/// How a parameter currently receives its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum InputMode {
    /// Edited on the node itself
    #[default]
    Manual,
    /// Driven by an incoming connection
    Connected,
}

/// A node instance in the graph.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct NodeData {
    pub id: String,
    pub position: DVec2,
    pub collapsed: bool,
    pub label: Option<String>,
    pub parameters: IndexMap<String, ParamValue>,
    pub parameter_input_modes: IndexMap<String, InputMode>,
}

impl NodeData {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = DVec2::new(x, y);
        self
    }

    pub fn with_value(mut self, name: impl Into<String>, value: ParamValue) -> Self {
        self.parameters.insert(name.into(), value);
        self
    }

    /// Current value of a parameter, falling back to the node type default.
    pub fn value<'a>(&'a self, spec: &'a NodeSpec, name: &str) -> Option<&'a ParamValue> {
        self.parameters
            .get(name)
            .or_else(|| spec.parameter(name).and_then(|p| p.default.as_ref()))
    }

    /// Numeric value of a parameter, falling back to the node type default.
    pub fn number(&self, spec: &NodeSpec, name: &str) -> Option<f64> {
        self.value(spec, name).and_then(ParamValue::as_number)
    }

    pub fn input_mode(&self, name: &str) -> InputMode {
        self.parameter_input_modes.get(name).copied().unwrap_or_default()
    }
}
