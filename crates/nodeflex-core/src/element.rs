//! Declarative layout elements.
//!
//! A node type describes its body as an ordered list of elements. Each
//! element names the parameters it presents; geometry is computed later by
//! the matching element renderer.

/// Default lower bound of a frequency range control, in Hz.
pub const DEFAULT_MIN_HZ: f64 = 20.0;
/// Default upper bound of a frequency range control, in Hz.
pub const DEFAULT_MAX_HZ: f64 = 20_000.0;

/// Type tags of the built-in element kinds.
pub const BUILT_IN_KINDS: [&str; 6] = [
    "auto-grid",
    "grid",
    "slider-ui",
    "bezier-editor",
    "remap-range",
    "frequency-range",
];

/// One region of a node's body.
///
/// Serialized as an object tagged by `type`. Any tag outside
/// [`BUILT_IN_KINDS`] deserializes to [`LayoutElement::Custom`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "repr::ElementRepr", into = "repr::ElementRepr"))]
pub enum LayoutElement {
    AutoGrid(AutoGridElement),
    Grid(GridElement),
    SliderUi(SliderUiElement),
    BezierEditor(BezierEditorElement),
    RemapRange(RemapRangeElement),
    FrequencyRange(FrequencyRangeElement),
    /// An element kind this build has no renderer for.
    Custom { kind: String },
}

impl LayoutElement {
    /// The element's type tag.
    pub fn kind(&self) -> &str {
        match self {
            LayoutElement::AutoGrid(_) => "auto-grid",
            LayoutElement::Grid(_) => "grid",
            LayoutElement::SliderUi(_) => "slider-ui",
            LayoutElement::BezierEditor(_) => "bezier-editor",
            LayoutElement::RemapRange(_) => "remap-range",
            LayoutElement::FrequencyRange(_) => "frequency-range",
            LayoutElement::Custom { kind } => kind,
        }
    }

    /// The element used when a node type declares no layout.
    pub fn implicit() -> Self {
        LayoutElement::AutoGrid(AutoGridElement::default())
    }
}

/// Automatic grid of parameter cells, one sub-grid per parameter group.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AutoGridElement {
    /// Restrict the grid to these parameters (all parameters when `None`)
    pub parameters: Option<Vec<String>>,
}

/// Grid with an explicit column count.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct GridElement {
    pub parameters: Vec<String>,
    pub columns: usize,
    pub cell_height: Option<f64>,
}

/// A single horizontal slider: label, track, value.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct SliderUiElement {
    pub parameter: String,
    pub height: Option<f64>,
    pub hide_value: bool,
}

/// Cubic bezier curve editor driven by four parameters `x1, y1, x2, y2`.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BezierEditorElement {
    pub parameters: Vec<String>,
    pub height: Option<f64>,
}

/// Input range mapped onto an output range.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct RemapRangeElement {
    pub in_min: String,
    pub in_max: String,
    pub out_min: String,
    pub out_max: String,
    pub height: Option<f64>,
}

impl RemapRangeElement {
    /// Parameters in bar order: input bar (min, max), then output bar.
    pub fn parameters(&self) -> [&str; 4] {
        [&self.in_min, &self.in_max, &self.out_min, &self.out_max]
    }
}

/// Frequency band selector on a logarithmic axis.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct FrequencyRangeElement {
    pub low: String,
    pub high: String,
    pub min_hz: Option<f64>,
    pub max_hz: Option<f64>,
    pub height: Option<f64>,
}

impl FrequencyRangeElement {
    /// Axis bounds in Hz, falling back to the audible range when unset or invalid.
    pub fn bounds_hz(&self) -> (f64, f64) {
        let min = self.min_hz.filter(|v| v.is_finite() && *v > 0.0).unwrap_or(DEFAULT_MIN_HZ);
        let max = self.max_hz.filter(|v| v.is_finite() && *v > min).unwrap_or(DEFAULT_MAX_HZ.max(min * 2.0));
        (min, max)
    }
}

#[cfg(feature = "serde")]
mod repr {
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(tag = "type", rename_all = "kebab-case")]
    pub(super) enum BuiltIn {
        AutoGrid(AutoGridElement),
        Grid(GridElement),
        SliderUi(SliderUiElement),
        BezierEditor(BezierEditorElement),
        RemapRange(RemapRangeElement),
        FrequencyRange(FrequencyRangeElement),
    }

    #[derive(Serialize, Deserialize)]
    #[serde(untagged)]
    pub(super) enum ElementRepr {
        BuiltIn(BuiltIn),
        Other {
            #[serde(rename = "type")]
            kind: String,
        },
    }

    impl TryFrom<ElementRepr> for LayoutElement {
        type Error = String;

        fn try_from(repr: ElementRepr) -> Result<Self, Self::Error> {
            Ok(match repr {
                ElementRepr::BuiltIn(BuiltIn::AutoGrid(e)) => LayoutElement::AutoGrid(e),
                ElementRepr::BuiltIn(BuiltIn::Grid(e)) => LayoutElement::Grid(e),
                ElementRepr::BuiltIn(BuiltIn::SliderUi(e)) => LayoutElement::SliderUi(e),
                ElementRepr::BuiltIn(BuiltIn::BezierEditor(e)) => LayoutElement::BezierEditor(e),
                ElementRepr::BuiltIn(BuiltIn::RemapRange(e)) => LayoutElement::RemapRange(e),
                ElementRepr::BuiltIn(BuiltIn::FrequencyRange(e)) => LayoutElement::FrequencyRange(e),
                // a built-in tag only lands here when its fields failed to parse
                ElementRepr::Other { kind } if BUILT_IN_KINDS.contains(&kind.as_str()) => {
                    return Err(format!("malformed '{kind}' layout element"));
                }
                ElementRepr::Other { kind } => LayoutElement::Custom { kind },
            })
        }
    }

    impl From<LayoutElement> for ElementRepr {
        fn from(element: LayoutElement) -> Self {
            match element {
                LayoutElement::AutoGrid(e) => ElementRepr::BuiltIn(BuiltIn::AutoGrid(e)),
                LayoutElement::Grid(e) => ElementRepr::BuiltIn(BuiltIn::Grid(e)),
                LayoutElement::SliderUi(e) => ElementRepr::BuiltIn(BuiltIn::SliderUi(e)),
                LayoutElement::BezierEditor(e) => ElementRepr::BuiltIn(BuiltIn::BezierEditor(e)),
                LayoutElement::RemapRange(e) => ElementRepr::BuiltIn(BuiltIn::RemapRange(e)),
                LayoutElement::FrequencyRange(e) => ElementRepr::BuiltIn(BuiltIn::FrequencyRange(e)),
                LayoutElement::Custom { kind } => ElementRepr::Other { kind },
            }
        }
    }
}
