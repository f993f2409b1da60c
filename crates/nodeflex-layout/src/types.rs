//! Flexbox container and item properties, and layout results.

use indexmap::IndexMap;
use nodeflex_core::Rect;

/// Main axis direction. Reverse directions are not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Direction {
    /// Items run left to right
    #[default]
    Row,
    /// Items run top to bottom
    Column,
}

impl Direction {
    pub fn is_row(self) -> bool {
        self == Direction::Row
    }
}

/// Distribution of items on the main axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum JustifyContent {
    #[default]
    FlexStart,
    FlexEnd,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

/// Alignment of items on the cross axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum AlignItems {
    #[default]
    FlexStart,
    FlexEnd,
    Center,
    Stretch,
    /// No text metrics are available, so this aligns like `FlexStart`
    Baseline,
}

/// Per-item override of [`AlignItems`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum AlignSelf {
    /// Use the container's `align-items`
    #[default]
    Auto,
    FlexStart,
    FlexEnd,
    Center,
    Stretch,
    Baseline,
}

impl AlignSelf {
    /// Effective alignment given the container's `align-items`.
    pub fn resolve(self, align_items: AlignItems) -> AlignItems {
        match self {
            AlignSelf::Auto => align_items,
            AlignSelf::FlexStart => AlignItems::FlexStart,
            AlignSelf::FlexEnd => AlignItems::FlexEnd,
            AlignSelf::Center => AlignItems::Center,
            AlignSelf::Stretch => AlignItems::Stretch,
            AlignSelf::Baseline => AlignItems::Baseline,
        }
    }
}

/// Distribution of wrapped lines on the cross axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum AlignContent {
    #[default]
    FlexStart,
    FlexEnd,
    Center,
    Stretch,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

/// Line wrapping mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum FlexWrap {
    #[default]
    NoWrap,
    Wrap,
    /// Wrap, stacking lines from the cross end
    WrapReverse,
}

/// Initial main size of an item.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum FlexBasis {
    /// Use the intrinsic main size
    #[default]
    Auto,
    /// Use the intrinsic main size
    Content,
    /// Fixed size in pixels
    Length(f64),
}

/// Container rules.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct FlexboxProperties {
    pub direction: Direction,
    pub justify_content: JustifyContent,
    pub align_items: AlignItems,
    pub align_content: AlignContent,
    pub flex_wrap: FlexWrap,
    pub gap: f64,
    /// Gap between lines of a row container, or items of a column one
    pub gap_row: Option<f64>,
    /// Gap between items of a row container, or lines of a column one
    pub gap_column: Option<f64>,
}

impl FlexboxProperties {
    /// A `row` container.
    pub fn row() -> Self {
        Self::default()
    }

    /// A `column` container.
    pub fn column() -> Self {
        Self {
            direction: Direction::Column,
            ..Default::default()
        }
    }

    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_justify(mut self, justify: JustifyContent) -> Self {
        self.justify_content = justify;
        self
    }

    pub fn with_align_items(mut self, align: AlignItems) -> Self {
        self.align_items = align;
        self
    }

    pub fn with_align_content(mut self, align: AlignContent) -> Self {
        self.align_content = align;
        self
    }

    pub fn with_wrap(mut self, wrap: FlexWrap) -> Self {
        self.flex_wrap = wrap;
        self
    }

    pub fn row_gap(&self) -> f64 {
        self.gap_row.unwrap_or(self.gap)
    }

    pub fn column_gap(&self) -> f64 {
        self.gap_column.unwrap_or(self.gap)
    }

    /// Gap between adjacent items along the main axis.
    pub fn main_gap(&self) -> f64 {
        match self.direction {
            Direction::Row => self.column_gap(),
            Direction::Column => self.row_gap(),
        }
    }

    /// Gap between adjacent lines along the cross axis.
    pub fn cross_gap(&self) -> f64 {
        match self.direction {
            Direction::Row => self.row_gap(),
            Direction::Column => self.column_gap(),
        }
    }
}

/// Item rules.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct FlexItemProperties {
    pub order: i32,
    pub flex_grow: f64,
    pub flex_shrink: f64,
    pub flex_basis: FlexBasis,
    pub align_self: AlignSelf,
    pub min_width: Option<f64>,
    pub min_height: Option<f64>,
    pub max_width: Option<f64>,
    pub max_height: Option<f64>,
    /// Intrinsic width
    pub width: f64,
    /// Intrinsic height
    pub height: f64,
}

impl Default for FlexItemProperties {
    fn default() -> Self {
        Self {
            order: 0,
            flex_grow: 0.0,
            flex_shrink: 1.0,
            flex_basis: FlexBasis::Auto,
            align_self: AlignSelf::Auto,
            min_width: None,
            min_height: None,
            max_width: None,
            max_height: None,
            width: 0.0,
            height: 0.0,
        }
    }
}

impl FlexItemProperties {
    /// Intrinsic main-axis size.
    pub fn main_size(&self, direction: Direction) -> f64 {
        match direction {
            Direction::Row => self.width,
            Direction::Column => self.height,
        }
    }

    /// Intrinsic cross-axis size.
    pub fn cross_size(&self, direction: Direction) -> f64 {
        match direction {
            Direction::Row => self.height,
            Direction::Column => self.width,
        }
    }

    /// Main-axis `(min, max)` constraints.
    pub fn main_constraints(&self, direction: Direction) -> (Option<f64>, Option<f64>) {
        match direction {
            Direction::Row => (self.min_width, self.max_width),
            Direction::Column => (self.min_height, self.max_height),
        }
    }
}

/// An item in a flex container, optionally itself a container.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct FlexItem {
    /// Unique within one container's item list
    pub id: String,
    pub properties: FlexItemProperties,
    pub is_container: bool,
    pub children: Vec<FlexItem>,
}

impl FlexItem {
    /// A leaf item with an intrinsic size.
    pub fn new(id: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            properties: FlexItemProperties {
                width,
                height,
                ..Default::default()
            },
            is_container: false,
            children: Vec::new(),
        }
    }

    /// A nested container item.
    pub fn container(id: impl Into<String>, width: f64, height: f64, children: Vec<FlexItem>) -> Self {
        Self {
            is_container: true,
            children,
            ..Self::new(id, width, height)
        }
    }

    pub fn with_grow(mut self, grow: f64) -> Self {
        self.properties.flex_grow = grow;
        self
    }

    pub fn with_shrink(mut self, shrink: f64) -> Self {
        self.properties.flex_shrink = shrink;
        self
    }

    pub fn with_basis(mut self, basis: FlexBasis) -> Self {
        self.properties.flex_basis = basis;
        self
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.properties.order = order;
        self
    }

    pub fn with_align_self(mut self, align: AlignSelf) -> Self {
        self.properties.align_self = align;
        self
    }

    pub fn with_properties(mut self, properties: FlexItemProperties) -> Self {
        self.properties = properties;
        self
    }
}

/// Absolute geometry of a leaf item.
pub type LayoutResult = Rect;

/// Geometry of one item: a leaf box or a nested container.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ItemLayout {
    Leaf(LayoutResult),
    Container(FlexboxLayoutResult),
}

impl ItemLayout {
    /// The item's own box.
    pub fn bounds(&self) -> Rect {
        match self {
            ItemLayout::Leaf(rect) => *rect,
            ItemLayout::Container(result) => result.bounds,
        }
    }

    pub fn as_container(&self) -> Option<&FlexboxLayoutResult> {
        match self {
            ItemLayout::Container(result) => Some(result),
            ItemLayout::Leaf(_) => None,
        }
    }
}

/// Absolute geometry of a container and all its items.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlexboxLayoutResult {
    pub bounds: Rect,
    /// Item geometry keyed by item id, in layout order
    pub items: IndexMap<String, ItemLayout>,
}

impl FlexboxLayoutResult {
    /// Box of a direct item.
    pub fn item(&self, id: &str) -> Option<Rect> {
        self.items.get(id).map(ItemLayout::bounds)
    }

    /// Nested container result of a direct item.
    pub fn container(&self, id: &str) -> Option<&FlexboxLayoutResult> {
        self.items.get(id).and_then(ItemLayout::as_container)
    }

    /// All leaf boxes in the tree, depth first, with their ids.
    pub fn leaves(&self) -> Vec<(&str, Rect)> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<(&'a str, Rect)>) {
        for (id, layout) in &self.items {
            match layout {
                ItemLayout::Leaf(rect) => out.push((id.as_str(), *rect)),
                ItemLayout::Container(nested) => nested.collect_leaves(out),
            }
        }
    }
}
