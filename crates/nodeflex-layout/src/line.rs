//! Per-call working state of the flexbox algorithm.

use smallvec::SmallVec;

use crate::types::AlignSelf;

/// An item while its container is being laid out.
///
/// Positions are relative to the container (main axis) or to the item's
/// line (cross axis). Created fresh by every layout call.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutItem {
    /// Index into the container's items in layout order
    pub index: usize,
    pub order: i32,
    /// Resolved flex basis
    pub basis: f64,
    /// Final main-axis size
    pub size: f64,
    /// Main-axis offset
    pub position: f64,
    /// Cross-axis offset
    pub cross_position: f64,
    pub cross_size: f64,
    pub align_self: AlignSelf,
}

/// One row (or column) of a wrapping container.
#[derive(Debug, Clone, Default)]
pub struct FlexLine {
    pub items: SmallVec<[LayoutItem; 8]>,
    /// Sum of item main sizes plus gaps
    pub main_size: f64,
    /// Largest intrinsic cross size of the line's items
    pub cross_size: f64,
    /// Cross-axis offset from the container's cross start
    pub cross_position: f64,
}

impl FlexLine {
    pub fn new() -> Self {
        Self::default()
    }
}
