//! Flexbox-style layout for node bodies.
//!
//! Converts a declarative tree of box constraints into absolute pixel
//! geometry. Only a practical subset of CSS flexbox is modelled: `row` and
//! `column` directions, `nowrap` / `wrap` / `wrap-reverse`, justification,
//! item and line alignment, gaps, grow/shrink/basis, min/max sizes, and
//! nested containers.
//!
//! # Pipeline
//!
//! 1. **Basis**: resolve each item's flex basis ([`flex_basis`])
//! 2. **Distribute**: grow or shrink items into the free space ([`distribute_space`])
//! 3. **Justify**: place items on the main axis ([`apply_justify_content`])
//! 4. **Align**: place items and lines on the cross axis ([`apply_align_items`], [`apply_align_content`])
//! 5. **Recurse**: nested containers are laid out at their absolute origin
//!
//! # Example
//!
//! ```
//! use nodeflex_layout::{FlexItem, FlexboxLayoutEngine, FlexboxProperties};
//!
//! let engine = FlexboxLayoutEngine::default();
//! let props = FlexboxProperties::row().with_gap(8.0);
//! let items = vec![
//!     FlexItem::new("label", 60.0, 20.0),
//!     FlexItem::new("slider", 0.0, 20.0).with_grow(1.0),
//! ];
//!
//! let layout = engine.calculate_layout(0.0, 0.0, 200.0, None, &props, &items);
//! assert_eq!(layout.item("slider").unwrap().width, 132.0);
//! ```

mod alignment;
mod calculator;
mod distributor;
mod engine;
mod line;
mod types;

pub use alignment::{apply_align_content, apply_align_items, apply_justify_content};
pub use calculator::calculate_flexbox_layout;
pub use distributor::{apply_constraints, distribute_sizes, distribute_space, flex_basis};
pub use engine::FlexboxLayoutEngine;
pub use line::{FlexLine, LayoutItem};
pub use types::{
    AlignContent, AlignItems, AlignSelf, Direction, FlexBasis, FlexItem, FlexItemProperties,
    FlexWrap, FlexboxLayoutResult, FlexboxProperties, ItemLayout, JustifyContent, LayoutResult,
};
