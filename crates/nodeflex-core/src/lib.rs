//! Core types shared by every nodeflex crate.
//!
//! - Geometry (`Rect`) in absolute canvas coordinates
//! - Style tokens and the injected `StyleResolver` capability
//! - The read-only node / node-spec model consumed by layout
//! - Declarative layout elements authored per node type
//! - Error types

pub mod element;
pub mod errors;
pub mod geometry;
pub mod model;
pub mod tokens;

pub use element::*;
pub use errors::*;
pub use geometry::*;
pub use model::*;
pub use tokens::*;
