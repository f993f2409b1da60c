//! Error types for nodeflex layout.
//!
//! None of these abort a node's layout: the parameter layout manager logs
//! them and skips the offending element.

use thiserror::Error;

/// Errors raised while laying out or replaying a node's layout elements.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("No renderer registered for layout element '{kind}'")]
    NoRenderer { kind: String },

    #[error("Missing precomputed metrics for layout element #{index} ('{kind}')")]
    MissingMetrics { index: usize, kind: String },

    #[error("Layout element '{element}' references unknown parameter '{parameter}'")]
    UnknownParameter { element: String, parameter: String },

    #[error("Invalid layout element '{kind}': {reason}")]
    InvalidElement { kind: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = LayoutError::UnknownParameter {
            element: "slider-ui".into(),
            parameter: "gain".into(),
        };
        assert_eq!(
            err.to_string(),
            "Layout element 'slider-ui' references unknown parameter 'gain'"
        );

        let err = LayoutError::MissingMetrics { index: 2, kind: "grid".into() };
        assert_eq!(
            err.to_string(),
            "Missing precomputed metrics for layout element #2 ('grid')"
        );
    }
}
