//! Façade over the flexbox calculator with style-token adapters.

use nodeflex_core::{NoTokens, StyleResolver};

use crate::calculator::calculate_flexbox_layout;
use crate::types::{FlexBasis, FlexItem, FlexItemProperties, FlexboxLayoutResult, FlexboxProperties};

static NO_TOKENS: NoTokens = NoTokens;

/// Entry point for raw flexbox geometry.
///
/// Token adapters read numeric design tokens named `{prefix}-{property}`
/// through the injected resolver, keeping everything else from the
/// supplied defaults.
#[derive(Clone, Copy)]
pub struct FlexboxLayoutEngine<'a> {
    tokens: &'a dyn StyleResolver,
}

impl Default for FlexboxLayoutEngine<'static> {
    fn default() -> Self {
        Self { tokens: &NO_TOKENS }
    }
}

impl std::fmt::Debug for FlexboxLayoutEngine<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlexboxLayoutEngine").finish_non_exhaustive()
    }
}

impl<'a> FlexboxLayoutEngine<'a> {
    /// Create an engine reading tokens from `tokens`.
    pub fn new(tokens: &'a dyn StyleResolver) -> Self {
        Self { tokens }
    }

    /// Compute absolute geometry for `items` in a container at `(x, y)`.
    pub fn calculate_layout(
        &self,
        x: f64,
        y: f64,
        width: f64,
        height: Option<f64>,
        props: &FlexboxProperties,
        items: &[FlexItem],
    ) -> FlexboxLayoutResult {
        calculate_flexbox_layout(x, y, width, height, props, items)
    }

    /// Container properties from `{prefix}-gap`, `{prefix}-gap-row` and
    /// `{prefix}-gap-column`.
    pub fn flexbox_properties_from_tokens(&self, prefix: &str, defaults: FlexboxProperties) -> FlexboxProperties {
        FlexboxProperties {
            gap: self.tokens.number_token(&token_name(prefix, "gap"), defaults.gap),
            gap_row: self.lookup(prefix, "gap-row").or(defaults.gap_row),
            gap_column: self.lookup(prefix, "gap-column").or(defaults.gap_column),
            ..defaults
        }
    }

    /// Item properties from `{prefix}-order`, `{prefix}-flex-grow`,
    /// `{prefix}-flex-shrink`, `{prefix}-flex-basis`, sizes and min/max sizes.
    pub fn flex_item_properties_from_tokens(&self, prefix: &str, defaults: FlexItemProperties) -> FlexItemProperties {
        let number = |name: &str, fallback: f64| self.tokens.number_token(&token_name(prefix, name), fallback);

        FlexItemProperties {
            order: self
                .lookup(prefix, "order")
                .map(|order| order.round() as i32)
                .unwrap_or(defaults.order),
            flex_grow: number("flex-grow", defaults.flex_grow),
            flex_shrink: number("flex-shrink", defaults.flex_shrink),
            flex_basis: self
                .lookup(prefix, "flex-basis")
                .map(FlexBasis::Length)
                .unwrap_or(defaults.flex_basis),
            width: number("width", defaults.width),
            height: number("height", defaults.height),
            min_width: self.lookup(prefix, "min-width").or(defaults.min_width),
            min_height: self.lookup(prefix, "min-height").or(defaults.min_height),
            max_width: self.lookup(prefix, "max-width").or(defaults.max_width),
            max_height: self.lookup(prefix, "max-height").or(defaults.max_height),
            ..defaults
        }
    }

    fn lookup(&self, prefix: &str, name: &str) -> Option<f64> {
        self.tokens
            .lookup_number(&token_name(prefix, name))
            .filter(|value| value.is_finite())
    }
}

fn token_name(prefix: &str, name: &str) -> String {
    format!("{}-{}", prefix, name)
}
