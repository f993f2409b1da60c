//! Style tokens and the lookup capability injected into layout.
//!
//! Visual constants (gaps, paddings, cell sizes) are named design tokens so
//! they can be re-themed without code changes. Layout never reads a global
//! theme: callers pass a [`StyleResolver`] in.

use indexmap::IndexMap;

/// A resolved token value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum TokenValue {
    Number(f64),
    /// Any CSS color string (`#rrggbb`, `rgba(...)`, ...).
    Color(String),
}

impl TokenValue {
    /// Try to get as a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            TokenValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get as a color string.
    pub fn as_color(&self) -> Option<&str> {
        match self {
            TokenValue::Color(c) => Some(c),
            _ => None,
        }
    }
}

/// Read-only design token lookup.
///
/// Only the `lookup_*` methods need implementing; the `*_token` helpers
/// always produce a value by falling back to the hard-coded default.
pub trait StyleResolver {
    /// Numeric token by name, if defined.
    fn lookup_number(&self, name: &str) -> Option<f64>;

    /// Color token by name, if defined.
    fn lookup_color(&self, name: &str) -> Option<String>;

    /// Numeric token by name, or `fallback` if unavailable or not finite.
    fn number_token(&self, name: &str, fallback: f64) -> f64 {
        self.lookup_number(name)
            .filter(|value| value.is_finite())
            .unwrap_or(fallback)
    }

    /// Color token by name, or `fallback` if unavailable.
    fn color_token(&self, name: &str, fallback: &str) -> String {
        self.lookup_color(name).unwrap_or_else(|| fallback.to_string())
    }
}

/// A resolver with no tokens; every lookup yields the fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTokens;

impl StyleResolver for NoTokens {
    fn lookup_number(&self, _name: &str) -> Option<f64> {
        None
    }

    fn lookup_color(&self, _name: &str) -> Option<String> {
        None
    }
}

/// An insertion-ordered map of tokens.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenMap {
    tokens: IndexMap<String, TokenValue>,
}

impl TokenMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a token (e.g., `"node-param-gap"`).
    pub fn insert(&mut self, name: impl Into<String>, value: TokenValue) {
        self.tokens.insert(name.into(), value);
    }

    /// Insert a numeric token.
    pub fn with_number(mut self, name: impl Into<String>, value: f64) -> Self {
        self.insert(name, TokenValue::Number(value));
        self
    }

    /// Insert a color token.
    pub fn with_color(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, TokenValue::Color(value.into()));
        self
    }

    /// Get a token by name.
    pub fn get(&self, name: &str) -> Option<&TokenValue> {
        self.tokens.get(name)
    }

    /// Check if a token exists.
    pub fn contains(&self, name: &str) -> bool {
        self.tokens.contains_key(name)
    }

    /// Iterate over all tokens.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &TokenValue)> {
        self.tokens.iter()
    }

    /// Number of tokens in the map.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl StyleResolver for TokenMap {
    fn lookup_number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(TokenValue::as_number)
    }

    fn lookup_color(&self, name: &str) -> Option<String> {
        self.get(name).and_then(TokenValue::as_color).map(str::to_string)
    }
}
